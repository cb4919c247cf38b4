use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::TypesMap;
use gqlengine_parser::ast::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(crate) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a TypesMap,
}

impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(type_: &'a InputObjectType, types_map: &'a TypesMap) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        if self.type_.fields().is_empty() {
            self.errors.push(TypeValidationError::TypeWithNoFields {
                location: self.type_.def_location(),
                type_name: self.type_.name().to_string(),
            });
        }
        self.validate_field_types();
        self.find_unbreakable_cycles(
            self.type_.name(),
            self.type_.fields(),
            &mut vec![],
            HashSet::from([self.type_.name()]),
        );
        self.errors
    }

    fn validate_field_types(&mut self) {
        for (field_name, field) in self.type_.fields() {
            let field_type_name = field.type_annotation().innermost_name();
            match self.types_map.get(field_type_name) {
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    location: field.def_location(),
                    undefined_type_name: field_type_name.to_string(),
                }),
                // Input object fields can not be declared with an output type.
                // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
                Some(field_type) if !field_type.is_input_type() => {
                    self.errors.push(
                        TypeValidationError::InvalidInputFieldWithOutputType {
                            field_name: field_name.to_string(),
                            invalid_type_name: field_type_name.to_string(),
                            location: field.def_location(),
                            parent_type_name: self.type_.name().to_string(),
                        }
                    );
                },
                Some(_) => (),
            }
        }
    }

    /// Only reports cycles that come back to the type being validated, so
    /// each cycle is reported once per type on it.
    fn find_unbreakable_cycles(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputValue>,
        path: &mut Vec<String>,
        seen_type_names: HashSet<&'a str>,
    ) {
        for (field_name, field) in fields {
            if annot_contains_cycle_breaking_nullable_type(field.type_annotation()) {
                continue;
            }
            let innermost_type_name = field.type_annotation().innermost_name();
            path.push(format!("{type_name}.{field_name}"));
            if innermost_type_name == self.type_.name() {
                let mut circular_field_path = path.clone();
                circular_field_path.push(innermost_type_name.to_string());
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path,
                });
            } else if let Some(GraphQLType::InputObject(input_obj_type)) =
                self.types_map.get(innermost_type_name)
            {
                if seen_type_names.contains(innermost_type_name) {
                    path.pop();
                    continue;
                }
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(innermost_type_name);
                self.find_unbreakable_cycles(
                    innermost_type_name,
                    input_obj_type.fields(),
                    path,
                    seen_type_names,
                );
            }
            path.pop();
        }
    }
}

/// A nullable field anywhere along the annotation, or any list wrapper,
/// lets a value of the type terminate.
fn annot_contains_cycle_breaking_nullable_type(type_annot: &TypeAnnotation) -> bool {
    match type_annot {
        TypeAnnotation::List(_) => true,
        TypeAnnotation::Named(named_annot) => named_annot.nullable,
    }
}
