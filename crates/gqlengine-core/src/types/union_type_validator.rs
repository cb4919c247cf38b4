use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::TypesMap;
use crate::types::UnionType;

pub(crate) struct UnionTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a UnionType,
    types_map: &'a TypesMap,
}

impl<'a> UnionTypeValidator<'a> {
    pub fn new(type_: &'a UnionType, types_map: &'a TypesMap) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        if self.type_.members.is_empty() {
            self.errors.push(TypeValidationError::EmptyUnion {
                location: self.type_.def_location(),
                union_type_name: self.type_.name().to_string(),
            });
        }

        for member_type_ref in self.type_.members.values() {
            // Member types of a union type can only be object types.
            // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
            let Ok(member_type) = member_type_ref.deref(self.types_map) else {
                self.errors.push(TypeValidationError::UndefinedTypeName {
                    location: member_type_ref.ref_location(),
                    undefined_type_name: member_type_ref.name().to_string(),
                });
                continue;
            };
            if !matches!(member_type, GraphQLType::Object(_)) {
                self.errors.push(TypeValidationError::InvalidUnionMemberTypeKind {
                    invalid_member_type_name: member_type.name().to_string(),
                    location: member_type_ref.ref_location(),
                    union_type_name: self.type_.name().to_string(),
                });
            }
        }

        self.errors
    }
}
