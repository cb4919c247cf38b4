use crate::schema::TypeValidationError;
use crate::types::is_type_subtype_of;
use crate::types::ObjectOrInterfaceType;
use crate::types::TypesMap;
use std::collections::HashSet;

/// Checks one object or interface type: its field and parameter types, and
/// that it correctly implements every interface it declares.
///
/// https://spec.graphql.org/October2021/#IsValidImplementation()
pub(crate) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    implemented_iface_names: HashSet<&'a str>,
    inheritance_path: Vec<&'a str>,
    type_: &'a ObjectOrInterfaceType,
    types_map: &'a TypesMap,
}

impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceType,
        types_map: &'a TypesMap,
    ) -> Self {
        Self {
            errors: vec![],
            implemented_iface_names: type_.interface_names().into_iter().collect(),
            inheritance_path: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_field_types();
        let mut verified_interface_impls = HashSet::new();
        self.validate_interfaces(&mut verified_interface_impls);
        self.errors
    }

    fn validate_field_types(&mut self) {
        let type_name = self.type_.name();
        if self.type_.fields().is_empty() {
            self.errors.push(TypeValidationError::TypeWithNoFields {
                location: self.type_.def_location(),
                type_name: type_name.to_string(),
            });
        }

        for (field_name, field) in self.type_.fields() {
            let field_type_name = field.type_annotation().innermost_name();
            match self.types_map.get(field_type_name) {
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    location: field.def_location(),
                    undefined_type_name: field_type_name.to_string(),
                }),
                Some(field_type) if !field_type.is_output_type() => {
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            field_name: field_name.to_string(),
                            input_type_name: field_type_name.to_string(),
                            location: field.def_location(),
                            parent_type_name: type_name.to_string(),
                        }
                    );
                },
                Some(_) => (),
            }

            for (param_name, param) in field.arguments() {
                let param_type_name = param.type_annotation().innermost_name();
                match self.types_map.get(param_type_name) {
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        location: param.def_location(),
                        undefined_type_name: param_type_name.to_string(),
                    }),
                    Some(param_type) if !param_type.is_input_type() => {
                        self.errors.push(
                            TypeValidationError::InvalidParameterWithOutputType {
                                invalid_type_name: param_type_name.to_string(),
                                location: param.def_location(),
                                owner_name: format!("{type_name}.{field_name}"),
                                parameter_name: param_name.to_string(),
                            }
                        );
                    },
                    Some(_) => (),
                }
            }
        }
    }

    fn validate_interfaces(
        &mut self,
        verified_interface_impls: &mut HashSet<&'a str>,
    ) {
        let type_name = self.type_.name();
        let type_fields = self.type_.fields();
        let mut iface_names: Vec<&'a str> =
            self.implemented_iface_names.iter().copied().collect();
        iface_names.sort_unstable();

        for iface_name in iface_names {
            // Interfaces can implement other interfaces, so the same
            // interface may be reached more than once on one type.
            if !verified_interface_impls.insert(iface_name) {
                continue;
            }

            if iface_name == type_name {
                self.errors.push(
                    TypeValidationError::InvalidSelfImplementingInterface {
                        interface_name: type_name.to_string(),
                        location: self.type_.def_location(),
                    }
                );
                continue;
            }

            let Some(iface_type) = self.types_map.get(iface_name) else {
                self.errors.push(
                    TypeValidationError::ImplementsUndefinedInterface {
                        location: self.type_.def_location(),
                        type_name: type_name.to_string(),
                        undefined_interface_name: iface_name.to_string(),
                    }
                );
                continue;
            };

            let Some(iface) = iface_type.as_interface() else {
                self.errors.push(
                    TypeValidationError::ImplementsNonInterfaceType {
                        location: self.type_.def_location(),
                        non_interface_type_name: iface_type.name().to_string(),
                        type_name: type_name.to_string(),
                    }
                );
                continue;
            };

            // The implementing type must also explicitly implement each of
            // the interfaces this interface implements.
            let iface_implemented_iface_names: HashSet<&'a str> =
                iface.interface_names().into_iter().collect();
            let declared_iface_names = self.all_declared_interfaces();
            let mut missing: Vec<&'a str> = iface_implemented_iface_names
                .difference(&declared_iface_names)
                .copied()
                .collect();
            missing.sort_unstable();
            for missing_rec_iface_name in missing {
                let mut inheritance_path: Vec<String> = self.inheritance_path
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                inheritance_path.push(iface_name.to_string());
                self.errors.push(
                    TypeValidationError::MissingRecursiveInterfaceImplementation {
                        inheritance_path,
                        location: self.type_.def_location(),
                        missing_recursive_interface_name:
                            missing_rec_iface_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                );
            }

            let mut child_inheritance_path = self.inheritance_path.clone();
            child_inheritance_path.push(iface_name);
            let mut child_validator = ObjectOrInterfaceTypeValidator {
                errors: vec![],
                implemented_iface_names: iface_implemented_iface_names,
                inheritance_path: child_inheritance_path,
                type_: self.type_,
                types_map: self.types_map,
            };
            child_validator.validate_interfaces(verified_interface_impls);
            self.errors.append(&mut child_validator.errors);

            for (field_name, iface_field) in iface.fields() {
                let Some(type_field) = type_fields.get(field_name) else {
                    self.errors.push(
                        TypeValidationError::MissingInterfaceSpecifiedField {
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            location: self.type_.def_location(),
                            type_name: type_name.to_string(),
                        }
                    );
                    continue;
                };

                // Field types are covariant.
                if !is_type_subtype_of(
                    self.types_map,
                    type_field.type_annotation(),
                    iface_field.type_annotation(),
                ) {
                    self.errors.push(
                        TypeValidationError::InvalidInterfaceSpecifiedFieldType {
                            expected_field_type:
                                iface_field.type_annotation().to_string(),
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            invalid_field_type:
                                type_field.type_annotation().to_string(),
                            location: type_field.def_location(),
                            type_name: type_name.to_string(),
                        }
                    );
                }

                // Parameters are invariant.
                for (param_name, iface_param) in iface_field.arguments() {
                    let Some(type_param) = type_field.argument(param_name) else {
                        self.errors.push(
                            TypeValidationError::MissingInterfaceSpecifiedFieldParameter {
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                location: type_field.def_location(),
                                missing_parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                        continue;
                    };
                    if !type_param.type_annotation().same_type(iface_param.type_annotation()) {
                        self.errors.push(
                            TypeValidationError::InvalidInterfaceSpecifiedFieldParameterType {
                                expected_parameter_type:
                                    iface_param.type_annotation().to_string(),
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                invalid_parameter_type:
                                    type_param.type_annotation().to_string(),
                                location: type_param.def_location(),
                                parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                    }
                }

                // Parameters the implementation adds must be optional.
                for (param_name, type_param) in type_field.arguments() {
                    if iface_field.argument(param_name).is_none()
                        && type_param.is_required()
                    {
                        self.errors.push(
                            TypeValidationError::InvalidRequiredAdditionalParameterOnInterfaceSpecifiedField {
                                field_name: field_name.to_string(),
                                interface_name: iface_name.to_string(),
                                location: type_param.def_location(),
                                parameter_name: param_name.to_string(),
                                type_name: type_name.to_string(),
                            }
                        );
                    }
                }
            }
        }
    }

    /// Interfaces declared directly on the type being validated, which is
    /// what transitive implementations are checked against.
    fn all_declared_interfaces(&self) -> HashSet<&'a str> {
        self.type_.interface_names().into_iter().collect()
    }
}

