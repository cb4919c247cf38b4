/// A resolver binding that does not fit the schema.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResolverTableError {
    #[error("Multiple resolvers were bound to `{type_name}.{field_name}`")]
    DuplicateResolver {
        field_name: String,
        type_name: String,
    },

    #[error(
        "Resolvers can only be bound to object types, but `{type_name}` is \
        not an object type"
    )]
    NonObjectType {
        type_name: String,
    },

    #[error("`{type_name}.{field_name}` is answered by introspection and cannot be rebound")]
    ReservedIntrospectionField {
        field_name: String,
        type_name: String,
    },

    #[error(
        "A subscription resolver was bound to `{type_name}.{field_name}`, but \
        only fields of the subscription root type may have one"
    )]
    SubscriptionResolverOutsideSubscriptionRoot {
        field_name: String,
        type_name: String,
    },

    #[error("Attempted to bind a resolver to `{type_name}.{field_name}`, which is not defined")]
    UndefinedField {
        field_name: String,
        type_name: String,
    },

    #[error("Attempted to bind a resolver to a field of `{type_name}`, which is not defined")]
    UndefinedType {
        type_name: String,
    },
}
