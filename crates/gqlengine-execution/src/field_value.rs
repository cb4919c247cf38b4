use gqlengine_core::Value;
use std::any::Any;
use std::sync::Arc;

/// What a resolver hands back to the executor.
///
/// Plain [`Value`]s cover most data: nested objects are read by the default
/// resolver, which looks up each child field by name. Host data that only
/// bound resolvers understand travels as [`FieldValue::Opaque`].
#[derive(Clone, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Value(Value),
    List(Vec<FieldValue>),
    Opaque(Arc<dyn Any + Send + Sync>),
    /// Names the concrete object type of a value returned for an interface
    /// or union field.
    Typed {
        type_name: String,
        value: Box<FieldValue>,
    },
}

impl FieldValue {
    pub fn opaque<T: Any + Send + Sync>(data: T) -> Self {
        FieldValue::Opaque(Arc::new(data))
    }

    pub fn with_type(self, type_name: impl Into<String>) -> Self {
        FieldValue::Typed {
            type_name: type_name.into(),
            value: Box::new(self),
        }
    }

    pub fn list<T: Into<FieldValue>>(items: impl IntoIterator<Item = T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        match self {
            FieldValue::Null | FieldValue::Value(Value::Null) => true,
            FieldValue::Typed { value, .. } => value.is_null(),
            _ => false,
        }
    }

    /// The host data behind an [`FieldValue::Opaque`], looking through any
    /// attached type name.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            FieldValue::Opaque(data) => data.downcast_ref(),
            FieldValue::Typed { value, .. } => value.downcast_ref(),
            _ => None,
        }
    }

    /// Strips an attached type name.
    pub(crate) fn untyped(&self) -> &FieldValue {
        match self {
            FieldValue::Typed { value, .. } => value.untyped(),
            other => other,
        }
    }
}

impl std::fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Null => f.write_str("Null"),
            FieldValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FieldValue::List(items) => f.debug_tuple("List").field(items).finish(),
            FieldValue::Opaque(_) => f.write_str("Opaque(..)"),
            FieldValue::Typed { type_name, value } => f
                .debug_struct("Typed")
                .field("type_name", type_name)
                .field("value", value)
                .finish(),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Value(value)
    }
}

macro_rules! field_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Value(Value::from(value))
                }
            }
        )*
    };
}

field_value_from!(bool, i32, i64, f64, &str, String);
