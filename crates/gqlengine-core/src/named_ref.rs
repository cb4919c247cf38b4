use gqlengine_parser::Location;
use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to a resource (`TResource`)
/// stored in some other data-store, without holding a reference to that
/// data-store. De-referencing is done via [`NamedRef::deref()`] by handing it
/// the store.
///
/// [`crate::types::ObjectOrInterfaceType`] stores the interfaces it
/// implements as `NamedRef`s into the schema's types map. That keeps
/// self-referential and mutually-recursive type graphs free of ownership
/// cycles: every edge is a name lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<TResource: DerefByName> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: Location,
}

impl<TResource: DerefByName> NamedRef<TResource> {
    pub fn new(name: impl AsRef<str>, ref_location: Location) -> Self {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Where the reference was written in the schema source.
    pub fn ref_location(&self) -> Location {
        self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TResource::Source,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

/// Implement this trait for any type that can be referenced by name. This
/// enables [`NamedRef<T>`] for that type.
pub trait DerefByName: Clone + std::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError>;

    fn named_ref(name: &str, ref_location: Location) -> NamedRef<Self> {
        NamedRef::new(name, ref_location)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("no definition found for `{0}`")]
    DanglingReference(String),
}
