use crate::FieldError;
use crate::FieldValue;
use crate::RequestContext;
use futures::stream::BoxStream;
use gqlengine_core::PathSegment;
use gqlengine_core::Value;
use indexmap::IndexMap;
use std::future::Future;

/// Everything a resolver is given for one field of one parent value.
#[derive(Clone, Debug)]
pub struct ResolverContext {
    pub parent: FieldValue,
    pub arguments: IndexMap<String, Value>,
    pub request: RequestContext,
    pub parent_type_name: String,
    pub field_name: String,
    pub path: Vec<PathSegment>,
}

impl ResolverContext {
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }
}

/// Produces the value of one (object type, field) pair.
///
/// Any `Fn(ResolverContext) -> impl Future<Output = Result<FieldValue,
/// FieldError>>` closure is a resolver.
#[async_trait::async_trait]
pub trait FieldResolver: Send + Sync {
    async fn resolve(&self, ctx: ResolverContext) -> Result<FieldValue, FieldError>;
}

#[async_trait::async_trait]
impl<F, Fut> FieldResolver for F
where
    F: Fn(ResolverContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<FieldValue, FieldError>> + Send,
{
    async fn resolve(&self, ctx: ResolverContext) -> Result<FieldValue, FieldError> {
        self(ctx).await
    }
}

/// A stream of raw subscription events. Each item is executed against the
/// subscription's selection set to produce one response.
pub type EventStream = BoxStream<'static, Result<FieldValue, FieldError>>;

/// Opens the event stream behind a subscription root field.
#[async_trait::async_trait]
pub trait SubscriptionResolver: Send + Sync {
    async fn subscribe(&self, ctx: ResolverContext) -> Result<EventStream, FieldError>;
}

#[async_trait::async_trait]
impl<F, Fut> SubscriptionResolver for F
where
    F: Fn(ResolverContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<EventStream, FieldError>> + Send,
{
    async fn subscribe(&self, ctx: ResolverContext) -> Result<EventStream, FieldError> {
        self(ctx).await
    }
}
