use crate::executor;
use crate::introspection;
use crate::subscription;
use crate::ExecutorOptions;
use crate::FieldResolver;
use crate::NoopTracer;
use crate::Request;
use crate::ResolverTableError;
use crate::Response;
use crate::SubscriptionResolver;
use crate::Tracer;
use futures::stream::BoxStream;
use gqlengine_core::Schema;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ResolverTableError>;

/// Resolvers keyed by object type name, then field name.
pub(crate) type ResolverTable<R> = HashMap<String, HashMap<String, Arc<R>>>;

/// A [`Schema`] together with the resolvers, tracer and limits needed to
/// run requests against it. Cloning is cheap and clones share everything.
#[derive(Clone)]
pub struct ExecutableSchema {
    pub(crate) inner: Arc<SchemaRuntime>,
}

pub(crate) struct SchemaRuntime {
    pub(crate) options: ExecutorOptions,
    pub(crate) resolvers: ResolverTable<dyn FieldResolver>,
    pub(crate) schema: Arc<Schema>,
    pub(crate) subscription_resolvers: ResolverTable<dyn SubscriptionResolver>,
    pub(crate) tracer: Arc<dyn Tracer>,
}

impl SchemaRuntime {
    pub(crate) fn resolver(&self, type_name: &str, field_name: &str) -> Option<&Arc<dyn FieldResolver>> {
        self.resolvers.get(type_name)?.get(field_name)
    }

    pub(crate) fn subscription_resolver(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Option<&Arc<dyn SubscriptionResolver>> {
        self.subscription_resolvers.get(type_name)?.get(field_name)
    }
}

impl ExecutableSchema {
    pub fn builder(schema: Schema) -> ExecutableSchemaBuilder {
        ExecutableSchemaBuilder {
            options: ExecutorOptions::default(),
            resolvers: vec![],
            schema,
            subscription_resolvers: vec![],
            tracer: Arc::new(NoopTracer),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.inner.schema
    }

    pub fn options(&self) -> &ExecutorOptions {
        &self.inner.options
    }

    /// Parses, validates and executes a query or mutation. Subscription
    /// operations run as if they were queries; use [`Self::subscribe`] to
    /// receive their events.
    pub async fn execute(&self, request: Request) -> Response {
        executor::execute_request(&self.inner, request).await
    }

    /// Runs a subscription: one response per event of the root field's
    /// event stream. A request that fails before the stream is opened (or
    /// that is not a subscription) yields exactly one response.
    pub fn subscribe(&self, request: Request) -> BoxStream<'static, Response> {
        subscription::subscribe(Arc::clone(&self.inner), request)
    }
}

/// Collects resolver bindings for [`ExecutableSchema::build`]; nothing is
/// checked until then.
pub struct ExecutableSchemaBuilder {
    options: ExecutorOptions,
    resolvers: Vec<(String, String, Arc<dyn FieldResolver>)>,
    schema: Schema,
    subscription_resolvers: Vec<(String, String, Arc<dyn SubscriptionResolver>)>,
    tracer: Arc<dyn Tracer>,
}

impl ExecutableSchemaBuilder {
    pub fn resolver(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: impl FieldResolver + 'static,
    ) -> Self {
        let resolver: Arc<dyn FieldResolver> = Arc::new(resolver);
        self.resolvers.push((type_name.into(), field_name.into(), resolver));
        self
    }

    pub fn subscription_resolver(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: impl SubscriptionResolver + 'static,
    ) -> Self {
        let resolver: Arc<dyn SubscriptionResolver> = Arc::new(resolver);
        self.subscription_resolvers.push((type_name.into(), field_name.into(), resolver));
        self
    }

    pub fn tracer(mut self, tracer: impl Tracer + 'static) -> Self {
        self.tracer = Arc::new(tracer);
        self
    }

    pub fn options(mut self, options: ExecutorOptions) -> Self {
        self.options = options;
        self
    }

    /// Checks every binding against the schema and adds the introspection
    /// resolvers.
    pub fn build(self) -> Result<ExecutableSchema> {
        let ExecutableSchemaBuilder {
            options,
            resolvers,
            schema,
            subscription_resolvers,
            tracer,
        } = self;
        let schema = Arc::new(schema);

        let mut resolver_table = ResolverTable::new();
        for (type_name, field_name, resolver) in resolvers {
            check_binding(&schema, &type_name, &field_name)?;
            insert_binding(&mut resolver_table, type_name, field_name, resolver)?;
        }

        let mut subscription_table = ResolverTable::new();
        for (type_name, field_name, resolver) in subscription_resolvers {
            check_binding(&schema, &type_name, &field_name)?;
            if schema.subscription_type_name() != Some(type_name.as_str()) {
                return Err(ResolverTableError::SubscriptionResolverOutsideSubscriptionRoot {
                    field_name,
                    type_name,
                });
            }
            insert_binding(&mut subscription_table, type_name, field_name, resolver)?;
        }

        introspection::bind_resolvers(&schema, &mut resolver_table);
        tracing::debug!(
            bound_types = resolver_table.len(),
            subscription_fields = subscription_table.values().map(HashMap::len).sum::<usize>(),
            "built resolver table",
        );

        Ok(ExecutableSchema {
            inner: Arc::new(SchemaRuntime {
                options,
                resolvers: resolver_table,
                schema,
                subscription_resolvers: subscription_table,
                tracer,
            }),
        })
    }
}

fn check_binding(schema: &Schema, type_name: &str, field_name: &str) -> Result<()> {
    let Some(graphql_type) = schema.get_type(type_name) else {
        return Err(ResolverTableError::UndefinedType {
            type_name: type_name.to_string(),
        });
    };
    if type_name.starts_with("__") || field_name.starts_with("__") {
        return Err(ResolverTableError::ReservedIntrospectionField {
            field_name: field_name.to_string(),
            type_name: type_name.to_string(),
        });
    }
    let Some(object_type) = graphql_type.as_object() else {
        return Err(ResolverTableError::NonObjectType {
            type_name: type_name.to_string(),
        });
    };
    if object_type.field(field_name).is_none() {
        return Err(ResolverTableError::UndefinedField {
            field_name: field_name.to_string(),
            type_name: type_name.to_string(),
        });
    }
    Ok(())
}

fn insert_binding<R: ?Sized>(
    table: &mut ResolverTable<R>,
    type_name: String,
    field_name: String,
    resolver: Arc<R>,
) -> Result<()> {
    let fields = table.entry(type_name.clone()).or_default();
    if fields.contains_key(&field_name) {
        return Err(ResolverTableError::DuplicateResolver {
            field_name,
            type_name,
        });
    }
    fields.insert(field_name, resolver);
    Ok(())
}
