use crate::directives::should_include;
use crate::executable_schema::SchemaRuntime;
use crate::tracer::guarded;
use crate::EventStream;
use crate::FieldTraceInfo;
use crate::FieldValue;
use crate::GraphQLError;
use crate::QueryTraceInfo;
use crate::Request;
use crate::RequestContext;
use crate::ResolverContext;
use crate::Response;
use futures::future::join_all;
use futures::future::BoxFuture;
use futures::FutureExt;
use gqlengine_core::coercion::coerce_argument_values;
use gqlengine_core::coercion::coerce_variable_values;
use gqlengine_core::coercion::CoercionError;
use gqlengine_core::coercion::Variables;
use gqlengine_core::gqlengine_parser;
use gqlengine_core::gqlengine_parser::ast;
use gqlengine_core::gqlengine_parser::ast::OperationKind;
use gqlengine_core::gqlengine_parser::ast::TypeAnnotation;
use gqlengine_core::types::Field;
use gqlengine_core::types::GraphQLType;
use gqlengine_core::types::ObjectOrInterfaceType;
use gqlengine_core::validation::validate;
use gqlengine_core::validation::ValidationOptions;
use gqlengine_core::PathSegment;
use gqlengine_core::Schema;
use gqlengine_core::Value;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::PoisonError;
use tokio::sync::Semaphore;

/// The completed value of a field or list item. `Err(())` means the value
/// was nulled by an error that has already been recorded; the nearest
/// nullable position turns it into `null`.
type Completed = Result<Value, ()>;

/// Fields of one selection set grouped by response key, in document order.
type GroupedFields<'a> = IndexMap<&'a str, Vec<&'a ast::Field>>;

/// A parsed, validated request with its operation chosen and variables
/// coerced: everything needed to start executing.
pub(crate) struct PreparedRequest {
    pub(crate) context: RequestContext,
    pub(crate) document: ast::Document,
    pub(crate) operation: ast::OperationDefinition,
    pub(crate) variables: Variables,
}

enum ResolveError {
    Field(GraphQLError),
    Internal(String),
}

pub(crate) async fn execute_request(runtime: &SchemaRuntime, request: Request) -> Response {
    let info = QueryTraceInfo {
        query: &request.query,
        operation_name: request.operation_name.as_deref(),
        variables: &request.variables,
    };
    guarded("query_started", || runtime.tracer.query_started(&info));
    let response = match prepare(runtime, &request, &info) {
        Ok(prepared) => Executor::new(runtime, &prepared).execute_operation().await,
        Err(errors) => Response::from_errors(errors),
    };
    guarded("query_finished", || runtime.tracer.query_finished(&info, &response.errors));
    response
}

/// Everything that happens before the first resolver runs. Any error here
/// rejects the request without data.
pub(crate) fn prepare(
    runtime: &SchemaRuntime,
    request: &Request,
    info: &QueryTraceInfo<'_>,
) -> Result<PreparedRequest, Vec<GraphQLError>> {
    let options = &runtime.options;
    let schema = runtime.schema.as_ref();

    if let Some(max_query_length) = options.max_query_length {
        if request.query.len() > max_query_length {
            return Err(vec![GraphQLError::new(format!(
                "Query is {} bytes long, which exceeds the limit of {max_query_length} bytes.",
                request.query.len(),
            ))]);
        }
    }

    let document = gqlengine_parser::parse_executable_document(&request.query)
        .map_err(|err| vec![GraphQLError::from(err)])?;

    guarded("validation_started", || runtime.tracer.validation_started(info));
    let validation_options = ValidationOptions {
        max_depth: options.max_depth,
    };
    let validation_errors: Vec<GraphQLError> = validate(schema, &document, &validation_options)
        .into_iter()
        .map(GraphQLError::from)
        .collect();
    guarded("validation_finished", || {
        runtime.tracer.validation_finished(info, &validation_errors)
    });
    if !validation_errors.is_empty() {
        tracing::debug!(errors = validation_errors.len(), "request failed validation");
        return Err(validation_errors);
    }

    let operation = select_operation(&document, request.operation_name.as_deref())?.clone();
    if options.disable_introspection {
        reject_introspection(&document, &operation.selection_set, &mut HashSet::new())?;
    }
    if schema.root_type(operation.kind).is_none() {
        return Err(vec![GraphQLError::new(format!(
            "Schema is not configured to execute {} operation.",
            operation.kind,
        ))
        .with_locations(vec![operation.span.location()])]);
    }

    let variables = coerce_variable_values(schema, &operation, &request.variables)
        .map_err(|errors| errors.into_iter().map(GraphQLError::from).collect::<Vec<_>>())?;

    let mut context = request.context.clone();
    if context.deadline().is_none() {
        if let Some(timeout) = options.default_timeout {
            context = context.with_timeout(timeout);
        }
    }

    tracing::debug!(
        operation_name = operation.name.as_deref(),
        kind = %operation.kind,
        "prepared request",
    );
    Ok(PreparedRequest {
        context,
        document,
        operation,
        variables,
    })
}

fn select_operation<'d>(
    document: &'d ast::Document,
    operation_name: Option<&str>,
) -> Result<&'d ast::OperationDefinition, Vec<GraphQLError>> {
    if let Some(name) = operation_name {
        return document
            .operations()
            .find(|op| op.name.as_deref() == Some(name))
            .ok_or_else(|| vec![GraphQLError::new(format!("Unknown operation named \"{name}\"."))]);
    }
    let mut operations = document.operations();
    match (operations.next(), operations.next()) {
        (Some(operation), None) => Ok(operation),
        (None, _) => Err(vec![GraphQLError::new("Must provide an operation.")]),
        (Some(_), Some(_)) => Err(vec![GraphQLError::new(
            "Must provide operation name if query contains multiple operations.",
        )]),
    }
}

/// Fails if the root selection set, looking through fragments, selects
/// `__schema` or `__type`.
fn reject_introspection<'d>(
    document: &'d ast::Document,
    selection_set: &'d ast::SelectionSet,
    visited_fragments: &mut HashSet<&'d str>,
) -> Result<(), Vec<GraphQLError>> {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                if field.name == "__schema" || field.name == "__type" {
                    return Err(vec![GraphQLError::new(format!(
                        "GraphQL introspection has been disabled, but the requested query \
                        contained the field \"{}\".",
                        field.name,
                    ))
                    .with_locations(vec![field.span.location()])]);
                }
            },
            ast::Selection::InlineFragment(fragment) => {
                reject_introspection(document, &fragment.selection_set, visited_fragments)?;
            },
            ast::Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.name.as_str()) {
                    continue;
                }
                if let Some(fragment) = document.fragment(&spread.name) {
                    reject_introspection(document, &fragment.selection_set, visited_fragments)?;
                }
            },
        }
    }
    Ok(())
}

/// Per-request execution state. Sibling fields run as concurrent futures
/// that all borrow the executor; each writes only its own result entry and
/// appends to the shared error list.
pub(crate) struct Executor<'a> {
    context: &'a RequestContext,
    document: &'a ast::Document,
    errors: Mutex<Vec<GraphQLError>>,
    operation: &'a ast::OperationDefinition,
    permits: Option<Semaphore>,
    runtime: &'a SchemaRuntime,
    schema: &'a Schema,
    variables: &'a Variables,
}

impl<'a> Executor<'a> {
    pub(crate) fn new(runtime: &'a SchemaRuntime, prepared: &'a PreparedRequest) -> Self {
        Self {
            context: &prepared.context,
            document: &prepared.document,
            errors: Mutex::new(vec![]),
            operation: &prepared.operation,
            permits: runtime.options.max_parallelism.map(|n| Semaphore::new(n.max(1))),
            runtime,
            schema: runtime.schema.as_ref(),
            variables: &prepared.variables,
        }
    }

    fn record(&self, error: GraphQLError) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error);
    }

    fn take_errors(&self) -> Vec<GraphQLError> {
        std::mem::take(&mut *self.errors.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn root_fields(&self) -> Option<(&'a ObjectOrInterfaceType, GroupedFields<'a>)> {
        let root_type = self.schema.root_type(self.operation.kind)?;
        let mut grouped = GroupedFields::new();
        self.collect_fields(
            root_type.name(),
            &self.operation.selection_set,
            &mut HashSet::new(),
            &mut grouped,
        );
        Some((root_type, grouped))
    }

    pub(crate) async fn execute_operation(&self) -> Response {
        let Some((root_type, grouped)) = self.root_fields() else {
            return Response::from_errors(vec![GraphQLError::new(format!(
                "Schema is not configured to execute {} operation.",
                self.operation.kind,
            ))]);
        };
        let root_value = FieldValue::Null;
        let result = match self.operation.kind {
            OperationKind::Mutation => {
                self.execute_fields_serially(root_type, &root_value, &grouped).await
            },
            OperationKind::Query | OperationKind::Subscription => {
                self.execute_fields(root_type, &root_value, &grouped, &[]).await
            },
        };
        let data = match result {
            Ok(fields) => Value::Object(fields),
            Err(()) => Value::Null,
        };
        Response {
            data: Some(data),
            errors: self.take_errors(),
        }
    }

    /// Gathers the fields of `selection_set` that apply to an object of
    /// type `object_type_name`, honouring `@skip` and `@include`.
    ///
    /// https://spec.graphql.org/October2021/#CollectFields()
    fn collect_fields(
        &self,
        object_type_name: &str,
        selection_set: &'a ast::SelectionSet,
        visited_fragments: &mut HashSet<&'a str>,
        grouped: &mut GroupedFields<'a>,
    ) {
        for selection in &selection_set.selections {
            if !should_include(selection.directives(), self.variables) {
                continue;
            }
            match selection {
                ast::Selection::Field(field) => {
                    grouped.entry(field.response_key()).or_default().push(field);
                },
                ast::Selection::FragmentSpread(spread) => {
                    if !visited_fragments.insert(spread.name.as_str()) {
                        continue;
                    }
                    let Some(fragment) = self.document.fragment(&spread.name) else {
                        continue;
                    };
                    if self.fragment_applies(object_type_name, &fragment.type_condition) {
                        self.collect_fields(
                            object_type_name,
                            &fragment.selection_set,
                            visited_fragments,
                            grouped,
                        );
                    }
                },
                ast::Selection::InlineFragment(fragment) => {
                    let applies = fragment
                        .type_condition
                        .as_deref()
                        .is_none_or(|condition| self.fragment_applies(object_type_name, condition));
                    if applies {
                        self.collect_fields(
                            object_type_name,
                            &fragment.selection_set,
                            visited_fragments,
                            grouped,
                        );
                    }
                },
            }
        }
    }

    fn fragment_applies(&self, object_type_name: &str, type_condition: &str) -> bool {
        type_condition == object_type_name
            || self.schema.is_possible_type(type_condition, object_type_name)
    }

    /// Resolves sibling fields concurrently. The result map keeps the
    /// grouped (document) order whatever order the fields finish in.
    fn execute_fields<'b>(
        &'b self,
        object_type: &'a ObjectOrInterfaceType,
        parent: &'b FieldValue,
        grouped: &'b GroupedFields<'a>,
        path: &'b [PathSegment],
    ) -> BoxFuture<'b, Result<IndexMap<String, Value>, ()>> {
        async move {
            let pending = grouped.iter().map(|(response_key, fields)| {
                let mut field_path = path.to_vec();
                field_path.push(PathSegment::Key(response_key.to_string()));
                async move {
                    let completed = self.execute_field(object_type, parent, fields, field_path).await;
                    (*response_key, completed)
                }
            });
            collect_results(join_all(pending).await)
        }
        .boxed()
    }

    /// Resolves top-level mutation fields one after another, each with its
    /// whole sub-tree, in document order.
    async fn execute_fields_serially(
        &self,
        object_type: &'a ObjectOrInterfaceType,
        parent: &FieldValue,
        grouped: &GroupedFields<'a>,
    ) -> Result<IndexMap<String, Value>, ()> {
        let mut results = Vec::with_capacity(grouped.len());
        for (response_key, fields) in grouped {
            let field_path = vec![PathSegment::Key(response_key.to_string())];
            let completed = self.execute_field(object_type, parent, fields, field_path).await;
            results.push((*response_key, completed));
        }
        collect_results(results)
    }

    /// `None` when the field is not defined on `object_type`, in which case
    /// it is left out of the result.
    async fn execute_field(
        &self,
        object_type: &'a ObjectOrInterfaceType,
        parent: &FieldValue,
        fields: &[&'a ast::Field],
        path: Vec<PathSegment>,
    ) -> Option<Completed> {
        let field = fields[0];
        let type_name = object_type.name();
        if field.name == "__typename" {
            return Some(Ok(Value::String(type_name.to_string())));
        }
        let field_def = self.schema.field_def(type_name, &field.name)?;
        let field_type = field_def.type_annotation();

        let completed = match self.resolve_field(type_name, field_def, field, parent, &path).await {
            Ok(value) => self.complete_value(type_name, fields, field_type, value, path).await,
            Err(ResolveError::Field(error)) => {
                self.record(error);
                Err(())
            },
            Err(ResolveError::Internal(detail)) => {
                self.internal_error(type_name, field, &path, &detail);
                Err(())
            },
        };
        Some(absorb_null(field_type, completed))
    }

    async fn resolve_field(
        &self,
        type_name: &str,
        field_def: &Field,
        field: &ast::Field,
        parent: &FieldValue,
        path: &[PathSegment],
    ) -> Result<FieldValue, ResolveError> {
        let Some(resolver) = self.runtime.resolver(type_name, &field.name) else {
            return default_resolve(parent, &field.name);
        };

        let location = field.span.location();
        let field_error = |message: String| {
            GraphQLError::new(message)
                .with_locations(vec![location])
                .with_path(path.to_vec())
        };
        if self.context.is_cancelled() {
            return Err(ResolveError::Field(field_error(
                "Request was cancelled before this field was resolved.".to_string(),
            )));
        }
        if self.context.is_past_deadline() {
            return Err(ResolveError::Field(field_error(
                "Request deadline passed before this field was resolved.".to_string(),
            )));
        }

        let arguments = coerce_argument_values(
            self.schema,
            field_def.arguments(),
            &field.arguments,
            self.variables,
            location,
        )
        .map_err(|errors| {
            let mut errors = errors.into_iter().map(|err: CoercionError| field_error(err.message));
            let first = errors.next().unwrap_or_else(|| field_error("Invalid arguments.".to_string()));
            errors.for_each(|err| self.record(err));
            ResolveError::Field(first)
        })?;

        let trace_arguments = arguments.clone();
        let trace_info = FieldTraceInfo {
            type_name,
            field_name: &field.name,
            arguments: &trace_arguments,
            path,
        };
        guarded("field_started", || self.runtime.tracer.field_started(&trace_info));

        let ctx = ResolverContext {
            parent: parent.clone(),
            arguments,
            request: self.context.clone(),
            parent_type_name: type_name.to_string(),
            field_name: field.name.clone(),
            path: path.to_vec(),
        };
        let permit = match &self.permits {
            Some(permits) => permits.acquire().await.ok(),
            None => None,
        };
        tracing::trace!(type_name, field_name = %field.name, "invoking resolver");
        let result = resolver.resolve(ctx).await;
        drop(permit);

        let result = result.map_err(|err| {
            let mut error = field_error(err.message);
            error.extensions = err.extensions;
            error
        });
        guarded("field_finished", || {
            self.runtime.tracer.field_finished(&trace_info, result.as_ref().err())
        });
        result.map_err(ResolveError::Field)
    }

    /// Shapes a resolved value according to `field_type`, descending into
    /// lists and composite types.
    ///
    /// https://spec.graphql.org/October2021/#CompleteValue()
    fn complete_value<'b>(
        &'b self,
        parent_type_name: &'b str,
        fields: &'b [&'a ast::Field],
        field_type: &'b TypeAnnotation,
        value: FieldValue,
        path: Vec<PathSegment>,
    ) -> BoxFuture<'b, Completed> {
        async move {
            let field = fields[0];
            if !field_type.nullable() {
                let nullable_type = field_type.as_nullable();
                let completed = self
                    .complete_value(parent_type_name, fields, &nullable_type, value, path.clone())
                    .await?;
                if completed.is_null() {
                    self.record(
                        GraphQLError::new(format!(
                            "Cannot return null for non-nullable field {parent_type_name}.{}.",
                            field.name,
                        ))
                        .with_locations(vec![field.span.location()])
                        .with_path(path),
                    );
                    return Err(());
                }
                return Ok(completed);
            }

            if value.is_null() {
                return Ok(Value::Null);
            }

            if let Some(item_type) = field_type.list_item() {
                let items = match value.untyped() {
                    FieldValue::List(items) => items.clone(),
                    FieldValue::Value(Value::List(values)) => {
                        values.iter().cloned().map(FieldValue::Value).collect()
                    },
                    other => {
                        let detail = format!("expected a list for type \"{field_type}\", got {other:?}");
                        self.internal_error(parent_type_name, field, &path, &detail);
                        return Err(());
                    },
                };
                let pending = items.into_iter().enumerate().map(|(idx, item)| {
                    let mut item_path = path.clone();
                    item_path.push(PathSegment::Index(idx));
                    async move {
                        let completed = self
                            .complete_value(parent_type_name, fields, item_type, item, item_path)
                            .await;
                        absorb_null(item_type, completed)
                    }
                });
                return join_all(pending)
                    .await
                    .into_iter()
                    .collect::<Result<Vec<_>, ()>>()
                    .map(Value::List);
            }

            let named_type_name = field_type.innermost_name();
            let leaf_or_composite = self.schema.get_type(named_type_name);
            let result = match leaf_or_composite {
                Some(GraphQLType::Scalar(scalar)) => match value.untyped() {
                    FieldValue::Value(raw) => scalar.parser().serialize(raw),
                    other => Err(format!("expected a scalar for type \"{named_type_name}\", got {other:?}")),
                },
                Some(GraphQLType::Enum(enum_type)) => match value.untyped() {
                    FieldValue::Value(Value::Enum(name) | Value::String(name))
                        if enum_type.value(name).is_some() => Ok(Value::Enum(name.clone())),
                    other => Err(format!(
                        "Enum \"{named_type_name}\" cannot represent value: {other:?}",
                    )),
                },
                Some(GraphQLType::Object(object_type)) => {
                    return self.complete_object(object_type, fields, value, path).await;
                },
                Some(GraphQLType::Interface(_) | GraphQLType::Union(_)) => {
                    match self.resolve_abstract_type(named_type_name, &value) {
                        Ok(object_type) => {
                            return self.complete_object(object_type, fields, value, path).await;
                        },
                        Err(detail) => Err(detail),
                    }
                },
                Some(GraphQLType::InputObject(_)) | None => Err(format!(
                    "\"{named_type_name}\" is not an output type",
                )),
            };
            result.map_err(|detail| self.internal_error(parent_type_name, field, &path, &detail))
        }
        .boxed()
    }

    async fn complete_object(
        &self,
        object_type: &'a ObjectOrInterfaceType,
        fields: &[&'a ast::Field],
        value: FieldValue,
        path: Vec<PathSegment>,
    ) -> Completed {
        let mut grouped = GroupedFields::new();
        let mut visited_fragments = HashSet::new();
        for field in fields {
            if let Some(selection_set) = &field.selection_set {
                self.collect_fields(
                    object_type.name(),
                    selection_set,
                    &mut visited_fragments,
                    &mut grouped,
                );
            }
        }
        self.execute_fields(object_type, value.untyped(), &grouped, &path)
            .await
            .map(Value::Object)
    }

    /// The concrete object type of a value returned for an interface or
    /// union field: the attached type name, or a `__typename` entry.
    fn resolve_abstract_type(
        &self,
        abstract_type_name: &str,
        value: &FieldValue,
    ) -> Result<&'a ObjectOrInterfaceType, String> {
        let type_name = match value {
            FieldValue::Typed { type_name, .. } => Some(type_name.as_str()),
            FieldValue::Value(Value::Object(entries)) => {
                entries.get("__typename").and_then(Value::as_str)
            },
            _ => None,
        };
        let Some(type_name) = type_name else {
            return Err(format!(
                "Abstract type \"{abstract_type_name}\" must resolve to an object type at \
                runtime, but the value carries no type name",
            ));
        };
        let object_type = self
            .schema
            .get_type(type_name)
            .and_then(GraphQLType::as_object)
            .ok_or_else(|| format!("\"{type_name}\" is not an object type"))?;
        if !self.schema.is_possible_type(abstract_type_name, type_name) {
            return Err(format!(
                "Runtime object type \"{type_name}\" is not a possible type for \
                \"{abstract_type_name}\"",
            ));
        }
        Ok(object_type)
    }

    /// Records a resolver contract violation. The client gets a generic
    /// error; the detail goes to the log and the tracer.
    fn internal_error(
        &self,
        parent_type_name: &str,
        field: &ast::Field,
        path: &[PathSegment],
        detail: &str,
    ) {
        tracing::error!(
            type_name = parent_type_name,
            field_name = %field.name,
            detail,
            "resolver returned a value that does not fit its field type",
        );
        let no_arguments = IndexMap::new();
        let trace_info = FieldTraceInfo {
            type_name: parent_type_name,
            field_name: &field.name,
            arguments: &no_arguments,
            path,
        };
        guarded("internal_error", || self.runtime.tracer.internal_error(&trace_info, detail));
        self.record(
            GraphQLError::new(format!(
                "Internal error while resolving \"{parent_type_name}.{}\".",
                field.name,
            ))
            .with_locations(vec![field.span.location()])
            .with_path(path.to_vec()),
        );
    }

    /// Opens the event stream behind the single root field of a
    /// subscription operation.
    pub(crate) async fn open_event_stream(&self) -> Result<EventStream, Response> {
        let Some((root_type, grouped)) = self.root_fields() else {
            return Err(Response::from_errors(vec![GraphQLError::new(
                "Schema is not configured to execute subscription operation.",
            )]));
        };
        let Some((response_key, fields)) = grouped.first() else {
            return Err(Response::from_data(Value::Object(IndexMap::new())));
        };
        let field = fields[0];
        let path = vec![PathSegment::Key(response_key.to_string())];
        let location = field.span.location();
        let request_error = |message: String| {
            Response::from_errors(vec![
                GraphQLError::new(message)
                    .with_locations(vec![location])
                    .with_path(path.clone()),
            ])
        };

        let Some(field_def) = self.schema.field_def(root_type.name(), &field.name) else {
            return Err(request_error(format!(
                "The subscription field \"{}\" is not defined.",
                field.name,
            )));
        };
        let Some(resolver) = self.runtime.subscription_resolver(root_type.name(), &field.name) else {
            return Err(request_error(format!(
                "No subscription resolver is bound to \"{}.{}\".",
                root_type.name(),
                field.name,
            )));
        };
        let arguments = coerce_argument_values(
            self.schema,
            field_def.arguments(),
            &field.arguments,
            self.variables,
            location,
        )
        .map_err(|errors| {
            Response::from_errors(errors.into_iter().map(GraphQLError::from).collect())
        })?;

        let ctx = ResolverContext {
            parent: FieldValue::Null,
            arguments,
            request: self.context.clone(),
            parent_type_name: root_type.name().to_string(),
            field_name: field.name.clone(),
            path: path.clone(),
        };
        tracing::debug!(field_name = %field.name, "opening subscription event stream");
        resolver
            .subscribe(ctx)
            .await
            .map_err(|err| request_error(err.message))
    }

    /// Executes the subscription's selection set with `event` standing in
    /// for the root field's resolved value.
    pub(crate) async fn execute_subscription_event(
        &self,
        event: Result<FieldValue, crate::FieldError>,
    ) -> Response {
        let Some((root_type, grouped)) = self.root_fields() else {
            return Response::from_errors(vec![GraphQLError::new(
                "Schema is not configured to execute subscription operation.",
            )]);
        };
        let Some((response_key, fields)) = grouped.first() else {
            return Response::from_data(Value::Object(IndexMap::new()));
        };
        let field = fields[0];
        let Some(field_def) = self.schema.field_def(root_type.name(), &field.name) else {
            return Response::from_data(Value::Object(IndexMap::new()));
        };
        let field_type = field_def.type_annotation();
        let path = vec![PathSegment::Key(response_key.to_string())];

        let completed = match event {
            Ok(value) => {
                self.complete_value(root_type.name(), fields, field_type, value, path)
                    .await
            },
            Err(err) => {
                let mut error = GraphQLError::new(err.message)
                    .with_locations(vec![field.span.location()])
                    .with_path(path);
                error.extensions = err.extensions;
                self.record(error);
                Err(())
            },
        };
        let data = match absorb_null(field_type, completed) {
            Ok(value) => Value::object([(response_key.to_string(), value)]),
            Err(()) => Value::Null,
        };
        Response {
            data: Some(data),
            errors: self.take_errors(),
        }
    }
}

/// The value a field takes when no resolver is bound: the parent object's
/// entry under the field's name.
fn default_resolve(parent: &FieldValue, field_name: &str) -> Result<FieldValue, ResolveError> {
    match parent.untyped() {
        FieldValue::Null => Ok(FieldValue::Null),
        FieldValue::Value(Value::Object(entries)) => Ok(entries
            .get(field_name)
            .cloned()
            .map(FieldValue::Value)
            .unwrap_or_default()),
        other => Err(ResolveError::Internal(format!(
            "no resolver is bound for field \"{field_name}\" and its parent is not a plain \
            object: {other:?}",
        ))),
    }
}

/// A nullable position stops null propagation.
fn absorb_null(field_type: &TypeAnnotation, completed: Completed) -> Completed {
    match completed {
        Err(()) if field_type.nullable() => Ok(Value::Null),
        other => other,
    }
}

fn collect_results(
    results: Vec<(&str, Option<Completed>)>,
) -> Result<IndexMap<String, Value>, ()> {
    let mut fields = IndexMap::with_capacity(results.len());
    let mut nulled = false;
    for (response_key, completed) in results {
        match completed {
            Some(Ok(value)) => {
                fields.insert(response_key.to_string(), value);
            },
            Some(Err(())) => nulled = true,
            None => (),
        }
    }
    if nulled { Err(()) } else { Ok(fields) }
}
