use crate::executable_schema::SchemaRuntime;
use crate::executor::prepare;
use crate::executor::Executor;
use crate::tracer::guarded;
use crate::QueryTraceInfo;
use crate::Request;
use crate::Response;
use futures::stream;
use futures::stream::BoxStream;
use futures::StreamExt;
use gqlengine_core::gqlengine_parser::ast::OperationKind;
use std::sync::Arc;

/// Runs `request` as a subscription.
///
/// Preparing the request and opening the event stream happen on the first
/// poll. Each event then runs the operation's selection set and yields one
/// response, in event order. The stream ends with the event stream or when
/// the request's cancellation token fires.
pub(crate) fn subscribe(runtime: Arc<SchemaRuntime>, request: Request) -> BoxStream<'static, Response> {
    stream::once(open(runtime, request)).flatten().boxed()
}

async fn open(runtime: Arc<SchemaRuntime>, request: Request) -> BoxStream<'static, Response> {
    let info = QueryTraceInfo {
        query: &request.query,
        operation_name: request.operation_name.as_deref(),
        variables: &request.variables,
    };
    guarded("query_started", || runtime.tracer.query_started(&info));

    let opened = match prepare(&runtime, &request, &info) {
        Err(errors) => Err(Response::from_errors(errors)),
        Ok(prepared) if prepared.operation.kind != OperationKind::Subscription => {
            Err(Executor::new(&runtime, &prepared).execute_operation().await)
        },
        Ok(prepared) => {
            match Executor::new(&runtime, &prepared).open_event_stream().await {
                Ok(events) => Ok((prepared, events)),
                Err(response) => Err(response),
            }
        },
    };
    let errors = match &opened {
        Ok(_) => &[][..],
        Err(response) => response.errors.as_slice(),
    };
    guarded("query_finished", || runtime.tracer.query_finished(&info, errors));

    let (prepared, events) = match opened {
        Ok(opened) => opened,
        Err(response) => return stream::once(async move { response }).boxed(),
    };
    let cancelled = prepared.context.cancellation_token().clone().cancelled_owned();
    let prepared = Arc::new(prepared);
    tracing::debug!(
        operation_name = prepared.operation.name.as_deref(),
        "subscription event stream opened",
    );

    events
        .take_until(cancelled)
        .then(move |event| {
            let runtime = Arc::clone(&runtime);
            let prepared = Arc::clone(&prepared);
            async move {
                Executor::new(&runtime, &prepared)
                    .execute_subscription_event(event)
                    .await
            }
        })
        .boxed()
}
