use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, tracing};

use crate::{context::Context, service};

/// Processes the s3 event.
/// Any failure fails the whole invocation; the lambda runtime reports it back to s3.
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(ctx: Context, event: LambdaEvent<S3Event>) -> Result<(), Error> {
    tracing::trace!(payload=?event.payload, context=?event.context, "handler invoked");
    tracing::info!(
        "processing s3 records record_count={}",
        event.payload.records.len()
    );

    let summary = service::movies::ingest(&ctx, &event.payload).await?;

    tracing::info!(
        objects = summary.objects,
        movies = summary.movies,
        "processing complete"
    );

    Ok(())
}
