#![recursion_limit = "256"]

use std::sync::Arc;

use anyhow::Context as _;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use movie_csv_ingest_handler::{
    config::Config, context::Context, entrypoint::Entrypoint, handler::handler, service,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;
    tracing::trace!(environment=%config.environment, table=%config.movies_table, "initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    let movies_table = service::dynamodb::MoviesTable::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        &config.movies_table,
    );
    tracing::trace!("initialized dynamodb client");

    let ctx = Context {
        s3_client: Arc::new(s3_client),
        movies_table: Arc::new(movies_table),
        config,
    };

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();
        async move { handler(ctx, event).await }
    });

    run(func).await
}
