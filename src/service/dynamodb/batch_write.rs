use std::{collections::HashMap, time::Duration};

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};
use lambda_runtime::tracing;
use serde_dynamo::Item;

use crate::model::MovieRecord;

/// The most write requests dynamodb accepts in a single BatchWriteItem call
const MAX_BATCH_WRITE_ITEMS: usize = 25;

/// Delay before the first resend of unprocessed items, doubled after every resend
const INITIAL_RESEND_DELAY: Duration = Duration::from_millis(50);

/// Longest wait between two resends
const MAX_RESEND_DELAY: Duration = Duration::from_secs(5);

/// Puts every movie into the table in batches of [MAX_BATCH_WRITE_ITEMS]
#[tracing::instrument(skip(client, movies), fields(movie_count=movies.len()))]
pub(in crate::service::dynamodb) async fn batch_put_movies(
    client: &Client,
    table: &str,
    movies: &[MovieRecord],
) -> anyhow::Result<()> {
    for (index, batch) in put_request_batches(movies)?.into_iter().enumerate() {
        tracing::trace!(batch = index, size = batch.len(), "writing batch");
        write_batch(client, table, batch).await?;
    }

    Ok(())
}

/// Sends one batch, resending whatever dynamodb reports back as unprocessed until nothing is left.
/// Resends back off exponentially; the lambda timeout bounds how long a throttled table is retried.
async fn write_batch(
    client: &Client,
    table: &str,
    requests: Vec<WriteRequest>,
) -> anyhow::Result<()> {
    let mut pending = HashMap::from([(table.to_string(), requests)]);
    let mut delay = INITIAL_RESEND_DELAY;
    let mut attempt: usize = 0;

    loop {
        attempt += 1;
        let output = client
            .batch_write_item()
            .set_request_items(Some(pending))
            .send()
            .await
            .context("could not batch write items, dynamodb")?;

        match output.unprocessed_items {
            Some(unprocessed) if unprocessed.values().any(|requests| !requests.is_empty()) => {
                tracing::warn!(
                    attempt,
                    unprocessed = unprocessed.values().map(Vec::len).sum::<usize>(),
                    delay_ms = delay.as_millis() as u64,
                    "resubmitting unprocessed items"
                );
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(MAX_RESEND_DELAY);
                pending = unprocessed;
            }
            _ => return Ok(()),
        }
    }
}

fn put_request_batches(movies: &[MovieRecord]) -> anyhow::Result<Vec<Vec<WriteRequest>>> {
    movies
        .chunks(MAX_BATCH_WRITE_ITEMS)
        .map(|chunk| chunk.iter().map(put_request).collect::<anyhow::Result<Vec<_>>>())
        .collect()
}

fn put_request(movie: &MovieRecord) -> anyhow::Result<WriteRequest> {
    let item: Item = serde_dynamo::to_item(movie).context("failed to convert movie record")?;
    let put = PutRequest::builder()
        .set_item(Some(item.into()))
        .build()
        .context("could not build put request")?;

    Ok(WriteRequest::builder().put_request(put).build())
}
