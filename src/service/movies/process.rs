use lambda_runtime::tracing;

use crate::{
    context::Context,
    model::{IngestError, ObjectLocation},
    service,
};

/// Fetches one csv object, parses it, and writes every movie in it to the movies table.
/// Returns the number of movies written.
#[tracing::instrument(skip(ctx, location), fields(bucket=%location.bucket, key=%location.key))]
pub async fn process(ctx: &Context, location: &ObjectLocation) -> Result<usize, IngestError> {
    let body = ctx
        .s3_client
        .get_object_bytes(&location.bucket, &location.key)
        .await
        .map_err(|source| IngestError::Fetch {
            bucket: location.bucket.clone(),
            key: location.key.clone(),
            source,
        })?;
    tracing::trace!(size = body.len(), "object retrieved");

    let movies = service::movies::parse_movies_csv(&body)?;
    let movie_count = movies.len();

    let table = ctx.config.movies_table.as_str();
    tracing::info!(table, "writing to dynamodb");
    ctx.movies_table
        .put_movies(movies)
        .await
        .map_err(|source| IngestError::Write {
            table: table.to_string(),
            source,
        })?;
    tracing::info!(table, movie_count, "finished writing");

    Ok(movie_count)
}
