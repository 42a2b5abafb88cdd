mod batch_write;

use aws_sdk_dynamodb as dynamodb;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

use crate::model::MovieRecord;

#[cfg(test)]
pub use MockMoviesTableClient as MoviesTable;
#[cfg(not(test))]
pub use MoviesTableClient as MoviesTable;

#[derive(Clone, Debug)]
pub struct MoviesTableClient {
    /// Inner dynamodb client
    inner: dynamodb::Client,
    /// Movies table name
    table: String,
}

#[cfg_attr(test, automock)]
impl MoviesTableClient {
    pub fn new(inner: dynamodb::Client, table: &str) -> Self {
        Self {
            inner,
            table: table.to_string(),
        }
    }

    /// Writes every movie to the table, one put request per movie.
    /// Requests are batched and unprocessed items resubmitted, but the write as a whole is not
    /// atomic: movies from earlier batches stay written if a later batch fails.
    #[tracing::instrument(skip_all)]
    pub async fn put_movies(&self, movies: Vec<MovieRecord>) -> anyhow::Result<()> {
        batch_write::batch_put_movies(&self.inner, &self.table, &movies).await
    }
}
