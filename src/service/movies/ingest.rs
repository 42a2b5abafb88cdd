use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::tracing::{self, Instrument, Level};

use crate::{
    context::Context,
    model::{IngestError, ObjectLocation},
    service,
};

/// What a successful ingest wrote
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    /// Number of csv objects processed
    pub objects: usize,
    /// Number of movies written across all objects
    pub movies: usize,
}

/// Processes every record of the event in order.
///
/// Stops at the first failure. Movies written for earlier records are not rolled back.
#[tracing::instrument(skip_all, fields(record_count=event.records.len()))]
pub async fn ingest(ctx: &Context, event: &S3Event) -> Result<IngestSummary, IngestError> {
    let mut summary = IngestSummary::default();

    for record in &event.records {
        let location = ObjectLocation::from_s3_record(record)?;
        let span = tracing::span!(Level::TRACE, "process_record", bucket=%location.bucket, key=%location.key);

        match service::movies::process(ctx, &location)
            .instrument(span)
            .await
        {
            Ok(movie_count) => {
                summary.objects += 1;
                summary.movies += movie_count;
            }
            Err(err) => {
                tracing::error!(
                    error=?err,
                    bucket=%location.bucket,
                    key=%location.key,
                    "error getting object from bucket"
                );
                return Err(err);
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::{
        service::{dynamodb::MoviesTable, s3::S3},
        test_support::{mock_context, s3_event},
    };

    const CSV: &[u8] = b"Year,Title,Length,Subject,Actor,Actress,Director,Popularity,Awards,Image\n\
        1941,Citizen Kane,119,Drama,\"Welles, Orson\",,\"Welles, Orson\",,,\n";

    #[tokio::test]
    async fn fetches_each_object_once_in_order() {
        let keys = ["a.csv", "b.csv", "c.csv"];
        let mut seq = Sequence::new();
        let mut s3 = S3::default();
        for key in keys {
            s3.expect_get_object_bytes()
                .with(eq("movies-bucket"), eq(key))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(CSV.to_vec()));
        }
        let mut table = MoviesTable::default();
        table
            .expect_put_movies()
            .withf(|movies| movies.len() == 1 && movies[0].title == "Citizen Kane")
            .times(3)
            .returning(|_| Ok(()));

        let ctx = mock_context(s3, table);
        let event = s3_event(&[
            ("movies-bucket", "a.csv"),
            ("movies-bucket", "b.csv"),
            ("movies-bucket", "c.csv"),
        ]);

        let summary = ingest(&ctx, &event).await.expect("ingest should succeed");

        assert_eq!(
            summary,
            IngestSummary {
                objects: 3,
                movies: 3
            }
        );
    }

    #[tokio::test]
    async fn failed_fetch_stops_remaining_records() {
        let mut seq = Sequence::new();
        let mut s3 = S3::default();
        s3.expect_get_object_bytes()
            .with(eq("movies-bucket"), eq("first.csv"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(CSV.to_vec()));
        s3.expect_get_object_bytes()
            .with(eq("movies-bucket"), eq("missing.csv"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(anyhow::anyhow!("NoSuchKey")));
        s3.expect_get_object_bytes()
            .with(eq("movies-bucket"), eq("last.csv"))
            .never();
        let mut table = MoviesTable::default();
        table.expect_put_movies().times(1).returning(|_| Ok(()));

        let ctx = mock_context(s3, table);
        let event = s3_event(&[
            ("movies-bucket", "first.csv"),
            ("movies-bucket", "missing.csv"),
            ("movies-bucket", "last.csv"),
        ]);

        let err = ingest(&ctx, &event).await.unwrap_err();

        assert!(matches!(err, IngestError::Fetch { key, .. } if key == "missing.csv"));
    }

    #[tokio::test]
    async fn encoded_keys_are_fetched_decoded() {
        let mut s3 = S3::default();
        s3.expect_get_object_bytes()
            .with(eq("movies-bucket"), eq("new releases/2024 (final).csv"))
            .times(1)
            .returning(|_, _| Ok(CSV.to_vec()));
        let mut table = MoviesTable::default();
        table.expect_put_movies().times(1).returning(|_| Ok(()));

        let ctx = mock_context(s3, table);
        let event = s3_event(&[("movies-bucket", "new+releases/2024+%28final%29.csv")]);

        let summary = ingest(&ctx, &event).await.expect("ingest should succeed");

        assert_eq!(summary.objects, 1);
    }

    #[tokio::test]
    async fn empty_event_does_nothing() {
        let mut s3 = S3::default();
        s3.expect_get_object_bytes().never();
        let mut table = MoviesTable::default();
        table.expect_put_movies().never();

        let ctx = mock_context(s3, table);

        let summary = ingest(&ctx, &s3_event(&[]))
            .await
            .expect("ingest should succeed");

        assert_eq!(summary, IngestSummary::default());
    }
}
