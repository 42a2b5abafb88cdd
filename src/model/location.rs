use aws_lambda_events::event::s3::S3EventRecord;
use lambda_runtime::tracing;

use crate::model::IngestError;

/// The bucket and decoded key of an object named by an s3 notification
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: &str, key: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    }

    /// Pulls the bucket and key out of a notification record.
    /// S3 form-encodes object keys in notifications, so `my+movies%281%29.csv` is fetched as
    /// `my movies(1).csv`.
    #[tracing::instrument(skip(record), err)]
    pub fn from_s3_record(record: &S3EventRecord) -> Result<Self, IngestError> {
        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .ok_or(IngestError::MalformedNotification("s3.bucket.name"))?;
        let encoded_key = record
            .s3
            .object
            .key
            .as_deref()
            .ok_or(IngestError::MalformedNotification("s3.object.key"))?;

        Ok(Self::new(bucket, &decode_key(encoded_key)?))
    }
}

fn decode_key(encoded_key: &str) -> Result<String, IngestError> {
    let spaced = encoded_key.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|key| key.into_owned())
        .map_err(|source| IngestError::InvalidKey {
            key: encoded_key.to_string(),
            source,
        })
}
