use thiserror::Error;

/// Every way ingesting a notification can fail.
///
/// None of these are recovered from: the handler logs the error and returns it, which stops
/// processing of the remaining notifications in the event.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The notification record did not name a bucket or an object key
    #[error("notification record is missing {0}")]
    MalformedNotification(&'static str),

    /// The url-encoded object key did not decode to valid utf-8
    #[error("object key {key} is not valid utf-8 once decoded")]
    InvalidKey {
        key: String,
        source: std::string::FromUtf8Error,
    },

    #[error("could not get object {key} from bucket {bucket}")]
    Fetch {
        bucket: String,
        key: String,
        source: anyhow::Error,
    },

    #[error("object body is not valid utf-8")]
    Decode(#[from] std::str::Utf8Error),

    #[error("could not read csv: {0}")]
    Csv(#[from] csv::Error),

    /// A column the movie record needs is not in the header, or the row is too short to hold it
    #[error("line {line} is missing the {field} field")]
    MissingField { line: u64, field: &'static str },

    #[error("line {line} has a non-numeric {field} value {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("could not write movies to table {table}")]
    Write { table: String, source: anyhow::Error },
}
