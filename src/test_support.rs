//! Builders for the s3 notifications and mocked collaborators used across the unit tests

use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use serde_json::{Value, json};

use crate::{
    config::{Config, Environment},
    context::Context,
};

/// A single `ObjectCreated:Put` record in the shape s3 delivers it
pub(crate) fn s3_record_json(bucket: Option<&str>, key: Option<&str>) -> Value {
    json!({
        "eventVersion": "2.1",
        "eventSource": "aws:s3",
        "awsRegion": "us-east-1",
        "eventTime": "2024-05-01T12:00:00.000Z",
        "eventName": "ObjectCreated:Put",
        "userIdentity": { "principalId": "AWS:EXAMPLE" },
        "requestParameters": { "sourceIPAddress": "127.0.0.1" },
        "responseElements": {
            "x-amz-request-id": "EXAMPLE123456789",
            "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
        },
        "s3": {
            "s3SchemaVersion": "1.0",
            "configurationId": "movies-upload",
            "bucket": {
                "name": bucket,
                "ownerIdentity": { "principalId": "EXAMPLE" },
                "arn": bucket.map(|name| format!("arn:aws:s3:::{name}"))
            },
            "object": {
                "key": key,
                "size": 1024,
                "eTag": "0123456789abcdef0123456789abcdef",
                "sequencer": "0A1B2C3D4E5F678901"
            }
        }
    })
}

/// An event holding one record per (bucket, key) pair, in order
pub(crate) fn s3_event(objects: &[(&str, &str)]) -> S3Event {
    let records: Vec<Value> = objects
        .iter()
        .map(|(bucket, key)| s3_record_json(Some(*bucket), Some(*key)))
        .collect();

    serde_json::from_value(json!({ "Records": records })).expect("valid s3 event")
}

/// A [Context] backed by the given mocked collaborators
pub(crate) fn mock_context(
    s3_client: crate::service::s3::S3,
    movies_table: crate::service::dynamodb::MoviesTable,
) -> Context {
    Context {
        s3_client: Arc::new(s3_client),
        movies_table: Arc::new(movies_table),
        config: Config::new("MoviesTable", Environment::Local),
    }
}
