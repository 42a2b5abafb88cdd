use anyhow::Context;
use aws_sdk_s3 as s3;
use lambda_runtime::tracing;

/// Gets the body of the given key from the bucket, collected into memory
#[tracing::instrument(skip(client))]
pub(in crate::service::s3) async fn get_object_bytes(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<Vec<u8>> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context(format!("could not get item {key} from bucket {bucket}"))?;

    let body = resp
        .body
        .collect()
        .await
        .context("could not collect body")?;
    Ok(body.into_bytes().to_vec())
}
