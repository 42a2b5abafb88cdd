use std::sync::Arc;

use crate::{config::Config, service};

/// The collaborators shared by every invocation of the lambda.
/// Built once at startup and cloned into each invocation.
#[derive(Clone)]
pub struct Context {
    pub s3_client: Arc<service::s3::S3>,
    pub movies_table: Arc<service::dynamodb::MoviesTable>,
    pub config: Config,
}
