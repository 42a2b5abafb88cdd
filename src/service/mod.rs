pub mod dynamodb;
pub mod movies;
pub mod s3;
