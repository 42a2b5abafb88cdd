//! Lambda that loads movie csv files dropped into s3 into a dynamodb table.

#![recursion_limit = "256"]

pub mod config;
pub mod context;
pub mod entrypoint;
pub mod handler;
pub mod model;
pub mod service;

#[cfg(test)]
mod test_support;
