use std::{fmt::Display, str::FromStr};

use anyhow::Context;
use thiserror::Error;

/// The configuration parameters for the lambda.
///
/// These are pulled from environment variables, which the lambda definition populates
/// at deploy time. See `.env.sample` for local development.
#[derive(Debug, Clone)]
pub struct Config {
    /// The dynamodb table the parsed movies are written to
    pub movies_table: String,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn new(movies_table: &str, environment: Environment) -> Self {
        Config {
            movies_table: movies_table.to_string(),
            environment,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let movies_table = std::env::var("AWS_MOVIES_TABLE_NAME")
            .context("AWS_MOVIES_TABLE_NAME must be provided")?;
        Ok(Config::new(movies_table.as_str(), Environment::new_or_prod()))
    }
}

/// The current environment the lambda is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// Running on localhost, e.g. through `cargo lambda watch`
    Local,
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl Environment {
    /// Attempt to construct a new [Environment] from the `ENVIRONMENT` variable
    pub fn new_from_env() -> anyhow::Result<Self> {
        let value = std::env::var("ENVIRONMENT").context("ENVIRONMENT is not set")?;
        Ok(Self::from_str(&value)?)
    }

    /// attempt to create a new [Environment] falling back to production if we fail to construct
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}
