use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub output_dir: String,
    pub aggregate_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        let output_dir = env::var("OUTPUT_DIR").unwrap_or_else(|_| ".".to_string());

        let aggregate_file =
            env::var("AGGREGATE_FILE").unwrap_or_else(|_| "github_issues1.csv".to_string());

        Ok(Self {
            github_token,
            output_dir,
            aggregate_file,
        })
    }
}
