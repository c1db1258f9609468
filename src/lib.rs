pub mod collector;
pub mod config;
pub mod error;
pub mod export;
pub mod github;
pub mod models;
pub mod projects;
pub mod transform;

pub use collector::{Collector, CollectorConfig};
pub use config::Config;
pub use error::{Error, Result};
pub use github::GitHubClient;
