//! Configuration management for Lambda functions.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the static worker roster file
    pub worker_list_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            worker_list_path: env::var("WORKER_LIST_PATH")
                .unwrap_or_else(|_| "data/worker_list.json".to_string()),
        }
    }
}
