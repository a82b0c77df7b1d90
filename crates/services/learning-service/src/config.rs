//! Learning service configuration.

use common::env_or;
use domain::{DEFAULT_POPULAR_LIMIT, DEFAULT_RECOMMENDED_LIMIT};

/// Learning service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningServiceConfig {
    /// Number of courses returned as recommendations
    pub recommended_limit: usize,
    /// Default size of the popular-languages ranking
    pub popular_limit: usize,
}

impl LearningServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            recommended_limit: env_or("LEARNING_RECOMMENDED_LIMIT", DEFAULT_RECOMMENDED_LIMIT),
            popular_limit: env_or("LEARNING_POPULAR_LIMIT", DEFAULT_POPULAR_LIMIT),
        }
    }
}

impl Default for LearningServiceConfig {
    fn default() -> Self {
        Self {
            recommended_limit: DEFAULT_RECOMMENDED_LIMIT,
            popular_limit: DEFAULT_POPULAR_LIMIT,
        }
    }
}
