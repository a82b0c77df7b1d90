//! Per-user learning progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress in a single language.
///
/// `progress` is a 0–1 fraction by convention; it is not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LanguageProgress {
    pub language_id: String,
    pub progress: f64,
    pub xp_earned: u32,
    /// Consecutive days with activity
    pub streak: u32,
    pub last_activity: DateTime<Utc>,
}

/// All language progress for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: String,
    pub languages: Vec<LanguageProgress>,
}

impl UserProgress {
    /// Record for a user with no tracked languages
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            languages: Vec::new(),
        }
    }

    /// Sum of XP across all languages
    pub fn total_xp(&self) -> u64 {
        self.languages.iter().map(|l| u64::from(l.xp_earned)).sum()
    }

    /// Longest active streak across languages
    pub fn best_streak(&self) -> u32 {
        self.languages.iter().map(|l| l.streak).max().unwrap_or(0)
    }
}
