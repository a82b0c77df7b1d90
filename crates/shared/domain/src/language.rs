//! Language domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::ProficiencyLevel;

/// A language offered for study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub name: String,
    /// ISO-like language code ("sw", "yo")
    pub code: String,
    /// Free-text geographic classification ("East Africa")
    pub region: String,
    pub is_active: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro_video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub speaker_count: u64,
    pub difficulty: ProficiencyLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Language {
    /// Case-insensitive substring match on name, description or region.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.region]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swahili() -> Language {
        let now = Utc::now();
        Language {
            id: "3".to_string(),
            name: "Swahili".to_string(),
            code: "sw".to_string(),
            region: "East Africa".to_string(),
            is_active: true,
            description: "Lingua franca of the Great Lakes".to_string(),
            intro_video_url: None,
            icon_url: None,
            speaker_count: 15_000_000,
            difficulty: ProficiencyLevel::Beginner,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_matches_any_text_field() {
        let language = swahili();
        assert!(language.matches_query("swa"));
        assert!(language.matches_query("great lakes"));
        assert!(language.matches_query("east"));
        assert!(!language.matches_query("zulu"));
    }

    #[test]
    fn test_serializes_camel_case_and_skips_missing_urls() {
        let json = serde_json::to_value(swahili()).unwrap();
        assert_eq!(json["speakerCount"], 15_000_000);
        assert_eq!(json["isActive"], true);
        assert!(json.get("iconUrl").is_none());
    }
}
