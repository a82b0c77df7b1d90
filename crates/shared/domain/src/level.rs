//! Proficiency level shared by language difficulty and course level.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{LEVEL_ADVANCED, LEVEL_BEGINNER, LEVEL_INTERMEDIATE, VALID_LEVELS};
use crate::error::DomainError;

/// Three-step proficiency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => LEVEL_BEGINNER,
            ProficiencyLevel::Intermediate => LEVEL_INTERMEDIATE,
            ProficiencyLevel::Advanced => LEVEL_ADVANCED,
        }
    }
}

impl FromStr for ProficiencyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LEVEL_BEGINNER => Ok(ProficiencyLevel::Beginner),
            LEVEL_INTERMEDIATE => Ok(ProficiencyLevel::Intermediate),
            LEVEL_ADVANCED => Ok(ProficiencyLevel::Advanced),
            other => Err(DomainError::validation(format!(
                "Invalid level '{}'. Must be one of: {}",
                other,
                VALID_LEVELS.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_levels() {
        assert_eq!("beginner".parse(), Ok(ProficiencyLevel::Beginner));
        assert_eq!("advanced".parse(), Ok(ProficiencyLevel::Advanced));
    }

    #[test]
    fn test_rejects_unknown_level() {
        let err = "expert".parse::<ProficiencyLevel>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ProficiencyLevel::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
    }
}
