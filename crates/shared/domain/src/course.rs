//! Course domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::ProficiencyLevel;

/// A course teaching one language at one level.
///
/// `language_id` references a [`crate::Language`]; referential integrity is
/// the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub language_id: String,
    pub name: String,
    pub description: String,
    pub level: ProficiencyLevel,
    pub is_curriculum_aligned: bool,
    /// School grade this course maps to, only meaningful when aligned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum_grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub lesson_count: u32,
    pub estimated_hours: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// A grade is present only on curriculum-aligned courses.
    pub fn has_consistent_alignment(&self) -> bool {
        self.is_curriculum_aligned || self.curriculum_grade.is_none()
    }
}
