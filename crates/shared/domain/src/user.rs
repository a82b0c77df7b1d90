//! User domain entity and related types.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_CONTRIBUTOR, ROLE_STUDENT, ROLE_TEACHER, VALID_ROLES};
use crate::error::DomainError;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
    Contributor,
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_STUDENT => Ok(UserRole::Student),
            ROLE_TEACHER => Ok(UserRole::Teacher),
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_CONTRIBUTOR => Ok(UserRole::Contributor),
            other => Err(DomainError::validation(format!(
                "Invalid role '{}'. Must be one of: {}",
                other,
                VALID_ROLES.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            UserRole::Student => ROLE_STUDENT,
            UserRole::Teacher => ROLE_TEACHER,
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Contributor => ROLE_CONTRIBUTOR,
        };
        f.write_str(role)
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub full_name: String,
    /// Locale code of the interface language ("en", "sw-KE")
    pub preferred_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Shallow-merge a preferences patch and stamp a new `updated_at`.
    pub fn apply_preferences(&mut self, patch: UserPreferences) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = Some(phone_number);
        }
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(preferred_language) = patch.preferred_language {
            self.preferred_language = preferred_language;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(region) = patch.region {
            self.region = Some(region);
        }
        self.touch();
    }

    /// Advance `updated_at`, strictly past its previous value even when
    /// the clock has not moved.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::milliseconds(1)
        };
    }
}

/// Partial user update. Absent fields are left untouched.
///
/// Identity, role and timestamps are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl UserPreferences {
    /// True when the patch would change nothing but the timestamp
    pub fn is_empty(&self) -> bool {
        self == &UserPreferences::default()
    }
}
