//! Domain-level constants.
//!
//! These constants define the closed value sets and query defaults
//! shared by every layer.

// =============================================================================
// Proficiency Levels
// =============================================================================

pub const LEVEL_BEGINNER: &str = "beginner";

pub const LEVEL_INTERMEDIATE: &str = "intermediate";

pub const LEVEL_ADVANCED: &str = "advanced";

/// All valid level values (language difficulty and course level)
pub const VALID_LEVELS: &[&str] = &[LEVEL_BEGINNER, LEVEL_INTERMEDIATE, LEVEL_ADVANCED];

// =============================================================================
// User Roles
// =============================================================================

/// Default role for learners
pub const ROLE_STUDENT: &str = "student";

pub const ROLE_TEACHER: &str = "teacher";

pub const ROLE_ADMIN: &str = "admin";

/// Community members who contribute lesson content
pub const ROLE_CONTRIBUTOR: &str = "contributor";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_STUDENT, ROLE_TEACHER, ROLE_ADMIN, ROLE_CONTRIBUTOR];

// =============================================================================
// Query Defaults
// =============================================================================

/// Number of languages returned by the popularity ranking when no limit is given
pub const DEFAULT_POPULAR_LIMIT: usize = 5;

/// Size of the recommended course prefix
pub const DEFAULT_RECOMMENDED_LIMIT: usize = 3;
