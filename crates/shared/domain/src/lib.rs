//! Domain layer - Core learning entities and value objects.
//!
//! This crate contains plain data records with no infrastructure dependencies.
//! Repositories, services and the gateway all exchange these types.

pub mod constants;
pub mod course;
pub mod error;
pub mod language;
pub mod level;
pub mod progress;
pub mod user;

pub use constants::*;
pub use course::Course;
pub use error::DomainError;
pub use language::Language;
pub use level::ProficiencyLevel;
pub use progress::{LanguageProgress, UserProgress};
pub use user::{User, UserPreferences, UserRole};
