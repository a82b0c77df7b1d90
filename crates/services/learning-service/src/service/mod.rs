//! Service layer - query logic over the repositories.
//!
//! Each service holds its dependencies behind `Arc<dyn Trait>` so the
//! container can swap implementations.

mod catalog_service;
mod course_service;
mod language_service;
mod user_service;

pub use catalog_service::{CatalogManager, CatalogService, Dashboard, LanguageCourses};
pub use course_service::{CourseManager, CourseService};
pub use language_service::{LanguageManager, LanguageService};
pub use user_service::{UserManager, UserService};
