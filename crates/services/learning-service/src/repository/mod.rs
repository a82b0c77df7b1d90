//! Repository layer for data access.
//!
//! Each repository is a trait with one in-memory implementation over
//! [`crate::infra::MemoryStore`]. A database- or API-backed implementation
//! can replace it without touching the services.

mod course_repository;
mod language_repository;
mod user_repository;

pub use course_repository::{CourseRepository, InMemoryCourseRepository};
pub use language_repository::{InMemoryLanguageRepository, LanguageRepository};
pub use user_repository::{InMemoryUserRepository, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use language_repository::MockLanguageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
