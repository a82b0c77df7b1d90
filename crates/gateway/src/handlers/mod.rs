//! HTTP handlers.

pub mod course_handler;
pub mod health_handler;
pub mod language_handler;
pub mod user_handler;

pub use course_handler::{catalog_routes, course_routes};
pub use health_handler::health_routes;
pub use language_handler::language_routes;
pub use user_handler::user_routes;
