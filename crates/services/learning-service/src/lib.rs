//! Learning Service Library
//!
//! Data access for languages, courses and learners:
//!
//! - **infra**: the in-memory store and its demo fixtures
//! - **repository**: storage traits and their in-memory implementations
//! - **service**: query logic over the repositories
//! - **container**: wiring, the shared instance and parallel helpers
//!
//! ```ignore
//! let services = learning_service_lib::container::shared()?;
//! let swahili = services.languages().get_language("3").await?;
//! ```

pub mod config;
pub mod container;
pub mod infra;
pub mod repository;
pub mod service;

pub use config::LearningServiceConfig;
pub use container::{parallel, shared, ServiceContainer, Services};
pub use infra::MemoryStore;

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
