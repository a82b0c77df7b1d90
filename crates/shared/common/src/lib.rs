//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling with HTTP response mapping
//! - Configuration structures and env helpers

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
