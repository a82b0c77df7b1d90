//! Infrastructure layer - in-memory storage and its demo data.

pub mod fixtures;
mod store;

pub use store::{MemoryStore, Record, Table};
