//! In-memory store owned by the service container.
//!
//! Each entity lives in its own [`Table`], an ordered list of rows guarded by
//! an async `RwLock`. Row order is insertion order, so "first N" queries are
//! stable across calls.

use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{Course, Language, User, UserProgress};

use super::fixtures;

/// A row addressable by a unique string key.
pub trait Record: Clone + Send + Sync {
    fn key(&self) -> &str;
}

impl Record for Language {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Record for Course {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Record for User {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Record for UserProgress {
    fn key(&self) -> &str {
        &self.user_id
    }
}

/// Ordered collection of records with unique keys.
pub struct Table<T> {
    name: &'static str,
    rows: RwLock<Vec<T>>,
}

impl<T: Record> Table<T> {
    /// Create an empty table.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Build a table from initial rows, rejecting duplicate keys.
    pub fn from_rows(name: &'static str, rows: Vec<T>) -> AppResult<Self> {
        for (i, row) in rows.iter().enumerate() {
            if rows[..i].iter().any(|r| r.key() == row.key()) {
                return Err(AppError::conflict(format!("{} {}", name, row.key())));
            }
        }

        Ok(Self {
            name,
            rows: RwLock::new(rows),
        })
    }

    /// Table name used in logs and errors
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append a row. Fails with `Conflict` if the key is taken.
    pub async fn insert(&self, row: T) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.key() == row.key()) {
            return Err(AppError::conflict(format!("{} {}", self.name, row.key())));
        }
        rows.push(row);
        Ok(())
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    /// Linear lookup by key.
    pub async fn find(&self, key: &str) -> Option<T> {
        self.rows
            .read()
            .await
            .iter()
            .find(|r| r.key() == key)
            .cloned()
    }

    /// Rows matching `predicate`, in table order.
    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|&r| predicate(r))
            .cloned()
            .collect()
    }

    /// Up to `limit` rows from the front of the table.
    pub async fn take(&self, limit: usize) -> Vec<T> {
        self.rows.read().await.iter().take(limit).cloned().collect()
    }

    /// Mutate the row with `key` in place and return its new value.
    ///
    /// The write lock is held for the whole read-modify-write, so concurrent
    /// updates to the same row are serialized.
    pub async fn update<F>(&self, key: &str, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T) + Send,
    {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|r| r.key() == key)?;
        apply(&mut *row);
        Some(row.clone())
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// All tables backing the in-memory repositories.
pub struct MemoryStore {
    pub languages: Table<Language>,
    pub courses: Table<Course>,
    pub users: Table<User>,
    pub progress: Table<UserProgress>,
}

impl MemoryStore {
    /// Store with no rows.
    pub fn empty() -> Self {
        Self {
            languages: Table::new("Language"),
            courses: Table::new("Course"),
            users: Table::new("User"),
            progress: Table::new("Progress"),
        }
    }

    /// Store loaded with the demo fixtures.
    pub fn seeded() -> AppResult<Self> {
        let store = Self {
            languages: Table::from_rows("Language", fixtures::languages())?,
            courses: Table::from_rows("Course", fixtures::courses())?,
            users: Table::from_rows("User", fixtures::users())?,
            progress: Table::from_rows("Progress", fixtures::progress())?,
        };
        tracing::debug!("In-memory store seeded with demo fixtures");
        Ok(store)
    }
}
