//! Storage port: a namespaced key → JSON text store.
//!
//! The state container only talks to this trait, so the core can be driven
//! against SQLite in the CLI and against memory in tests.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::errors::AppResult;

/// A value about to be written back. `Absent` removes the key.
#[derive(Debug, Clone, PartialEq)]
pub enum Persisted<T> {
    Present(T),
    Absent,
}

pub trait Storage {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Serialize and write `value`, or remove the key when absent.
    fn put<T: serde::Serialize>(&mut self, key: &str, value: Persisted<&T>) -> AppResult<()>
    where
        Self: Sized,
    {
        match value {
            Persisted::Present(v) => {
                let json = serde_json::to_string(v)?;
                self.set(key, &json)
            }
            Persisted::Absent => self.remove(key),
        }
    }
}
