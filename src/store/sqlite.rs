use super::Storage;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{kv_delete, kv_get, kv_set};
use crate::errors::AppResult;

/// Storage rows of one namespace in the `storage` table.
pub struct SqliteStorage {
    pool: DbPool,
    namespace: String,
}

impl SqliteStorage {
    pub const DEFAULT_NAMESPACE: &'static str = "ractivity";

    /// Wrap an open database, creating the tables if needed.
    pub fn new(pool: DbPool, namespace: &str) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            namespace: namespace.to_string(),
        })
    }

    pub fn open(path: &str, namespace: &str) -> AppResult<Self> {
        Self::new(DbPool::new(path)?, namespace)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        kv_get(&self.pool.conn, &self.namespace, key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        kv_set(&self.pool.conn, &self.namespace, key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        kv_delete(&self.pool.conn, &self.namespace, key)
    }
}
