use crate::db::schema::{ensure_log_table, ensure_storage_table};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database. Idempotent: safe to run on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_storage_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
