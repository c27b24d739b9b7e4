use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub fn kv_get(conn: &Connection, namespace: &str, key: &str) -> AppResult<Option<String>> {
    let mut stmt =
        conn.prepare_cached("SELECT value FROM storage WHERE namespace = ?1 AND key = ?2")?;
    let value = stmt
        .query_row(params![namespace, key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

pub fn kv_set(conn: &Connection, namespace: &str, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO storage (namespace, key, value) VALUES (?1, ?2, ?3)
         ON CONFLICT(namespace, key) DO UPDATE SET value = excluded.value",
        params![namespace, key, value],
    )?;
    Ok(())
}

pub fn kv_delete(conn: &Connection, namespace: &str, key: &str) -> AppResult<()> {
    conn.execute(
        "DELETE FROM storage WHERE namespace = ?1 AND key = ?2",
        params![namespace, key],
    )?;
    Ok(())
}

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
