//! SQLite persistence for todo items.
//!
//! Query functions take a `&mut SqliteConnection` so a handler can check one
//! connection out of the pool and hold it for exactly one request.

use shared::TodoItem;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::SqliteConnection;
use std::str::FromStr;

use crate::config::DatabaseConfig;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS todos (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL,
    is_complete BOOLEAN NOT NULL DEFAULT 0
)";

/// Build the connection pool described by `config`.
///
/// An in-memory database only lives as long as its connection, so for those
/// URLs the pool is pinned to a single connection that is never reaped.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
    let mut pool = SqlitePoolOptions::new().acquire_timeout(config.acquire_timeout());

    if is_in_memory(&config.url) {
        pool = pool
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    } else {
        pool = pool.max_connections(config.max_connections);
    }

    pool.connect_with(options).await
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

/// All items in insertion order.
pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<TodoItem>, sqlx::Error> {
    sqlx::query_as::<_, TodoItem>("SELECT id, title, is_complete FROM todos ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

/// Insert `item` and return the id the store assigned. `item.id` is ignored.
pub async fn insert(conn: &mut SqliteConnection, item: &TodoItem) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO todos (title, is_complete) VALUES (?, ?)")
        .bind(&item.title)
        .bind(item.is_complete)
        .execute(&mut *conn)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Overwrite the completion flag of item `id`. Returns `false` if no such item.
pub async fn set_completion(
    conn: &mut SqliteConnection,
    id: i64,
    is_complete: bool,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE todos SET is_complete = ? WHERE id = ?")
        .bind(is_complete)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Remove item `id`. Returns `false` if no such item.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
