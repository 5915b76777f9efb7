use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Opens (creating if missing) the SQLite database file and returns a pool.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database at {database_url}...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the `team_members` table if it does not exist. Never alters it.
///
/// AUTOINCREMENT keeps ids strictly increasing and never reused, even after
/// the highest row is gone.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS team_members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            project_management TEXT NOT NULL,
            public_speaking TEXT NOT NULL,
            ppt_development TEXT NOT NULL,
            database_management TEXT NOT NULL,
            coding TEXT NOT NULL,
            deployment TEXT NOT NULL,
            passion TEXT NOT NULL,
            recommended_role TEXT NOT NULL,
            explanation TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Schema ready (team_members)");
    Ok(())
}

/// Single-connection in-memory pool with the schema applied.
/// Each in-memory connection is its own database, so the pool must never
/// open a second one or recycle the first.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = test_pool().await;
        init_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'team_members'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_create_pool_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("team_selector.db");
        let url = format!("sqlite://{}", path.display());

        let pool = create_pool(&url).await.unwrap();
        init_schema(&pool).await.unwrap();
        pool.close().await;

        assert!(path.exists());
    }
}
