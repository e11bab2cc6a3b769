use crate::config::Config;
use anyhow::{Context, Result};
use libsql::{Builder, Connection, Database as LibsqlDatabase};
use std::path::Path;

const SCHEMA: &str = include_str!("schema/snippets.sql");

pub struct Database {
    _db: LibsqlDatabase,
    conn: Connection,
}

impl Database {
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub async fn new(cfg: &Config) -> Result<Self> {
        let path = cfg.database_path();
        tracing::info!(path = ?path, "[db] opening local database");
        Self::open(&path).await
    }

    /// Opens (or creates) the database at `path` and makes sure the
    /// `snippets` table exists. `:memory:` gives a private in-memory store.
    pub async fn open(path: &Path) -> Result<Self> {
        let db = Builder::new_local(path)
            .build()
            .await
            .with_context(|| format!("failed to open database {}", path.display()))?;

        let conn = db.connect()?;
        conn.query("SELECT 1", ()).await?;

        conn.execute_batch(SCHEMA)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bootstrap snippets schema: {e}"))?;
        tracing::debug!("snippets schema ready");

        Ok(Database { _db: db, conn })
    }

    pub async fn open_in_memory() -> Result<Self> {
        Self::open(Path::new(":memory:")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_schema_bootstrap_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snippets.db");

        {
            let db = Database::open(&path).await.unwrap();
            db.connection()
                .execute(
                    "INSERT INTO snippets (title, content, created, expires) VALUES ('a', 'b', DATETIME('now'), DATETIME('now', '+1 days'))",
                    (),
                )
                .await
                .unwrap();
        }

        let db = Database::open(&path).await.unwrap();
        let mut rows = db.connection().query("SELECT COUNT(*) FROM snippets", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_open_in_memory() {
        let db = Database::open_in_memory().await.unwrap();
        let mut rows = db
            .connection()
            .query("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'snippets'", ())
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }
}
