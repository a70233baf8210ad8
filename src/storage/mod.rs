// storage/mod.rs — SQLite pool bootstrap and schema.

use anyhow::{Context as _, Result};
use sqlx::{sqlite::SqliteConnectOptions, ConnectOptions, SqlitePool};
use std::{path::Path, str::FromStr};

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub async fn new(data_dir: &Path) -> Result<Self> {
        Self::new_with_slow_query(data_dir, 0).await
    }

    /// Open the pool with slow-statement logging: statements that run longer
    /// than `slow_query_ms` milliseconds log at WARN. 0 turns the logging off.
    pub async fn new_with_slow_query(data_dir: &Path, slow_query_ms: u64) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        let db_path = data_dir.join("taskd.db");
        let mut opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .create_if_missing(true);

        if slow_query_ms > 0 {
            opts = opts.log_slow_statements(
                log::LevelFilter::Warn,
                std::time::Duration::from_millis(slow_query_ms),
            );
        }

        let pool = SqlitePool::connect_with(opts).await?;
        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    /// In-memory database with the full schema. Used by unit tests.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePool::connect(":memory:").await?;
        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    /// Clone of the shared pool, handed to [`TaskStore`](crate::tasks::TaskStore)
    /// so the service and the schema bootstrap use the same connections.
    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// Idempotent schema pass, run at every startup.
    async fn migrate(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id          TEXT PRIMARY KEY,
                title       TEXT NOT NULL,
                description TEXT,
                completed   BOOLEAN NOT NULL DEFAULT FALSE,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_tasks_created ON tasks(created_at DESC);
            "#,
        )
        .execute(pool)
        .await
        .context("Creating tasks table")?;
        Ok(())
    }
}
