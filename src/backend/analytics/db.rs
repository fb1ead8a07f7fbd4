/**
 * Counter Store
 *
 * SQLite persistence for counter records. One row per (kind, subject);
 * `record` is a single upsert statement so concurrent observations of the
 * same subject never create duplicates or lose increments.
 */

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::shared::{CounterRecord, SortOrder, SubjectKind};

/// Default store location, created on first start
pub const DEFAULT_DATABASE_URL: &str = "sqlite://searched_data.db?mode=rwc";

const CREATE_COUNTERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS counters (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        kind        TEXT    NOT NULL CHECK (kind IN ('keyword', 'page')),
        subject     TEXT    NOT NULL,
        count       INTEGER NOT NULL DEFAULT 1,
        observed_at TEXT    NOT NULL,
        UNIQUE (kind, subject)
    )
"#;

const CREATE_COUNT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_counters_count ON counters (count)";

/// Handle to the counter table
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CounterStore {
    pool: SqlitePool,
}

impl CounterStore {
    /// Open (or create) the store at `database_url` and ensure the schema
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        if database_url.contains(":memory:") {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Private in-memory store
    ///
    /// Every SQLite connection to `:memory:` opens a separate database, so the
    /// pool is pinned to one connection that is never recycled.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_COUNTERS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_COUNT_INDEX).execute(&self.pool).await?;
        tracing::debug!("Counter schema ready");
        Ok(())
    }

    /// Count one observation of `subject`
    ///
    /// Inserts the record with count 1 or increments the existing one, and
    /// returns the row as stored.
    pub async fn record(
        &self,
        kind: SubjectKind,
        subject: &str,
    ) -> Result<CounterRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, CounterRecord>(
            r#"
            INSERT INTO counters (kind, subject, count, observed_at)
            VALUES (?1, ?2, 1, ?3)
            ON CONFLICT (kind, subject) DO UPDATE SET
                count = counters.count + 1,
                observed_at = excluded.observed_at
            RETURNING id, kind, subject, count, observed_at
            "#,
        )
        .bind(kind)
        .bind(subject)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Look up a single record
    pub async fn find(
        &self,
        kind: SubjectKind,
        subject: &str,
    ) -> Result<Option<CounterRecord>, sqlx::Error> {
        sqlx::query_as::<_, CounterRecord>(
            r#"
            SELECT id, kind, subject, count, observed_at
            FROM counters
            WHERE kind = ?1 AND subject = ?2
            "#,
        )
        .bind(kind)
        .bind(subject)
        .fetch_optional(&self.pool)
        .await
    }

    /// Every record, sorted by count
    ///
    /// Ties keep insertion order.
    pub async fn ranked(&self, order: SortOrder) -> Result<Vec<CounterRecord>, sqlx::Error> {
        let sql = format!(
            "SELECT id, kind, subject, count, observed_at FROM counters ORDER BY count {}, id ASC",
            order.as_sql()
        );
        sqlx::query_as::<_, CounterRecord>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    /// The `limit` most observed records, highest count first
    pub async fn top(&self, limit: i64) -> Result<Vec<CounterRecord>, sqlx::Error> {
        sqlx::query_as::<_, CounterRecord>(
            r#"
            SELECT id, kind, subject, count, observed_at
            FROM counters
            ORDER BY count DESC, id ASC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
