//! Flat key-value store backed by a single SQLite table.
//!
//! Values are plain text; typed callers go through the JSON helpers. Writes are
//! last-write-wins with no transaction spanning several keys.

use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::TrackerResult;

pub const USER_DATA: &str = "userData";
pub const PERIOD_HISTORY: &str = "periodHistory";
pub const TEMPERATURE_DATA: &str = "temperatureData";
pub const WEIGHT_DATA: &str = "weightData";
pub const DARK_MODE: &str = "darkMode";
pub const DAILY_LOG_PREFIX: &str = "dailyLog-";

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if needed) the database behind `url` and migrates it.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        let store = Self::new(pool);
        store.run_migrations().await?;
        Ok(store)
    }

    /// A private in-memory database. One connection, since every SQLite memory
    /// connection is its own database.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let store = Self::new(pool);
        store.run_migrations().await?;
        Ok(store)
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub async fn get_raw(&self, key: &str) -> TrackerResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    pub async fn set_raw(&self, key: &str, value: &str) -> TrackerResult<()> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn contains(&self, key: &str) -> TrackerResult<bool> {
        Ok(self.get_raw(key).await?.is_some())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> TrackerResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> TrackerResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw).await
    }

    /// All entries whose key starts with `prefix`, ordered by key.
    pub async fn scan_prefix(&self, prefix: &str) -> TrackerResult<Vec<(String, String)>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT key, value FROM kv WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key",
        )
        .bind(prefix)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

pub fn daily_log_key(date: chrono::NaiveDate) -> String {
    format!("{}{}", DAILY_LOG_PREFIX, date.format("%Y-%m-%d"))
}
