use crate::core::{RawRecord, RecordSource};
use crate::utils::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::PathBuf;

const RECORD_QUERY: &str = "select app_id, data from record";

/// Reads the `record` table of the notification center database.
#[derive(Debug, Clone)]
pub struct SqliteRecordSource {
    db_path: PathBuf,
}

impl SqliteRecordSource {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    async fn connect(&self) -> Result<SqlitePool> {
        // 唯讀開啟，不會動到系統的通知資料庫
        let options = SqliteConnectOptions::new()
            .filename(&self.db_path)
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(pool)
    }
}

impl RecordSource for SqliteRecordSource {
    async fn fetch_records(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("Opening database at {}", self.db_path.display());
        let pool = self.connect().await?;

        let rows = sqlx::query(RECORD_QUERY).fetch_all(&pool).await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let app_id: i64 = row.try_get("app_id")?;
            // NULL payload 交給解碼階段略過
            let data: Option<Vec<u8>> = row.try_get("data")?;
            records.push(RawRecord {
                app_id,
                data: data.unwrap_or_default(),
            });
        }

        pool.close().await;
        Ok(records)
    }
}
