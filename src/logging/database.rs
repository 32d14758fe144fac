use rusqlite::{Connection, Row, types::Type};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result as AppResult;
use crate::logging::time::{now_utc, parse_datetime_string, to_iso8601_utc_string};
use crate::logging::types::{NewRequestLog, RequestLog};

/// SQLite-backed append-only request log.
///
/// A single connection sits behind an async mutex, so appends are serialized
/// and every row gets a distinct, increasing id.
#[derive(Clone)]
pub struct DatabaseLogger {
    connection: Arc<Mutex<Connection>>,
}

impl DatabaseLogger {
    pub async fn new(database_path: &str) -> AppResult<Self> {
        // 确保数据库文件的目录存在
        if let Some(parent) = Path::new(database_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
                tracing::info!("Created database directory: {}", parent.display());
            }
        }

        let conn = Connection::open(database_path)?;
        tracing::info!("Database initialized at: {}", database_path);

        conn.execute(
            "CREATE TABLE IF NOT EXISTS requests (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                api_key TEXT NOT NULL,
                model_used TEXT NOT NULL,
                tokens INTEGER NOT NULL,
                estimated_cost REAL NOT NULL,
                estimated_savings REAL NOT NULL,
                timestamp TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// 写入一条日志：时间戳在此处分配，整条记录在单个事务中提交
    pub async fn append_request_log(&self, entry: NewRequestLog) -> rusqlite::Result<RequestLog> {
        let mut conn = self.connection.lock().await;
        let timestamp = now_utc();

        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO requests (
                api_key, model_used, tokens,
                estimated_cost, estimated_savings, timestamp
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                &entry.api_key,
                &entry.model_used,
                entry.tokens as i64,
                entry.estimated_cost,
                entry.estimated_savings,
                to_iso8601_utc_string(&timestamp),
            ),
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(RequestLog::from_new(id, timestamp, entry))
    }

    pub async fn list_request_logs(&self) -> rusqlite::Result<Vec<RequestLog>> {
        let conn = self.connection.lock().await;

        let mut stmt = conn.prepare(
            "SELECT id, api_key, model_used, tokens,
                    estimated_cost, estimated_savings, timestamp
             FROM requests
             ORDER BY id ASC",
        )?;

        let log_iter = stmt.query_map([], row_to_request_log)?;

        let mut logs = Vec::new();
        for log in log_iter {
            logs.push(log?);
        }

        Ok(logs)
    }
}

fn row_to_request_log(row: &Row<'_>) -> rusqlite::Result<RequestLog> {
    let raw_ts: String = row.get(6)?;
    let timestamp = parse_datetime_string(&raw_ts)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

    Ok(RequestLog {
        id: row.get(0)?,
        api_key: row.get(1)?,
        model_used: row.get(2)?,
        tokens: row.get::<_, i64>(3)?.max(0) as u64,
        estimated_cost: row.get(4)?,
        estimated_savings: row.get(5)?,
        timestamp,
    })
}
