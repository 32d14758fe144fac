use chrono::{DateTime, Utc};
use serde::Serialize;

/// 待写入的请求日志；id 与 timestamp 由存储在写入时分配
#[derive(Debug, Clone, PartialEq)]
pub struct NewRequestLog {
    pub api_key: String,
    pub model_used: String,
    pub tokens: u64,
    pub estimated_cost: f64,
    pub estimated_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestLog {
    pub id: i64,
    // 明文保存调用方凭证
    pub api_key: String,
    pub model_used: String,
    pub tokens: u64,
    pub estimated_cost: f64,
    pub estimated_savings: f64,
    pub timestamp: DateTime<Utc>,
}

impl RequestLog {
    pub fn from_new(id: i64, timestamp: DateTime<Utc>, entry: NewRequestLog) -> Self {
        Self {
            id,
            api_key: entry.api_key,
            model_used: entry.model_used,
            tokens: entry.tokens,
            estimated_cost: entry.estimated_cost,
            estimated_savings: entry.estimated_savings,
            timestamp,
        }
    }
}
