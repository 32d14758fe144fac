use crate::error::GatewayError;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc};

/// 当前 UTC 时间，截断到微秒，与数据库中保存的精度一致
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// 将 UTC 时间转换为 ISO-8601 / RFC3339（UTC, `Z`，微秒精度）
pub fn to_iso8601_utc_string(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// 解析时间字符串为 UTC：
/// - 优先 RFC3339 / ISO-8601（带时区偏移或 `Z`）
/// - 兼容无时区的 `YYYY-MM-DD HH:mm:ss(.f)?`，按 UTC 解释
pub fn parse_datetime_string(s: &str) -> crate::error::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(GatewayError::TimeParse(format!("unrecognized timestamp: {}", s)))
}

// tracing_subscriber 自定义时间格式：输出 UTC，与数据库一致
pub struct UtcTimer;

impl tracing_subscriber::fmt::time::FormatTime for UtcTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", to_iso8601_utc_string(&Utc::now()))
    }
}
