use std::future::Future;
use std::pin::Pin;

use crate::logging::{DatabaseLogger, NewRequestLog, RequestLog};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

// 请求日志存储抽象（只追加；可由 SQLite、Postgres 等实现）
pub trait RequestLogStore: Send + Sync {
    /// 分配 id 与创建时间并持久化；要么整条写入，要么返回错误
    fn append<'a>(&'a self, entry: NewRequestLog) -> BoxFuture<'a, rusqlite::Result<RequestLog>>;
    /// 按主键顺序返回全部日志
    fn list_all<'a>(&'a self) -> BoxFuture<'a, rusqlite::Result<Vec<RequestLog>>>;
}

// DatabaseLogger 作为默认实现
impl RequestLogStore for DatabaseLogger {
    fn append<'a>(&'a self, entry: NewRequestLog) -> BoxFuture<'a, rusqlite::Result<RequestLog>> {
        Box::pin(async move { self.append_request_log(entry).await })
    }

    fn list_all<'a>(&'a self) -> BoxFuture<'a, rusqlite::Result<Vec<RequestLog>>> {
        Box::pin(async move { self.list_request_logs().await })
    }
}
