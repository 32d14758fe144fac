pub mod database;
pub mod time;
pub mod types;

pub use database::DatabaseLogger;
pub use types::{NewRequestLog, RequestLog};
