use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Unauthorized")]
    Unauthorized,

    // 保留 axum 的原始状态码（415 / 400 / 422）
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    // 选择器与价格表不同步；正常配置下不可达
    #[error("Model not found in pricing table: {0}")]
    UnknownModel(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Time parse error: {0}")]
    TimeParse(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::InvalidBody(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            GatewayError::Unauthorized => "Unauthorized".to_string(),
            GatewayError::InvalidBody(rejection) => rejection.body_text(),
            other => {
                // 内部错误只写日志，不把细节暴露给调用方
                tracing::error!("Request failed: {}", other);
                "Internal server error".to_string()
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
