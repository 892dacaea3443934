use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

/// Public liveness greeting.
pub async fn hello() -> ApiSuccess<HelloResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HelloResponseData {
            message: "Hello, World!".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelloResponseData {
    pub message: String,
}
