// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::news::source::SourceError;

/// 应用错误类型
///
/// 封装聚合过程中产生的领域错误，提供统一的HTTP错误响应
#[derive(Debug)]
pub struct AppError(SourceError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SourceError::Transport(_) | SourceError::Status(_) | SourceError::Timeout => {
                StatusCode::BAD_GATEWAY
            }
            SourceError::PageMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        Self(err)
    }
}
