//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! エラーレスポンスは `{"error": "..."}` 形式の JSON で返す。
//! 内部エラーの詳細はログにのみ出力し、クライアントには漏らさない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kajiflow_domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// API 層で発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
    /// タスクが見つからない（404 Not Found）
    #[error("タスクが見つかりません")]
    TaskNotFound,

    /// リクエストボディに必須フィールドが無い（400 Bad Request）
    #[error("必須フィールドがありません: {0}")]
    MissingField(&'static str),

    /// リクエストボディが JSON として解釈できない（400 Bad Request）
    #[error("リクエストボディが不正です")]
    InvalidBody,

    /// 内部サーバーエラー（500 Internal Server Error）
    #[error("内部サーバーエラー")]
    Internal(#[from] anyhow::Error),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::TaskNotFound { .. } => ApiError::TaskNotFound,
        }
    }
}

/// エラーレスポンスボディ
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::TaskNotFound => (StatusCode::NOT_FOUND, "Task not found!".to_string()),
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {field}"),
            ),
            ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                "Request body must be valid JSON".to_string(),
            ),
            ApiError::Internal(err) => {
                // 内部エラー詳細はログのみ
                tracing::error!("内部エラー: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_タスク未検出エラーは404になる() {
        let response = ApiError::TaskNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_必須フィールド欠落エラーは400になる() {
        let response = ApiError::MissingField("user").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ドメインエラーからの変換() {
        let err: ApiError = DomainError::TaskNotFound { index: 3 }.into();
        assert!(matches!(err, ApiError::TaskNotFound));
    }
}
