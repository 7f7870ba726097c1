//! # タスク API ハンドラ
//!
//! タスクの一覧・追加・削除エンドポイントを実装する。
//!
//! タスクは呼び出し元が与えた JSON 値をそのまま保持し、
//! 位置インデックスでのみ識別される。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;

use crate::{AppState, error::ApiError};

/// 成功メッセージレスポンス
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// タスク一覧を取得する
///
/// ## エンドポイント
/// GET /tasks
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let board = state.board()?;
    Ok(Json(Value::Array(board.list().to_vec())))
}

/// タスクを追加する
///
/// 任意の JSON 値を検証なしで末尾に追加する。
///
/// ## エンドポイント
/// POST /tasks
pub async fn add_task(
    State(state): State<Arc<AppState>>,
    Json(task): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let mut board = state.board()?;
    board.add(task);
    tracing::debug!(total = board.len(), "タスクを追加しました");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Task added successfully!",
        }),
    ))
}

/// タスクを削除する
///
/// 範囲外インデックスは 404 を返し、状態は変更されない。
///
/// ## エンドポイント
/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut board = state.board()?;
    board.remove(id)?;
    tracing::debug!(index = id, remaining = board.len(), "タスクを削除しました");

    Ok(Json(MessageResponse {
        message: "Task deleted successfully!",
    }))
}
