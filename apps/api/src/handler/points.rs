//! # ポイント API ハンドラ
//!
//! ポイントの一覧・加算・リセットエンドポイントを実装する。
//!
//! ## リクエスト検証
//!
//! `POST /points` のボディは `user`（文字列）と `points`（整数）の
//! 存在を明示的に検証し、欠落は 400 の型付きエラーとして返す。

use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;
use serde_json::Value;

use crate::{AppState, error::ApiError, handler::task::MessageResponse};

/// リセットレスポンス
///
/// `winner` は台帳が空だった場合 `null` になる。
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
    pub winner:  Option<String>,
}

/// ポイント一覧を取得する
///
/// ユーザー名 → 累積スコアのマッピングを辞書順で返す。
///
/// ## エンドポイント
/// GET /points
pub async fn list_points(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, i64>>, ApiError> {
    let ledger = state.ledger()?;
    Ok(Json(ledger.scores().clone()))
}

/// ポイントを加算する
///
/// 負のポイントは減算として受け入れる。`user` または `points` が
/// 欠落しているボディは 400 を返す。
///
/// ## エンドポイント
/// POST /points
pub async fn add_points(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::InvalidBody)?;

    let user = body
        .get("user")
        .and_then(Value::as_str)
        .ok_or(ApiError::MissingField("user"))?;
    let points = body
        .get("points")
        .and_then(Value::as_i64)
        .ok_or(ApiError::MissingField("points"))?;

    let mut ledger = state.ledger()?;
    ledger.add(user, points);
    tracing::debug!(user, points, "ポイントを加算しました");

    Ok(Json(MessageResponse {
        message: "Points updated successfully!",
    }))
}

/// ポイントをリセットし、勝者を返す
///
/// 最大スコアのユーザーを勝者として報告し、台帳を空にする。
/// 同点は辞書順で最小のユーザー名が勝者になる。台帳が空なら
/// 勝者は `null`。
///
/// ## エンドポイント
/// POST /reset
pub async fn reset_points(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResetResponse>, ApiError> {
    let mut ledger = state.ledger()?;
    let winner = ledger.reset();
    tracing::info!(winner = winner.as_deref(), "ポイントをリセットしました");

    Ok(Json(ResetResponse {
        message: "Points reset successfully!",
        winner,
    }))
}
