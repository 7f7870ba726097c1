//! # KajiFlow API
//!
//! 家事タスクとポイントを管理する HTTP API。
//!
//! ルーター構築と State の初期化をここで行い、`main.rs` は
//! 設定読み込みとサーバー起動に集中する。テストは [`app`] で
//! 構築したルーターに対して `tower::ServiceExt::oneshot` で
//! リクエストを発行する。

pub mod config;
pub mod error;
pub mod handler;

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use axum::{
    Router,
    routing::{delete, get, post},
};
use kajiflow_domain::{points::PointsLedger, task::TaskBoard};
use tower_http::trace::TraceLayer;

use crate::{
    error::ApiError,
    handler::{
        add_points,
        add_task,
        delete_task,
        health_check,
        list_points,
        list_tasks,
        reset_points,
    },
};

/// アプリケーション全体の共有状態
///
/// グローバル変数は使わず、`main`（またはテスト）で構築して
/// `axum::extract::State` で各ハンドラに注入する。
///
/// 各コレクションは独立した `Mutex` で守る。どの操作も片方の
/// コレクションしか触らないため、コレクション単位のロックで
/// 更新の取りこぼしは起きない。ロックを保持したまま `await`
/// しないこと。
#[derive(Debug, Default)]
pub struct AppState {
    board:  Mutex<TaskBoard>,
    ledger: Mutex<PointsLedger>,
}

impl AppState {
    /// 空の状態を作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// タスクボードのロックを取得する
    ///
    /// ロックが汚染されている場合は内部エラーとして扱う。
    pub fn board(&self) -> Result<MutexGuard<'_, TaskBoard>, ApiError> {
        self.board
            .lock()
            .map_err(|_| ApiError::Internal(anyhow!("タスクボードのロックが汚染されています")))
    }

    /// ポイント台帳のロックを取得する
    pub fn ledger(&self) -> Result<MutexGuard<'_, PointsLedger>, ApiError> {
        self.ledger
            .lock()
            .map_err(|_| ApiError::Internal(anyhow!("ポイント台帳のロックが汚染されています")))
    }
}

/// ルーターを構築する
///
/// | Method | Path | 概要 |
/// |--------|------|------|
/// | GET | /health | ヘルスチェック |
/// | GET | /tasks | タスク一覧 |
/// | POST | /tasks | タスク追加 |
/// | DELETE | /tasks/{id} | タスク削除 |
/// | GET | /points | ポイント一覧 |
/// | POST | /points | ポイント加算 |
/// | POST | /reset | ポイントリセット（勝者判定） |
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/tasks", get(list_tasks).post(add_task))
        .route("/tasks/{id}", delete(delete_task))
        .route("/points", get(list_points).post(add_points))
        .route("/reset", post(reset_points))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
