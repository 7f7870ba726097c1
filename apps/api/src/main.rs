//! # KajiFlow API サーバー
//!
//! 家事タスクとポイントを管理する HTTP API サーバー。
//!
//! ## 役割
//!
//! - **タスクボード**: 家事タスクの追加・一覧・削除
//! - **ポイント台帳**: ユーザーごとの累積スコアの加算・一覧・リセット
//!
//! 状態はプロセス内メモリにのみ保持し、再起動で失われる。
//! 永続化・認証・ページネーションは対象外。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `KAJIFLOW_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `KAJIFLOW_PORT` | No | ポート番号（デフォルト: `5000`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p kajiflow-api
//!
//! # 本番環境
//! KAJIFLOW_PORT=5000 cargo run -p kajiflow-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use kajiflow_api::{AppState, app, config::ApiConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kajiflow=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定読み込み
    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "KajiFlow API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // 状態はここで構築し、ルーターに注入する（グローバル変数は使わない）
    let state = Arc::new(AppState::new());
    let router = app(state);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("KajiFlow API サーバーが起動しました: {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
