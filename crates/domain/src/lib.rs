//! # KajiFlow ドメイン層
//!
//! 家事タスクとポイント管理の中核を担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! このクレートは API 層（axum）から独立しており、以下を提供する:
//!
//! - **タスクボード**: 追加順を保持する家事タスクの列（[`task::TaskBoard`]）
//! - **ポイント台帳**: ユーザーごとの累積スコア（[`points::PointsLedger`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型（[`DomainError`]）
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → domain
//! ```
//!
//! ドメイン層は HTTP・ランタイムに一切依存しない。状態の排他制御は
//! API 層の責務であり、ここでは純粋な `&mut self` 操作のみを提供する。
//!
//! ## 使用例
//!
//! ```rust
//! use kajiflow_domain::points::PointsLedger;
//!
//! let mut ledger = PointsLedger::new();
//! ledger.add("anna", 5);
//! ledger.add("anna", 3);
//! assert_eq!(ledger.score("anna"), Some(8));
//!
//! let winner = ledger.reset();
//! assert_eq!(winner.as_deref(), Some("anna"));
//! assert!(ledger.is_empty());
//! ```

pub mod error;
pub mod points;
pub mod task;

pub use error::DomainError;
