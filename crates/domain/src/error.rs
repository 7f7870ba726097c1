//! # ドメイン層エラー定義
//!
//! ドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `TaskNotFound` | 404 Not Found | 範囲外インデックスの削除 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// 指定されたインデックスにタスクが存在しない
    ///
    /// タスクは位置インデックスでのみ識別されるため、削除により
    /// 後続のインデックスは左にシフトする。範囲外アクセスは
    /// 状態を変更せずこのエラーを返す。
    #[error("タスクが見つかりません: index={index}")]
    TaskNotFound { index: usize },
}
