//! # タスクボード
//!
//! 家事タスクの順序付き列。タスクは呼び出し元が与えた JSON 値を
//! そのまま保持し、スキーマは強制しない。
//!
//! ## 識別について
//!
//! タスクは安定 ID を持たず、0 始まりの位置インデックスでのみ識別される。
//! 削除すると後続タスクのインデックスは 1 つずつ左にシフトする。

use serde_json::Value;

use crate::error::DomainError;

/// 追加順を保持する家事タスクの列
#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: Vec<Value>,
}

impl TaskBoard {
    /// 空のタスクボードを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 全タスクを追加順で返す
    pub fn list(&self) -> &[Value] {
        &self.tasks
    }

    /// タスクを末尾に追加する
    ///
    /// 任意の JSON 値を検証なしでそのまま保持する。
    pub fn add(&mut self, task: Value) {
        self.tasks.push(task);
    }

    /// 指定インデックスのタスクを削除する
    ///
    /// 範囲内なら該当要素を取り除いて返し、後続要素は左にシフトする。
    /// 範囲外なら状態を変更せず [`DomainError::TaskNotFound`] を返す。
    pub fn remove(&mut self, index: usize) -> Result<Value, DomainError> {
        if index < self.tasks.len() {
            Ok(self.tasks.remove(index))
        } else {
            Err(DomainError::TaskNotFound { index })
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_タスクは追加順で一覧される() {
        let mut board = TaskBoard::new();
        board.add(json!({"title": "buy milk"}));
        board.add(json!({"title": "take out trash"}));
        board.add(json!("just a string"));

        assert_eq!(
            board.list(),
            &[
                json!({"title": "buy milk"}),
                json!({"title": "take out trash"}),
                json!("just a string"),
            ]
        );
    }

    #[test]
    fn test_削除で後続タスクのインデックスがシフトする() {
        let mut board = TaskBoard::new();
        board.add(json!({"title": "a"}));
        board.add(json!({"title": "b"}));
        board.add(json!({"title": "c"}));

        let removed = board.remove(1).unwrap();
        assert_eq!(removed, json!({"title": "b"}));
        assert_eq!(board.list(), &[json!({"title": "a"}), json!({"title": "c"})]);
    }

    #[test]
    fn test_範囲外インデックスの削除は状態を変更しない() {
        let mut board = TaskBoard::new();
        board.add(json!({"title": "a"}));

        let err = board.remove(1).unwrap_err();
        assert_eq!(err, DomainError::TaskNotFound { index: 1 });
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_空のボードからの削除はエラーになる() {
        let mut board = TaskBoard::new();
        assert!(board.remove(0).is_err());
        assert!(board.is_empty());
    }

    #[test]
    fn test_任意のjson値を検証なしで受け入れる() {
        let mut board = TaskBoard::new();
        board.add(json!(null));
        board.add(json!(42));
        board.add(json!(["a", "b"]));

        assert_eq!(board.len(), 3);
        assert_eq!(board.list()[0], json!(null));
    }
}
