//! # ポイント台帳
//!
//! ユーザーごとの累積スコアを管理する。初回加算でエントリが作られ、
//! 以降は加算で更新される。負の値も受け入れて減算する。
//!
//! ## 順序の決定性
//!
//! 台帳は `BTreeMap` で保持するため、走査順はユーザー名の辞書順で
//! 常に一定となる。リセット時の勝者判定はこの走査順に依存し、
//! 同点の場合は辞書順で最小のユーザー名が勝者になる。

use std::collections::BTreeMap;

/// ユーザー名 → 累積スコアの台帳
#[derive(Debug, Default)]
pub struct PointsLedger {
    scores: BTreeMap<String, i64>,
}

impl PointsLedger {
    /// 空の台帳を作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// ユーザーのスコアにポイントを加算する
    ///
    /// エントリが無ければ 0 から開始する。負のポイントは減算として働く。
    pub fn add(&mut self, user: &str, points: i64) {
        *self.scores.entry(user.to_string()).or_insert(0) += points;
    }

    /// 指定ユーザーの現在スコアを返す
    pub fn score(&self, user: &str) -> Option<i64> {
        self.scores.get(user).copied()
    }

    /// 全ユーザーのスコアを辞書順で返す
    pub fn scores(&self) -> &BTreeMap<String, i64> {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// 台帳をリセットし、その時点の勝者を返す
    ///
    /// 勝者は最大スコアを持つユーザー。同点の場合は辞書順で最小の
    /// ユーザー名を採用する。台帳が空なら `None` を返す。
    /// 判定後、台帳は空になる。
    pub fn reset(&mut self) -> Option<String> {
        let winner = self
            .scores
            .iter()
            .fold(None::<(&String, i64)>, |best, (user, &score)| match best {
                Some((_, best_score)) if score <= best_score => best,
                _ => Some((user, score)),
            })
            .map(|(user, _)| user.clone());

        self.scores.clear();
        winner
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_初回加算でエントリが作られる() {
        let mut ledger = PointsLedger::new();
        ledger.add("anna", 5);
        assert_eq!(ledger.score("anna"), Some(5));
    }

    #[test]
    fn test_加算は累積される() {
        let mut ledger = PointsLedger::new();
        ledger.add("anna", 5);
        ledger.add("anna", 3);
        ledger.add("anna", 2);
        assert_eq!(ledger.score("anna"), Some(10));
    }

    #[test]
    fn test_負のポイントは減算として働く() {
        let mut ledger = PointsLedger::new();
        ledger.add("ben", 10);
        ledger.add("ben", -4);
        assert_eq!(ledger.score("ben"), Some(6));
    }

    #[test]
    fn test_リセットは最大スコアのユーザーを勝者として返す() {
        let mut ledger = PointsLedger::new();
        ledger.add("anna", 5);
        ledger.add("ben", 7);
        ledger.add("anna", 3);

        let winner = ledger.reset();
        assert_eq!(winner.as_deref(), Some("anna"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_空の台帳のリセットは勝者なしを返す() {
        let mut ledger = PointsLedger::new();
        assert_eq!(ledger.reset(), None);
        assert!(ledger.is_empty());
    }

    #[rstest]
    #[case(&[("anna", 5), ("ben", 5)], "anna")]
    #[case(&[("zoe", 3), ("ben", 3), ("anna", 3)], "anna")]
    #[case(&[("ben", -1), ("anna", -1)], "anna")]
    fn test_同点の場合は辞書順で最小のユーザーが勝者になる(
        #[case] entries: &[(&str, i64)],
        #[case] expected: &str,
    ) {
        let mut ledger = PointsLedger::new();
        for (user, points) in entries {
            ledger.add(user, *points);
        }
        assert_eq!(ledger.reset().as_deref(), Some(expected));
    }

    #[test]
    fn test_リセット後の加算は0から再開する() {
        let mut ledger = PointsLedger::new();
        ledger.add("anna", 100);
        ledger.reset();
        ledger.add("anna", 1);
        assert_eq!(ledger.score("anna"), Some(1));
    }
}
