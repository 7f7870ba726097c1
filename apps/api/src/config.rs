//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

use anyhow::Context;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | 既定値 |
    /// |--------|--------|
    /// | `KAJIFLOW_HOST` | `0.0.0.0` |
    /// | `KAJIFLOW_PORT` | `5000` |
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("KAJIFLOW_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("KAJIFLOW_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .context("KAJIFLOW_PORT は有効なポート番号である必要があります")?;

        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 環境変数の競合を避けるため、既定値の組み立てのみ検証する

    #[test]
    fn test_未設定のポートは既定値にパースできる() {
        let port: u16 = "5000".parse().unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn test_不正なポートはパースに失敗する() {
        assert!("not-a-port".parse::<u16>().is_err());
    }
}
