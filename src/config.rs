// 設定の読み込み
use clap::Parser;
use std::time::Duration;

use crate::error::ConfigError;

/// Azure OpenAI の API バージョン
pub const DEFAULT_API_VERSION: &str = "2024-02-15-preview";

// コマンドライン引数と環境変数の定義
// 起動時に一度だけ読み込み、以降は共有状態として参照する
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "docgen-relay",
    about = "コードスニペットから Azure OpenAI でドキュメントを生成する HTTP リレー",
    version
)]
pub struct Config {
    /// Azure OpenAI の APIキー
    #[clap(long, env = "AZURE_OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Azure OpenAI のエンドポイントURL
    #[clap(long, env = "AZURE_OPENAI_ENDPOINT")]
    pub endpoint: Option<String>,

    /// デプロイメント名
    #[clap(long, env = "AZURE_OPENAI_DEPLOYMENT")]
    pub deployment: Option<String>,

    /// APIバージョン
    #[clap(long, env = "AZURE_OPENAI_API_VERSION", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// 待ち受けアドレス
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// 待ち受けポート
    #[clap(long, env = "PORT", default_value = "8080")]
    pub port: u16,

    /// Azure OpenAI 呼び出しのタイムアウト（秒）
    #[clap(long, env = "REQUEST_TIMEOUT_SECS", default_value = "60")]
    pub timeout_secs: u64,

    /// 受け付けるコードの最大文字数
    #[clap(long, env = "MAX_CODE_LENGTH", default_value = "50000")]
    pub max_code_length: usize,
}

// リクエスト単位で使う接続情報
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteConfig {
    pub api_key: String,
    pub endpoint: String,
    pub deployment: String,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    // 3つとも揃っていなければ不足分を列挙して返す。空文字も不足扱い
    pub fn remote_config(&self) -> Result<RemoteConfig, ConfigError> {
        let mut missing = Vec::new();
        let api_key = present(&self.api_key, "AZURE_OPENAI_API_KEY", &mut missing);
        let endpoint = present(&self.endpoint, "AZURE_OPENAI_ENDPOINT", &mut missing);
        let deployment = present(&self.deployment, "AZURE_OPENAI_DEPLOYMENT", &mut missing);

        match (api_key, endpoint, deployment) {
            (Some(api_key), Some(endpoint), Some(deployment)) => Ok(RemoteConfig {
                api_key,
                endpoint,
                deployment,
            }),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

fn present(
    value: &Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            missing.push(name);
            None
        }
    }
}
