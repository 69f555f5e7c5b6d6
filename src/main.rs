// docgen-relay - コードスニペットから Azure OpenAI でドキュメントを生成する HTTP リレー

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::info;
use simple_logger::SimpleLogger;

use docgen_relay::{config::Config, server};

// メイン関数
#[tokio::main]
async fn main() -> Result<()> {
    // .envファイルを読み込み
    dotenv().ok();

    // ロガー初期化（RUST_LOG で上書き可能）
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    // コマンドライン引数と環境変数から設定を読み込む
    let config = Config::parse();

    info!("📚 docgen-relay 起動中...");
    info!("APIバージョン: {}", config.api_version);
    info!("タイムアウト: {}秒", config.timeout_secs);

    server::serve(config).await
}
