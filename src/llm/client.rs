// Azure OpenAI クライアント
use anyhow::Result;
use log::info;
use reqwest::header;
use std::time::Duration;

use super::prompts::build_messages;
use super::schemas::openai_response::{ChatRequest, ChatResponse};
use crate::config::RemoteConfig;
use crate::error::RemoteError;

#[derive(Clone, Debug)]
pub struct AzureOpenAIClient {
    client: reqwest::Client,
    api_version: String,
}

impl AzureOpenAIClient {
    // タイムアウト付きのクライアントを一つだけ作って使い回す
    pub fn new(api_version: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(AzureOpenAIClient {
            client,
            api_version: api_version.into(),
        })
    }

    pub fn completions_url(&self, remote: &RemoteConfig) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            remote.endpoint.trim_end_matches('/'),
            remote.deployment,
            self.api_version
        )
    }

    /// プロンプトを送り、最初の choice の内容をそのまま返す。
    ///
    /// リトライはしない。タイムアウト、非2xx、デコード失敗、choices が空の
    /// いずれも [`RemoteError`] になる。
    pub async fn complete(&self, remote: &RemoteConfig, prompt: &str) -> Result<String, RemoteError> {
        let url = self.completions_url(remote);
        let request_body = ChatRequest::new(build_messages(prompt.to_string()));

        info!("🤖 Azure OpenAI 呼び出し: デプロイメント {}", remote.deployment);

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header("api-key", &remote.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)?;
        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or(RemoteError::NoChoices)?;

        info!(
            "✅ ドキュメント生成成功 ({} 文字)",
            choice.message.content.chars().count()
        );
        Ok(choice.message.content)
    }
}
