// エラー型の定義
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use thiserror::Error;

use crate::llm::schemas::doc_api::ErrorResponse;

/// 設定不足（詳細はログにのみ出す）
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Azure OpenAI の設定が不足しています: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Azure OpenAI 呼び出しの失敗
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Azure OpenAI リクエストがタイムアウトしました: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("Azure OpenAI リクエスト送信エラー: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Azure OpenAI API エラー: ステータス {status}, レスポンス: {body}")]
    Status { status: u16, body: String },

    #[error("Azure OpenAI レスポンスのデコードに失敗: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Azure OpenAI レスポンスに choices がありません")]
    NoChoices,
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RemoteError::Timeout(e)
        } else {
            RemoteError::Transport(e)
        }
    }
}

/// ハンドラーが返すエラー
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("許可されていないメソッド: {0}")]
    MethodNotAllowed(String),

    #[error("JSONの解析に失敗: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("code または language が空です")]
    MissingFields,

    #[error("コードが長すぎます: {len} 文字 (上限 {max})")]
    CodeTooLong { len: usize, max: usize },

    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidJson(_) | ApiError::MissingFields | ApiError::CodeTooLong { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Configuration(_) | ApiError::Remote(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// クライアントに返すメッセージ。内部の詳細は含めない
    pub fn public_message(&self) -> String {
        match self {
            ApiError::MethodNotAllowed(_) => "Method not allowed".to_string(),
            ApiError::InvalidJson(_) => "Invalid JSON".to_string(),
            ApiError::MissingFields => "Missing required fields: code and language".to_string(),
            ApiError::CodeTooLong { max, .. } => {
                format!("Code is too long (max {} characters)", max)
            }
            ApiError::Configuration(_) | ApiError::Remote(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("❌ {}", self);
        } else {
            warn!("⚠️ {}", self);
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            ApiError::MethodNotAllowed("GET".into()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingFields.public_message(),
            "Missing required fields: code and language"
        );

        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::InvalidJson(err);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid JSON");

        let err = ApiError::CodeTooLong { len: 11, max: 10 };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Code is too long (max 10 characters)");
    }

    #[test]
    fn server_errors_hide_detail() {
        let err = ApiError::from(RemoteError::Status {
            status: 429,
            body: "quota exceeded for key sk-secret".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.to_string().contains("429"));

        let err = ApiError::from(ConfigError::Missing(vec!["AZURE_OPENAI_API_KEY"]));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.to_string().contains("AZURE_OPENAI_API_KEY"));
    }
}
