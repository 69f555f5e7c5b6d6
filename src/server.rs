// HTTPサーバーとハンドラー
use anyhow::Result;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use chrono::prelude::*;
use log::info;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::error::ApiError;
use crate::llm::client::AzureOpenAIClient;
use crate::llm::prompts::build_prompt;
use crate::llm::schemas::doc_api::{DocRequest, DocResponse, HealthResponse};

// リクエスト間で共有する読み取り専用の状態
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: AzureOpenAIClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = AzureOpenAIClient::new(config.api_version.clone(), config.timeout())?;
        Ok(AppState {
            config: Arc::new(config),
            client,
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    let router = Router::new()
        .route("/", any(generate_docs))
        .route("/api/generate", any(generate_docs))
        .route("/health", get(health_check))
        .with_state(state);

    with_cors(router)
}

// エラーやルーター自身の 404/405 を含むすべてのレスポンスに付与する
fn with_cors(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

pub async fn serve(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    if let Err(e) = config.remote_config() {
        log::warn!("⚠️ {} (リクエストは 500 を返します)", e);
    }

    let app = create_app(AppState::new(config)?);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 待ち受け開始: http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

// ドキュメント生成エンドポイント
pub async fn generate_docs(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    // プリフライトは他のチェックより先に返す
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    match generate(&state, &method, &body).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn generate(state: &AppState, method: &Method, body: &[u8]) -> Result<DocResponse, ApiError> {
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed(method.to_string()));
    }

    let request: DocRequest = serde_json::from_slice(body).map_err(ApiError::InvalidJson)?;

    if request.code.is_empty() || request.language.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let len = request.code.chars().count();
    let max = state.config.max_code_length;
    if len > max {
        return Err(ApiError::CodeTooLong { len, max });
    }

    let remote = state.config.remote_config()?;

    info!("📝 リクエスト処理中: {} ({} 文字)", request.language, len);

    let prompt = build_prompt(&request.language, &request.code);
    let documentation = state.client.complete(&remote, &prompt).await?;

    Ok(DocResponse { documentation })
}

// ヘルスチェック
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
