// LLM関連のスキーマ定義

// 生成エンドポイントの入出力に関するスキーマ
pub mod doc_api {
    use serde::{Deserialize, Serialize};

    // ドキュメント生成リクエスト
    // フィールドが欠けていても空文字として受け取り、バリデーションで弾く
    #[derive(Clone, Debug, Default, Deserialize, Serialize)]
    pub struct DocRequest {
        #[serde(default)]
        pub code: String,
        #[serde(default)]
        pub language: String,
    }

    // ドキュメント生成レスポンス
    #[derive(Clone, Debug, Deserialize, Serialize)]
    pub struct DocResponse {
        pub documentation: String,
    }

    // エラーレスポンス
    #[derive(Clone, Debug, Deserialize, Serialize)]
    pub struct ErrorResponse {
        pub error: String,
    }

    // ヘルスチェック
    #[derive(Clone, Debug, Deserialize, Serialize)]
    pub struct HealthResponse {
        pub status: String,
        pub timestamp: String,
        pub version: String,
    }
}

// Azure OpenAI API に関するスキーマ
pub mod openai_response {
    use serde::{Deserialize, Serialize};

    /// 出力トークンの上限
    pub const MAX_TOKENS: u32 = 4000;

    /// 低めの温度で安定したドキュメントを出す
    pub const TEMPERATURE: f32 = 0.3;

    // メッセージの役割
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Role {
        System,
        User,
        Assistant,
    }

    // チャットメッセージ
    #[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
    pub struct ChatMessage {
        pub role: Role,
        pub content: String,
    }

    impl ChatMessage {
        pub fn system(content: impl Into<String>) -> Self {
            ChatMessage {
                role: Role::System,
                content: content.into(),
            }
        }

        pub fn user(content: impl Into<String>) -> Self {
            ChatMessage {
                role: Role::User,
                content: content.into(),
            }
        }
    }

    // チャット完了リクエスト
    #[derive(Clone, Debug, Serialize)]
    pub struct ChatRequest {
        pub messages: Vec<ChatMessage>,
        pub max_tokens: u32,
        pub temperature: f32,
    }

    impl ChatRequest {
        pub fn new(messages: Vec<ChatMessage>) -> Self {
            ChatRequest {
                messages,
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            }
        }
    }

    // OpenAI API選択肢
    #[derive(Clone, Debug, Deserialize)]
    pub struct ChatChoice {
        pub message: ChatMessage,
    }

    // OpenAI APIレスポンス（choices以外は読み捨てる）
    #[derive(Clone, Debug, Deserialize)]
    pub struct ChatResponse {
        pub choices: Vec<ChatChoice>,
    }
}

#[cfg(test)]
mod tests {
    use super::doc_api::DocRequest;
    use super::openai_response::{ChatMessage, ChatRequest, ChatResponse, Role};
    use serde_json::json;

    #[test]
    fn chat_request_uses_fixed_generation_parameters() {
        let request = ChatRequest::new(vec![
            ChatMessage::system("persona"),
            ChatMessage::user("prompt"),
        ]);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["max_tokens"], json!(4000));
        assert!((value["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(value["messages"][0]["role"], json!("system"));
        assert_eq!(value["messages"][1]["role"], json!("user"));
        assert_eq!(value["messages"][1]["content"], json!("prompt"));
    }

    #[test]
    fn chat_response_ignores_extra_fields() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "finish_reason": "stop",
                 "message": {"role": "assistant", "content": "/** doc */"}}
            ],
            "usage": {"total_tokens": 12}
        }"#;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.role, Role::Assistant);
        assert_eq!(response.choices[0].message.content, "/** doc */");
    }

    #[test]
    fn doc_request_missing_fields_default_to_empty() {
        let request: DocRequest = serde_json::from_str(r#"{"language":"Go"}"#).unwrap();
        assert!(request.code.is_empty());
        assert_eq!(request.language, "Go");
    }

    #[test]
    fn doc_request_rejects_non_object() {
        assert!(serde_json::from_str::<DocRequest>("[1, 2]").is_err());
        assert!(serde_json::from_str::<DocRequest>("null").is_err());
    }
}
