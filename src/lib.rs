// docgen-relay - コードスニペットを受け取り Azure OpenAI でドキュメントを生成する HTTP リレー

pub mod config;
pub mod error;
pub mod llm;
pub mod server;
