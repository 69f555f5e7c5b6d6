// LLMモジュール - Azure OpenAI 呼び出しに関する機能をまとめたモジュール

pub mod client;
pub mod prompts;
pub mod schemas;
