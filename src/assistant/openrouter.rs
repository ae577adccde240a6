//! OpenRouter-backed assistant gateway
//!
//! One best-effort chat-completions call per question: no retries, no
//! streaming, no caching. The API key is resolved through the credential
//! chain at call time, so a key configured mid-session is picked up.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::assistant::{AiError, AssistantGateway};
use crate::config::Config;

const SYSTEM_PROMPT: &str = "You are a helpful AI assistant. Be concise and friendly.";
const MAX_TOKENS: u32 = 1024;

/// Assistant gateway over the OpenRouter chat-completions API
pub struct OpenRouterGateway {
    client: Client,
    model: String,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenRouterGateway {
    pub fn new(model: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            model,
            api_base,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.model.clone(), config.api_base.clone())
    }
}

#[async_trait]
impl AssistantGateway for OpenRouterGateway {
    async fn ask(&self, question: &str) -> Result<String, AiError> {
        let api_key = crate::security::keyring::get_api_key()
            .ok_or(AiError::MissingCredential)?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT.to_string() },
                ChatMessage { role: "user", content: question.to_string() },
            ],
            max_tokens: MAX_TOKENS,
        };

        let response = self.client
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::CallFailed(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::CallFailed(format!("API error ({}): {}", status, body)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AiError::CallFailed(format!("unreadable response: {}", e)))?;

        answer_text(parsed)
            .ok_or_else(|| AiError::CallFailed("response contained no answer text".to_string()))
    }
}

/// Pull the answer out of the first choice, treating a missing or empty
/// content field as no answer.
fn answer_text(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChatResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_answer_extracted_from_first_choice() {
        let response = parse(
            r#"{"choices": [{"message": {"role": "assistant", "content": "Ownership is..."}}]}"#,
        );
        assert_eq!(answer_text(response).as_deref(), Some("Ownership is..."));
    }

    #[test]
    fn test_no_choices_means_no_answer() {
        assert_eq!(answer_text(parse(r#"{"choices": []}"#)), None);
        assert_eq!(answer_text(parse(r#"{}"#)), None);
    }

    #[test]
    fn test_null_or_empty_content_means_no_answer() {
        let null_content = parse(r#"{"choices": [{"message": {"content": null}}]}"#);
        assert_eq!(answer_text(null_content), None);

        let empty_content = parse(r#"{"choices": [{"message": {"content": ""}}]}"#);
        assert_eq!(answer_text(empty_content), None);
    }

    #[test]
    fn test_request_serializes_with_roles() {
        let request = ChatRequest {
            model: "anthropic/claude-3.5-sonnet".to_string(),
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT.to_string() },
                ChatMessage { role: "user", content: "hi".to_string() },
            ],
            max_tokens: MAX_TOKENS,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "anthropic/claude-3.5-sonnet");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi");
    }
}
