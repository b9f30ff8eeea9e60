//! OpenAI-style chat-completion analysts (Groq and OpenRouter share the
//! wire shape, only the endpoint and model differ).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::provider::{conductor_prompt, DelegateError, RemoteAnalyst};

pub struct ChatApiAnalyst {
    client: Client,
    name: &'static str,
    url: &'static str,
    model: &'static str,
    api_key: String,
}

impl ChatApiAnalyst {
    pub fn groq(api_key: String) -> ChatApiAnalyst {
        ChatApiAnalyst {
            client: Client::new(),
            name: "groq",
            url: "https://api.groq.com/openai/v1/chat/completions",
            model: "llama-3.3-70b-versatile",
            api_key,
        }
    }

    pub fn open_router(api_key: String) -> ChatApiAnalyst {
        ChatApiAnalyst {
            client: Client::new(),
            name: "openrouter",
            url: "https://openrouter.ai/api/v1/chat/completions",
            model: "meta-llama/llama-3.3-70b-instruct:free",
            api_key,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[async_trait]
impl RemoteAnalyst for ChatApiAnalyst {
    fn name(&self) -> &str {
        self.name
    }

    async fn analyze(&self, input: &str, timeout: Duration) -> Result<String, DelegateError> {
        let request = ChatRequest {
            model: self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: conductor_prompt(input),
            }],
            max_tokens: 500,
        };

        debug!(analyst = self.name, model = self.model, "sending chat completion request");

        let response = self
            .client
            .post(self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DelegateError::Timeout
                } else {
                    DelegateError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DelegateError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            DelegateError::InvalidResponse(format!("failed to parse chat response: {}", e))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(DelegateError::Empty)
    }
}
