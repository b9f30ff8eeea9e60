//! Hugging Face Inference API analyst.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::provider::{conductor_prompt, DelegateError, RemoteAnalyst};

const INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.3";

pub struct HuggingFaceAnalyst {
    client: Client,
    api_key: String,
}

impl HuggingFaceAnalyst {
    pub fn new(api_key: String) -> HuggingFaceAnalyst {
        HuggingFaceAnalyst {
            client: Client::new(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
}

#[derive(Deserialize)]
struct InferenceChunk {
    generated_text: String,
}

#[async_trait]
impl RemoteAnalyst for HuggingFaceAnalyst {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn analyze(&self, input: &str, timeout: Duration) -> Result<String, DelegateError> {
        let request = InferenceRequest {
            inputs: conductor_prompt(input),
            parameters: InferenceParameters {
                max_new_tokens: 300,
            },
        };

        debug!(analyst = "huggingface", "sending inference request");

        let response = self
            .client
            .post(INFERENCE_URL)
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

        let chunks: Vec<InferenceChunk> = response.json().await.map_err(|e| {
            DelegateError::InvalidResponse(format!("failed to parse inference response: {}", e))
        })?;

        chunks
            .into_iter()
            .next()
            .map(|chunk| chunk.generated_text)
            .ok_or(DelegateError::Empty)
    }
}
