//! Remote analysis delegation.
//!
//! Up to three external providers are tried in fixed priority order, each
//! under its own timeout; any failure, timeout, non-success status, or
//! empty result moves on, and an exhausted chain means the local engine
//! answers. The engine never knows whether it was the fallback.

mod chat_api;
mod hugging_face;
mod provider;

use std::time::Duration;

pub use chat_api::ChatApiAnalyst;
pub use hugging_face::HuggingFaceAnalyst;
pub use provider::{conductor_prompt, AnalystChain, DelegateError, RemoteAnalyst};

/// API keys for the remote providers, each optional.
#[derive(Debug, Clone, Default)]
pub struct DelegateKeys {
    pub groq: Option<String>,
    pub open_router: Option<String>,
    pub hugging_face: Option<String>,
}

impl DelegateKeys {
    /// Read the keys from the process environment. Unset or empty variables
    /// disable their provider.
    pub fn from_env() -> DelegateKeys {
        let read = |name: &str| std::env::var(name).ok().filter(|value| !value.is_empty());
        DelegateKeys {
            groq: read("GROQ_API_KEY"),
            open_router: read("OPENROUTER_API_KEY"),
            hugging_face: read("HUGGINGFACE_API_KEY"),
        }
    }
}

/// Build the priority chain from whichever keys are configured. Priority
/// order is fixed: Groq, then OpenRouter, then Hugging Face.
pub fn build_chain(keys: DelegateKeys, timeout: Duration) -> AnalystChain {
    let mut analysts: Vec<Box<dyn RemoteAnalyst>> = Vec::new();
    if let Some(key) = keys.groq {
        analysts.push(Box::new(ChatApiAnalyst::groq(key)));
    }
    if let Some(key) = keys.open_router {
        analysts.push(Box::new(ChatApiAnalyst::open_router(key)));
    }
    if let Some(key) = keys.hugging_face {
        analysts.push(Box::new(HuggingFaceAnalyst::new(key)));
    }
    AnalystChain::new(analysts, timeout)
}
