//! Remote analyst trait and the priority chain over it.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from a remote analysis provider. They never propagate past the
/// chain; every failure means "try the next provider".
#[derive(Debug, Error)]
pub enum DelegateError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("request timeout")]
    Timeout,

    #[error("empty completion")]
    Empty,
}

/// A remote backend that can analyze a performance description.
///
/// Implementations wrap different HTTP APIs behind a single interface; the
/// chain only cares about "text in, text out, may fail".
#[async_trait]
pub trait RemoteAnalyst: Send + Sync {
    /// The provider's name, for logging.
    fn name(&self) -> &str;

    /// Analyze the input under the given timeout.
    async fn analyze(&self, input: &str, timeout: Duration) -> Result<String, DelegateError>;
}

/// The instruction wrapped around the raw input for every remote backend.
pub fn conductor_prompt(input: &str) -> String {
    format!(
        "You are a symphony orchestra conductor AI. Analyze this musical input and give \
         concise, expert feedback on pitch, timing, harmony, and performance. Input: {}",
        input,
    )
}

/// Remote analysts in fixed priority order. The first non-error, non-empty
/// response wins; when every provider fails the caller falls back to the
/// local engine.
pub struct AnalystChain {
    analysts: Vec<Box<dyn RemoteAnalyst>>,
    timeout: Duration,
}

impl AnalystChain {
    pub fn new(analysts: Vec<Box<dyn RemoteAnalyst>>, timeout: Duration) -> AnalystChain {
        AnalystChain { analysts, timeout }
    }

    pub fn is_empty(&self) -> bool {
        self.analysts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.analysts.len()
    }

    /// Try each analyst in order. `None` means the local engine must answer.
    pub async fn analyze(&self, input: &str) -> Option<String> {
        for analyst in &self.analysts {
            match analyst.analyze(input, self.timeout).await {
                Ok(text) if text.trim().is_empty() => {
                    warn!(
                        analyst = analyst.name(),
                        "remote analysis returned an empty completion, trying next"
                    );
                }
                Ok(text) => {
                    debug!(analyst = analyst.name(), "remote analysis succeeded");
                    return Some(text);
                }
                Err(err) => {
                    warn!(
                        analyst = analyst.name(),
                        error = %err,
                        "remote analysis failed, trying next"
                    );
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAnalyst {
        name: &'static str,
        response: Result<&'static str, fn() -> DelegateError>,
    }

    #[async_trait]
    impl RemoteAnalyst for FixedAnalyst {
        fn name(&self) -> &str {
            self.name
        }

        async fn analyze(&self, _: &str, _: Duration) -> Result<String, DelegateError> {
            match &self.response {
                Ok(text) => Ok(text.to_string()),
                Err(make) => Err(make()),
            }
        }
    }

    fn chain(analysts: Vec<Box<dyn RemoteAnalyst>>) -> AnalystChain {
        AnalystChain::new(analysts, Duration::from_secs(1))
    }

    #[tokio::test]
    async fn first_success_wins() {
        let result = chain(vec![
            Box::new(FixedAnalyst {
                name: "first",
                response: Ok("from first"),
            }),
            Box::new(FixedAnalyst {
                name: "second",
                response: Ok("from second"),
            }),
        ])
        .analyze("C E G")
        .await;
        assert_eq!(result.as_deref(), Some("from first"));
    }

    #[tokio::test]
    async fn failures_fall_through_in_order() {
        let result = chain(vec![
            Box::new(FixedAnalyst {
                name: "broken",
                response: Err(|| DelegateError::Timeout),
            }),
            Box::new(FixedAnalyst {
                name: "empty",
                response: Ok("   "),
            }),
            Box::new(FixedAnalyst {
                name: "working",
                response: Ok("late but fine"),
            }),
        ])
        .analyze("C E G")
        .await;
        assert_eq!(result.as_deref(), Some("late but fine"));
    }

    #[tokio::test]
    async fn exhausted_chain_yields_none() {
        let result = chain(vec![Box::new(FixedAnalyst {
            name: "broken",
            response: Err(|| DelegateError::Connection("refused".to_string())),
        })])
        .analyze("C E G")
        .await;
        assert!(result.is_none());

        assert!(chain(vec![]).analyze("C E G").await.is_none());
    }
}
