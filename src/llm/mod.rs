pub mod gemini;

use crate::error::UpstreamError;
use crate::models::chat::ChatMessage;
use async_trait::async_trait;
use log::warn;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// The single capability the gateway needs from an upstream provider.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete_chat(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError>;

    /// Provider name used in client-facing error messages.
    fn provider_name(&self) -> &'static str;
}

/// Timeout and bounded-retry policy applied around every upstream call.
/// Kept orthogonal to the `ChatClient` trait so providers stay policy-free.
#[derive(Debug, Clone)]
pub struct CallPolicy {
    pub timeout: Duration,
    pub max_attempts: u32,
    pub backoff_base: Duration,
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_attempts: 3,
            backoff_base: Duration::from_millis(500),
        }
    }
}

/// Invokes the upstream with a hard per-attempt timeout and exponential
/// backoff between retries. 4xx responses are never retried.
pub async fn complete_with_policy(
    client: &dyn ChatClient,
    messages: &[ChatMessage],
    policy: &CallPolicy,
) -> Result<String, UpstreamError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut delay = policy.backoff_base;
    let mut attempt = 0;

    loop {
        attempt += 1;
        let result = match timeout(policy.timeout, client.complete_chat(messages)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(policy.timeout)),
        };

        match result {
            Ok(reply) => return Ok(reply),
            Err(e) if e.is_retryable() && attempt < max_attempts => {
                warn!(
                    "upstream call attempt {}/{} failed: {}; retrying in {:?}",
                    attempt, max_attempts, e, delay
                );
                sleep(delay).await;
                delay *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}
