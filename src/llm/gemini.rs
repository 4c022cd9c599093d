use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use super::ChatClient;
use crate::error::{ConfigError, UpstreamError};
use crate::models::chat::ChatMessage;

#[derive(Serialize)]
struct GeminiChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct GeminiChatResponse {
    choices: Vec<GeminiChoice>,
}

#[derive(Deserialize)]
struct GeminiChoice {
    message: GeminiResponseMessage,
}

#[derive(Deserialize)]
struct GeminiResponseMessage {
    content: String,
}

/// Chat client for Gemini through its OpenAI-compatible endpoint.
#[derive(Debug)]
pub struct GeminiChatClient {
    http: HttpClient,
    model: String,
    endpoint: String,
}

impl GeminiChatClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Result<Self, ConfigError> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| ConfigError::Invalid(format!("invalid API key format: {}", e)))?,
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            model,
            endpoint: completions_endpoint(&base_url),
        })
    }
}

fn completions_endpoint(base_url: &str) -> String {
    if base_url.contains("/chat/completions") {
        base_url.to_string()
    } else {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn complete_chat(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        debug!(
            "GeminiChatClient::complete_chat() → model={} endpoint={}",
            self.model, self.endpoint
        );

        let payload = GeminiChatRequest {
            model: &self.model,
            messages,
        };
        let resp = self.http.post(&self.endpoint).json(&payload).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let completion: GeminiChatResponse = resp.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(UpstreamError::EmptyCompletion)
    }

    fn provider_name(&self) -> &'static str {
        "Gemini"
    }
}
