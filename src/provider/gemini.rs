//! Gemini text provider.
//!
//! Calls the `generateContent` endpoint of Google's Generative Language API
//! and extracts the first candidate's text. No retry or backoff; the call is
//! a single request with reqwest's default timeout.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::{ProviderError, TextProvider};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
}

pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API base. Used by wire-level tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.config.model, api_key
        )
    }
}

#[async_trait]
impl TextProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            ProviderError::NotConfigured("GEMINI_API_KEY is not set".to_string())
        })?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![ContentPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url(api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("failed to parse response: {}", e)))?;

        api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(ProviderError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
