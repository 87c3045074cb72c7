//! Generative text provider abstraction.
//!
//! A trait seam over the external AI API so handlers can be exercised
//! against a mock provider in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("rate limited")]
    RateLimited,

    #[error("provider returned no text")]
    EmptyResponse,
}

/// Text completion provider. One free-text prompt in, free text out.
/// The returned text should, but is not guaranteed to, be valid JSON.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
