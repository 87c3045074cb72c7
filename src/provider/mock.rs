//! Mock provider implementations for testing.

use async_trait::async_trait;

use super::{ProviderError, TextProvider};

/// Mock text provider returning a canned response or a canned failure.
pub struct MockTextProvider {
    outcome: Result<String, String>,
}

impl MockTextProvider {
    /// Provider that always returns the given text.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
        }
    }

    /// Provider that always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}
