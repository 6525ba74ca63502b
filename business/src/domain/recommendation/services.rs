use async_trait::async_trait;

use super::errors::RecommendationError;

/// Service port for a single, non-streaming chat completion.
///
/// Returns the text content of the first choice.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, RecommendationError>;
}
