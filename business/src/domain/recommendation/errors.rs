#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.completion_failed")]
    CompletionFailed,
    #[error("recommendation.empty_completion")]
    EmptyCompletion,
}
