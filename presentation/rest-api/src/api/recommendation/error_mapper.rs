use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recommendation::errors::RecommendationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecommendationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RecommendationError::CompletionFailed => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "recommendation.completion_failed",
            ),
            RecommendationError::EmptyCompletion => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "recommendation.empty_completion",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
