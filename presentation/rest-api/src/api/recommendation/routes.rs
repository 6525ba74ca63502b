use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recommendation::use_cases::recommend::{
    RecommendProductsParams, RecommendProductsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::{PreferenceRequest, RecommendationResponse};
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    recommend_use_case: Arc<dyn RecommendProductsUseCase>,
}

impl RecommendationApi {
    pub fn new(recommend_use_case: Arc<dyn RecommendProductsUseCase>) -> Self {
        Self { recommend_use_case }
    }
}

/// Recommendation API
///
/// Turns a free-text preference into catalog products picked by the LLM.
#[OpenApi]
impl RecommendationApi {
    /// Recommend products
    ///
    /// Asks the model for up to three catalog products matching the preferences.
    /// An unusable model reply yields an empty result rather than an error;
    /// only a failed upstream call is reported (502).
    #[oai(path = "/recommend", method = "post", tag = "ApiTags::Recommendations")]
    async fn recommend(&self, body: Json<PreferenceRequest>) -> RecommendResponse {
        let params = RecommendProductsParams {
            preferences: body.0.preferences,
        };

        match self.recommend_use_case.execute(params).await {
            Ok(result) => RecommendResponse::Ok(Json(result.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                RecommendResponse::BadGateway(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecommendResponse {
    #[oai(status = 200)]
    Ok(Json<RecommendationResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
