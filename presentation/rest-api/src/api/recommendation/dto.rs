use poem_openapi::Object;

use business::domain::recommendation::model::RecommendationResult;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct PreferenceRequest {
    /// Free-text description of what the user is looking for
    pub preferences: String,
}

#[derive(Debug, Clone, Object)]
pub struct RecommendationResponse {
    /// Validated product ids, in the order the model proposed them
    pub ids: Vec<u32>,
    /// Matching catalog entries, in catalog order
    #[oai(rename = "recommendedProducts")]
    pub recommended_products: Vec<ProductResponse>,
}

impl From<RecommendationResult> for RecommendationResponse {
    fn from(r: RecommendationResult) -> Self {
        Self {
            ids: r.ids,
            recommended_products: r
                .recommended_products
                .into_iter()
                .map(|p| p.into())
                .collect(),
        }
    }
}
