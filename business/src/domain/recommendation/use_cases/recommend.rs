use async_trait::async_trait;

use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::RecommendationResult;

pub struct RecommendProductsParams {
    pub preferences: String,
}

#[async_trait]
pub trait RecommendProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecommendProductsParams,
    ) -> Result<RecommendationResult, RecommendationError>;
}
