use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductCatalog;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::RecommendationResult;
use crate::domain::recommendation::parsing::{extract_id_array, select_products, validate_ids};
use crate::domain::recommendation::prompt::{
    RECOMMENDATION_TEMPERATURE, SYSTEM_PROMPT, build_prompt,
};
use crate::domain::recommendation::services::CompletionService;
use crate::domain::recommendation::use_cases::recommend::{
    RecommendProductsParams, RecommendProductsUseCase,
};

pub struct RecommendProductsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub completion: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecommendProductsUseCase for RecommendProductsUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendProductsParams,
    ) -> Result<RecommendationResult, RecommendationError> {
        self.logger.info(&format!(
            "Recommending products for preferences of {} chars",
            params.preferences.chars().count()
        ));

        let products = self.catalog.products();
        let prompt = build_prompt(&products, &params.preferences);

        let reply = self
            .completion
            .complete(SYSTEM_PROMPT, &prompt, RECOMMENDATION_TEMPERATURE)
            .await?;
        self.logger
            .debug(&format!("Completion returned {} chars", reply.len()));

        let proposed = extract_id_array(&reply);
        if proposed.is_empty() && !reply.contains("[]") {
            self.logger
                .warn("Completion did not contain a usable JSON array");
        }

        let known_ids = products.iter().map(|p| p.id).collect();
        let ids = validate_ids(&proposed, &known_ids);
        if ids.len() < proposed.len() {
            self.logger.debug(&format!(
                "Dropped {} invalid or unknown ids",
                proposed.len() - ids.len()
            ));
        }

        let recommended_products = select_products(&products, &ids);

        self.logger.info(&format!(
            "Recommended {} products",
            recommended_products.len()
        ));

        Ok(RecommendationResult {
            ids,
            recommended_products,
        })
    }
}
