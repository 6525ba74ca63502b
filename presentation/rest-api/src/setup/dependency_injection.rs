use std::sync::Arc;

use catalog::product::repository::StaticProductCatalog;
use groq::client::GroqClient;
use groq::completion::GroqCompletionService;
use logger::TracingLogger;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::recommendation::recommend::RecommendProductsUseCaseImpl;
use business::domain::product::repository::ProductCatalog;
use business::domain::recommendation::services::CompletionService;

use crate::config::app_config::AppConfig;
use crate::config::catalog_config::CatalogConfig;
use crate::config::groq_config::GroqConfig;

pub struct DependencyContainer {
    pub root_api: crate::api::root::routes::RootApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub recommendation_api: crate::api::recommendation::routes::RecommendationApi,
}

impl DependencyContainer {
    /// Builds the real adapters from configuration.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let catalog = init_catalog(&config.catalog)?;
        let completion = Arc::new(GroqCompletionService::new(init_groq_client(&config.groq)));
        Ok(Self::new(catalog, completion))
    }

    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        completion: Arc<dyn CompletionService>,
    ) -> Self {
        let logger = Arc::new(TracingLogger);
        let root_api = crate::api::root::routes::RootApi::new();

        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let recommend_use_case = Arc::new(RecommendProductsUseCaseImpl {
            catalog,
            completion,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(get_all_use_case);
        let recommendation_api =
            crate::api::recommendation::routes::RecommendationApi::new(recommend_use_case);

        Self {
            root_api,
            product_api,
            recommendation_api,
        }
    }
}

fn init_catalog(config: &CatalogConfig) -> anyhow::Result<Arc<dyn ProductCatalog>> {
    let catalog = match &config.path {
        Some(path) => StaticProductCatalog::from_json_file(path)?,
        None => StaticProductCatalog::builtin(),
    };
    Ok(Arc::new(catalog))
}

fn init_groq_client(config: &GroqConfig) -> GroqClient {
    let mut client = GroqClient::new(config.api_key.clone());
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url.as_str());
    }
    if let Some(model) = &config.model {
        client = client.with_model(model.as_str());
    }
    client
}
