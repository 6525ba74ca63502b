use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use crate::api::product::dto::{ProductListResponse, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
}

impl ProductApi {
    pub fn new(get_all_use_case: Arc<dyn GetAllProductsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// List the catalog
    ///
    /// Returns every recommendable product.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> Json<ProductListResponse> {
        let products: Vec<ProductResponse> = self
            .get_all_use_case
            .execute()
            .await
            .into_iter()
            .map(|p| p.into())
            .collect();
        Json(ProductListResponse { products })
    }
}
