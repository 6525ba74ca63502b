use crate::domain::product::model::{Product, ProductId};

/// Outcome of a recommendation request.
///
/// `ids` keeps the order the model proposed them in (duplicates included),
/// while `recommended_products` follows catalog order and lists each product once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationResult {
    pub ids: Vec<ProductId>,
    pub recommended_products: Vec<Product>,
}
