use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Catalog identifier
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            price: p.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    /// Full catalog in catalog order
    pub products: Vec<ProductResponse>,
}
