use serde::Deserialize;

use business::domain::product::model::{Product, ProductId};

/// Catalog entry as stored in a JSON catalog file.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            category: self.category,
            price: self.price,
        }
    }
}
