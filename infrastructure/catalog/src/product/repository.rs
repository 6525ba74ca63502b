use std::collections::HashSet;
use std::path::Path;

use business::domain::product::errors::CatalogError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductCatalog;

use super::builtin::builtin_products;
use super::entity::ProductEntity;

/// Immutable catalog held in memory for the lifetime of the process.
#[derive(Debug)]
pub struct StaticProductCatalog {
    products: Vec<Product>,
}

impl StaticProductCatalog {
    /// Validates and wraps a list of products, keeping their order.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for product in &products {
            if product.id == 0
                || product.name.trim().is_empty()
                || !product.price.is_finite()
                || product.price < 0.0
            {
                return Err(CatalogError::InvalidProduct(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products })
    }

    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    /// Loads a catalog from a JSON array of `{id, name, category, price}` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read catalog {}: {e}", path.display());
            CatalogError::Unreadable
        })?;

        let entities: Vec<ProductEntity> = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Failed to parse catalog {}: {e}", path.display());
            CatalogError::Unreadable
        })?;

        let catalog = Self::new(entities.into_iter().map(|e| e.into_domain()).collect())?;
        tracing::info!(
            "Loaded {} products from {}",
            catalog.products.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl ProductCatalog for StaticProductCatalog {
    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }
}
