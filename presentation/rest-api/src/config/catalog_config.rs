use std::path::PathBuf;

/// Where the product catalog comes from.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in catalog is used when unset.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_PATH: JSON file with `[{id, name, category, price}]` (optional)
    pub fn from_env() -> Self {
        let path = std::env::var("CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Self { path }
    }
}
