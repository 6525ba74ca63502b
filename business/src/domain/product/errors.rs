use super::model::ProductId;

/// Raised while loading a catalog, never while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.empty")]
    Empty,
    #[error("catalog.duplicate_id: {0}")]
    DuplicateId(ProductId),
    #[error("catalog.invalid_product: {0}")]
    InvalidProduct(ProductId),
    #[error("catalog.unreadable")]
    Unreadable,
}
