use super::model::Product;

/// Read-only access to the product catalog.
///
/// Implementations are loaded once at startup and shared between requests,
/// so they must be safe for unsynchronized concurrent reads.
pub trait ProductCatalog: Send + Sync {
    /// Every product, in catalog order.
    fn products(&self) -> Vec<Product>;
}
