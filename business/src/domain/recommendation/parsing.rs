use std::collections::HashSet;

use serde_json::Value;

use crate::domain::product::model::{Product, ProductId};

/// Extracts a JSON array from a model reply.
///
/// Tries the whole reply as a JSON array first. Otherwise parses the first
/// greedy `[ ... ]` span (which may cross newlines). Any other outcome yields
/// an empty vector; an unparseable reply is not an error.
pub fn extract_id_array(text: &str) -> Vec<Value> {
    if let Some(values) = parse_array(text) {
        return values;
    }

    regex::Regex::new(r"\[[\s\S]*\]")
        .ok()
        .and_then(|re| re.find(text))
        .and_then(|m| parse_array(m.as_str()))
        .unwrap_or_default()
}

fn parse_array(text: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(values)) => Some(values),
        _ => None,
    }
}

/// Keeps the integer values that name a known product.
///
/// Order is preserved and duplicates are kept.
pub fn validate_ids(values: &[Value], known_ids: &HashSet<ProductId>) -> Vec<ProductId> {
    values
        .iter()
        .filter_map(|v| v.as_u64())
        .filter_map(|n| ProductId::try_from(n).ok())
        .filter(|id| known_ids.contains(id))
        .collect()
}

/// Catalog entries whose id appears in `ids`, in catalog order.
pub fn select_products(catalog: &[Product], ids: &[ProductId]) -> Vec<Product> {
    let wanted: HashSet<ProductId> = ids.iter().copied().collect();
    catalog
        .iter()
        .filter(|p| wanted.contains(&p.id))
        .cloned()
        .collect()
}
