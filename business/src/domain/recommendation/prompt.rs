use crate::domain::product::model::Product;

/// System message sent with every recommendation request.
pub const SYSTEM_PROMPT: &str = "You are a product recommendation engine.";

/// Low temperature keeps the reply close to the requested JSON shape.
pub const RECOMMENDATION_TEMPERATURE: f32 = 0.2;

/// Upper bound on how many products the model is asked to pick.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Builds the user prompt listing the whole catalog and the user's preferences.
///
/// The preference text is embedded verbatim between double quotes. It is not
/// escaped or validated, so a crafted preference can still try to override the
/// instructions (prompt injection); the id whitelist applied to the reply is
/// the only guard.
pub fn build_prompt(products: &[Product], preferences: &str) -> String {
    let catalog = products
        .iter()
        .map(|p| {
            // Debug formatting keeps "25.0" rather than "25".
            format!(
                "- ID: {}, name: {}, category: {}, price: {:?}",
                p.id, p.name, p.category, p.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        r#"
You are a precise product recommendation engine.

You are given:
1) A fixed catalog of products.
2) A user's free-text preferences.

Your job:
- Select up to {max} products from the catalog that best match the user's preferences.
- If no products match well, return an empty array [].
- You MUST ONLY choose from the provided product IDs.
- You MUST respond with VALID JSON: a simple array of integers representing product IDs.

CATALOG:
{catalog}

USER PREFERENCES:
"{preferences}"

RESPONSE FORMAT (important):
- Respond with ONLY a JSON array of product IDs.
- No explanation, no extra keys, no comments.
- Examples of valid responses:
  - [1, 3]
  - []
If you are unsure, return an empty array: [].
"#,
        max = MAX_RECOMMENDATIONS,
    );

    prompt.trim().to_string()
}
