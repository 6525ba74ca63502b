use anyhow::{Context, bail};

/// Configuration for Groq API access.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl GroqConfig {
    /// Load Groq configuration from environment variables
    ///
    /// Environment variables:
    /// - GROQ_API_KEY: API key (required)
    /// - GROQ_MODEL: Model identifier (default: "llama-3.1-8b-instant")
    /// - GROQ_BASE_URL: API base URL (default: "https://api.groq.com/openai/v1")
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("GROQ_API_KEY").context("GROQ_API_KEY not set in environment")?;
        if api_key.trim().is_empty() {
            bail!("GROQ_API_KEY is empty");
        }

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_key,
            model: non_empty("GROQ_MODEL"),
            base_url: non_empty("GROQ_BASE_URL"),
        })
    }
}
