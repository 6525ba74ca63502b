use super::{
    catalog_config::CatalogConfig, cors_config, groq_config::GroqConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub groq: GroqConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Fails when a required variable (the Groq API key) is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            groq: GroqConfig::from_env()?,
            catalog: CatalogConfig::from_env(),
        })
    }
}
