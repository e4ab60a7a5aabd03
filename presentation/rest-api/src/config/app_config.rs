use super::{
    cors_config, fixtures_config::FixturesConfig, openai_config::OpenAIConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub openai: OpenAIConfig,
    pub fixtures: FixturesConfig,
}

impl AppConfig {
    /// Fails when a required variable is missing or a value cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            openai: OpenAIConfig::from_env()?,
            fixtures: FixturesConfig::from_env(),
        })
    }
}
