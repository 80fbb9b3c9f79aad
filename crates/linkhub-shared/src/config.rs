//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub vercel: VercelSettings,
    pub edge_config: EdgeConfigSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
}

/// Domain hosting provider (validation + registration).
#[derive(Debug, Deserialize, Clone)]
pub struct VercelSettings {
    pub api_url: String,
    pub token: String,
    pub project_id: String,
}

/// Remote reserved-key configuration store.
#[derive(Debug, Deserialize, Clone)]
pub struct EdgeConfigSettings {
    pub url: String,
    pub token: String,
    pub cache_ttl_secs: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "linkhub-server")?
            .set_default("database.max_connections", 10)?
            .set_default("vercel.api_url", "https://api.vercel.com")?
            .set_default("edge_config.cache_ttl_secs", 60)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}
