//! Configuration structs

mod app_config;

pub use app_config::{
    AccessConfig, AppConfig, AppSettings, BotConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, JwtConfig, ServerConfig, SnowflakeConfig,
};
