//! Application configuration

pub mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, ServerConfig,
    ShortenerConfig, SnowflakeConfig,
};
