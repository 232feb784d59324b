//! Runtime settings for the expenses service.
//!
//! Values are layered: built-in defaults, then the optional
//! `config/settings.toml`, then environment variables (`PORT`, `BIND`,
//! `DATABASE_URL`, `LOG_LEVEL`).
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_PORT: u16 = 3500;
const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_DATABASE_URL: &str = "sqlite:./expenses.db?mode=rwc";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub port: u16,
    pub bind: String,
    pub database_url: String,
    pub log_level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources("config/settings", Environment::default().try_parsing(true))
    }

    fn from_sources(file: &str, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("bind", DEFAULT_BIND)?
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(File::with_name(file).required(false))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
