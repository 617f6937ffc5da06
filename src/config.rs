use crate::domain::config_types::{ApiBaseUrl, LogFormat, LogLevel};
use crate::domain::routes::ApiEndpoints;
use crate::error::Result;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: ApiBaseUrl,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self::load(Self::builder(&environment)?)
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        Ok(builder.build()?.try_deserialize()?)
    }

    fn builder(environment: &str) -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            // Start with default values
            .set_default("api.base_url", ApiBaseUrl::default().into_inner())?
            .set_default("logging.level", LogLevel::default().as_str())?
            .set_default("logging.format", LogFormat::default().as_str())?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("ELSYSER").separator("__")))
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(self.api.base_url.as_ref())
    }
}
