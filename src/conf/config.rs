use std::time::Duration;

use config::{Config as CConfig, ConfigBuilder, Environment, builder::DefaultState};
use serde::{Deserialize, Serialize};

use crate::{
    conf::{ClinicConfig, PurchaseConfig, ServerConfig},
    core::ClinicError::{self, ConfigParsingError},
};

const ENV_PREFIX: &str = "PETCLINIC";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub clinic: ClinicConfig,
    #[serde(default)]
    pub purchase: PurchaseConfig,
}

impl Config {
    pub fn from_str(toml_str: &str) -> Result<Config, ClinicError> {
        let builder = CConfig::builder()
            .add_source(config::File::from_str(toml_str, config::FileFormat::Toml));
        Self::build(builder)
    }

    /// Loads an optional TOML file, then applies `PETCLINIC_*` environment overrides
    /// (`PETCLINIC_SERVER__PORT=8080` sets `server.port`).
    pub fn load(path: Option<&str>) -> Result<Config, ClinicError> {
        let mut builder = CConfig::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Config, ClinicError> {
        let config = builder
            .build()
            .map_err(|e| ConfigParsingError(e.to_string()))?
            .try_deserialize::<Config>()
            .map_err(|e| ConfigParsingError(e.to_string()))?;
        return Ok(config);
    }

    pub fn with_purchase_delay(mut self, delay: Duration) -> Self {
        self.purchase.delay = delay;
        self
    }
}
