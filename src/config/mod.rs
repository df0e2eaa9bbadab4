mod basic;

pub use basic::BasicConfig;

use crate::error::AlmanacError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,
}

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "ALMANAC_";

impl Config {
    /// Builds a Figment that merges defaults, an optional TOML file and `ALMANAC_` env vars.
    ///
    /// Nested keys use a double underscore: `ALMANAC_BASIC__LISTEN_PORT=9000`.
    pub fn figment_from(path: impl AsRef<Path>) -> Figment {
        let path = path.as_ref();
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if path.is_file() {
            figment.merge(Toml::file(path))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn figment() -> Figment {
        Self::figment_from(PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Loads configuration from defaults, `config.toml` if present, and the environment.
    pub fn load() -> Result<Self, AlmanacError> {
        Ok(Self::figment().extract()?)
    }

    pub fn listen_socket(&self) -> SocketAddr {
        SocketAddr::from((self.basic.listen_addr, self.basic.listen_port))
    }
}
