use anyhow::Context;
use serde::Deserialize;
use std::{fs, net::SocketAddr, path::Path};
use tracing::debug;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8000";

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Address to bind the HTTP server to, e.g. "127.0.0.1:8000".
    // If not set, defaults to `DEFAULT_LISTEN`.
    pub listen: Option<String>,
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let cfg_str = fs::read_to_string(path)?;
        Self::from_toml(&cfg_str)
    }

    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Like `from_file`, but a missing file yields the default config.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            debug!("Config file '{}' not found, using defaults", path);
            return Ok(Self::default());
        }
        Self::from_file(path).with_context(|| format!("Failed to load config '{}'", path))
    }

    /// Applies an override for `listen`, typically taken from the environment.
    pub fn with_listen_override(mut self, listen: Option<String>) -> Self {
        if let Some(l) = listen {
            self.listen = Some(l);
        }
        self
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let listen = self.listen.as_deref().unwrap_or(DEFAULT_LISTEN);
        listen
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address '{}': {}", listen, e))
    }
}
