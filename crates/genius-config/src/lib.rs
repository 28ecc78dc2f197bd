// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://api.genius.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeniusConfig {
    /// Genius developer access token.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Request timeout; `None` leaves the HTTP client default in place.
    pub timeout_secs: Option<u64>,
    pub optimize_query: bool,
}

impl Default for GeniusConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            optimize_query: false,
        }
    }
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: GENIUS_).
pub fn load(config_path: Option<&Path>) -> Result<GeniusConfig> {
    let mut figment = Figment::from(Serialized::defaults(GeniusConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("GENIUS_").split("__"));

    let config: GeniusConfig = figment.extract()?;
    info!(
        target: "config",
        base_url = %config.base_url,
        has_api_key = config.api_key.is_some(),
        "configuration loaded"
    );
    Ok(config)
}
