mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config file (if any) and layers the environment on top.
pub async fn load() -> Result<Config> {
    load_with(|key| env::var(key).ok()).await
}

/// [`load`] with an injectable variable lookup.
///
/// A file named through `CONFIG_PATH` must exist; the implicit `config.yaml`
/// is optional and defaults apply when it is absent.
pub async fn load_with<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup("CONFIG_PATH") {
        Some(path) => load_file(&path).await?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_file(DEFAULT_CONFIG_PATH).await?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config, lookup)?;

    Ok(config)
}

pub async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Applies `GEMINI_API_KEY`, `APP_NAME`, `ALLOWED_ORIGINS` and friends.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("GEMINI_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Some(model) = lookup("GEMINI_MODEL") {
        config.llm.model = model;
    }
    if let Some(base_url) = lookup("GEMINI_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(name) = lookup("APP_NAME") {
        config.app.name = name;
    }
    if let Some(version) = lookup("APP_VERSION") {
        config.app.version = version;
    }
    if let Some(origins) = lookup("ALLOWED_ORIGINS") {
        config.server.allowed_origins = parse_origins(&origins);
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(())
}

/// Splits a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
