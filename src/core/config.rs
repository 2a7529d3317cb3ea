use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::StoryGenError;
use crate::models::Config;

/// Load configuration from the project directory with CLI overrides
pub fn load_config(
    project_root: &PathBuf,
    model: Option<String>,
    url: Option<String>,
    timeout: Option<u64>,
    no_stream: bool,
) -> Result<Config, StoryGenError> {
    let config = Config::load_from_dir(project_root)?;
    let config = config.with_overrides(model, url, timeout, no_stream);

    info!(
        "Configuration loaded: model={}, url={}, timeout={}s",
        config.provider.model, config.provider.url, config.provider.timeout_seconds
    );

    Ok(config)
}

/// Resolve the provider API key: an explicit CLI value wins, otherwise the
/// environment variable named in the config. The key is opaque and never
/// logged.
pub fn resolve_api_key(cli_key: Option<String>, config: &Config) -> Result<String, StoryGenError> {
    if let Some(key) = cli_key {
        if !key.trim().is_empty() {
            debug!("Using API key from command line");
            return Ok(key);
        }
    }

    match std::env::var(&config.provider.api_key_env) {
        Ok(key) if !key.trim().is_empty() => {
            debug!("Using API key from {}", config.provider.api_key_env);
            Ok(key)
        }
        _ => Err(StoryGenError::MissingApiKey(
            config.provider.api_key_env.clone(),
        )),
    }
}
