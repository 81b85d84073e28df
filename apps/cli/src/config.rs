use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::protocol::DEFAULT_CAMPAIGNS_ENDPOINT;

pub const DEFAULT_CONFIG_FILE: &str = "campaigns.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub output: PathBuf,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CAMPAIGNS_ENDPOINT.into(),
            output: PathBuf::from("campaigns.html"),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    endpoint: Option<String>,
    output: Option<PathBuf>,
    log_filter: Option<String>,
}

/// Defaults, then the config file, then the process environment.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_from(config_path, |key| std::env::var(key).ok())
}

pub(crate) fn load_settings_from(
    config_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(file_cfg) = read_config_file(config_path)? {
        if let Some(v) = file_cfg.endpoint {
            settings.endpoint = v;
        }
        if let Some(v) = file_cfg.output {
            settings.output = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("CAMPAIGNS_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("APP__ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("APP__OUTPUT") {
        settings.output = PathBuf::from(v);
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

// An explicitly named file must exist; the default one is optional.
fn read_config_file(config_path: Option<&Path>) -> anyhow::Result<Option<FileSettings>> {
    let (path, required) = match config_path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    };

    let file_cfg = toml::from_str::<FileSettings>(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    Ok(Some(file_cfg))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
