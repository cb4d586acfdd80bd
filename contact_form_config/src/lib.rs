use std::{net::IpAddr, path::PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files, applied in order on top of
/// the defaults.
pub const CONFIG_PATH_ENV: &str = "CONTACT_FORM_CONFIG";

pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATH_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();
    load_paths(&paths)
}

pub fn load_paths(paths: &[PathBuf]) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    paths
        .iter()
        .filter(|path| !path.as_os_str().is_empty())
        .try_fold(builder, |builder, path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            tracing::debug!("Loading config file {}", path.display());
            anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    /// Heading and page title of the contact form.
    pub title: String,
}
