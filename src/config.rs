use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Backend base URL. Not validated.
    pub api_url: Option<String>,
    /// Close the window once the link has been handed to the browser.
    pub close_after_submit: bool,
    /// Overrides the desktop language, e.g. "pt-BR".
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            close_after_submit: true,
            language: None,
        }
    }
}

impl Config {
    /// Defaults, then the user config file, then `.env` and the process environment.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        match dotenvy::dotenv() {
            Ok(path) => log::info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Ignoring unreadable .env file: {}", e),
        }

        config.apply_env(|key| std::env::var(key).ok());

        if config.api_url.is_none() {
            log::warn!(
                "{} is not set; download links will have no host",
                API_URL_ENV
            );
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV) {
            self.api_url = Some(url);
        }
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or("")
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ytdl-form").join("config.toml"))
}
