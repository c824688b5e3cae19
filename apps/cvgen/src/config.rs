use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::template::PageChrome;

const DEFAULT_PORT: u16 = 3001;

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// PNG placed in the page header of every generated document.
    pub logo_path: Option<PathBuf>,
    pub footer_name: Option<String>,
    pub footer_address: Option<String>,
    pub footer_contact: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: match optional_env("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            logo_path: optional_env("CV_LOGO_PATH").map(PathBuf::from),
            footer_name: optional_env("CV_FOOTER_NAME"),
            footer_address: optional_env("CV_FOOTER_ADDRESS"),
            footer_contact: optional_env("CV_FOOTER_CONTACT"),
        })
    }

    /// Page header/footer content: configured values over the built-in defaults.
    pub async fn page_chrome(&self) -> Result<PageChrome> {
        let defaults = PageChrome::default();

        let logo = match &self.logo_path {
            Some(path) => Some(
                tokio::fs::read(path)
                    .await
                    .with_context(|| format!("Failed to read logo '{}'", path.display()))?,
            ),
            None => None,
        };

        Ok(PageChrome {
            logo,
            footer_name: self.footer_name.clone().unwrap_or(defaults.footer_name),
            footer_address: self
                .footer_address
                .clone()
                .unwrap_or(defaults.footer_address),
            footer_contact: self
                .footer_contact
                .clone()
                .unwrap_or(defaults.footer_contact),
            ..defaults
        })
    }
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
