//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Validate values and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods (CLI flags) take precedence over environment variables,
//!   which take precedence over defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use url::Url;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_REFERENCE_BASE_URL, ENV_DOTENV_DISABLED};
use crate::types::{ColorTheme, Config};

/// Configuration loader that builds config from overrides and environment variables.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    theme: Option<ColorTheme>,
    reference_base_url: Option<String>,
    expand_all: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    ///
    /// Variables that are set replace earlier values, so call this before
    /// applying CLI overrides.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the reference base URL.
    pub fn with_reference_base_url(mut self, url: impl Into<String>) -> Self {
        self.reference_base_url = Some(url.into());
        self
    }

    /// Set whether the cheatsheet starts expanded.
    pub fn with_expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = Some(expand_all);
        self
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_reference_base_url(&mut self, url: Option<String>) {
        self.reference_base_url = url;
    }

    pub(crate) fn set_expand_all(&mut self, expand_all: Option<bool>) {
        self.expand_all = expand_all;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let reference_base_url = validate_reference_url(
            self.reference_base_url
                .as_deref()
                .unwrap_or(DEFAULT_REFERENCE_BASE_URL),
        )?;

        Ok(Config {
            theme: self.theme.unwrap_or_default(),
            reference_base_url,
            expand_all: self.expand_all.unwrap_or(false),
        })
    }
}

/// Validate a reference base URL and normalize it to end with `/`.
fn validate_reference_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidReferenceUrl {
        url: raw.to_string(),
        message,
    };

    let parsed = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme '{}' is not supported, use http or https",
            parsed.scheme()
        )));
    }
    if parsed.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }

    let mut normalized = parsed.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
