//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `CHEATSHEET_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return ConfigError::InvalidValue.

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_EXPAND_ALL, ENV_REFERENCE_URL, ENV_THEME};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean the way shells usually spell it.
pub(crate) fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let parsed = theme
            .parse::<ColorTheme>()
            .map_err(|message| ConfigError::InvalidValue {
                var: ENV_THEME.to_string(),
                message,
            })?;
        loader.set_theme(Some(parsed));
    }
    if let Some(url) = env_var_or_none(ENV_REFERENCE_URL) {
        loader.set_reference_base_url(Some(url));
    }
    if let Some(expand) = env_var_or_none(ENV_EXPAND_ALL) {
        loader.set_expand_all(Some(parse_bool(ENV_EXPAND_ALL, &expand)?));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "off").unwrap());
        assert!(matches!(
            parse_bool("X", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
