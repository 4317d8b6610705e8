//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration from `.env`, the environment and CLI overrides.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - `load_dotenv()` runs before the environment is read.

use anyhow::{Context, Result};
use cheatsheet_config::{Config, ConfigLoader};

use crate::cli::Cli;

/// Resolve the runtime configuration for this session.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?
        .from_env()
        .context("Invalid environment configuration")?;
    apply_cli_overrides(loader, cli)
        .build()
        .context("Invalid configuration")
}

fn apply_cli_overrides(mut loader: ConfigLoader, cli: &Cli) -> ConfigLoader {
    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    if let Some(url) = &cli.reference_url {
        loader = loader.with_reference_base_url(url.clone());
    }
    // The flag can only turn expand-all on; absence defers to the environment.
    if cli.expand_all {
        loader = loader.with_expand_all(true);
    }
    loader
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheatsheet_config::ColorTheme;
    use cheatsheet_config::constants::{
        ENV_DOTENV_DISABLED, ENV_EXPAND_ALL, ENV_REFERENCE_URL, ENV_THEME,
    };
    use clap::Parser;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let mut all = vec![
            (ENV_DOTENV_DISABLED, Some("1")),
            (ENV_THEME, None),
            (ENV_REFERENCE_URL, None),
            (ENV_EXPAND_ALL, None),
        ];
        all.extend_from_slice(vars);
        temp_env::with_vars(all, f);
    }

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = Cli::parse_from([
            "cheatsheet-tui",
            "--theme",
            "dark",
            "--expand-all",
            "--reference-url",
            "https://example.com/ref",
        ]);
        let config = apply_cli_overrides(ConfigLoader::new(), &cli).build().unwrap();
        assert_eq!(config.theme, ColorTheme::Dark);
        assert!(config.expand_all);
        assert_eq!(config.reference_base_url, "https://example.com/ref/");
    }

    #[test]
    fn test_absent_flags_keep_loader_values() {
        let cli = Cli::parse_from(["cheatsheet-tui"]);
        let loader = ConfigLoader::new()
            .with_theme(ColorTheme::Light)
            .with_expand_all(true);
        let config = apply_cli_overrides(loader, &cli).build().unwrap();
        assert_eq!(config.theme, ColorTheme::Light);
        assert!(config.expand_all);
    }

    #[test]
    fn test_bad_reference_url_fails_build() {
        let cli = Cli::parse_from(["cheatsheet-tui", "--reference-url", "ftp://example.com"]);
        assert!(apply_cli_overrides(ConfigLoader::new(), &cli).build().is_err());
    }

    #[test]
    #[serial]
    fn test_env_applies_without_flags() {
        with_env(
            &[(ENV_THEME, Some("monochrome")), (ENV_EXPAND_ALL, Some("true"))],
            || {
                let config = load_config(&Cli::parse_from(["cheatsheet-tui"])).unwrap();
                assert_eq!(config.theme, ColorTheme::Monochrome);
                assert!(config.expand_all);
            },
        );
    }

    #[test]
    #[serial]
    fn test_flags_beat_env() {
        with_env(
            &[
                (ENV_THEME, Some("light")),
                (ENV_REFERENCE_URL, Some("https://env.example.com/")),
            ],
            || {
                let cli = Cli::parse_from([
                    "cheatsheet-tui",
                    "--theme",
                    "dark",
                    "--reference-url",
                    "https://flag.example.com/",
                ]);
                let config = load_config(&cli).unwrap();
                assert_eq!(config.theme, ColorTheme::Dark);
                assert_eq!(config.reference_base_url, "https://flag.example.com/");
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_env_value_is_reported() {
        with_env(&[(ENV_EXPAND_ALL, Some("sometimes"))], || {
            let err = load_config(&Cli::parse_from(["cheatsheet-tui"])).unwrap_err();
            assert!(format!("{err:#}").contains(ENV_EXPAND_ALL));
        });
    }
}
