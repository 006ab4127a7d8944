//! Layered CLI configuration.
//!
//! Values come from an optional TOML file, then from `TRIPCOST_*`
//! environment variables, e.g. `TRIPCOST_ESTIMATE__APPLY_EXTRAS=true`.

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tripcost_lib::{Currency, EstimatorOptions, OutputFormat, SessionStore};

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Estimator behaviour switches.
    pub(crate) estimate: EstimatorOptions,
    /// Output defaults.
    pub(crate) display: DisplaySettings,
    /// Session file location.
    pub(crate) session: SessionSettings,
}

/// Output defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DisplaySettings {
    /// Display currency, overriding the one stored in the session.
    pub(crate) currency: Option<Currency>,
    /// Output format when `--format` is not given.
    pub(crate) format: OutputFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SessionSettings {
    pub(crate) path: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from `path`, or from the default config file if none
    /// is given. A missing file is not an error.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map_or_else(default_config_path, Path::to_path_buf);
        tracing::debug!(path = %file.display(), "loading settings");

        let settings = Config::builder()
            .add_source(
                File::from(file)
                    .required(false)
                    .format(FileFormat::Toml),
            )
            .add_source(
                Environment::with_prefix("TRIPCOST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        settings
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Returns the session store the settings point at.
    pub(crate) fn session_store(&self) -> SessionStore {
        self.session
            .path
            .as_ref()
            .map_or_else(SessionStore::with_default_path, SessionStore::new)
    }
}

/// Returns the platform config file location, e.g.
/// `~/.config/tripcost/config.toml` on Linux.
fn default_config_path() -> PathBuf {
    ProjectDirs::from("", "", "tripcost").map_or_else(
        || PathBuf::from("tripcost.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load(Some(&temp_dir.path().join("absent.toml"))).unwrap();

        assert!(!settings.estimate.honor_budget_tier);
        assert!(!settings.estimate.apply_extras);
        assert_eq!(settings.display.format, OutputFormat::Text);
        assert!(settings.display.currency.is_none());
    }

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[estimate]
apply_extras = true

[display]
currency = "USD"
format = "json"

[session]
path = "/tmp/tripcost-session.json"
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert!(settings.estimate.apply_extras);
        assert!(!settings.estimate.honor_budget_tier);
        assert_eq!(settings.display.currency, Some(Currency::Usd));
        assert_eq!(settings.display.format, OutputFormat::Json);
        assert_eq!(
            settings.session_store().path(),
            Path::new("/tmp/tripcost-session.json")
        );
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[display]\nformat = \"xml\"\n").unwrap();

        assert!(Settings::load(Some(&path)).is_err());
    }
}
