//! Top-level gwaudit configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::audit_config::split_list;
use super::{AuditConfig, ReportConfig};
use crate::constants::{PROJECT_CONFIG_FILE, REPORT_FORMATS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GWAUDIT_*`)
/// 3. Project config (`gwaudit.toml` in project root)
/// 4. User config (`~/.gwaudit/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GwauditConfig {
    pub audit: AuditConfig,
    pub report: ReportConfig,
}

/// Override arguments coming from the embedding command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub ignore: Option<Vec<String>>,
    pub severities: Option<Vec<String>>,
    pub format: Option<String>,
    pub color: Option<bool>,
}

impl GwauditConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "skipping user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            format = config.report.effective_format(),
            ignore = config.audit.effective_ignore().len(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// Rule ids and severity strings are not checked; unknown entries
    /// match nothing.
    pub fn validate(config: &GwauditConfig) -> Result<(), ConfigError> {
        if let Some(ref format) = config.report.format {
            if !REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!("must be one of: {}", REPORT_FORMATS.join(", ")),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.gwaudit/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".gwaudit").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut GwauditConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GwauditConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut GwauditConfig, other: &GwauditConfig) {
        if other.audit.ignore.is_some() {
            base.audit.ignore = other.audit.ignore.clone();
        }
        if other.audit.severities.is_some() {
            base.audit.severities = other.audit.severities.clone();
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.color.is_some() {
            base.report.color = other.report.color;
        }
    }

    /// Apply environment variable overrides.
    ///
    /// List variables are comma separated. `GWAUDIT_AUDIT_SEVERITIES=""`
    /// sets an explicitly empty allow-list.
    fn apply_env_overrides(config: &mut GwauditConfig) {
        if let Ok(val) = std::env::var("GWAUDIT_AUDIT_IGNORE") {
            config.audit.ignore = Some(split_list(&val));
        }
        if let Ok(val) = std::env::var("GWAUDIT_AUDIT_SEVERITIES") {
            config.audit.severities = Some(split_list(&val));
        }
        if let Ok(val) = std::env::var("GWAUDIT_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("GWAUDIT_REPORT_COLOR") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.color = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GwauditConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.ignore {
            config.audit.ignore = Some(v.clone());
        }
        if let Some(ref v) = cli.severities {
            config.audit.severities = Some(v.clone());
        }
        if let Some(ref v) = cli.format {
            config.report.format = Some(v.clone());
        }
        if let Some(v) = cli.color {
            config.report.color = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
