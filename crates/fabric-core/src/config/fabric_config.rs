//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, InsightConfig, ScoringConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`FABRIC_*`)
/// 3. Project config (`fabric-health.toml` in the analysis root)
/// 4. User config (`~/.fabric-health/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FabricConfig {
    pub scoring: ScoringConfig,
    pub analysis: AnalysisConfig,
    pub insights: InsightConfig,
}

/// Overrides supplied by the embedding service (highest priority).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub critical_weight: Option<f64>,
    pub warning_weight: Option<f64>,
    pub top_n: Option<usize>,
    pub flag_insufficient_data: Option<bool>,
}

impl FabricConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %err,
                            "ignoring unreadable user config"
                        );
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

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

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
    pub fn validate(config: &FabricConfig) -> Result<(), ConfigError> {
        let scoring = &config.scoring;
        let critical = scoring.effective_critical_weight();
        let warning = scoring.effective_warning_weight();
        let info = scoring.effective_info_weight();

        for (field, weight) in [
            ("scoring.critical_weight", critical),
            ("scoring.warning_weight", warning),
            ("scoring.info_weight", info),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        if critical <= warning {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.critical_weight".to_string(),
                message: "must be greater than scoring.warning_weight".to_string(),
            });
        }
        if warning < info {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.warning_weight".to_string(),
                message: "must not be less than scoring.info_weight".to_string(),
            });
        }

        let healthy = scoring.effective_healthy_threshold();
        let warn_band = scoring.effective_warning_threshold();
        if healthy > 100 || warn_band > 100 {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.healthy_threshold".to_string(),
                message: "status thresholds must be between 0 and 100".to_string(),
            });
        }
        if healthy < warn_band {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.healthy_threshold".to_string(),
                message: "must not be below scoring.warning_threshold".to_string(),
            });
        }

        if config.insights.effective_top_n() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "insights.top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if let Some((key, _)) = config
            .analysis
            .threshold_overrides
            .iter()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(ConfigError::ValidationFailed {
                field: format!("analysis.threshold_overrides.{key}"),
                message: "must be a finite number".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the user config path: `~/.fabric-health/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut FabricConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: FabricConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut FabricConfig, other: &FabricConfig) {
        // Scoring
        if other.scoring.critical_weight.is_some() {
            base.scoring.critical_weight = other.scoring.critical_weight;
        }
        if other.scoring.warning_weight.is_some() {
            base.scoring.warning_weight = other.scoring.warning_weight;
        }
        if other.scoring.info_weight.is_some() {
            base.scoring.info_weight = other.scoring.info_weight;
        }
        if other.scoring.healthy_threshold.is_some() {
            base.scoring.healthy_threshold = other.scoring.healthy_threshold;
        }
        if other.scoring.warning_threshold.is_some() {
            base.scoring.warning_threshold = other.scoring.warning_threshold;
        }

        // Analysis
        if !other.analysis.enabled_checks.is_empty() {
            base.analysis.enabled_checks = other.analysis.enabled_checks.clone();
        }
        if !other.analysis.disabled_checks.is_empty() {
            base.analysis.disabled_checks = other.analysis.disabled_checks.clone();
        }
        for (key, value) in &other.analysis.threshold_overrides {
            base.analysis.threshold_overrides.insert(key.clone(), *value);
        }
        if other.analysis.merge_port_records.is_some() {
            base.analysis.merge_port_records = other.analysis.merge_port_records;
        }
        if other.analysis.flag_insufficient_data.is_some() {
            base.analysis.flag_insufficient_data = other.analysis.flag_insufficient_data;
        }

        // Insights
        if other.insights.top_n.is_some() {
            base.insights.top_n = other.insights.top_n;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FABRIC_SCORING_CRITICAL_WEIGHT`, `FABRIC_INSIGHTS_TOP_N`, etc.
    fn apply_env_overrides(config: &mut FabricConfig) {
        if let Some(v) = env_parse::<f64>("FABRIC_SCORING_CRITICAL_WEIGHT") {
            config.scoring.critical_weight = Some(v);
        }
        if let Some(v) = env_parse::<f64>("FABRIC_SCORING_WARNING_WEIGHT") {
            config.scoring.warning_weight = Some(v);
        }
        if let Some(v) = env_parse::<u32>("FABRIC_SCORING_HEALTHY_THRESHOLD") {
            config.scoring.healthy_threshold = Some(v);
        }
        if let Some(v) = env_parse::<u32>("FABRIC_SCORING_WARNING_THRESHOLD") {
            config.scoring.warning_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("FABRIC_INSIGHTS_TOP_N") {
            config.insights.top_n = Some(v);
        }
        if let Some(v) = env_parse::<bool>("FABRIC_ANALYSIS_FLAG_INSUFFICIENT_DATA") {
            config.analysis.flag_insufficient_data = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut FabricConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.critical_weight {
            config.scoring.critical_weight = Some(v);
        }
        if let Some(v) = overrides.warning_weight {
            config.scoring.warning_weight = Some(v);
        }
        if let Some(v) = overrides.top_n {
            config.insights.top_n = Some(v);
        }
        if let Some(v) = overrides.flag_insufficient_data {
            config.analysis.flag_insufficient_data = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Render(e.to_string()))
    }
}

/// Parse an env var, ignoring unset or unparsable values.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
