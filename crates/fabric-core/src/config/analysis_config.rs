//! Check selection and rule tuning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration for which checks run and how their rules are tuned.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Checks to run. Empty means every registered check.
    #[serde(default)]
    pub enabled_checks: Vec<String>,
    /// Checks to skip, applied after `enabled_checks`.
    #[serde(default)]
    pub disabled_checks: Vec<String>,
    /// Rule threshold overrides keyed `<check>.<measure>.<tier>`,
    /// e.g. `"cable.temperature.critical" = 85.0`.
    #[serde(default)]
    pub threshold_overrides: BTreeMap<String, f64>,
    /// Merge rows sharing a (node GUID, port) key before classification.
    /// Default: true.
    pub merge_port_records: Option<bool>,
    /// Classify rows missing every required field as info instead of ok.
    /// Default: false.
    pub flag_insufficient_data: Option<bool>,
}

impl AnalysisConfig {
    pub fn effective_merge_port_records(&self) -> bool {
        self.merge_port_records.unwrap_or(true)
    }

    pub fn effective_flag_insufficient_data(&self) -> bool {
        self.flag_insufficient_data.unwrap_or(false)
    }

    /// Whether a check id passes the enabled/disabled filters.
    pub fn is_check_enabled(&self, check_id: &str) -> bool {
        let enabled = self.enabled_checks.is_empty()
            || self.enabled_checks.iter().any(|c| c == check_id);
        enabled && !self.disabled_checks.iter().any(|c| c == check_id)
    }
}
