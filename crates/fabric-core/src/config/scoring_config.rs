//! Health scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CRITICAL_WEIGHT, DEFAULT_HEALTHY_THRESHOLD, DEFAULT_INFO_WEIGHT,
    DEFAULT_WARNING_THRESHOLD, DEFAULT_WARNING_WEIGHT,
};

/// Penalty weights and status bands for the overall score.
///
/// `score = clamp(100 - critical*critical_weight - warning*warning_weight
///                    - info*info_weight, 0, 100)`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per critical finding. Default: 10.
    pub critical_weight: Option<f64>,
    /// Points per warning finding. Default: 3.
    pub warning_weight: Option<f64>,
    /// Points per info finding. Default: 0.
    pub info_weight: Option<f64>,
    /// Score at or above which the fabric is Healthy. Default: 80.
    pub healthy_threshold: Option<u32>,
    /// Score at or above which the fabric is Warning (else Critical). Default: 60.
    pub warning_threshold: Option<u32>,
}

impl ScoringConfig {
    pub fn effective_critical_weight(&self) -> f64 {
        self.critical_weight.unwrap_or(DEFAULT_CRITICAL_WEIGHT)
    }

    pub fn effective_warning_weight(&self) -> f64 {
        self.warning_weight.unwrap_or(DEFAULT_WARNING_WEIGHT)
    }

    pub fn effective_info_weight(&self) -> f64 {
        self.info_weight.unwrap_or(DEFAULT_INFO_WEIGHT)
    }

    pub fn effective_healthy_threshold(&self) -> u32 {
        self.healthy_threshold.unwrap_or(DEFAULT_HEALTHY_THRESHOLD)
    }

    pub fn effective_warning_threshold(&self) -> u32 {
        self.warning_threshold.unwrap_or(DEFAULT_WARNING_THRESHOLD)
    }
}
