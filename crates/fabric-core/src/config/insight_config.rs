//! Top-offender insight configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOP_N;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InsightConfig {
    /// Rows kept per category. Default: 10.
    pub top_n: Option<usize>,
}

impl InsightConfig {
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(DEFAULT_TOP_N)
    }
}
