//! JSON reporter.

use fabric_core::errors::ReportError;

use super::Reporter;
use crate::pipeline::AnalysisReport;

/// Serializes the whole report. Field order is fixed, so identical reports
/// render byte-identical.
#[derive(Debug, Clone, Copy)]
pub struct JsonReporter {
    pub pretty: bool,
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(rendered)
    }
}
