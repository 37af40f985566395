//! Console reporter: plain-text summary with optional ANSI color.

use std::fmt::Write;

use fabric_core::errors::ReportError;
use fabric_core::types::Severity;

use super::Reporter;
use crate::health::HealthStatus;
use crate::pipeline::AnalysisReport;

/// Issues listed per tier before the rest are elided.
const MAX_ISSUES_PER_TIER: usize = 20;

pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn status_symbol(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "✗",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
            Severity::Ok => "✓",
        }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Critical => "\x1b[31m", // red
            Severity::Warning => "\x1b[33m",  // yellow
            Severity::Info => "\x1b[36m",     // cyan
            Severity::Ok => "\x1b[32m",       // green
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn status_severity(status: HealthStatus) -> Severity {
        match status {
            HealthStatus::Healthy => Severity::Ok,
            HealthStatus::Warning => Severity::Warning,
            HealthStatus::Critical => Severity::Critical,
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let health = &report.health;
        let mut out = String::new();

        out.push_str("╔══════════════════════════════════════════╗\n");
        out.push_str("║          Fabric Health Report            ║\n");
        out.push_str("╚══════════════════════════════════════════╝\n\n");

        let overall = Self::status_severity(health.status);
        writeln!(
            out,
            "{}Score {} / 100  grade {}  {}{}",
            self.color_start(overall),
            health.score,
            health.grade,
            health.status,
            self.color_end()
        )?;
        writeln!(
            out,
            "critical {}  warning {}  info {}\n",
            health.totals.critical, health.totals.warning, health.totals.info
        )?;

        for group in &health.groups {
            writeln!(
                out,
                "{}{} {}{} ({})",
                self.color_start(group.status),
                Self::status_symbol(group.status),
                group.label,
                self.color_end(),
                group.score
            )?;
            for check in report
                .checks
                .iter()
                .filter(|c| group.checks.contains(&c.check_id))
            {
                writeln!(
                    out,
                    "  {} {:<24} {:>5} rows  {} critical  {} warning  {} info",
                    Self::status_symbol(check.status),
                    check.label,
                    check.total_rows,
                    check.critical(),
                    check.warning(),
                    check.info()
                )?;
            }
        }

        if !health.issues.is_empty() {
            out.push_str("\nIssues\n");
            for &tier in &[Severity::Critical, Severity::Warning, Severity::Info] {
                let total = health.issues_with(tier).count();
                for issue in health.issues_with(tier).take(MAX_ISSUES_PER_TIER) {
                    let location = match (&issue.node_name, &issue.port_number) {
                        (Some(node), Some(port)) => format!(" [{node}:{port}]"),
                        (Some(node), None) => format!(" [{node}]"),
                        _ => String::new(),
                    };
                    writeln!(
                        out,
                        "  {}{}{}: {}{}",
                        self.color_start(tier),
                        tier,
                        self.color_end(),
                        issue.description,
                        location
                    )?;
                }
                if total > MAX_ISSUES_PER_TIER {
                    writeln!(out, "  ... {} more {tier}", total - MAX_ISSUES_PER_TIER)?;
                }
            }
        }

        if !report.action_plan.is_empty() {
            out.push_str("\nAction plan\n");
            for item in &report.action_plan {
                writeln!(out, "  {}. [{}] {}", item.priority, item.severity, item.action)?;
            }
        }

        if !report.unrecognized_categories.is_empty() {
            writeln!(
                out,
                "\nUnrecognized categories: {}",
                report.unrecognized_categories.join(", ")
            )?;
        }

        Ok(out)
    }
}
