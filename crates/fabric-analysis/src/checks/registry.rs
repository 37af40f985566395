//! Registry of built-in checks and the groups they report under.

use fabric_core::config::AnalysisConfig;
use fabric_core::types::Severity;

use super::types::{CheckDefinition, Group};
use crate::insights::metrics;
use crate::rules::catalog::{self, link, physical, platform, traffic};
use crate::rules::RuleSet;

pub const PHYSICAL: &str = "physical";
pub const LINK: &str = "link";
pub const TRAFFIC: &str = "traffic";
pub const PLATFORM: &str = "platform";

const GROUPS: &[(&str, &str)] = &[
    (PHYSICAL, "Physical Layer"),
    (LINK, "Link Layer"),
    (TRAFFIC, "Traffic & Routing"),
    (PLATFORM, "Platform & Security"),
];

/// Ordered set of check definitions plus their groups.
#[derive(Debug, Clone)]
pub struct CheckRegistry {
    checks: Vec<CheckDefinition>,
    groups: Vec<Group>,
}

impl CheckRegistry {
    /// Build a registry from definitions; groups are derived from the
    /// definitions' group ids, known groups first in their fixed order.
    pub fn new(checks: Vec<CheckDefinition>) -> Self {
        let mut groups: Vec<Group> = GROUPS
            .iter()
            .map(|&(id, label)| Group::new(id, label))
            .collect();
        for check in &checks {
            match groups.iter_mut().find(|g| g.id == check.group) {
                Some(group) => group.checks.push(check.id),
                None => {
                    let mut group = Group::new(check.group, check.group);
                    group.checks.push(check.id);
                    groups.push(group);
                }
            }
        }
        groups.retain(|g| !g.checks.is_empty());
        Self { checks, groups }
    }

    /// Every built-in check with default thresholds.
    pub fn builtin() -> Self {
        Self::new(builtin_checks())
    }

    /// Built-in checks filtered by `enabled_checks`/`disabled_checks`, with
    /// threshold overrides applied.
    pub fn configured(config: &AnalysisConfig) -> Self {
        let mut checks: Vec<CheckDefinition> = builtin_checks()
            .into_iter()
            .filter(|c| config.is_check_enabled(c.id))
            .collect();

        if !config.threshold_overrides.is_empty() {
            let mut applied = 0;
            for check in &mut checks {
                applied += check.rules.apply_overrides(&config.threshold_overrides);
            }
            tracing::debug!(
                applied,
                requested = config.threshold_overrides.len(),
                "threshold overrides applied"
            );
            for key in config.threshold_overrides.keys() {
                if !checks.iter().any(|c| c.rules.limit(key).is_some()) {
                    tracing::warn!(key = %key, "threshold override matches no active rule");
                }
            }
        }

        Self::new(checks)
    }

    pub fn checks(&self) -> &[CheckDefinition] {
        &self.checks
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get(&self, id: &str) -> Option<&CheckDefinition> {
        self.checks.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|c| c.id)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn rules(category: &str) -> RuleSet {
    catalog::rule_set(category).unwrap_or_default()
}

fn builtin_checks() -> Vec<CheckDefinition> {
    vec![
        // Physical
        CheckDefinition::new(physical::CABLE, "Cables & Optics", PHYSICAL, rules(physical::CABLE))
            .description("Transceiver temperature, optical power and voltage alarms, cable status")
            .summary_issue("cable_fault")
            .merge_by_port(true)
            .rank_metric(metrics::cable_temperature),
        CheckDefinition::new(physical::FAN, "Fans", PHYSICAL, rules(physical::FAN))
            .description("Fan speed against minimum, fan status and alerts")
            .summary_issue("fan_failure")
            .rank_metric(metrics::fan_deficit),
        CheckDefinition::new(
            physical::TEMPERATURE,
            "Temperature Sensors",
            PHYSICAL,
            rules(physical::TEMPERATURE),
        )
        .description("Board and ASIC sensors against their thresholds")
        .summary_issue("sensor_overheat")
        .rank_metric(metrics::sensor_temperature),
        CheckDefinition::new(physical::POWER, "Power Supplies", PHYSICAL, rules(physical::POWER))
            .description("PSU DC state, load against capacity, alerts")
            .summary_issue("psu_failure")
            .rank_metric(metrics::power_utilization),
        // Link
        CheckDefinition::new(link::BER, "Signal Quality (BER)", LINK, rules(link::BER))
            .description("Pre- and post-FEC bit error rates")
            .summary_issue("ber_high")
            .merge_by_port(true)
            .rank_metric(metrics::ber_magnitude),
        CheckDefinition::new(link::LINK, "Port State", LINK, rules(link::LINK))
            .description("Physical and logical port state, link flaps, speed and width")
            .summary_fields(&[
                ("down_ports", Severity::Critical),
                ("flapping_ports", Severity::Critical),
                ("degraded_ports", Severity::Warning),
                ("inactive_ports", Severity::Info),
            ])
            .summary_issue("link_flapping")
            .merge_by_port(true)
            .rank_metric(metrics::link_instability),
        CheckDefinition::new(link::COUNTERS, "Port Counters", LINK, rules(link::COUNTERS))
            .description("Symbol, receive, discard and integrity error counters")
            .summary_issue("symbol_errors")
            .merge_by_port(true)
            .rank_metric(metrics::counter_errors),
        CheckDefinition::new(link::PCI, "PCIe", LINK, rules(link::PCI))
            .description("Host adapter PCIe errors and link training")
            .summary_issue("pci_degraded")
            .rank_metric(metrics::pci_errors),
        // Traffic
        CheckDefinition::new(traffic::CONGESTION, "Congestion", TRAFFIC, rules(traffic::CONGESTION))
            .description("Transmit wait and congestion ratios, congestion notifications")
            .summary_issue("congestion_moderate")
            .merge_by_port(true)
            .rank_metric(metrics::congestion_ratio),
        CheckDefinition::new(traffic::QOS, "QoS & Virtual Lanes", TRAFFIC, rules(traffic::QOS))
            .description("VL stalls, arbitration and SL2VL configuration")
            .summary_issue("qos_misconfiguration")
            .rank_metric(metrics::qos_stalls),
        CheckDefinition::new(traffic::ROUTING, "Routing", TRAFFIC, rules(traffic::ROUTING))
            .description("Reachability, forwarding tables, credit loops, path balance")
            .summary_fields(&[
                ("unreachable_destinations", Severity::Critical),
                ("missing_routes", Severity::Critical),
                ("credit_loops", Severity::Critical),
                ("long_paths", Severity::Warning),
                ("imbalanced_paths", Severity::Warning),
            ])
            .summary_issue("routing_reported")
            .rank_metric(metrics::routing_problems),
        // Platform
        CheckDefinition::new(platform::FIRMWARE, "Firmware", PLATFORM, rules(platform::FIRMWARE))
            .description("Firmware against the recommended release and fabric baseline")
            .summary_fields(&[
                ("outdated_devices", Severity::Warning),
                ("mismatched_devices", Severity::Info),
            ])
            .summary_issue("firmware_outdated"),
        CheckDefinition::new(platform::SECURITY, "Security", PLATFORM, rules(platform::SECURITY))
            .description("Partition key violations and management key protection")
            .summary_issue("pkey_violations")
            .rank_metric(metrics::security_violations),
        CheckDefinition::new(platform::EVENTS, "Diagnostic Events", PLATFORM, rules(platform::EVENTS))
            .description("Events logged during the diagnostic run")
            .summary_issue("diagnostic_event")
            .merge_by_port(true),
    ]
}
