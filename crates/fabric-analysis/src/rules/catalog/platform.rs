//! Platform and security: firmware levels, partition/management keys,
//! diagnostic event logs.

use fabric_core::types::Severity;

use crate::resolver::{aliases, Aliases};
use crate::rules::types::{vocabulary_rules, Condition, Rule, RuleSet};

pub const FIRMWARE: &str = "firmware";
pub const SECURITY: &str = "security";
pub const EVENTS: &str = "events";

// Firmware
pub const FW_VERSION: Aliases = &[
    "FWVersion",
    "FW Version",
    "FirmwareVersion",
    "Firmware Version",
    "fw_version",
];
pub const FW_LATEST: Aliases = &[
    "LatestFWVersion",
    "Latest FW Version",
    "RecommendedVersion",
    "Recommended Version",
    "latest_fw_version",
];
pub const FW_EXPECTED: Aliases = &[
    "ExpectedFWVersion",
    "Expected FW Version",
    "FabricFWVersion",
    "expected_fw_version",
];
pub const FW_STATUS: Aliases = &["Status", "Firmware Status", "status"];

// Security
pub const PKEY_VIOLATIONS: Aliases = &[
    "PKeyViolations",
    "PKey Violations",
    "P_Key Violations",
    "pkey_violations",
];
pub const MKEY: Aliases = &["MKey", "M_Key", "mkey"];
pub const SECURITY_STATUS: Aliases = &["Status", "Security Status", "status"];

pub fn firmware() -> RuleSet {
    let [status_critical, status_warning, status_info] = vocabulary_rules(
        "firmware.status",
        FW_STATUS,
        "Firmware reported status {value}",
        "firmware_outdated",
    );
    RuleSet::new(FIRMWARE)
        .require(FW_VERSION)
        .require(FW_STATUS)
        .rule(status_critical)
        .rule(status_warning)
        .rule(
            Rule::new(
                "firmware.version.outdated",
                Severity::Warning,
                Condition::VersionBelow {
                    field: FW_VERSION,
                    reference: FW_LATEST,
                },
            )
            .reason("Firmware {value} older than recommended {limit}")
            .issue("firmware_outdated"),
        )
        .rule(status_info)
        .rule(
            Rule::new(
                "firmware.version.mismatch",
                Severity::Info,
                Condition::mismatch(FW_VERSION, FW_EXPECTED),
            )
            .reason("Firmware {value} differs from fabric baseline {limit}")
            .issue("firmware_mismatch"),
        )
}

pub fn security() -> RuleSet {
    let [status_critical, status_warning, status_info] = vocabulary_rules(
        "security.status",
        SECURITY_STATUS,
        "Security check reported {value}",
        "pkey_violations",
    );
    RuleSet::new(SECURITY)
        .require(PKEY_VIOLATIONS)
        .require(MKEY)
        .require(SECURITY_STATUS)
        .rule(
            Rule::new(
                "security.pkey.critical",
                Severity::Critical,
                Condition::at_least(PKEY_VIOLATIONS, 100.0),
            )
            .reason("{value} partition key violations, at or above {limit}")
            .issue("pkey_violations"),
        )
        .rule(status_critical)
        .rule(
            Rule::new(
                "security.pkey.warning",
                Severity::Warning,
                Condition::at_least(PKEY_VIOLATIONS, 1.0),
            )
            .reason("{value} partition key violations")
            .issue("pkey_violations"),
        )
        .rule(
            Rule::new(
                "security.mkey.unset",
                Severity::Warning,
                Condition::FlagClear { field: MKEY },
            )
            .reason("Management key not set ({value})")
            .issue("mkey_unset"),
        )
        .rule(status_warning)
        .rule(status_info)
}

pub fn events() -> RuleSet {
    RuleSet::new(EVENTS)
        .require(aliases::SEVERITY)
        .rules(vocabulary_rules(
            "events.severity",
            aliases::SEVERITY,
            "Diagnostic event with severity {value}",
            "diagnostic_event",
        ))
}
