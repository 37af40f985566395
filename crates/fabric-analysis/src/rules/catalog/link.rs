//! Link layer: signal quality, port state, error counters, PCIe.

use fabric_core::types::Severity;

use crate::resolver::Aliases;
use crate::rules::types::{vocabulary_rules, Condition, Rule, RuleSet};

pub const BER: &str = "ber";
pub const LINK: &str = "link";
pub const COUNTERS: &str = "counters";
pub const PCI: &str = "pci";

// Bit error rate
pub const SYMBOL_BER: Aliases = &["Symbol BER", "SymbolBER", "symbol_ber", "Symbol Ber"];
pub const EFFECTIVE_BER: Aliases = &["Effective BER", "EffectiveBER", "effective_ber"];
pub const RAW_BER: Aliases = &["Raw BER", "RawBER", "raw_ber"];
pub const BER_STATUS: Aliases = &["Severity", "BER Severity", "Status", "severity"];
pub const POST_FEC_BERS: &[Aliases] = &[SYMBOL_BER, EFFECTIVE_BER];

// Port state
pub const PHYSICAL_STATE: Aliases = &["PhysicalState", "Physical State", "PhysState", "phys_state"];
pub const LOGICAL_STATE: Aliases = &["LogicalState", "Logical State", "PortState", "State"];
pub const LINK_DOWNED: Aliases = &[
    "LinkDownedCounter",
    "Link Downed Counter",
    "LinkDowned",
    "link_down_count",
];
pub const LINK_RECOVERY: Aliases = &[
    "LinkErrorRecoveryCounter",
    "Link Error Recovery Counter",
    "LinkRecovery",
    "link_recovery",
];
pub const ACTIVE_SPEED: Aliases = &["ActiveSpeed", "Active Speed", "LinkSpeedActive", "active_speed"];
pub const EXPECTED_SPEED: Aliases = &[
    "ExpectedSpeed",
    "Expected Speed",
    "MaxSupportedSpeed",
    "expected_speed",
];
pub const ACTIVE_WIDTH: Aliases = &["ActiveWidth", "Active Width", "LinkWidthActive", "active_width"];
pub const EXPECTED_WIDTH: Aliases = &[
    "ExpectedWidth",
    "Expected Width",
    "MaxSupportedWidth",
    "expected_width",
];

// Port counters
pub const SYMBOL_ERRORS: Aliases = &[
    "SymbolErrorCounter",
    "Symbol Error Counter",
    "SymbolErrors",
    "symbol_errors",
];
pub const RCV_ERRORS: Aliases = &["PortRcvErrors", "Port Rcv Errors", "RcvErrors", "rcv_errors"];
pub const XMIT_DISCARDS: Aliases = &[
    "PortXmitDiscards",
    "Port Xmit Discards",
    "XmitDiscards",
    "xmit_discards",
];
pub const BUFFER_OVERRUN: Aliases = &[
    "ExcessiveBufferOverrunErrors",
    "Excessive Buffer Overrun Errors",
    "BufferOverrun",
    "buffer_overrun",
];
pub const LINK_INTEGRITY: Aliases = &[
    "LocalLinkIntegrityErrors",
    "Local Link Integrity Errors",
    "LinkIntegrityErrors",
    "link_integrity_errors",
];
pub const REMOTE_PHYSICAL: Aliases = &[
    "PortRcvRemotePhysicalErrors",
    "Port Rcv Remote Physical Errors",
    "RemotePhysicalErrors",
    "remote_physical_errors",
];
pub const ERROR_COUNTERS: &[Aliases] = &[
    SYMBOL_ERRORS,
    RCV_ERRORS,
    XMIT_DISCARDS,
    BUFFER_OVERRUN,
    LINK_INTEGRITY,
    REMOTE_PHYSICAL,
];

// PCIe
pub const PCI_UNCORRECTABLE: Aliases = &[
    "UncorrectableErrors",
    "Uncorrectable Errors",
    "PCIeUncorrectable",
    "uncorrectable_errors",
];
pub const PCI_CORRECTABLE: Aliases = &[
    "CorrectableErrors",
    "Correctable Errors",
    "PCIeCorrectable",
    "correctable_errors",
];
pub const PCI_SPEED: Aliases = &["LinkSpeed", "PCIe Speed", "Current Speed", "pci_speed"];
pub const PCI_EXPECTED_SPEED: Aliases = &[
    "ExpectedLinkSpeed",
    "MaxLinkSpeed",
    "Max Speed",
    "expected_pci_speed",
];
pub const PCI_WIDTH: Aliases = &["LinkWidth", "PCIe Width", "Current Width", "pci_width"];
pub const PCI_EXPECTED_WIDTH: Aliases = &[
    "ExpectedLinkWidth",
    "MaxLinkWidth",
    "Max Width",
    "expected_pci_width",
];

pub fn ber() -> RuleSet {
    let [status_critical, status_warning, status_info] = vocabulary_rules(
        "ber.status",
        BER_STATUS,
        "Signal quality reported {value}",
        "ber_high",
    );
    RuleSet::new(BER)
        .require(SYMBOL_BER)
        .require(EFFECTIVE_BER)
        .require(RAW_BER)
        .require(BER_STATUS)
        .rule(status_critical)
        .rule(
            Rule::new(
                "ber.effective.critical",
                Severity::Critical,
                Condition::max_at_least(POST_FEC_BERS, 1e-12),
            )
            .reason("Post-FEC BER {value} at or above {limit}")
            .issue("ber_high"),
        )
        .rule(status_warning)
        .rule(
            Rule::new(
                "ber.effective.warning",
                Severity::Warning,
                Condition::max_at_least(POST_FEC_BERS, 1e-14),
            )
            .reason("Post-FEC BER {value} at or above {limit}")
            .issue("ber_high"),
        )
        .rule(
            Rule::new(
                "ber.raw.warning",
                Severity::Warning,
                Condition::at_least(RAW_BER, 1e-5),
            )
            .reason("Raw BER {value} at or above {limit}")
            .issue("ber_raw_high"),
        )
        .rule(status_info)
        .rule(
            Rule::new("ber.raw.info", Severity::Info, Condition::at_least(RAW_BER, 1e-8))
                .reason("Raw BER {value} at or above {limit}")
                .issue("ber_raw_high"),
        )
}

pub fn link() -> RuleSet {
    RuleSet::new(LINK)
        .require(PHYSICAL_STATE)
        .require(LOGICAL_STATE)
        .require(LINK_DOWNED)
        .require(ACTIVE_SPEED)
        .rule(
            Rule::new(
                "link.physical_state.critical",
                Severity::Critical,
                Condition::text_in(
                    PHYSICAL_STATE,
                    &["LinkErrorRecovery", "Link Error Recovery", "LinkErrRecover"],
                ),
            )
            .reason("Port stuck in physical state {value}")
            .issue("link_error_recovery"),
        )
        .rule(
            Rule::new(
                "link.downed.critical",
                Severity::Critical,
                Condition::at_least(LINK_DOWNED, 5.0),
            )
            .reason("Link went down {value} times, at or above {limit}")
            .issue("link_flapping"),
        )
        .rule(
            Rule::new(
                "link.downed.warning",
                Severity::Warning,
                Condition::at_least(LINK_DOWNED, 1.0),
            )
            .reason("Link went down {value} times")
            .issue("link_flapping"),
        )
        .rule(
            Rule::new(
                "link.recovery.warning",
                Severity::Warning,
                Condition::at_least(LINK_RECOVERY, 1.0),
            )
            .reason("Link error recovery ran {value} times")
            .issue("link_error_recovery"),
        )
        .rule(
            Rule::new(
                "link.speed.mismatch",
                Severity::Warning,
                Condition::mismatch(ACTIVE_SPEED, EXPECTED_SPEED),
            )
            .reason("Link running at {value}, expected {limit}")
            .issue("link_speed_degraded"),
        )
        .rule(
            Rule::new(
                "link.width.mismatch",
                Severity::Warning,
                Condition::mismatch(ACTIVE_WIDTH, EXPECTED_WIDTH),
            )
            .reason("Link width {value}, expected {limit}")
            .issue("link_width_degraded"),
        )
        .rule(
            Rule::new(
                "link.logical_state.info",
                Severity::Info,
                Condition::text_in(LOGICAL_STATE, &["Init", "Initialize", "Armed"]),
            )
            .reason("Port logical state is {value}")
            .issue("port_not_active"),
        )
}

pub fn counters() -> RuleSet {
    let mut rules = RuleSet::new(COUNTERS);
    rules.required_fields.extend_from_slice(ERROR_COUNTERS);
    rules
        .rule(
            Rule::new(
                "counters.symbol_errors.critical",
                Severity::Critical,
                Condition::at_least(SYMBOL_ERRORS, 1000.0),
            )
            .reason("{value} symbol errors, at or above {limit}")
            .issue("symbol_errors"),
        )
        .rule(
            Rule::new(
                "counters.rcv_errors.critical",
                Severity::Critical,
                Condition::at_least(RCV_ERRORS, 1000.0),
            )
            .reason("{value} receive errors, at or above {limit}")
            .issue("rcv_errors"),
        )
        .rule(
            Rule::new(
                "counters.symbol_errors.warning",
                Severity::Warning,
                Condition::at_least(SYMBOL_ERRORS, 10.0),
            )
            .reason("{value} symbol errors, at or above {limit}")
            .issue("symbol_errors"),
        )
        .rule(
            Rule::new(
                "counters.rcv_errors.warning",
                Severity::Warning,
                Condition::at_least(RCV_ERRORS, 10.0),
            )
            .reason("{value} receive errors, at or above {limit}")
            .issue("rcv_errors"),
        )
        .rule(
            Rule::new(
                "counters.xmit_discards.warning",
                Severity::Warning,
                Condition::at_least(XMIT_DISCARDS, 100.0),
            )
            .reason("{value} transmit discards, at or above {limit}")
            .issue("xmit_discards"),
        )
        .rule(
            Rule::new(
                "counters.buffer_overrun.warning",
                Severity::Warning,
                Condition::at_least(BUFFER_OVERRUN, 1.0),
            )
            .reason("{value} excessive buffer overrun errors")
            .issue("buffer_overrun"),
        )
        .rule(
            Rule::new(
                "counters.link_integrity.info",
                Severity::Info,
                Condition::at_least(LINK_INTEGRITY, 1.0),
            )
            .reason("{value} local link integrity errors")
            .issue("link_integrity_errors"),
        )
        .rule(
            Rule::new(
                "counters.remote_physical.info",
                Severity::Info,
                Condition::at_least(REMOTE_PHYSICAL, 1.0),
            )
            .reason("{value} remote physical errors")
            .issue("remote_physical_errors"),
        )
}

pub fn pci() -> RuleSet {
    RuleSet::new(PCI)
        .require(PCI_UNCORRECTABLE)
        .require(PCI_CORRECTABLE)
        .require(PCI_SPEED)
        .require(PCI_WIDTH)
        .rule(
            Rule::new(
                "pci.uncorrectable.critical",
                Severity::Critical,
                Condition::at_least(PCI_UNCORRECTABLE, 1.0),
            )
            .reason("{value} uncorrectable PCIe errors")
            .issue("pci_uncorrectable"),
        )
        .rule(
            Rule::new(
                "pci.speed.mismatch",
                Severity::Warning,
                Condition::mismatch(PCI_SPEED, PCI_EXPECTED_SPEED),
            )
            .reason("PCIe link at {value}, expected {limit}")
            .issue("pci_degraded"),
        )
        .rule(
            Rule::new(
                "pci.width.mismatch",
                Severity::Warning,
                Condition::mismatch(PCI_WIDTH, PCI_EXPECTED_WIDTH),
            )
            .reason("PCIe width {value}, expected {limit}")
            .issue("pci_degraded"),
        )
        .rule(
            Rule::new(
                "pci.correctable.info",
                Severity::Info,
                Condition::at_least(PCI_CORRECTABLE, 100.0),
            )
            .reason("{value} correctable PCIe errors, at or above {limit}")
            .issue("pci_correctable"),
        )
}
