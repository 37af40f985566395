//! Built-in knowledge-base entries.
//!
//! Actions shared between issue types use identical text so the action plan
//! collapses them into one step.

use fabric_core::types::Severity;

use super::types::KbEntry;

const RESEAT_CABLE: &str = "Reseat the cable at both ends and clean the connectors";
const REPLACE_CABLE: &str = "Replace the cable or transceiver if the condition persists";
const CHECK_AIRFLOW: &str = "Check chassis airflow, blanking panels, and inlet temperature";
const CHECK_FANS: &str = "Verify all fan modules are present and spinning";
const CLEAR_COUNTERS: &str = "Clear port counters and re-run the capture to confirm the trend";
const UPGRADE_FIRMWARE: &str = "Upgrade device firmware to the recommended release";
const REVIEW_SM_LOG: &str = "Review the subnet manager log for related events";
const RERUN_ROUTING: &str = "Re-run routing from the subnet manager and verify forwarding tables";
const CHECK_PSU: &str = "Inspect the power supply module and its input feed";

pub(crate) static UNKNOWN_ISSUE: KbEntry = KbEntry {
    id: "unknown_issue",
    title: "Unrecognized issue",
    category: "general",
    severity: Severity::Info,
    explanation: "No knowledge-base entry is registered for this issue type.",
    causes: &[],
    actions: &["Inspect the flagged rows manually and consult vendor documentation"],
    reference: "",
};

pub(crate) static ENTRIES: &[KbEntry] = &[
    // Physical
    KbEntry {
        id: "cable_overheat",
        title: "Cable or transceiver overheating",
        category: "physical",
        severity: Severity::Critical,
        explanation: "The module temperature reported through digital diagnostics is above its operating range. Sustained heat shortens optic life and raises the bit error rate.",
        causes: &[
            "Blocked or insufficient airflow around the port cage",
            "Failing transceiver laser or driver",
            "High ambient temperature in the rack",
        ],
        actions: &[CHECK_AIRFLOW, RESEAT_CABLE, REPLACE_CABLE],
        reference: "SFF-8636 module monitoring thresholds",
    },
    KbEntry {
        id: "optics_power_alarm",
        title: "Optical power alarm",
        category: "physical",
        severity: Severity::Critical,
        explanation: "Transmit or receive optical power crossed the module alarm threshold.",
        causes: &[
            "Dirty or damaged fiber end faces",
            "Excessive bend radius or crushed fiber",
            "Degraded laser in the transceiver",
        ],
        actions: &[RESEAT_CABLE, "Inspect and clean fiber end faces with a scope", REPLACE_CABLE],
        reference: "SFF-8636 module monitoring thresholds",
    },
    KbEntry {
        id: "optics_voltage_alarm",
        title: "Transceiver supply voltage alarm",
        category: "physical",
        severity: Severity::Warning,
        explanation: "The transceiver reports a supply voltage outside its warning range.",
        causes: &["Faulty port cage power rail", "Failing transceiver"],
        actions: &[RESEAT_CABLE, REPLACE_CABLE],
        reference: "SFF-8636 module monitoring thresholds",
    },
    KbEntry {
        id: "cable_fault",
        title: "Cable reported faulty",
        category: "physical",
        severity: Severity::Warning,
        explanation: "The cable inventory reports a non-healthy status for this module.",
        causes: &["Unsupported or counterfeit cable", "EEPROM read failure", "Physical damage"],
        actions: &[RESEAT_CABLE, REPLACE_CABLE],
        reference: "Cable inventory",
    },
    KbEntry {
        id: "fan_failure",
        title: "Fan failure",
        category: "physical",
        severity: Severity::Critical,
        explanation: "A fan is stopped or spinning below its minimum speed. Remaining fans may not keep the ASIC and optics within temperature limits.",
        causes: &["Failed fan motor", "Unseated fan tray", "Obstruction in the fan path"],
        actions: &[CHECK_FANS, "Replace the failed fan module", CHECK_AIRFLOW],
        reference: "Chassis environmental monitoring",
    },
    KbEntry {
        id: "fan_alert",
        title: "Fan alert",
        category: "physical",
        severity: Severity::Warning,
        explanation: "The chassis raised an alert for a fan module.",
        causes: &["Fan speed fluctuating near its limit", "Fan tray direction mismatch"],
        actions: &[CHECK_FANS, CHECK_AIRFLOW],
        reference: "Chassis environmental monitoring",
    },
    KbEntry {
        id: "sensor_overheat",
        title: "Temperature sensor over threshold",
        category: "physical",
        severity: Severity::Critical,
        explanation: "A board or ASIC temperature sensor reached its high or critical threshold. Devices throttle or shut down when the critical limit is held.",
        causes: &["Fan failure", "Blocked airflow", "Hot aisle containment breach"],
        actions: &[CHECK_FANS, CHECK_AIRFLOW, "Reduce load on the device until temperature recovers"],
        reference: "Chassis environmental monitoring",
    },
    KbEntry {
        id: "psu_failure",
        title: "Power supply failure",
        category: "physical",
        severity: Severity::Critical,
        explanation: "A power supply is not delivering DC output. The device is running without redundancy.",
        causes: &["Lost input feed", "Failed power supply unit", "Tripped breaker"],
        actions: &[CHECK_PSU, "Replace the failed power supply unit", "Verify the PDU circuit and breaker"],
        reference: "Chassis power monitoring",
    },
    KbEntry {
        id: "psu_overload",
        title: "Power supply near capacity",
        category: "physical",
        severity: Severity::Warning,
        explanation: "Power draw is close to the rated capacity of the supply. Losing a redundant unit would overload the rest.",
        causes: &["Fully populated optics with high power class", "Undersized supply for the configuration"],
        actions: &[CHECK_PSU, "Balance load across supplies or install higher rated units"],
        reference: "Chassis power monitoring",
    },
    KbEntry {
        id: "psu_alert",
        title: "Power supply alert",
        category: "physical",
        severity: Severity::Warning,
        explanation: "The power supply raised an alert bit.",
        causes: &["Input voltage out of range", "Internal supply fan fault"],
        actions: &[CHECK_PSU],
        reference: "Chassis power monitoring",
    },
    // Link
    KbEntry {
        id: "ber_high",
        title: "High post-FEC bit error rate",
        category: "link",
        severity: Severity::Critical,
        explanation: "Errors remain after forward error correction. Packets are being corrupted and retransmitted.",
        causes: &["Dirty connectors", "Damaged or marginal cable", "Failing transceiver"],
        actions: &[RESEAT_CABLE, REPLACE_CABLE, CLEAR_COUNTERS],
        reference: "PHY signal quality counters",
    },
    KbEntry {
        id: "ber_raw_high",
        title: "Elevated raw bit error rate",
        category: "link",
        severity: Severity::Warning,
        explanation: "Pre-FEC error rate is high. FEC still corrects it but the margin is shrinking.",
        causes: &["Marginal cable length or quality", "Contaminated connectors"],
        actions: &[RESEAT_CABLE, CLEAR_COUNTERS],
        reference: "PHY signal quality counters",
    },
    KbEntry {
        id: "link_error_recovery",
        title: "Link error recovery",
        category: "link",
        severity: Severity::Warning,
        explanation: "The port entered link error recovery, retraining the link after detecting errors.",
        causes: &["Marginal signal integrity", "Loose connector"],
        actions: &[RESEAT_CABLE, REPLACE_CABLE, CLEAR_COUNTERS],
        reference: "PortCounters LinkErrorRecoveryCounter",
    },
    KbEntry {
        id: "link_flapping",
        title: "Link flapping",
        category: "link",
        severity: Severity::Critical,
        explanation: "The link went down repeatedly. Each drop forces rerouting and interrupts traffic.",
        causes: &["Bad cable or transceiver", "Peer port resets", "Power events on the peer"],
        actions: &[RESEAT_CABLE, REPLACE_CABLE, REVIEW_SM_LOG],
        reference: "PortCounters LinkDownedCounter",
    },
    KbEntry {
        id: "link_speed_degraded",
        title: "Link trained below expected speed",
        category: "link",
        severity: Severity::Warning,
        explanation: "The link is active at a lower speed than both ends support.",
        causes: &["Cable not rated for the target speed", "Speed restricted by configuration"],
        actions: &["Verify the cable is rated for the expected speed", "Check enabled speeds on both ports", RESEAT_CABLE],
        reference: "PortInfo LinkSpeedActive",
    },
    KbEntry {
        id: "link_width_degraded",
        title: "Link trained below expected width",
        category: "link",
        severity: Severity::Warning,
        explanation: "The link came up with fewer lanes than expected, reducing bandwidth.",
        causes: &["Failed lane in the cable", "Damaged connector pins"],
        actions: &[RESEAT_CABLE, REPLACE_CABLE],
        reference: "PortInfo LinkWidthActive",
    },
    KbEntry {
        id: "port_not_active",
        title: "Port not active",
        category: "link",
        severity: Severity::Info,
        explanation: "The port is physically up but the subnet manager has not moved it to Active.",
        causes: &["Subnet manager not running or not reaching the port", "Sweep in progress"],
        actions: &[REVIEW_SM_LOG, "Confirm the subnet manager is running and master"],
        reference: "PortInfo PortState",
    },
    KbEntry {
        id: "symbol_errors",
        title: "Symbol errors",
        category: "link",
        severity: Severity::Warning,
        explanation: "The receiver detected symbol errors on the physical link.",
        causes: &["Signal integrity problem on the cable", "Dirty optics"],
        actions: &[RESEAT_CABLE, REPLACE_CABLE, CLEAR_COUNTERS],
        reference: "PortCounters SymbolErrorCounter",
    },
    KbEntry {
        id: "rcv_errors",
        title: "Receive errors",
        category: "link",
        severity: Severity::Warning,
        explanation: "Packets were received with errors and dropped.",
        causes: &["Bit errors on the link", "Malformed packets from the peer"],
        actions: &[RESEAT_CABLE, CLEAR_COUNTERS],
        reference: "PortCounters PortRcvErrors",
    },
    KbEntry {
        id: "xmit_discards",
        title: "Transmit discards",
        category: "link",
        severity: Severity::Warning,
        explanation: "Outbound packets were discarded, usually because the port was down or congested.",
        causes: &["Head-of-line blocking", "Link going down with traffic queued"],
        actions: &["Check for congestion on downstream ports", CLEAR_COUNTERS],
        reference: "PortCounters PortXmitDiscards",
    },
    KbEntry {
        id: "buffer_overrun",
        title: "Excessive buffer overrun",
        category: "link",
        severity: Severity::Warning,
        explanation: "The receive buffer overran, indicating a flow control problem.",
        causes: &["Credit misconfiguration", "Peer ignoring flow control"],
        actions: &["Verify VL buffer and credit configuration on both ends", CLEAR_COUNTERS],
        reference: "PortCounters ExcessiveBufferOverrunErrors",
    },
    KbEntry {
        id: "link_integrity_errors",
        title: "Local link integrity errors",
        category: "link",
        severity: Severity::Info,
        explanation: "The local physical error threshold was exceeded at least once.",
        causes: &["Transient signal degradation"],
        actions: &[CLEAR_COUNTERS],
        reference: "PortCounters LocalLinkIntegrityErrors",
    },
    KbEntry {
        id: "remote_physical_errors",
        title: "Remote physical errors",
        category: "link",
        severity: Severity::Info,
        explanation: "Packets arrived marked bad by an upstream hop.",
        causes: &["Errors on a link further upstream"],
        actions: &["Trace the path upstream and inspect links with symbol errors", CLEAR_COUNTERS],
        reference: "PortCounters PortRcvRemotePhysicalErrors",
    },
    KbEntry {
        id: "pci_uncorrectable",
        title: "Uncorrectable PCIe errors",
        category: "link",
        severity: Severity::Critical,
        explanation: "The host adapter reported uncorrectable PCIe errors. Data may have been lost between the adapter and host memory.",
        causes: &["Faulty riser or slot", "Adapter hardware fault", "Platform firmware issue"],
        actions: &["Reseat the adapter in its slot", UPGRADE_FIRMWARE, "Replace the adapter if errors recur"],
        reference: "PCIe AER",
    },
    KbEntry {
        id: "pci_degraded",
        title: "PCIe link degraded",
        category: "link",
        severity: Severity::Warning,
        explanation: "The adapter's PCIe link trained below its capable speed or width, limiting host throughput.",
        causes: &["Adapter in a narrower slot", "BIOS forcing a lower generation", "Riser problem"],
        actions: &["Move the adapter to a slot with full lane width", "Check BIOS PCIe settings", "Reseat the adapter in its slot"],
        reference: "PCIe link status",
    },
    KbEntry {
        id: "pci_correctable",
        title: "Correctable PCIe errors",
        category: "link",
        severity: Severity::Info,
        explanation: "Correctable PCIe errors are accumulating.",
        causes: &["Marginal PCIe signal integrity"],
        actions: &["Reseat the adapter in its slot"],
        reference: "PCIe AER",
    },
    // Traffic
    KbEntry {
        id: "congestion_severe",
        title: "Severe congestion",
        category: "traffic",
        severity: Severity::Critical,
        explanation: "The port spent a large share of time unable to transmit. Applications behind it see high latency.",
        causes: &["Hotspot or incast traffic pattern", "Oversubscribed uplinks", "Unbalanced routing"],
        actions: &["Identify the top talkers behind the congested port", "Review adaptive routing and congestion control settings", RERUN_ROUTING],
        reference: "PortXmitWait congestion counters",
    },
    KbEntry {
        id: "congestion_moderate",
        title: "Moderate congestion",
        category: "traffic",
        severity: Severity::Warning,
        explanation: "The port shows measurable transmit wait time.",
        causes: &["Bursty traffic", "Uplink oversubscription"],
        actions: &["Identify the top talkers behind the congested port", "Review adaptive routing and congestion control settings"],
        reference: "PortXmitWait congestion counters",
    },
    KbEntry {
        id: "congestion_notifications",
        title: "Congestion notifications",
        category: "traffic",
        severity: Severity::Info,
        explanation: "Forward explicit congestion notifications were marked on received packets.",
        causes: &["Congestion control reacting to transient load"],
        actions: &["Review adaptive routing and congestion control settings"],
        reference: "Congestion control counters",
    },
    KbEntry {
        id: "vl_stall",
        title: "Virtual lane stall",
        category: "traffic",
        severity: Severity::Critical,
        explanation: "A virtual lane stalled and dropped queued packets.",
        causes: &["Credit loop", "Deadlock in the routing function", "Stuck peer port"],
        actions: &[RERUN_ROUTING, "Check for credit loops", REVIEW_SM_LOG],
        reference: "PortCounters VL stall",
    },
    KbEntry {
        id: "qos_misconfiguration",
        title: "QoS configuration mismatch",
        category: "traffic",
        severity: Severity::Warning,
        explanation: "VL arbitration or SL to VL mapping differs from the fabric policy.",
        causes: &["Manual port configuration", "Subnet manager QoS policy not applied"],
        actions: &["Re-apply the QoS policy from the subnet manager", REVIEW_SM_LOG],
        reference: "SL2VL and VLArbitration tables",
    },
    KbEntry {
        id: "qos_vl_mismatch",
        title: "Operational VLs below capability",
        category: "traffic",
        severity: Severity::Info,
        explanation: "The port runs fewer virtual lanes than it supports.",
        causes: &["Peer supports fewer VLs", "Configured VL cap"],
        actions: &["Confirm the VL count matches the fabric design"],
        reference: "PortInfo OperationalVLs",
    },
    KbEntry {
        id: "routing_unreachable",
        title: "Unreachable destinations",
        category: "traffic",
        severity: Severity::Critical,
        explanation: "Some destinations have no route from this node.",
        causes: &["Fabric partitioned by failed links", "Incomplete routing after a sweep"],
        actions: &[RERUN_ROUTING, REVIEW_SM_LOG, "Check for down inter-switch links"],
        reference: "Forwarding table validation",
    },
    KbEntry {
        id: "routing_missing_routes",
        title: "Missing forwarding entries",
        category: "traffic",
        severity: Severity::Critical,
        explanation: "Forwarding tables lack entries for known destinations.",
        causes: &["Subnet manager failed to program the switch", "Switch table capacity exhausted"],
        actions: &[RERUN_ROUTING, REVIEW_SM_LOG],
        reference: "Forwarding table validation",
    },
    KbEntry {
        id: "credit_loop",
        title: "Credit loop",
        category: "traffic",
        severity: Severity::Critical,
        explanation: "The routing function contains a cyclic buffer dependency that can deadlock the fabric.",
        causes: &["Routing engine not deadlock-free for this topology", "Miscabled topology"],
        actions: &["Switch to a deadlock-free routing engine", RERUN_ROUTING, "Validate cabling against the topology plan"],
        reference: "Credit loop analysis",
    },
    KbEntry {
        id: "routing_long_paths",
        title: "Excessive hop count",
        category: "traffic",
        severity: Severity::Warning,
        explanation: "Some paths cross more switches than the topology should require.",
        causes: &["Miscabled topology", "Routing around failed links"],
        actions: &["Validate cabling against the topology plan", RERUN_ROUTING],
        reference: "Path analysis",
    },
    KbEntry {
        id: "routing_imbalance",
        title: "Unbalanced routing",
        category: "traffic",
        severity: Severity::Warning,
        explanation: "Routes concentrate on a subset of the available uplinks.",
        causes: &["Failed uplinks", "Routing engine without load balancing"],
        actions: &[RERUN_ROUTING, "Check for down inter-switch links"],
        reference: "Path analysis",
    },
    KbEntry {
        id: "routing_reported",
        title: "Routing check reported a problem",
        category: "traffic",
        severity: Severity::Warning,
        explanation: "The routing validation reported a non-healthy status.",
        causes: &["See the routing validation output"],
        actions: &[REVIEW_SM_LOG, RERUN_ROUTING],
        reference: "Forwarding table validation",
    },
    // Platform
    KbEntry {
        id: "firmware_outdated",
        title: "Firmware out of date",
        category: "platform",
        severity: Severity::Warning,
        explanation: "The device runs firmware older than the recommended release.",
        causes: &["Device not included in the last upgrade cycle"],
        actions: &[UPGRADE_FIRMWARE, "Schedule a maintenance window for the upgrade"],
        reference: "Firmware release notes",
    },
    KbEntry {
        id: "firmware_mismatch",
        title: "Firmware differs from fabric baseline",
        category: "platform",
        severity: Severity::Info,
        explanation: "Devices of the same type run different firmware versions.",
        causes: &["Partial upgrade", "Replacement part shipped with other firmware"],
        actions: &[UPGRADE_FIRMWARE],
        reference: "Firmware release notes",
    },
    KbEntry {
        id: "pkey_violations",
        title: "Partition key violations",
        category: "platform",
        severity: Severity::Warning,
        explanation: "Packets were dropped for carrying a partition key the port is not a member of.",
        causes: &["Host configured for a partition it is not admitted to", "Partition policy out of date"],
        actions: &["Review the partition configuration on the subnet manager", "Identify the sending host from the violation trap", REVIEW_SM_LOG],
        reference: "PortCounters PortRcvConstraintErrors",
    },
    KbEntry {
        id: "mkey_unset",
        title: "Management key not set",
        category: "platform",
        severity: Severity::Warning,
        explanation: "The port has no management key, so any node can modify its configuration.",
        causes: &["M_Key protection disabled in the subnet manager"],
        actions: &["Enable M_Key protection in the subnet manager"],
        reference: "PortInfo M_Key",
    },
    KbEntry {
        id: "diagnostic_event",
        title: "Diagnostic event",
        category: "platform",
        severity: Severity::Info,
        explanation: "The diagnostic run logged an event with a non-normal severity.",
        causes: &["See the event description"],
        actions: &[REVIEW_SM_LOG],
        reference: "Diagnostic event log",
    },
    // General
    KbEntry {
        id: "insufficient_data",
        title: "Insufficient data",
        category: "general",
        severity: Severity::Info,
        explanation: "None of the measurement fields this check relies on were present, so the row could not be judged.",
        causes: &["Older capture tool without this table", "Counter read failure"],
        actions: &["Re-run the capture with a current diagnostic tool version"],
        reference: "",
    },
];
