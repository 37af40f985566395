//! Traffic and routing: congestion, QoS/VL configuration, forwarding.

use fabric_core::types::Severity;

use crate::resolver::Aliases;
use crate::rules::types::{vocabulary_rules, Condition, Rule, RuleSet};

pub const CONGESTION: &str = "congestion";
pub const QOS: &str = "qos";
pub const ROUTING: &str = "routing";

// Congestion
pub const WAIT_RATIO: Aliases = &[
    "WaitRatioPct",
    "Wait Ratio %",
    "WaitRatio",
    "XmitWaitRatio",
    "wait_ratio_pct",
];
pub const CONGESTION_PCT: Aliases = &[
    "XmitCongestionPct",
    "Congestion %",
    "CongestionPct",
    "congestion_pct",
];
pub const FECN: Aliases = &["FECNCount", "FECN", "PortRcvFECN", "fecn_count"];
pub const BECN: Aliases = &["BECNCount", "BECN", "PortRcvBECN", "becn_count"];
pub const CONGESTION_RATIOS: &[Aliases] = &[WAIT_RATIO, CONGESTION_PCT];

// QoS
pub const VL_STALL: Aliases = &["VLStallCount", "VL Stall Count", "PortVLStall", "vl_stall"];
pub const VLARB_MISMATCH: Aliases = &["VLArbMismatch", "VL Arbitration Mismatch", "vlarb_mismatch"];
pub const SL2VL_MISMATCH: Aliases = &["SL2VLMismatch", "SL2VL Mismatch", "sl2vl_mismatch"];
pub const OPER_VLS: Aliases = &["OperVLs", "Operational VLs", "oper_vls"];
pub const VL_CAP: Aliases = &["VLCap", "VL Capability", "vl_cap"];
pub const QOS_STATUS: Aliases = &["Status", "QoS Status", "status"];

// Routing
pub const UNREACHABLE: Aliases = &[
    "UnreachableNodes",
    "Unreachable Destinations",
    "Unreachable",
    "unreachable",
];
pub const MISSING_ROUTES: Aliases = &["MissingRoutes", "Missing Routes", "LFT Missing", "missing_routes"];
pub const CREDIT_LOOPS: Aliases = &["CreditLoops", "Credit Loops", "credit_loops"];
pub const MAX_HOPS: Aliases = &["MaxHops", "Max Hops", "HopCount", "max_hops"];
pub const PATH_IMBALANCE: Aliases = &["PathImbalancePct", "Path Imbalance %", "path_imbalance_pct"];
pub const ROUTING_STATUS: Aliases = &["Status", "Routing Status", "status"];

pub fn congestion() -> RuleSet {
    RuleSet::new(CONGESTION)
        .require(WAIT_RATIO)
        .require(CONGESTION_PCT)
        .require(FECN)
        .require(BECN)
        .rule(
            Rule::new(
                "congestion.ratio.critical",
                Severity::Critical,
                Condition::max_at_least(CONGESTION_RATIOS, 5.0),
            )
            .reason("Congestion {value}% at or above {limit}%")
            .issue("congestion_severe"),
        )
        .rule(
            Rule::new(
                "congestion.ratio.warning",
                Severity::Warning,
                Condition::max_at_least(CONGESTION_RATIOS, 1.0),
            )
            .reason("Congestion {value}% at or above {limit}%")
            .issue("congestion_moderate"),
        )
        .rule(
            Rule::new("congestion.fecn.info", Severity::Info, Condition::at_least(FECN, 1.0))
                .reason("{value} forward congestion notifications received")
                .issue("congestion_notifications"),
        )
        .rule(
            Rule::new("congestion.becn.info", Severity::Info, Condition::at_least(BECN, 1.0))
                .reason("{value} backward congestion notifications received")
                .issue("congestion_notifications"),
        )
}

pub fn qos() -> RuleSet {
    let [status_critical, status_warning, status_info] = vocabulary_rules(
        "qos.status",
        QOS_STATUS,
        "QoS configuration reported {value}",
        "qos_misconfiguration",
    );
    RuleSet::new(QOS)
        .require(VL_STALL)
        .require(VLARB_MISMATCH)
        .require(SL2VL_MISMATCH)
        .require(OPER_VLS)
        .require(QOS_STATUS)
        .rule(
            Rule::new("qos.vl_stall.critical", Severity::Critical, Condition::at_least(VL_STALL, 1.0))
                .reason("{value} virtual lane stalls")
                .issue("vl_stall"),
        )
        .rule(status_critical)
        .rule(
            Rule::new("qos.vlarb.warning", Severity::Warning, Condition::flag(VLARB_MISMATCH))
                .reason("VL arbitration table mismatch")
                .issue("qos_misconfiguration"),
        )
        .rule(
            Rule::new("qos.sl2vl.warning", Severity::Warning, Condition::flag(SL2VL_MISMATCH))
                .reason("SL to VL mapping mismatch")
                .issue("qos_misconfiguration"),
        )
        .rule(status_warning)
        .rule(
            Rule::new(
                "qos.vls.mismatch",
                Severity::Info,
                Condition::mismatch(OPER_VLS, VL_CAP),
            )
            .reason("Operational VLs {value} differ from capability {limit}")
            .issue("qos_vl_mismatch"),
        )
        .rule(status_info)
}

pub fn routing() -> RuleSet {
    let [status_critical, status_warning, status_info] = vocabulary_rules(
        "routing.status",
        ROUTING_STATUS,
        "Routing reported {value}",
        "routing_reported",
    );
    RuleSet::new(ROUTING)
        .require(UNREACHABLE)
        .require(MISSING_ROUTES)
        .require(MAX_HOPS)
        .require(ROUTING_STATUS)
        .rule(
            Rule::new(
                "routing.unreachable.critical",
                Severity::Critical,
                Condition::at_least(UNREACHABLE, 1.0),
            )
            .reason("{value} unreachable destinations")
            .issue("routing_unreachable"),
        )
        .rule(
            Rule::new(
                "routing.missing_routes.critical",
                Severity::Critical,
                Condition::at_least(MISSING_ROUTES, 1.0),
            )
            .reason("{value} missing forwarding entries")
            .issue("routing_missing_routes"),
        )
        .rule(
            Rule::new(
                "routing.credit_loops.critical",
                Severity::Critical,
                Condition::at_least(CREDIT_LOOPS, 1.0),
            )
            .reason("{value} credit loops detected")
            .issue("credit_loop"),
        )
        .rule(status_critical)
        .rule(
            Rule::new(
                "routing.hops.warning",
                Severity::Warning,
                Condition::at_least(MAX_HOPS, 8.0),
            )
            .reason("Longest path {value} hops, at or above {limit}")
            .issue("routing_long_paths"),
        )
        .rule(
            Rule::new(
                "routing.imbalance.warning",
                Severity::Warning,
                Condition::at_least(PATH_IMBALANCE, 30.0),
            )
            .reason("Path imbalance {value}%, at or above {limit}%")
            .issue("routing_imbalance"),
        )
        .rule(status_warning)
        .rule(status_info)
}
