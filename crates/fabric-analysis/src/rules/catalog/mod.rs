//! Built-in rule sets, one per category, grouped the way the checks are.
//!
//! Rule keys follow `<check>.<measure>.<tier>` so thresholds can be
//! overridden from configuration.

pub mod link;
pub mod physical;
pub mod platform;
pub mod traffic;

use super::types::RuleSet;

/// Every category id with a built-in rule set, in registry order.
pub const CATEGORIES: &[&str] = &[
    physical::CABLE,
    physical::FAN,
    physical::TEMPERATURE,
    physical::POWER,
    link::BER,
    link::LINK,
    link::COUNTERS,
    link::PCI,
    traffic::CONGESTION,
    traffic::QOS,
    traffic::ROUTING,
    platform::FIRMWARE,
    platform::SECURITY,
    platform::EVENTS,
];

/// The built-in rule set of `category`, if it has one.
pub fn rule_set(category: &str) -> Option<RuleSet> {
    let rules = match category {
        physical::CABLE => physical::cable(),
        physical::FAN => physical::fan(),
        physical::TEMPERATURE => physical::temperature(),
        physical::POWER => physical::power(),
        link::BER => link::ber(),
        link::LINK => link::link(),
        link::COUNTERS => link::counters(),
        link::PCI => link::pci(),
        traffic::CONGESTION => traffic::congestion(),
        traffic::QOS => traffic::qos(),
        traffic::ROUTING => traffic::routing(),
        platform::FIRMWARE => platform::firmware(),
        platform::SECURITY => platform::security(),
        platform::EVENTS => platform::events(),
        _ => return None,
    };
    Some(rules)
}
