//! Per-category magnitude metrics for ranking offenders. Larger is worse.

use fabric_core::types::Row;

use crate::resolver::resolve_number;
use crate::rules::catalog::{link, physical, platform, traffic};

/// Floor for rows with no measurable error rate.
const NO_BER: f64 = -100.0;

pub fn cable_temperature(row: &Row) -> f64 {
    resolve_number(row, physical::CABLE_TEMPERATURE)
}

/// RPM short of the minimum; a stopped fan without a minimum still ranks
/// above a spinning one.
pub fn fan_deficit(row: &Row) -> f64 {
    resolve_number(row, physical::FAN_MIN_SPEED) - resolve_number(row, physical::FAN_SPEED)
}

pub fn sensor_temperature(row: &Row) -> f64 {
    resolve_number(row, physical::SENSOR_VALUE)
}

/// Load as a percentage of capacity.
pub fn power_utilization(row: &Row) -> f64 {
    let capacity = resolve_number(row, physical::PSU_CAPACITY);
    if capacity <= 0.0 {
        return 0.0;
    }
    resolve_number(row, physical::PSU_POWER) / capacity * 100.0
}

/// log10 of the worst post-FEC error rate.
pub fn ber_magnitude(row: &Row) -> f64 {
    let worst = link::POST_FEC_BERS
        .iter()
        .map(|aliases| resolve_number(row, aliases))
        .fold(0.0_f64, f64::max);
    if worst > 0.0 {
        worst.log10()
    } else {
        NO_BER
    }
}

/// Link drops weigh more than recoveries.
pub fn link_instability(row: &Row) -> f64 {
    resolve_number(row, link::LINK_DOWNED) * 10.0 + resolve_number(row, link::LINK_RECOVERY)
}

pub fn counter_errors(row: &Row) -> f64 {
    link::ERROR_COUNTERS
        .iter()
        .map(|aliases| resolve_number(row, aliases))
        .sum()
}

pub fn pci_errors(row: &Row) -> f64 {
    resolve_number(row, link::PCI_UNCORRECTABLE) * 1000.0
        + resolve_number(row, link::PCI_CORRECTABLE)
}

/// The larger of wait ratio and congestion percentage.
pub fn congestion_ratio(row: &Row) -> f64 {
    traffic::CONGESTION_RATIOS
        .iter()
        .map(|aliases| resolve_number(row, aliases))
        .fold(0.0_f64, f64::max)
}

pub fn qos_stalls(row: &Row) -> f64 {
    resolve_number(row, traffic::VL_STALL)
}

pub fn routing_problems(row: &Row) -> f64 {
    [traffic::UNREACHABLE, traffic::MISSING_ROUTES, traffic::CREDIT_LOOPS]
        .iter()
        .map(|aliases| resolve_number(row, aliases))
        .sum()
}

pub fn security_violations(row: &Row) -> f64 {
    resolve_number(row, platform::PKEY_VIOLATIONS)
}
