//! Physical layer: optics, fans, temperature sensors, power supplies.

use fabric_core::types::Severity;

use crate::resolver::Aliases;
use crate::rules::types::{vocabulary_rules, Condition, Rule, RuleSet};

pub const CABLE: &str = "cable";
pub const FAN: &str = "fan";
pub const TEMPERATURE: &str = "temperature";
pub const POWER: &str = "power";

// Cable / transceiver
pub const CABLE_TEMPERATURE: Aliases = &[
    "Temperature",
    "Temp",
    "temperature",
    "CableTemperature",
    "Module Temperature",
];
pub const TX_POWER_ALARM: Aliases = &["TX Power Alarm", "TxPowerAlarm", "tx_power_alarm"];
pub const RX_POWER_ALARM: Aliases = &["RX Power Alarm", "RxPowerAlarm", "rx_power_alarm"];
pub const TEMPERATURE_ALARM: Aliases = &[
    "Temperature Alarm",
    "TemperatureAlarm",
    "temp_alarm",
];
pub const VOLTAGE_ALARM: Aliases = &["Voltage Alarm", "VoltageAlarm", "voltage_alarm"];
pub const CABLE_STATUS: Aliases = &["Status", "Cable Status", "CableStatus", "status"];

// Fans
pub const FAN_SPEED: Aliases = &["FanSpeed", "Fan Speed", "Speed", "RPM", "fan_speed"];
pub const FAN_MIN_SPEED: Aliases = &["MinSpeed", "Min Speed", "MinRPM", "min_speed"];
pub const FAN_STATUS: Aliases = &["Status", "Fan Status", "FanStatus", "status"];
pub const FAN_ALERT: Aliases = &["Alert", "FanAlert", "alert"];

// Temperature sensors
pub const SENSOR_VALUE: Aliases = &[
    "Temperature",
    "CurrentValue",
    "Current Value",
    "Value",
    "temperature",
];
pub const SENSOR_HIGH: Aliases = &["HighThreshold", "High Threshold", "high_threshold"];
pub const SENSOR_CRITICAL: Aliases = &[
    "CriticalThreshold",
    "Critical Threshold",
    "critical_threshold",
];

// Power supplies
pub const PSU_DC_STATE: Aliases = &["DC State", "DCState", "dc_state", "PSU State"];
pub const PSU_POWER: Aliases = &["Power", "PowerConsumption", "Power Consumption", "power"];
pub const PSU_CAPACITY: Aliases = &["Capacity", "MaxPower", "Max Power", "capacity"];
pub const PSU_ALERT: Aliases = &["Alert", "PSUAlert", "alert"];
pub const PSU_STATUS: Aliases = &["Status", "PSU Status", "status"];

pub fn cable() -> RuleSet {
    let [status_critical, status_warning, status_info] = vocabulary_rules(
        "cable.status",
        CABLE_STATUS,
        "Cable reported status {value}",
        "cable_fault",
    );
    RuleSet::new(CABLE)
        .require(CABLE_TEMPERATURE)
        .require(TX_POWER_ALARM)
        .require(RX_POWER_ALARM)
        .require(CABLE_STATUS)
        .rule(
            Rule::new(
                "cable.temperature.critical",
                Severity::Critical,
                Condition::at_least(CABLE_TEMPERATURE, 80.0),
            )
            .reason("Cable temperature {value}°C at or above {limit}°C")
            .issue("cable_overheat"),
        )
        .rule(
            Rule::new(
                "cable.tx_power_alarm.critical",
                Severity::Critical,
                Condition::flag(TX_POWER_ALARM),
            )
            .reason("TX optical power alarm ({value})")
            .issue("optics_power_alarm"),
        )
        .rule(
            Rule::new(
                "cable.rx_power_alarm.critical",
                Severity::Critical,
                Condition::flag(RX_POWER_ALARM),
            )
            .reason("RX optical power alarm ({value})")
            .issue("optics_power_alarm"),
        )
        .rule(status_critical)
        .rule(status_warning)
        .rule(
            Rule::new(
                "cable.temperature.warning",
                Severity::Warning,
                Condition::at_least(CABLE_TEMPERATURE, 70.0),
            )
            .reason("Cable temperature {value}°C at or above {limit}°C")
            .issue("cable_overheat"),
        )
        .rule(
            Rule::new(
                "cable.temperature_alarm.warning",
                Severity::Warning,
                Condition::flag(TEMPERATURE_ALARM),
            )
            .reason("Transceiver temperature alarm ({value})")
            .issue("cable_overheat"),
        )
        .rule(
            Rule::new(
                "cable.voltage_alarm.warning",
                Severity::Warning,
                Condition::flag(VOLTAGE_ALARM),
            )
            .reason("Transceiver voltage alarm ({value})")
            .issue("optics_voltage_alarm"),
        )
        .rule(status_info)
}

pub fn fan() -> RuleSet {
    let [status_critical, status_warning, status_info] = vocabulary_rules(
        "fan.status",
        FAN_STATUS,
        "Fan reported status {value}",
        "fan_failure",
    );
    RuleSet::new(FAN)
        .require(FAN_SPEED)
        .require(FAN_STATUS)
        .rule(
            Rule::new(
                "fan.speed.stopped",
                Severity::Critical,
                Condition::below(FAN_SPEED, 1.0),
            )
            .reason("Fan stopped ({value} RPM)")
            .issue("fan_failure"),
        )
        .rule(
            Rule::new(
                "fan.speed.below_minimum",
                Severity::Critical,
                Condition::BelowField {
                    field: FAN_SPEED,
                    floor: FAN_MIN_SPEED,
                },
            )
            .reason("Fan speed {value} RPM below minimum {limit} RPM")
            .issue("fan_failure"),
        )
        .rule(status_critical)
        .rule(status_warning)
        .rule(
            Rule::new("fan.alert.warning", Severity::Warning, Condition::flag(FAN_ALERT))
                .reason("Fan alert raised ({value})")
                .issue("fan_alert"),
        )
        .rule(status_info)
}

pub fn temperature() -> RuleSet {
    RuleSet::new(TEMPERATURE)
        .require(SENSOR_VALUE)
        .rule(
            Rule::new(
                "temperature.sensor.critical_threshold",
                Severity::Critical,
                Condition::AtLeastField {
                    field: SENSOR_VALUE,
                    ceiling: SENSOR_CRITICAL,
                },
            )
            .reason("Sensor at {value}°C reached its critical threshold {limit}°C")
            .issue("sensor_overheat"),
        )
        .rule(
            Rule::new(
                "temperature.sensor.critical",
                Severity::Critical,
                Condition::at_least(SENSOR_VALUE, 105.0),
            )
            .reason("Sensor at {value}°C at or above {limit}°C")
            .issue("sensor_overheat"),
        )
        .rule(
            Rule::new(
                "temperature.sensor.high_threshold",
                Severity::Warning,
                Condition::AtLeastField {
                    field: SENSOR_VALUE,
                    ceiling: SENSOR_HIGH,
                },
            )
            .reason("Sensor at {value}°C reached its high threshold {limit}°C")
            .issue("sensor_overheat"),
        )
        .rule(
            Rule::new(
                "temperature.sensor.warning",
                Severity::Warning,
                Condition::at_least(SENSOR_VALUE, 90.0),
            )
            .reason("Sensor at {value}°C at or above {limit}°C")
            .issue("sensor_overheat"),
        )
}

pub fn power() -> RuleSet {
    let [status_critical, status_warning, status_info] = vocabulary_rules(
        "power.status",
        PSU_STATUS,
        "Power supply reported status {value}",
        "psu_failure",
    );
    RuleSet::new(POWER)
        .require(PSU_DC_STATE)
        .require(PSU_POWER)
        .require(PSU_STATUS)
        .rule(
            Rule::new(
                "power.dc_state.critical",
                Severity::Critical,
                Condition::text_in(PSU_DC_STATE, &["fail", "failed", "off", "absent"]),
            )
            .reason("Power supply DC state {value}")
            .issue("psu_failure"),
        )
        .rule(
            Rule::new(
                "power.utilization.critical",
                Severity::Critical,
                Condition::ratio_at_least(PSU_POWER, PSU_CAPACITY, 95.0),
            )
            .reason("Power supply load {value}% of capacity, at or above {limit}%")
            .issue("psu_overload"),
        )
        .rule(status_critical)
        .rule(
            Rule::new(
                "power.utilization.warning",
                Severity::Warning,
                Condition::ratio_at_least(PSU_POWER, PSU_CAPACITY, 85.0),
            )
            .reason("Power supply load {value}% of capacity, at or above {limit}%")
            .issue("psu_overload"),
        )
        .rule(
            Rule::new("power.alert.warning", Severity::Warning, Condition::flag(PSU_ALERT))
                .reason("Power supply alert raised ({value})")
                .issue("psu_alert"),
        )
        .rule(status_warning)
        .rule(status_info)
}
