use crate::descriptor::FormatKind;
use crate::types::TelemetryValue;

const DRIVER_STATES_UNKNOWN: &str = "00000000000000000000000000000000";

/// Converts a number of seconds into `HH:MM:SS`. Hours are not wrapped at 24.
pub fn secs_to_hms(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds / 60) % 60;
    let s = seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

/// Renders `value` according to `kind`. Total over every value shape.
pub fn format_value(kind: FormatKind, value: &TelemetryValue) -> String {
    match kind {
        FormatKind::Plain | FormatKind::Raw => value.to_string(),
        FormatKind::Unit(unit) => format!("{value} {}", unit.symbol()),
        FormatKind::Tight(unit) => format!("{value}{}", unit.symbol()),
        FormatKind::Duration => fmt_duration(value),
        FormatKind::Ignition => fmt_ignition(value),
        FormatKind::YesNo => {
            if value.is_truthy() {
                "Yes".to_string()
            } else {
                "No".to_string()
            }
        }
        FormatKind::Presence => fmt_presence(value),
        FormatKind::Hex => fmt_hex(value),
        FormatKind::FirstElement => fmt_first_element(value),
        FormatKind::DriverStates => match value.as_str() {
            Some(DRIVER_STATES_UNKNOWN) => "Unknown".to_string(),
            _ => value.to_string(),
        },
    }
}

fn fmt_duration(value: &TelemetryValue) -> String {
    match value.as_f64() {
        // 2^64 itself does not fit, hence the strict bound
        Some(secs) if secs.is_finite() && secs >= 0.0 && secs < u64::MAX as f64 => {
            secs_to_hms(secs.floor() as u64)
        }
        _ => {
            tracing::trace!(%value, "duration value out of range or not numeric; passing through");
            value.to_string()
        }
    }
}

fn fmt_ignition(value: &TelemetryValue) -> String {
    match value.as_str() {
        Some("acc") => "ACC".to_string(),
        Some("on") => "On".to_string(),
        Some("off") => "Off".to_string(),
        _ => value.to_string(),
    }
}

fn fmt_presence(value: &TelemetryValue) -> String {
    let absent = match value {
        TelemetryValue::Int(i) => *i == 0,
        TelemetryValue::Float(x) => *x == 0.0,
        _ => false,
    };
    if absent {
        "Not Present".to_string()
    } else {
        "Present".to_string()
    }
}

fn fmt_hex(value: &TelemetryValue) -> String {
    match value.as_i64() {
        Some(n) if n < 0 => format!("-0x{:x}", n.unsigned_abs()),
        Some(n) => format!("0x{n:x}"),
        None => value.to_string(),
    }
}

fn fmt_first_element(value: &TelemetryValue) -> String {
    match value {
        TelemetryValue::List(items) => items.first().map(ToString::to_string).unwrap_or_default(),
        other => {
            tracing::trace!(value = %other, "expected an array value; rendering as-is");
            other.to_string()
        }
    }
}
