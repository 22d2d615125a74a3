use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// A single sensor value as carried in a snapshot.
///
/// Values arrive in whatever shape the unit reports: scalars, strings, or
/// arrays of up to four readings (multi-probe or multi-driver sensors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum TelemetryValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<TelemetryValue>),
    Null,
}

impl TelemetryValue {
    pub fn is_null(&self) -> bool {
        matches!(self, TelemetryValue::Null)
    }

    /// Numeric view of the value. Text is only accepted when it parses as a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TelemetryValue::Int(i) => Some(*i as f64),
            TelemetryValue::Float(x) => Some(*x),
            TelemetryValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Integral view of the value, used by bitmask rendering.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TelemetryValue::Int(i) => Some(*i),
            TelemetryValue::Float(x) if x.is_finite() && x.fract() == 0.0 => {
                if *x >= i64::MIN as f64 && *x <= i64::MAX as f64 {
                    Some(*x as i64)
                } else {
                    None
                }
            }
            TelemetryValue::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TelemetryValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Loose truthiness: null, false, zero, NaN and the empty string are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            TelemetryValue::Null => false,
            TelemetryValue::Bool(b) => *b,
            TelemetryValue::Int(i) => *i != 0,
            TelemetryValue::Float(x) => *x != 0.0 && !x.is_nan(),
            TelemetryValue::Text(s) => !s.is_empty(),
            TelemetryValue::List(_) => true,
        }
    }
}

impl fmt::Display for TelemetryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryValue::Null => f.write_str("null"),
            TelemetryValue::Bool(b) => write!(f, "{b}"),
            TelemetryValue::Int(i) => write!(f, "{i}"),
            TelemetryValue::Float(x) => fmt_number(*x, f),
            TelemetryValue::Text(s) => f.write_str(s),
            TelemetryValue::List(items) => {
                // Nulls inside arrays render as empty slots: [1, null, 3] -> "1,,3"
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Writes a float the way a dashboard shows numbers: `-0` as `0`, `Infinity`,
/// and exponent form (`1e+300`, `1e-7`) outside `[1e-6, 1e21)`.
fn fmt_number(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x == 0.0 {
        return f.write_str("0");
    }
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    let abs = x.abs();
    if (1e-6..1e21).contains(&abs) {
        return write!(f, "{x}");
    }
    let exp = format!("{x:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
        _ => f.write_str(&exp),
    }
}

impl From<bool> for TelemetryValue {
    fn from(v: bool) -> Self {
        TelemetryValue::Bool(v)
    }
}

impl From<i64> for TelemetryValue {
    fn from(v: i64) -> Self {
        TelemetryValue::Int(v)
    }
}

impl From<i32> for TelemetryValue {
    fn from(v: i32) -> Self {
        TelemetryValue::Int(i64::from(v))
    }
}

impl From<f64> for TelemetryValue {
    fn from(v: f64) -> Self {
        TelemetryValue::Float(v)
    }
}

impl From<&str> for TelemetryValue {
    fn from(v: &str) -> Self {
        TelemetryValue::Text(v.to_string())
    }
}

impl From<String> for TelemetryValue {
    fn from(v: String) -> Self {
        TelemetryValue::Text(v)
    }
}

impl<T: Into<TelemetryValue>> From<Vec<T>> for TelemetryValue {
    fn from(v: Vec<T>) -> Self {
        TelemetryValue::List(v.into_iter().map(Into::into).collect())
    }
}

/// Local time stamp of a snapshot as reported by the GPS block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum LocalTime {
    /// Unix seconds
    Epoch(i64),
    Text(String),
}

impl LocalTime {
    /// Epoch seconds and RFC 3339 strings convert; anything else yields `None`.
    pub fn to_datetime(&self) -> Option<OffsetDateTime> {
        match self {
            LocalTime::Epoch(secs) => OffsetDateTime::from_unix_timestamp(*secs).ok(),
            LocalTime::Text(s) => OffsetDateTime::parse(s, &Rfc3339).ok(),
        }
    }

    pub fn to_rfc3339(&self) -> Option<String> {
        self.to_datetime().and_then(|t| t.format(&Rfc3339).ok())
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalTime::Epoch(secs) => write!(f, "{secs}"),
            LocalTime::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Gps {
    pub local_time: LocalTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satellites: Option<TelemetryValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<TelemetryValue>,
    /// Position, heading and whatever else the unit reports; kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One `[name, value]` pair from a snapshot's sensor list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct SensorReading(pub String, pub TelemetryValue);

impl SensorReading {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> &TelemetryValue {
        &self.1
    }
}

/// One telemetry sample: a GPS block plus the sensor readings taken with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Snapshot {
    pub gps: Gps,
    pub sensors: Vec<SensorReading>,
}

impl Snapshot {
    pub fn new(local_time: LocalTime) -> Self {
        Self {
            gps: Gps {
                local_time,
                satellites: None,
                speed: None,
                extra: BTreeMap::new(),
            },
            sensors: Vec::new(),
        }
    }

    pub fn with_reading(mut self, name: &str, value: impl Into<TelemetryValue>) -> Self {
        self.sensors
            .push(SensorReading(name.to_string(), value.into()));
        self
    }

    /// First reading carrying `name`, if any.
    pub fn find(&self, name: &str) -> Option<&TelemetryValue> {
        self.sensors
            .iter()
            .find(|r| r.name() == name)
            .map(SensorReading::value)
    }
}

/// A sensor value stamped with the snapshot's local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub local_time: LocalTime,
    pub value: TelemetryValue,
}
