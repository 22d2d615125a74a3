use crate::error::RegistryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Registry entry describing how to label, format and extract one sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub format: FormatKind,
    pub source: Source,
    pub chart_type: Option<ChartType>,
    pub category: Category,
    /// Open doubts about this entry; empty once everything is confirmed.
    #[serde(skip_serializing_if = "all_confirmed")]
    pub unverified: &'static [Unverified],
}

fn all_confirmed(doubts: &&'static [Unverified]) -> bool {
    doubts.is_empty()
}

/// Where a sensor's value lives inside a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Scan the snapshot's `[name, value]` list for the descriptor key.
    Sensors,
    /// Read straight from the GPS block.
    Gps(GpsField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpsField {
    Satellites,
    Speed,
}

/// Formatter selector. Each variant maps to one rendering rule in `format.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// Bare value
    Plain,
    /// Value, a space, then the unit symbol: `12.4 V`
    Unit(Unit),
    /// Value directly followed by the unit symbol: `21.5℃`
    Tight(Unit),
    /// Seconds rendered as `HH:MM:SS`
    Duration,
    /// `acc`/`on`/`off` codes
    Ignition,
    /// Truthy -> `Yes`, falsy -> `No`
    YesNo,
    /// Zero -> `Not Present`, anything else -> `Present`
    Presence,
    /// Numeric bitmask rendered as `0x..`
    Hex,
    /// First element of an array value
    FirstElement,
    /// Whole value, arrays included
    Raw,
    /// Tachograph driver state string with an all-zero "unknown" sentinel
    DriverStates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    KmPerHour,
    Percent,
    Celsius,
    Litre,
    Volt,
    Ampere,
    Km,
    LitrePer100Km,
    RelativeHumidity,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::KmPerHour => "km/h",
            Unit::Percent => "%",
            Unit::Celsius => "℃",
            Unit::Litre => "ℓ",
            Unit::Volt => "V",
            Unit::Ampere => "A",
            Unit::Km => "km",
            Unit::LitrePer100Km => "ℓ/100km",
            Unit::RelativeHumidity => "%RH",
        }
    }
}

/// Rendering hint for a sensor's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Line,
}

impl ChartType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Line => "line",
        }
    }
}

/// Grouping tag used to cluster sensors in the dashboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Gps,
    General,
    Battery,
    Driver,
    Fuel,
    Engine,
    Odometer,
    Adblue,
    Agricultural,
    Industrial,
    DallasTemp,
    DriverState,
    Io,
    BleTemperature,
    BleBattery,
    BleFuel,
    BleLuminosity,
    LlsFuel,
    LlsTemp,
}

impl Category {
    pub const ALL: [Category; 19] = [
        Category::Gps,
        Category::General,
        Category::Battery,
        Category::Driver,
        Category::Fuel,
        Category::Engine,
        Category::Odometer,
        Category::Adblue,
        Category::Agricultural,
        Category::Industrial,
        Category::DallasTemp,
        Category::DriverState,
        Category::Io,
        Category::BleTemperature,
        Category::BleBattery,
        Category::BleFuel,
        Category::BleLuminosity,
        Category::LlsFuel,
        Category::LlsTemp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Gps => "gps",
            Category::General => "general",
            Category::Battery => "battery",
            Category::Driver => "driver",
            Category::Fuel => "fuel",
            Category::Engine => "engine",
            Category::Odometer => "odometer",
            Category::Adblue => "adblue",
            Category::Agricultural => "agricultural",
            Category::Industrial => "industrial",
            Category::DallasTemp => "dallas_temp",
            Category::DriverState => "driver_state",
            Category::Io => "io",
            Category::BleTemperature => "ble_temperature",
            Category::BleBattery => "ble_battery",
            Category::BleFuel => "ble_fuel",
            Category::BleLuminosity => "ble_luminosity",
            Category::LlsFuel => "lls_fuel",
            Category::LlsTemp => "lls_temp",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == t)
            .ok_or_else(|| RegistryError::UnknownCategory(t.to_string()))
    }
}

/// Entries whose presentation still awaits confirmation against unit documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unverified {
    /// Unit or rendering not confirmed
    Format,
    /// Display label is provisional
    Label,
    /// Meaning of the raw codes (e.g. 0/1) not confirmed
    Values,
    /// Sensor key itself not confirmed
    Key,
}

impl Unverified {
    pub fn as_str(self) -> &'static str {
        match self {
            Unverified::Format => "format",
            Unverified::Label => "label",
            Unverified::Values => "values",
            Unverified::Key => "key",
        }
    }
}
