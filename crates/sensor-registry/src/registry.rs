use crate::descriptor::{Category, ChartType, GpsField, SensorDescriptor, Source};
use crate::format::format_value;
use crate::table::SENSORS;
use crate::types::{Reading, Snapshot, TelemetryValue};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static GLOBAL: Lazy<SensorRegistry> = Lazy::new(|| SensorRegistry::new(SENSORS));

/// Immutable key -> descriptor registry.
#[derive(Debug, Clone)]
pub struct SensorRegistry {
    descriptors: &'static [SensorDescriptor],
    index: HashMap<&'static str, usize>,
}

impl SensorRegistry {
    /// Builds a registry over `descriptors`. On duplicate keys the first entry wins.
    pub fn new(descriptors: &'static [SensorDescriptor]) -> Self {
        let mut index = HashMap::with_capacity(descriptors.len());
        for (i, d) in descriptors.iter().enumerate() {
            if index.contains_key(d.key) {
                tracing::warn!(key = d.key, "duplicate sensor key ignored");
                continue;
            }
            index.insert(d.key, i);
        }
        Self { descriptors, index }
    }

    /// The built-in sensor table.
    pub fn global() -> &'static SensorRegistry {
        &GLOBAL
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn descriptor(&self, key: &str) -> Option<&'static SensorDescriptor> {
        let descriptors = self.descriptors;
        self.index.get(key).map(|&i| &descriptors[i])
    }

    pub fn is_supported(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.descriptor(key).map(|d| d.label)
    }

    pub fn chart_type(&self, key: &str) -> Option<ChartType> {
        self.descriptor(key).and_then(|d| d.chart_type)
    }

    pub fn category(&self, key: &str) -> Option<Category> {
        self.descriptor(key).map(|d| d.category)
    }

    /// Formats `value` with the key's formatter; `None` for unregistered keys.
    pub fn format(&self, key: &str, value: &TelemetryValue) -> Option<String> {
        match self.descriptor(key) {
            Some(d) => Some(format_value(d.format, value)),
            None => {
                tracing::debug!(key, "format requested for unregistered sensor");
                None
            }
        }
    }

    /// Current value of `key` in `snapshot`, stamped with the snapshot's local time.
    ///
    /// `None` when the key is unregistered or the snapshot carries no reading for
    /// it. The GPS-backed keys always yield a reading; a GPS field the unit did
    /// not report comes back as `TelemetryValue::Null`.
    pub fn lookup(&self, snapshot: &Snapshot, key: &str) -> Option<Reading> {
        let Some(desc) = self.descriptor(key) else {
            tracing::debug!(key, "lookup of unregistered sensor");
            return None;
        };
        match desc.source {
            Source::Sensors => from_telemetry(snapshot, desc.key),
            Source::Gps(field) => {
                let value = match field {
                    GpsField::Satellites => snapshot.gps.satellites.clone(),
                    GpsField::Speed => snapshot.gps.speed.clone(),
                };
                Some(Reading {
                    local_time: snapshot.gps.local_time.clone(),
                    value: value.unwrap_or(TelemetryValue::Null),
                })
            }
        }
    }

    /// All descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static SensorDescriptor> + '_ {
        let descriptors = self.descriptors;
        let index = &self.index;
        descriptors
            .iter()
            .enumerate()
            .filter(move |(i, d)| index.get(d.key) == Some(i))
            .map(|(_, d)| d)
    }

    pub fn in_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &'static SensorDescriptor> + '_ {
        self.iter().filter(move |d| d.category == category)
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::new();
        for d in self.iter() {
            if !out.contains(&d.category) {
                out.push(d.category);
            }
        }
        out
    }

    /// Sensors that carry a chart hint.
    pub fn charted(&self) -> impl Iterator<Item = &'static SensorDescriptor> + '_ {
        self.iter().filter(|d| d.chart_type.is_some())
    }

    /// Sensors whose label, format, codes or key still await confirmation.
    pub fn unverified(&self) -> impl Iterator<Item = &'static SensorDescriptor> + '_ {
        self.iter().filter(|d| !d.unverified.is_empty())
    }
}

/// Scans `snapshot.sensors` for the first reading named `name`, registered or not.
pub fn from_telemetry(snapshot: &Snapshot, name: &str) -> Option<Reading> {
    match snapshot.find(name) {
        Some(value) => Some(Reading {
            local_time: snapshot.gps.local_time.clone(),
            value: value.clone(),
        }),
        None => {
            tracing::trace!(name, "no reading in snapshot");
            None
        }
    }
}

pub fn lookup(snapshot: &Snapshot, key: &str) -> Option<Reading> {
    SensorRegistry::global().lookup(snapshot, key)
}

pub fn is_supported(key: &str) -> bool {
    SensorRegistry::global().is_supported(key)
}

pub fn format(key: &str, value: &TelemetryValue) -> Option<String> {
    SensorRegistry::global().format(key, value)
}

pub fn label(key: &str) -> Option<&'static str> {
    SensorRegistry::global().label(key)
}

pub fn descriptor(key: &str) -> Option<&'static SensorDescriptor> {
    SensorRegistry::global().descriptor(key)
}

pub fn chart_type(key: &str) -> Option<ChartType> {
    SensorRegistry::global().chart_type(key)
}

pub fn category(key: &str) -> Option<Category> {
    SensorRegistry::global().category(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FormatKind, Unit};
    use crate::types::LocalTime;

    static DUPES: &[SensorDescriptor] = &[
        SensorDescriptor {
            key: "speed",
            label: "Speed",
            format: FormatKind::Unit(Unit::KmPerHour),
            source: Source::Sensors,
            chart_type: Some(ChartType::Line),
            category: Category::General,
            unverified: &[],
        },
        SensorDescriptor {
            key: "speed",
            label: "Speed (dup)",
            format: FormatKind::Plain,
            source: Source::Sensors,
            chart_type: None,
            category: Category::Engine,
            unverified: &[],
        },
    ];

    #[test]
    fn test_duplicate_keys_first_wins() {
        let reg = SensorRegistry::new(DUPES);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.label("speed"), Some("Speed"));
        assert_eq!(reg.iter().count(), 1);
        assert_eq!(reg.categories(), vec![Category::General]);
    }

    #[test]
    fn test_global_index_covers_table() {
        let reg = SensorRegistry::global();
        assert_eq!(reg.len(), SENSORS.len());
        assert!(!reg.is_empty());
    }

    #[test]
    fn test_gps_lookup_missing_field_is_null() {
        let snap = Snapshot::new(LocalTime::Epoch(10));
        let r = lookup(&snap, "gps.speed").unwrap();
        assert_eq!(r.value, TelemetryValue::Null);
        assert_eq!(r.local_time, LocalTime::Epoch(10));
    }

    #[test]
    fn test_from_telemetry_ignores_registration() {
        let snap = Snapshot::new(LocalTime::Epoch(5)).with_reading("vendor_specific", 3);
        assert!(!is_supported("vendor_specific"));
        assert_eq!(lookup(&snap, "vendor_specific"), None);
        let r = from_telemetry(&snap, "vendor_specific").unwrap();
        assert_eq!(r.value, TelemetryValue::Int(3));
    }
}
