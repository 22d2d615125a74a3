use crate::descriptor::{Category, ChartType, Source};
use crate::format::format_value;
use crate::registry::SensorRegistry;
use crate::types::{LocalTime, Snapshot, TelemetryValue};
use serde::Serialize;

/// One dashboard row: a registered sensor present in a snapshot, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedReading {
    pub key: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub chart_type: Option<ChartType>,
    pub local_time: LocalTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
    pub value: TelemetryValue,
    pub formatted: String,
}

impl SensorRegistry {
    /// Rows for every registered sensor found in `snapshot`, in registry order.
    ///
    /// GPS-backed sensors are skipped when the unit did not report the field.
    pub fn render(&self, snapshot: &Snapshot) -> Vec<RenderedReading> {
        let ts = snapshot.gps.local_time.to_rfc3339();
        let mut out = Vec::new();
        for desc in self.iter() {
            let Some(reading) = self.lookup(snapshot, desc.key) else {
                continue;
            };
            if reading.value.is_null() && desc.source != Source::Sensors {
                continue;
            }
            let formatted = format_value(desc.format, &reading.value);
            out.push(RenderedReading {
                key: desc.key,
                label: desc.label,
                category: desc.category,
                chart_type: desc.chart_type,
                local_time: reading.local_time,
                ts: ts.clone(),
                value: reading.value,
                formatted,
            });
        }
        tracing::debug!(
            rows = out.len(),
            readings = snapshot.sensors.len(),
            "rendered snapshot"
        );
        out
    }

    /// Rendered rows grouped by category, categories in first-seen registry order.
    pub fn render_by_category(&self, snapshot: &Snapshot) -> Vec<(Category, Vec<RenderedReading>)> {
        let mut groups: Vec<(Category, Vec<RenderedReading>)> = Vec::new();
        for row in self.render(snapshot) {
            match groups.iter_mut().find(|(c, _)| *c == row.category) {
                Some((_, rows)) => rows.push(row),
                None => groups.push((row.category, vec![row])),
            }
        }
        groups
    }
}

pub fn render(snapshot: &Snapshot) -> Vec<RenderedReading> {
    SensorRegistry::global().render(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> Snapshot {
        serde_json::from_value(json!({
            "gps": {"local_time": 0, "satellites": 7},
            "sensors": [
                ["eng_work_time", 3725],
                ["ignition", "acc"],
                ["not_a_sensor", 1],
                ["ebat_volts", 12.6]
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_render_follows_registry_order() {
        let rows = render(&snapshot());
        let keys: Vec<&str> = rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["gps.satellites", "ignition", "ebat_volts", "eng_work_time"]);
        assert_eq!(rows[3].formatted, "01:02:05");
        assert_eq!(rows[2].formatted, "12.6 V");
        assert_eq!(rows[0].ts.as_deref(), Some("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn test_render_by_category() {
        let groups = SensorRegistry::global().render_by_category(&snapshot());
        let cats: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            cats,
            vec![Category::Gps, Category::General, Category::Battery, Category::Engine]
        );
    }

    #[test]
    fn test_rendered_row_serializes() {
        let rows = render(&snapshot());
        let v = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(v["key"], "ignition");
        assert_eq!(v["category"], "general");
        assert_eq!(v["chart_type"], serde_json::Value::Null);
        assert_eq!(v["formatted"], "ACC");
    }
}
