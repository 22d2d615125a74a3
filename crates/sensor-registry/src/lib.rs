//! sensor-registry: static registry of telemetry sensors for dashboards
//!
//! Maps sensor keys to a display label, a value formatter, a chart hint and a
//! category, and extracts a sensor's current value from a telemetry snapshot.
//! Every registry operation is a pure lookup: unknown keys and readings absent
//! from a snapshot yield `None`.

mod types;
pub use types::{Gps, LocalTime, Reading, SensorReading, Snapshot, TelemetryValue};

mod error;
pub use error::{RegistryError, Result};

mod descriptor;
pub use descriptor::{
    Category, ChartType, FormatKind, GpsField, SensorDescriptor, Source, Unit, Unverified,
};

mod format;
pub use format::{format_value, secs_to_hms};

mod table;

mod registry;
pub use registry::{
    category, chart_type, descriptor, format, from_telemetry, is_supported, label, lookup,
    SensorRegistry,
};

mod render;
pub use render::{render, RenderedReading};

mod loader;
pub use loader::{load_snapshot_file, load_snapshots_dir};
#[cfg(feature = "schema")]
pub use loader::snapshot_schema;
