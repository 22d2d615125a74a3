use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use sensor_registry as sensors;
use sensors::{Category, SensorRegistry, TelemetryValue};

#[derive(Parser, Debug)]
#[command(
    name = "telemetry",
    version,
    about = "Inspect the telemetry sensor registry and render snapshots",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered sensors
    List {
        /// Only sensors in this category (e.g. engine, ble_fuel)
        #[arg(long)]
        category: Option<Category>,
        /// Only sensors whose presentation is still unverified
        #[arg(long, action = ArgAction::SetTrue)]
        unverified: bool,
        /// Print descriptors as JSON
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// List categories in dashboard order with sensor counts
    Categories,
    /// Render a snapshot file (JSON or YAML)
    Show {
        /// Snapshot file path
        #[arg(long)]
        snapshot: String,
        /// Show a single sensor only
        #[arg(long)]
        key: Option<String>,
        /// Group rows by category
        #[arg(long, action = ArgAction::SetTrue)]
        grouped: bool,
        /// Print rows as JSON
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Format a raw value for a sensor
    Format {
        /// Sensor key
        #[arg(long)]
        key: String,
        /// Value as JSON (e.g. 3725, "acc", [1,0])
        #[arg(long)]
        value: String,
    },
    /// Print a sensor's label
    Label {
        /// Sensor key
        #[arg(long)]
        key: String,
    },
}

fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            category,
            unverified,
            json,
        } => sensor_list(category, unverified, json),
        Commands::Categories => category_list(),
        Commands::Show {
            snapshot,
            key,
            grouped,
            json,
        } => snapshot_show(&snapshot, key.as_deref(), grouped, json),
        Commands::Format { key, value } => format_value(&key, &value),
        Commands::Label { key } => label(&key),
    }
}

fn setup_tracing() {
    // Best-effort; avoid panics if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn sensor_list(category: Option<Category>, unverified: bool, json: bool) -> Result<()> {
    let reg = SensorRegistry::global();
    let list: Vec<&sensors::SensorDescriptor> = reg
        .iter()
        .filter(|d| category.map_or(true, |c| d.category == c))
        .filter(|d| !unverified || !d.unverified.is_empty())
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }
    for d in list {
        let chart = d.chart_type.map(|c| c.as_str()).unwrap_or("-");
        let note = if d.unverified.is_empty() {
            String::new()
        } else {
            let tags: Vec<&str> = d.unverified.iter().map(|u| u.as_str()).collect();
            format!("\tunverified={}", tags.join(","))
        };
        println!(
            "{}\t{}\tcategory={}\tchart={chart}{note}",
            d.key, d.label, d.category
        );
    }
    Ok(())
}

fn category_list() -> Result<()> {
    let reg = SensorRegistry::global();
    for c in reg.categories() {
        println!("{c}\t{}", reg.in_category(c).count());
    }
    Ok(())
}

fn snapshot_show(path: &str, key: Option<&str>, grouped: bool, json: bool) -> Result<()> {
    let snap = sensors::load_snapshot_file(path)?;
    let reg = SensorRegistry::global();

    if let Some(key) = key {
        if !reg.is_supported(key) {
            anyhow::bail!("unknown sensor: {key}");
        }
        let Some(reading) = reg.lookup(&snap, key) else {
            anyhow::bail!("no reading for {key} in {path}");
        };
        let formatted = reg.format(key, &reading.value).unwrap_or_default();
        if json {
            let out = serde_json::json!({
                "key": key,
                "local_time": reading.local_time,
                "value": reading.value,
                "formatted": formatted,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!(
                "{}\t{formatted}\t{}",
                reg.label(key).unwrap_or(key),
                reading.local_time
            );
        }
        return Ok(());
    }

    if grouped {
        let groups = reg.render_by_category(&snap);
        if json {
            let out: Vec<serde_json::Value> = groups
                .iter()
                .map(|(c, rows)| serde_json::json!({ "category": c, "rows": rows }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            for (c, rows) in groups {
                println!("[{c}]");
                for r in rows {
                    println!("  {}\t{}", r.label, r.formatted);
                }
            }
        }
        return Ok(());
    }

    let rows = reg.render(&snap);
    info!(path, rows = rows.len(), "rendered snapshot");
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("local_time\t{}", snap.gps.local_time);
        for r in rows {
            println!("{}\t{}\t{}", r.key, r.label, r.formatted);
        }
    }
    Ok(())
}

fn format_value(key: &str, raw: &str) -> Result<()> {
    // Bare words that are not valid JSON are taken as text: `--value acc`
    let value: TelemetryValue = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => TelemetryValue::Text(raw.to_string()),
    };
    match sensors::format(key, &value) {
        Some(s) => println!("{s}"),
        None => anyhow::bail!("unknown sensor: {key}"),
    }
    Ok(())
}

fn label(key: &str) -> Result<()> {
    match sensors::label(key) {
        Some(l) => println!("{l}"),
        None => anyhow::bail!("unknown sensor: {key}"),
    }
    Ok(())
}
