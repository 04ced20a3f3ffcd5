//! Output Generation
//!
//! World snapshots and the metric series file consumed by external
//! dashboards.

pub mod snapshot;

pub use snapshot::{
    generate_snapshot, write_current_state, write_snapshot, write_snapshot_to_dir,
    SnapshotGenerator,
};

use std::fs;
use std::path::Path;

use crate::systems::metrics::MetricsHistory;

/// Metric series output path
pub const METRICS_OUTPUT_PATH: &str = "output/metrics.json";

/// Write the full metric history to the output file.
pub fn write_metric_series(history: &MetricsHistory) -> std::io::Result<()> {
    let output_dir = Path::new("output");
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let json = serde_json::to_string_pretty(history.records())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    fs::write(METRICS_OUTPUT_PATH, json)
}
