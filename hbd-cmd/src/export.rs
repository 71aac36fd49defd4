//! JSON export of the dashboard snapshot.

use crate::{build_or_warn, load_table, resolve_selection};
use anyhow::Context;
use hbd_data::DashboardData;
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the snapshot for a selection to `output`.
///
/// An empty selection prints the no-data warning and writes nothing.
pub fn run_export(data_path: &str, output: &str, hotels: &[String]) -> anyhow::Result<()> {
    let table = load_table(data_path)?;
    let selection = resolve_selection(&table, hotels);
    let Some(data) = build_or_warn(&table, &selection)? else {
        return Ok(());
    };

    write_json(&data, Path::new(output))?;
    info!(
        "[HBD] export: wrote snapshot of {} bookings to {}",
        data.kpis.total_bookings, output
    );
    println!("Export complete. Output: {}", output);
    Ok(())
}

/// Serialize `data` as pretty JSON, creating parent directories as needed.
pub fn write_json(data: &DashboardData, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}
