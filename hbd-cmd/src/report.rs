//! Plain-text rendering of the dashboard for the terminal.

use crate::{build_or_warn, load_table, resolve_selection, OutputFormat};
use chrono::NaiveDate;
use hbd_data::aggregates::{CategoryCount, CategoryMean};
use hbd_data::DashboardData;
use hbd_utils::formatting::{format_currency, format_percent, format_thousands};
use log::info;

/// Print the KPI block for a selection.
pub fn run_summary(data_path: &str, hotels: &[String]) -> anyhow::Result<()> {
    let table = load_table(data_path)?;
    let selection = resolve_selection(&table, hotels);
    let Some(data) = build_or_warn(&table, &selection)? else {
        return Ok(());
    };
    print!("{}", render_summary(&data, table.arrival_span()));
    Ok(())
}

/// Print every aggregate table for a selection, as text or JSON.
pub fn run_report(data_path: &str, hotels: &[String], format: OutputFormat) -> anyhow::Result<()> {
    let table = load_table(data_path)?;
    let selection = resolve_selection(&table, hotels);
    let Some(data) = build_or_warn(&table, &selection)? else {
        return Ok(());
    };
    match format {
        OutputFormat::Text => print!("{}", render_report(&data)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
    }
    info!("[HBD] report: rendered {} bookings as {:?}", data.kpis.total_bookings, format);
    Ok(())
}

/// Print the distinct hotel values, one per line.
pub fn run_hotels(data_path: &str) -> anyhow::Result<()> {
    let table = load_table(data_path)?;
    for hotel in table.hotels() {
        println!("{}", hotel);
    }
    Ok(())
}

/// KPI block plus the arrival date span of the whole dataset.
pub fn render_summary(data: &DashboardData, span: Option<(NaiveDate, NaiveDate)>) -> String {
    let kpis = &data.kpi_display;
    let mut out = String::new();
    out.push_str(&format!("Hotels:             {}\n", data.selected_hotels.join(", ")));
    out.push_str(&format!("Total Bookings:     {}\n", kpis.total_bookings));
    out.push_str(&format!("Cancellation Rate:  {}\n", kpis.cancellation_rate));
    out.push_str(&format!("Avg Lead Time:      {}\n", kpis.avg_lead_time));
    out.push_str(&format!("Avg Daily Rate:     {}\n", kpis.avg_daily_rate));
    if let Some((first, last)) = span {
        out.push_str(&format!("Arrivals:           {} to {}\n", first, last));
    }
    out
}

/// Every chart's table, in tab order.
pub fn render_report(data: &DashboardData) -> String {
    let mut out = render_summary(data, None);

    let monthly: Vec<(String, String)> = data
        .monthly_bookings
        .iter()
        .map(|m| (m.month.name().to_string(), format_thousands(m.bookings as u64)))
        .collect();
    section(&mut out, "Monthly Booking Trends", &monthly);
    section(&mut out, "Bookings by Hotel Type", &count_rows(&data.bookings_by_hotel));
    section(
        &mut out,
        "Top 10 Countries by Number of Bookings",
        &count_rows(&data.top_countries),
    );

    let adr_hotels: Vec<(String, String)> = data
        .adr_by_hotel
        .iter()
        .filter_map(|h| {
            let stats = h.stats.as_ref()?;
            Some((
                h.hotel.clone(),
                format!(
                    "min {}  q1 {}  median {}  q3 {}  max {}  outliers {}",
                    format_currency(stats.min),
                    format_currency(stats.q1),
                    format_currency(stats.median),
                    format_currency(stats.q3),
                    format_currency(stats.max),
                    stats.outliers.len()
                ),
            ))
        })
        .collect();
    section(&mut out, "ADR by Hotel Type", &adr_hotels);
    section(
        &mut out,
        "ADR by Room Type",
        &mean_rows(&data.adr_by_room_type, format_currency),
    );

    let monthly_rate: Vec<(String, String)> = data
        .monthly_cancellation_rate
        .iter()
        .map(|m| (m.month.name().to_string(), format_percent(m.rate, 1)))
        .collect();
    section(&mut out, "Monthly Cancellation Rate", &monthly_rate);
    section(
        &mut out,
        "Cancellation Rate by Market Segment",
        &mean_rows(&data.cancellation_by_segment, |v| format_percent(v, 1)),
    );

    let correlation: Vec<(String, String)> = data
        .correlation
        .columns
        .iter()
        .zip(&data.correlation.values)
        .map(|(name, row)| {
            let cells: Vec<String> = row
                .iter()
                .map(|v| match v {
                    Some(r) => format!("{:>5.1}", r),
                    None => format!("{:>5}", "-"),
                })
                .collect();
            (name.clone(), cells.join(" "))
        })
        .collect();
    section(&mut out, "Heatmap of Correlations", &correlation);
    out
}

fn count_rows(rows: &[CategoryCount]) -> Vec<(String, String)> {
    rows.iter()
        .map(|r| (r.label.clone(), format_thousands(r.bookings as u64)))
        .collect()
}

fn mean_rows(rows: &[CategoryMean], format: impl Fn(f64) -> String) -> Vec<(String, String)> {
    rows.iter().map(|r| (r.label.clone(), format(r.value))).collect()
}

/// Append a titled two-column table, labels padded to the widest one.
fn section(out: &mut String, title: &str, rows: &[(String, String)]) {
    out.push_str(&format!("\n== {} ==\n", title));
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    for (label, value) in rows {
        out.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
    }
}
