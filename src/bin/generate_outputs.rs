//! CLI tool to generate the sample dataset and insight report files.
//!
//! Produces:
//! - `<output-dir>/sample_dataset.json` — generated orders, emails and measurements
//! - `<output-dir>/insight_report.json` — combined report over that dataset

use anyhow::Context;
use clap::Parser;
use record_insights::config::{init_tracing, GeneratorConfig};
use record_insights::data::generate_dataset;
use record_insights::report::generate_report;

fn main() -> anyhow::Result<()> {
    let config = GeneratorConfig::parse();
    init_tracing();

    tracing::info!(version = record_insights::version(), seed = config.seed, "generating outputs");

    // Generate sample dataset
    let dataset = generate_dataset(&config.dataset_spec());
    let dataset_json = serde_json::to_string_pretty(&dataset).context("failed to serialize dataset")?;
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;
    let dataset_path = config.output_dir.join("sample_dataset.json");
    std::fs::write(&dataset_path, &dataset_json)
        .with_context(|| format!("failed to write {}", dataset_path.display()))?;
    println!("Wrote {}", dataset_path.display());

    // Generate insight report
    let report = generate_report(&dataset).context("failed to compute report")?;
    let report_json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    let report_path = config.output_dir.join("insight_report.json");
    std::fs::write(&report_path, &report_json)
        .with_context(|| format!("failed to write {}", report_path.display()))?;
    println!("Wrote {}", report_path.display());

    // Print summary
    println!();
    println!("=== INSIGHT REPORT SUMMARY ===");
    println!();
    println!("--- Orders ---");
    println!("  Total:              {}", report.orders.total_orders);
    println!("  Cancelled:          {}", report.orders.cancelled_orders);
    println!("  Avg Order Value:    ${:.2}", report.orders.average_order_value);
    println!();
    println!("--- Emails ---");
    println!("  Entries:            {}", report.emails.total_entries);
    println!("  Valid:              {}", report.emails.valid_emails);
    println!("  Valid Rate:         {:.1}%", report.emails.valid_rate);
    println!();
    println!("--- Measurements ---");
    println!("  Slots:              {}", report.measurements.total_slots);
    println!("  Absent:             {}", report.measurements.absent_slots);
    println!("  Average:            {:.2}", report.measurements.average);

    Ok(())
}
