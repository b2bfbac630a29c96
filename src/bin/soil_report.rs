// Soil report CLI
//
// Purpose: run raw soil records through normalization + classification and
// print the assessment, standing in for the app's result screen.
// Usage: soil_report <records.json>   (or "-" to read stdin)

use std::io::Read;

use anyhow::{bail, Context};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soil_report_rust::{
    mgkg_to_kgha, within_agronomic_range, JsonFileStorage, Report, ReportSession,
};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soil_report_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: soil_report <records.json | ->"),
    };

    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading records from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
    };

    let parsed: Value = serde_json::from_str(&raw).context("parsing records as JSON")?;
    let records: Vec<Value> = match parsed {
        Value::Array(items) => items,
        single => vec![single],
    };

    let history_path =
        std::env::var("SOIL_HISTORY").unwrap_or_else(|_| "soil_history.json".to_string());
    tracing::info!(history = %history_path, records = records.len(), "ingesting records");

    let mut session = ReportSession::open(JsonFileStorage::new(&history_path))?;
    for record in &records {
        let report = session.ingest(record);
        print_assessment(report);
    }

    println!("History ({} shown):", session.history().display_entries().len());
    for entry in session.history().display_entries() {
        println!(
            "  {}  {}  {}  {}",
            entry.generated_at.format("%Y-%m-%d %H:%M"),
            entry.pot_name,
            entry.soil_texture,
            entry.recommended_crop,
        );
    }

    Ok(())
}

fn print_assessment(report: &Report) {
    println!("== {} ({}) ==", report.pot_name, report.soil_texture);

    let ph = report.ph_category();
    println!(
        "  pH {:>6.2}  {} [{}]",
        report.ph_level,
        ph.display_text(),
        ph.severity().color_name()
    );

    for (name, value, level) in [
        ("N", report.nitrogen, report.nitrogen_level()),
        ("P", report.phosphorus, report.phosphorus_level()),
        ("K", report.potassium, report.potassium_level()),
    ] {
        println!(
            "  {name} {:>7.2}  {} [{}]",
            value,
            level.display_text(),
            level.severity().color_name()
        );
    }

    match mgkg_to_kgha(
        report.nitrogen,
        report.phosphorus,
        report.potassium,
        &report.soil_texture,
    ) {
        Some(npk) if within_agronomic_range(&npk, report.ph_level) => {
            println!(
                "  kg/ha N={:.1} P={:.1} K={:.1}  crop: {}",
                npk.n, npk.p, npk.k, report.recommended_crop
            );
            if !report.companions.is_empty() {
                println!("  plant with: {}", report.companions.join(", "));
            }
            if !report.avoid.is_empty() {
                println!("  keep away:  {}", report.avoid.join(", "));
            }
        }
        Some(npk) => {
            println!(
                "  kg/ha N={:.1} P={:.1} K={:.1}  outside agronomic range: No suitable crops",
                npk.n, npk.p, npk.k
            );
        }
        None => {
            println!("  texture unknown, kg/ha conversion skipped");
        }
    }

    if let Some(confidence) = report.confidence {
        println!("  confidence {:.0}%", confidence * 100.0);
    }
}
