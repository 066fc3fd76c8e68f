// File: crates/demo/src/main.rs
// Summary: Demo loads a name/art_date/count CSV and renders the grouped line chart to SVG.

use anyhow::{Context, Result};
use artline_core::{group_by_name, theme, Chart, ChartConfig, Record};
use chrono::Datelike;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Accept path from CLI or fall back to the sample filename
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mta_permanent_art.csv".to_string());
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "dark".to_string());

    let path = Path::new(&raw);
    let (records, skipped) = load_records_csv(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    tracing::info!(rows = records.len(), skipped, "loaded records");

    if records.is_empty() {
        anyhow::bail!("no records loaded - check headers/delimiter.");
    }

    let mut cfg = ChartConfig::default();
    cfg.theme = theme::find(&theme_name);

    // When the dataset's materials differ from the five expected ones,
    // derive the legend from the actual group set instead.
    let groups = group_by_name(&records);
    let expected = ["glass", "steel", "bronze", "ceramic", "stone"];
    let all_expected = groups
        .iter()
        .all(|s| expected.contains(&s.name.to_lowercase().as_str()));
    if !all_expected {
        cfg.derive_legend(groups.iter().map(|s| s.name.as_str()));
    }

    let chart = Chart::with_records(records);
    let out = out_name(path);
    chart.render_to_svg(&cfg, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>.svg
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{}.svg", stem));
    out
}

/// Load name/art_date/count rows. Returns the records plus the number of
/// malformed rows skipped.
fn load_records_csv(path: &Path) -> Result<(Vec<Record>, usize)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_name = idx(&["name", "material", "group"])
        .context("missing `name` column (aliases: material, group)")?;
    let i_date = idx(&["art_date", "date", "year"])
        .context("missing `art_date` column (aliases: date, year)")?;
    let i_count = idx(&["count", "total", "n"])
        .context("missing `count` column (aliases: total, n)")?;

    let mut out = Vec::new();
    let mut skipped = 0usize;

    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(i_name).map(str::trim).unwrap_or("");
        let date = rec.get(i_date).and_then(parse_art_date);
        let count = rec
            .get(i_count)
            .and_then(|s| s.trim().parse::<f64>().ok());

        match (date, count) {
            (Some(art_date), Some(count)) if !name.is_empty() => {
                out.push(Record::new(name, art_date, count));
            }
            _ => skipped += 1,
        }
    }
    Ok((out, skipped))
}

/// Accept a plain number (year) or a YYYY-MM-DD date mapped to its year.
fn parse_art_date(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<f64>() {
        return n.is_finite().then_some(n);
    }
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.year() as f64)
}
