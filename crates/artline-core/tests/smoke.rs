// File: crates/artline-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing an SVG.

use artline_core::{Chart, ChartConfig, Record};

#[test]
fn render_smoke_svg() {
    // Minimal data: two small material groups
    let chart = Chart::with_records(vec![
        Record::new("glass", 1980.0, 1.0),
        Record::new("glass", 1990.0, 3.0),
        Record::new("steel", 1985.0, 2.0),
    ]);

    let cfg = ChartConfig::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_svg(&cfg, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");

    // Also verify in-memory API works
    let markup = chart.render_to_svg_string(&cfg).expect("render string");
    assert!(markup.starts_with("<svg"), "should open with an svg element");
    assert!(markup.ends_with("</svg>"), "should close the svg element");
    assert!(markup.contains("xmlns"), "should carry the svg namespace");
}
