// File: crates/artline-examples/src/bin/materials.rs
// Summary: Minimal example that renders a grouped line chart to SVG.

use artline_core::{group_by_name, Chart, ChartConfig, Record};

fn main() {
    // Cumulative piece counts for two materials
    let records = vec![
        Record::new("glass", 1980.0, 1.0),
        Record::new("glass", 1985.0, 4.0),
        Record::new("glass", 1990.0, 9.0),
        Record::new("glass", 2000.0, 21.0),
        Record::new("steel", 1982.0, 1.0),
        Record::new("steel", 1991.0, 3.0),
        Record::new("steel", 2000.0, 7.0),
    ];

    let mut cfg = ChartConfig::default();
    let groups = group_by_name(&records);
    cfg.derive_legend(groups.iter().map(|s| s.name.as_str()));

    let chart = Chart::with_records(records);
    let out = std::path::PathBuf::from("target/out/example_materials.svg");
    chart.render_to_svg(&cfg, &out).expect("render to svg");
    println!("Wrote {}", out.display());
}
