// File: crates/artline-core/tests/validate.rs
// Purpose: Typed rejection of empty and non-finite input.

use artline_core::{Chart, ChartConfig, Error, Record};

#[test]
fn empty_dataset_is_rejected() {
    let chart = Chart::new();
    let err = chart.render_to_svg_string(&ChartConfig::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyDataset));
}

#[test]
fn nan_art_date_is_rejected() {
    let chart = Chart::with_records(vec![
        Record::new("glass", 1980.0, 1.0),
        Record::new("glass", f64::NAN, 2.0),
    ]);
    let err = chart.render_to_svg_string(&ChartConfig::default()).unwrap_err();
    match err {
        Error::NonFiniteField { field, index } => {
            assert_eq!(field, "art_date");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn infinite_count_is_rejected() {
    let chart = Chart::with_records(vec![Record::new("steel", 1985.0, f64::INFINITY)]);
    let err = chart.render_to_svg_string(&ChartConfig::default()).unwrap_err();
    match err {
        Error::NonFiniteField { field, index } => {
            assert_eq!(field, "count");
            assert_eq!(index, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn single_record_renders_without_fault() {
    // Degenerate one-point domain must not divide by zero.
    let chart = Chart::with_records(vec![Record::new("bronze", 1984.0, 1.0)]);
    let markup = chart.render_to_svg_string(&ChartConfig::default()).unwrap();
    assert!(markup.contains("class=\"line\""));
    assert!(!markup.contains("NaN"));
}
