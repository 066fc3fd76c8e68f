// File: crates/artline-core/src/series.rs
// Summary: Record and per-group series model for grouped line data.

use indexmap::IndexMap;

/// One input row: material name plus numeric x/y values.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub name: String,
    pub art_date: f64,
    pub count: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, art_date: f64, count: f64) -> Self {
        Self { name: name.into(), art_date, count }
    }
}

/// Records sharing one group key, drawn as a single connected line.
#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// Group records by `name`, preserving first-seen key order and per-key
/// input order. Stroke colors are assigned from this ordering.
pub fn group_by_name(records: &[Record]) -> Vec<Series> {
    let mut groups: IndexMap<&str, Vec<(f64, f64)>> = IndexMap::new();
    for r in records {
        groups.entry(r.name.as_str()).or_default().push((r.art_date, r.count));
    }
    groups
        .into_iter()
        .map(|(name, points)| Series { name: name.to_string(), points })
        .collect()
}

/// [min, max] of `art_date` across all records.
pub fn x_extent(records: &[Record]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for r in records {
        min = min.min(r.art_date);
        max = max.max(r.art_date);
    }
    if min.is_finite() && max.is_finite() { Some((min, max)) } else { None }
}

/// Maximum `count` across all records.
pub fn y_max(records: &[Record]) -> Option<f64> {
    let mut max = f64::NEG_INFINITY;
    for r in records {
        max = max.max(r.count);
    }
    if max.is_finite() { Some(max) } else { None }
}
