// File: crates/artline-core/src/grid.rs
// Summary: Round-stepped tick layout helpers.

/// Tick values covering [start, end] at multiples of 1, 2 or 5 times a power
/// of ten, aiming for roughly `count` ticks.
pub fn ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() { return Vec::new(); }
    if (end - start).abs() < 1e-12 { return vec![start]; }
    let step = tick_increment(start, end, count.max(1));
    let i0 = (start / step).ceil() as i64;
    let i1 = (end / step).floor() as i64;
    (i0..=i1).map(|i| i as f64 * step).collect()
}

/// Step between ticks: the largest of {1, 2, 5}x10^k not exceeding the raw
/// interval, chosen by the usual sqrt thresholds.
fn tick_increment(start: f64, end: f64, count: usize) -> f64 {
    let raw = (end - start) / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}
