// File: crates/artline-core/src/axis.rs
// Summary: Axis model: orientation, tick sizing and label formatting.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// Tick label formatting. `Integer` matches the original chart's year axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    Integer,
    Default,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orientation: Orientation,
    pub tick_count: usize,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub format: TickFormat,
}

impl Axis {
    /// Bottom year axis: integer labels, 14-unit tick marks.
    pub fn bottom() -> Self {
        Self {
            orientation: Orientation::Bottom,
            tick_count: 10,
            tick_size: 14.0,
            tick_padding: 3.0,
            format: TickFormat::Integer,
        }
    }

    /// Left count axis with default formatting.
    pub fn left() -> Self {
        Self {
            orientation: Orientation::Left,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            format: TickFormat::Default,
        }
    }

    pub fn format_tick(&self, v: f64) -> String {
        match self.format {
            TickFormat::Integer => format!("{}", v.round() as i64),
            // Round away accumulated step error before printing.
            TickFormat::Default => format!("{}", (v * 1e6).round() / 1e6),
        }
    }
}
