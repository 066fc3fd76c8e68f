// File: crates/artline-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, fixed label text).

use crate::theme::{OrdinalPalette, Theme};

/// Default surface width in logical SVG units.
pub const WIDTH: i32 = 1000;
/// Default surface height in logical SVG units.
pub const HEIGHT: i32 = 700;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 100, 70, 70)
    }
}

/// A piece of static text at a fixed position inside the plot group.
/// Coordinates are relative to the margin-translated drawing area.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Explicit fill color; falls back to the theme text color when `None`.
    pub color: Option<String>,
}

impl Label {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self { text: text.into(), x, y, color: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Every visual constant of the chart, named and overridable. Defaults
/// reproduce the MTA permanent-art chart exactly.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub palette: OrdinalPalette,
    pub stroke_width: f64,
    /// Rotated -90 degrees; coordinates apply after rotation.
    pub y_axis_label: Label,
    pub legend: Vec<Label>,
    pub title: Label,
    pub subtitle: Label,
    pub caption: Label,
}

impl ChartConfig {
    /// Inner drawing width after margins.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.insets.hsum() as i32) as f64
    }

    /// Inner drawing height after margins.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.insets.vsum() as i32) as f64
    }

    /// Replace the fixed legend with one entry per group key, colored by the
    /// palette assignment, stacked down the right margin. Use when the
    /// dataset's group set differs from the five expected materials.
    pub fn derive_legend<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let x = self.inner_width() + 10.0;
        self.legend = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                Label::new(name, x, 5.0 + 22.0 * i as f64)
                    .with_color(self.palette.color(i))
            })
            .collect();
    }
}

impl ChartConfig {
    /// Config for a surface of the given dimensions. Title, caption and
    /// y-axis-label positions keep their offsets relative to the edges and
    /// margins; the five literal legend entries stay at their hard-coded
    /// coordinates (use [`ChartConfig::derive_legend`] to replace them).
    pub fn for_dimensions(width: i32, height: i32) -> Self {
        let insets = Insets::default();
        let left = insets.left as f64;
        let top = insets.top as f64;
        Self {
            width,
            height,
            insets,
            theme: Theme::dark(),
            palette: OrdinalPalette::default(),
            stroke_width: 3.0,
            y_axis_label: Label::new(
                "Cumulative art pieces",
                -(height as f64) / 2.0,
                -left + 25.0,
            ),
            legend: vec![
                Label::new("\u{1F9CA} Glass", 830.0, 5.0),
                Label::new("\u{1F529} Steel", 830.0, 400.0),
                Label::new("\u{1F7E4} Bronze", 830.0, 420.0),
                Label::new("\u{1F9F1} Ceramic", 830.0, 510.0),
                Label::new("\u{1FAA8} Stone", 830.0, 540.0),
            ],
            title: Label::new(
                "New York City: Buildings of steel, subways filled with glass art",
                left - 115.0,
                top - 105.0,
            ),
            subtitle: Label::new(
                "Metropolitan Transportation Authority's Permanent Art Catalog | \u{1F176} \u{1F182} \u{1F171}\u{FE0F} \u{1F172} \u{1F182} ",
                left - 115.0,
                top - 80.0,
            ),
            caption: Label::new(
                "Source: MTA Permanent Art Catalog | GitHub: collinberke Bluesky: collinberke.bsky.social",
                (width - 645) as f64,
                (height - 90) as f64,
            ),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::for_dimensions(WIDTH, HEIGHT)
    }
}
