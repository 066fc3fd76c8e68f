// File: crates/artline-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod grid;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;
pub mod widget;

pub use axis::{Axis, TickFormat};
pub use chart::Chart;
pub use error::{Error, Result};
pub use scale::LinearScale;
pub use series::{group_by_name, Record, Series};
pub use theme::{OrdinalPalette, Theme};
pub use types::{ChartConfig, Insets, Label};
pub use widget::{ChartWidget, SvgContainer};
