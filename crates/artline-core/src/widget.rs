// File: crates/artline-core/src/widget.rs
// Summary: Host lifecycle surface: factory, render, and resize hooks over an SVG container.

use svg::Document;

use crate::chart::Chart;
use crate::error::Result;
use crate::series::Record;
use crate::types::ChartConfig;

/// Caller-owned render target. The widget appends whole SVG documents and
/// clears prior content before each render, so re-rendering never
/// accumulates markup.
#[derive(Default)]
pub struct SvgContainer {
    children: Vec<Document>,
}

impl SvgContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, doc: Document) {
        self.children.push(doc);
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Concatenated markup of all children.
    pub fn to_svg_string(&self) -> String {
        self.children
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The three hooks a host runtime drives: construction with target
/// dimensions, render with a dataset, and resize.
pub struct ChartWidget {
    config: ChartConfig,
}

impl ChartWidget {
    /// Factory hook: receives the target dimensions once, up front. Label
    /// positions keep their edge-relative offsets at these dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self { config: ChartConfig::for_dimensions(width, height) }
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Render hook. Idempotent: clears the container, then appends exactly
    /// one chart subtree. The container is left untouched on error.
    pub fn render(&self, container: &mut SvgContainer, records: &[Record]) -> Result<()> {
        let chart = Chart::with_records(records.to_vec());
        let doc = chart.render_document(&self.config)?;
        container.clear();
        container.append(doc);
        Ok(())
    }

    /// Resize hook kept for the host contract; the chart never re-lays out
    /// once drawn.
    pub fn resize(&mut self, _width: i32, _height: i32) {}
}
