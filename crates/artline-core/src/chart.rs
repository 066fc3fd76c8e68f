// File: crates/artline-core/src/chart.rs
// Summary: Chart struct and headless SVG rendering pipeline.

use svg::node::element::{Group, Line, Path, Text};
use svg::Document;

use crate::axis::{Axis, Orientation};
use crate::error::{Error, Result};
use crate::scale::LinearScale;
use crate::series::{group_by_name, x_extent, y_max, Record, Series};
use crate::theme::Theme;
use crate::types::{ChartConfig, Label};

pub struct Chart {
    pub records: Vec<Record>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            x_axis: Axis::bottom(),
            y_axis: Axis::left(),
        }
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        let mut chart = Self::new();
        chart.records = records;
        chart
    }

    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Build the full SVG document: validate, group, scale, draw.
    ///
    /// Rejects empty datasets and non-finite fields rather than emitting
    /// malformed geometry.
    pub fn render_document(&self, cfg: &ChartConfig) -> Result<Document> {
        self.validate()?;

        let groups = group_by_name(&self.records);
        let (x_min, x_max) = x_extent(&self.records).ok_or(Error::EmptyDataset)?;
        let count_max = y_max(&self.records).ok_or(Error::EmptyDataset)?;

        let inner_w = cfg.inner_width();
        let inner_h = cfg.inner_height();

        // X domain spans the full dataset, not per group; Y starts at zero
        // and the range is inverted for screen coordinates.
        let xs = LinearScale::new((x_min, x_max), (0.0, inner_w));
        let ys = LinearScale::new((0.0, count_max), (inner_h, 0.0));

        tracing::debug!(
            rows = self.records.len(),
            groups = groups.len(),
            x_domain = ?xs.domain(),
            y_domain = ?ys.domain(),
            "rendering chart"
        );

        let mut plot = Group::new().set(
            "transform",
            format!("translate({}, {})", cfg.insets.left, cfg.insets.top),
        );

        for (i, series) in groups.iter().enumerate() {
            plot = plot.add(draw_line_series(series, &xs, &ys, cfg, i));
        }

        plot = plot.add(draw_axis(&self.x_axis, &xs, inner_w, inner_h, &cfg.theme));
        plot = plot.add(draw_axis(&self.y_axis, &ys, inner_w, inner_h, &cfg.theme));

        plot = plot.add(
            draw_label(&cfg.y_axis_label, "axis-label", &cfg.theme)
                .set("transform", "rotate(-90)"),
        );
        for label in &cfg.legend {
            plot = plot.add(draw_label(label, "plot-label", &cfg.theme));
        }
        plot = plot.add(draw_label(&cfg.title, "chart-title", &cfg.theme));
        plot = plot.add(draw_label(&cfg.subtitle, "chart-subtitle", &cfg.theme));
        plot = plot.add(draw_label(&cfg.caption, "chart-caption", &cfg.theme));

        Ok(Document::new()
            .set("width", cfg.width)
            .set("height", cfg.height)
            .set("style", format!("background-color: {}", cfg.theme.background))
            .add(plot))
    }

    /// Render the chart to an SVG string.
    pub fn render_to_svg_string(&self, cfg: &ChartConfig) -> Result<String> {
        Ok(self.render_document(cfg)?.to_string())
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(
        &self,
        cfg: &ChartConfig,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let doc = self.render_document(cfg)?;
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        svg::save(output_svg_path, &doc)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(Error::EmptyDataset);
        }
        for (index, r) in self.records.iter().enumerate() {
            if !r.art_date.is_finite() {
                return Err(Error::NonFiniteField { field: "art_date", index });
            }
            if !r.count.is_finite() {
                return Err(Error::NonFiniteField { field: "count", index });
            }
        }
        Ok(())
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_line_series(
    series: &Series,
    xs: &LinearScale,
    ys: &LinearScale,
    cfg: &ChartConfig,
    index: usize,
) -> Path {
    Path::new()
        .set("class", "line")
        .set("fill", "none")
        .set("stroke", cfg.palette.color(index))
        .set("stroke-width", cfg.stroke_width)
        .set("d", line_path(&series.points, xs, ys))
}

/// Path data: move to the first point, line to each subsequent one, in
/// input order.
fn line_path(points: &[(f64, f64)], xs: &LinearScale, ys: &LinearScale) -> String {
    let mut d = String::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{}{},{}", op, fmt(xs.scale(x)), fmt(ys.scale(y))));
    }
    d
}

fn draw_axis(axis: &Axis, scale: &LinearScale, inner_w: f64, inner_h: f64, theme: &Theme) -> Group {
    match axis.orientation {
        Orientation::Bottom => {
            let mut g = Group::new()
                .set("class", "axis")
                .set("transform", format!("translate(0, {})", fmt(inner_h)))
                .set("fill", "none")
                .set("font-size", 10)
                .set("text-anchor", "middle");
            g = g.add(
                Path::new()
                    .set("class", "domain")
                    .set("stroke", theme.axis_line)
                    .set("d", format!("M0,0H{}", fmt(inner_w))),
            );
            for t in scale.ticks(axis.tick_count) {
                let tick = Group::new()
                    .set("class", "tick")
                    .set("transform", format!("translate({}, 0)", fmt(scale.scale(t))))
                    .add(Line::new().set("stroke", theme.axis_line).set("y2", axis.tick_size))
                    .add(
                        Text::new(axis.format_tick(t))
                            .set("fill", theme.axis_label)
                            .set("y", axis.tick_size + axis.tick_padding)
                            .set("dy", "0.71em"),
                    );
                g = g.add(tick);
            }
            g
        }
        Orientation::Left => {
            let mut g = Group::new()
                .set("class", "axis")
                .set("fill", "none")
                .set("font-size", 10)
                .set("text-anchor", "end");
            g = g.add(
                Path::new()
                    .set("class", "domain")
                    .set("stroke", theme.axis_line)
                    .set("d", format!("M0,0V{}", fmt(inner_h))),
            );
            for t in scale.ticks(axis.tick_count) {
                let tick = Group::new()
                    .set("class", "tick")
                    .set("transform", format!("translate(0, {})", fmt(scale.scale(t))))
                    .add(Line::new().set("stroke", theme.axis_line).set("x2", -axis.tick_size))
                    .add(
                        Text::new(axis.format_tick(t))
                            .set("fill", theme.axis_label)
                            .set("x", -(axis.tick_size + axis.tick_padding))
                            .set("dy", "0.32em"),
                    );
                g = g.add(tick);
            }
            g
        }
    }
}

fn draw_label(label: &Label, class: &str, theme: &Theme) -> Text {
    let fill = label.color.as_deref().unwrap_or(theme.text);
    Text::new(label.text.as_str())
        .set("class", class)
        .set("fill", fill)
        .set("x", fmt(label.x))
        .set("y", fmt(label.y))
}

/// Coordinate formatting: round to three decimals, drop trailing zeros.
fn fmt(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    format!("{}", r)
}
