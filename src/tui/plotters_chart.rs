//! Plotters-powered comparison chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in widgets?
//! - nicer axis + tick rendering
//! - continuous bar lengths instead of whole-cell gauges
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends)
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::chart::{MetricComparison, MetricStatus};

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: the metric rows are computed
/// outside the render call (`chart::comparison_metrics`). This keeps
/// `render()` focused on drawing and the data prep separately testable.
pub struct ComparisonChart<'a> {
    /// One horizontal bar per metric, drawn top-down in slice order.
    pub metrics: &'a [MetricComparison],
}

impl<'a> Widget for ComparisonChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 28 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }
        if self.metrics.is_empty() {
            return;
        }

        let metrics = self.metrics;
        let n = metrics.len();

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // We delegate rendering to the crate-provided widget helper to avoid
        // coupling our code to its internal backend types.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Left label area holds the metric names.
                .set_label_area_size(LabelAreaPosition::Left, 16)
                .set_label_area_size(LabelAreaPosition::Bottom, 2)
                .build_cartesian_2d(0.0_f64..1.0_f64, -0.6_f64..(n as f64 - 0.4))?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(3)
                .y_labels(n)
                .x_label_formatter(&|v| format!("{:.0}%", v * 100.0))
                .y_label_formatter(&|v| {
                    let row = v.round();
                    if (v - row).abs() > 0.01 || row < 0.0 {
                        return String::new();
                    }
                    // Row 0 is the bottom of the chart; the slice draws
                    // top-down.
                    let i = n - 1 - (row as usize).min(n - 1);
                    metrics[i].label.to_string()
                })
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            for (i, m) in metrics.iter().enumerate() {
                let y = (n - 1 - i) as f64;
                let color = status_color(m.status);

                let ratio = if m.max_scale > 0.0 && m.value.is_finite() {
                    (m.value / m.max_scale).clamp(0.0, 1.0)
                } else {
                    0.0
                };

                // Bar: a horizontal line from the axis to the scaled value.
                chart.draw_series(LineSeries::new(
                    [(0.0, y), (ratio, y)],
                    color.stroke_width(1),
                ))?;

                // Healthy target: a short vertical tick over the bar row.
                let target = if m.max_scale > 0.0 {
                    (m.healthy / m.max_scale).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                chart.draw_series(LineSeries::new(
                    [(target, y - 0.3), (target, y + 0.3)],
                    &WHITE,
                ))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

fn status_color(status: MetricStatus) -> RGBColor {
    match status {
        MetricStatus::Normal => RGBColor(0, 255, 0),
        MetricStatus::Warning => RGBColor(255, 255, 0),
        MetricStatus::Danger => RGBColor(255, 0, 0),
    }
}
