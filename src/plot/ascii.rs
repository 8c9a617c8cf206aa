//! ASCII comparison bars for terminal output.
//!
//! This is intentionally "dumb" (fixed-width character cells), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Bar elements:
//! - observed value: `#` fill from the left
//! - healthy target: `|` marker
//! - remaining scale: `.`

use crate::chart::MetricComparison;

/// Render one bar block per metric: a header line with the observed value,
/// target, and status tag, followed by the bar itself.
pub fn render_comparison_bars(metrics: &[MetricComparison], width: usize) -> String {
    let width = width.max(10);
    let mut out = String::new();

    for m in metrics {
        out.push_str(&format!(
            "{}: {} (target {}){}\n",
            m.label,
            fmt_quantity(m.value, m.unit),
            fmt_quantity(m.healthy, m.unit),
            status_suffix(m),
        ));
        out.push('[');
        out.push_str(&bar_cells(m, width).into_iter().collect::<String>());
        out.push_str("]\n");
    }

    out
}

fn bar_cells(m: &MetricComparison, width: usize) -> Vec<char> {
    let mut cells = vec!['.'; width];

    let fill = cell_count(m.value, m.max_scale, width);
    for cell in cells.iter_mut().take(fill) {
        *cell = '#';
    }

    // Target marker drawn last so it stays visible inside the fill.
    let marker = cell_count(m.healthy, m.max_scale, width).min(width.saturating_sub(1));
    cells[marker] = '|';

    cells
}

/// Number of cells covered by `value` on a `max`-wide scale.
fn cell_count(value: f64, max: f64, width: usize) -> usize {
    if !(value.is_finite() && max.is_finite()) || max <= 0.0 {
        return 0;
    }
    let u = (value / max).clamp(0.0, 1.0);
    (u * width as f64).round() as usize
}

fn status_suffix(m: &MetricComparison) -> String {
    let tag = m.status.tag();
    if tag.is_empty() {
        String::new()
    } else {
        format!(" [{tag}]")
    }
}

/// Format a value with its unit; whole numbers print without decimals.
fn fmt_quantity(value: f64, unit: &str) -> String {
    let v = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    };
    if unit.is_empty() {
        v
    } else {
        format!("{v} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::MetricStatus;

    #[test]
    fn bars_golden_snapshot_small() {
        let metrics = vec![
            MetricComparison {
                label: "Blood Pressure",
                value: 100.0,
                unit: "mm Hg",
                max_scale: 200.0,
                healthy: 120.0,
                status: MetricStatus::Normal,
            },
            MetricComparison {
                label: "ST Depression",
                value: 4.5,
                unit: "",
                max_scale: 6.0,
                healthy: 0.0,
                status: MetricStatus::Danger,
            },
        ];

        let txt = render_comparison_bars(&metrics, 10);
        let expected = concat!(
            "Blood Pressure: 100 mm Hg (target 120 mm Hg)\n",
            "[#####.|...]\n",
            "ST Depression: 4.5 (target 0) [danger]\n",
            "[|#######..]\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn fill_is_clamped_to_the_scale() {
        let m = MetricComparison {
            label: "Cholesterol",
            value: 900.0,
            unit: "mg/dl",
            max_scale: 400.0,
            healthy: 200.0,
            status: MetricStatus::Danger,
        };
        let cells = bar_cells(&m, 12);
        assert_eq!(cells.len(), 12);
        // Fully filled except the target marker at the midpoint.
        assert_eq!(cells.iter().filter(|&&c| c == '#').count(), 11);
        assert_eq!(cells[6], '|');
    }

    #[test]
    fn non_finite_values_render_an_empty_fill() {
        let m = MetricComparison {
            label: "Max Heart Rate",
            value: f64::NAN,
            unit: "bpm",
            max_scale: 220.0,
            healthy: 170.0,
            status: MetricStatus::Normal,
        };
        let cells = bar_cells(&m, 10);
        assert!(!cells.contains(&'#'));
    }
}
