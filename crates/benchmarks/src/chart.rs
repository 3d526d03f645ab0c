//! Chart rendering for comparison reports.
//!
//! Draws a 2x2 dashboard: external fragmentation, allocation success rate,
//! memory usage (allocated vs free) and the combined performance score with the
//! best performer highlighted. PNG output by default, SVG for `.svg` paths.

use std::path::{Path, PathBuf};

use alloc_compare_domain::AlgorithmMetrics;
use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::io::ensure_parent_dir;
use crate::report::ComparisonReport;

/// Colours per strategy, in catalogue order.
pub const SERIES_COLORS: [RGBColor; 4] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
];

/// Colour of free memory bars.
pub const FREE_COLOR: RGBColor = RGBColor(0x7f, 0x7f, 0x7f);

/// Colour of the best performer's score bar.
pub const BEST_COLOR: RGBColor = RGBColor(0x94, 0x67, 0xbd);

const TITLE: &str = "Memory Allocation Algorithm Comparison";
const FONT: &str = "sans-serif";

/// Output image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 720,
        }
    }
}

/// Image format, chosen from the output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }
}

/// Renders the dashboard for `report` into `path`.
pub fn render_chart(report: &ComparisonReport, path: &Path, options: ChartOptions) -> Result<PathBuf> {
    ensure_parent_dir(path)?;
    let size = (options.width, options.height);

    match ChartFormat::from_path(path) {
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_dashboard(&root, report).map_err(|e| anyhow!("Failed to render chart: {e}"))?;
        }
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_dashboard(&root, report).map_err(|e| anyhow!("Failed to render chart: {e}"))?;
        }
    }

    Ok(path.to_path_buf())
}

/// Colour for a strategy, by catalogue position when known.
pub fn series_color(metrics: &AlgorithmMetrics, position: usize) -> RGBColor {
    let index = metrics.strategy().map_or(position, |s| s.index());
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Upper bound of a value axis: 10% headroom above the largest value.
pub fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Axis label for position `x`: the strategy name at integer positions only.
pub fn label_at(names: &[&str], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    names
        .get(rounded as usize)
        .map(|name| name.to_string())
        .unwrap_or_default()
}

struct BarPanel<'a> {
    title: &'a str,
    y_desc: &'a str,
    y_max: f64,
    suffix: &'a str,
    values: Vec<f64>,
    highlight: Option<usize>,
}

fn draw_dashboard<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &ComparisonReport,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let body = root.titled(TITLE, (FONT, 24).into_font().style(FontStyle::Bold))?;
    let panels = body.split_evenly((2, 2));

    let names: Vec<&str> = report.metrics.iter().map(|m| m.name()).collect();
    let colors: Vec<RGBColor> = report
        .metrics
        .iter()
        .enumerate()
        .map(|(i, m)| series_color(m, i))
        .collect();

    draw_bars(
        &panels[0],
        &names,
        &colors,
        BarPanel {
            title: "External Fragmentation",
            y_desc: "Fragmentation (%)",
            y_max: 100.0,
            suffix: "%",
            values: report.metrics.iter().map(|m| m.fragmentation_percent()).collect(),
            highlight: None,
        },
    )?;
    draw_bars(
        &panels[1],
        &names,
        &colors,
        BarPanel {
            title: "Allocation Success Rate",
            y_desc: "Success Rate (%)",
            y_max: 110.0,
            suffix: "%",
            values: report.metrics.iter().map(|m| m.success_rate_percent()).collect(),
            highlight: None,
        },
    )?;
    draw_memory_usage(&panels[2], &names, &colors, &report.metrics)?;
    draw_bars(
        &panels[3],
        &names,
        &colors,
        BarPanel {
            title: "Performance Score",
            y_desc: "Score (0-100)",
            y_max: 110.0,
            suffix: "",
            values: report.rows().map(|row| row.score).collect(),
            highlight: Some(report.comparison.best_index()),
        },
    )?;

    root.present()?;
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    names: &[&str],
    colors: &[RGBColor],
    panel: BarPanel<'_>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let n = panel.values.len();
    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, (FONT, 16))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..panel.y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(panel.y_desc)
        .x_labels(n + 1)
        .x_label_formatter(&|x| label_at(names, *x))
        .light_line_style(BLACK.mix(0.1))
        .draw()?;

    chart.draw_series(panel.values.iter().enumerate().map(|(i, &v)| {
        let color = match panel.highlight {
            Some(best) if best == i => BEST_COLOR,
            _ => colors[i],
        };
        let x = i as f64;
        Rectangle::new([(x - 0.35, 0.0), (x + 0.35, v)], color.filled())
    }))?;

    if let Some(best) = panel.highlight.filter(|&b| b < n) {
        let x = best as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - 0.35, 0.0), (x + 0.35, panel.values[best])],
            BLACK.stroke_width(2),
        )))?;
    }

    let label_style = TextStyle::from((FONT, 12).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    let offset = panel.y_max * 0.02;
    chart.draw_series(panel.values.iter().enumerate().map(|(i, &v)| {
        Text::new(
            format!("{v:.1}{}", panel.suffix),
            (i as f64, (v + offset).min(panel.y_max)),
            label_style.clone(),
        )
    }))?;

    Ok(())
}

fn draw_memory_usage<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    names: &[&str],
    colors: &[RGBColor],
    metrics: &[AlgorithmMetrics],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let n = metrics.len();
    let all_bytes: Vec<f64> = metrics
        .iter()
        .flat_map(|m| [m.allocated_bytes() as f64, m.free_bytes() as f64])
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption("Memory Usage", (FONT, 16))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..axis_max(&all_bytes))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Memory (bytes)")
        .x_labels(n + 1)
        .x_label_formatter(&|x| label_at(names, *x))
        .light_line_style(BLACK.mix(0.1))
        .draw()?;

    let width = 0.35;
    let allocated_color = colors.first().copied().unwrap_or(SERIES_COLORS[0]);
    chart
        .draw_series(metrics.iter().enumerate().map(|(i, m)| {
            let x = i as f64;
            Rectangle::new(
                [(x - width, 0.0), (x, m.allocated_bytes() as f64)],
                colors[i].filled(),
            )
        }))?
        .label("Allocated")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], allocated_color.filled()));

    chart
        .draw_series(metrics.iter().enumerate().map(|(i, m)| {
            let x = i as f64;
            Rectangle::new(
                [(x, 0.0), (x + width, m.free_bytes() as f64)],
                FREE_COLOR.filled(),
            )
        }))?
        .label("Free")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], FREE_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc_compare_testing::MetricsBuilder;

    #[test]
    fn test_chart_format_from_extension() {
        assert_eq!(ChartFormat::from_path(Path::new("out/chart.svg")), ChartFormat::Svg);
        assert_eq!(ChartFormat::from_path(Path::new("chart.SVG")), ChartFormat::Svg);
        assert_eq!(ChartFormat::from_path(Path::new("chart.png")), ChartFormat::Png);
        assert_eq!(ChartFormat::from_path(Path::new("chart")), ChartFormat::Png);
    }

    #[test]
    fn test_series_color_follows_catalogue() {
        let worst = MetricsBuilder::new("Worst Fit").build();
        assert_eq!(series_color(&worst, 0), SERIES_COLORS[2]);

        let unknown = MetricsBuilder::new("Buddy").build();
        assert_eq!(series_color(&unknown, 5), SERIES_COLORS[1]);
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(&[]), 1.0);
        assert_eq!(axis_max(&[0.0, 0.0]), 1.0);
        assert!((axis_max(&[100.0, 400.0]) - 440.0).abs() < 1e-9);
    }

    #[test]
    fn test_label_at() {
        let names = ["First Fit", "Best Fit"];
        assert_eq!(label_at(&names, 0.0), "First Fit");
        assert_eq!(label_at(&names, 1.0), "Best Fit");
        assert_eq!(label_at(&names, 0.5), "");
        assert_eq!(label_at(&names, -1.0), "");
        assert_eq!(label_at(&names, 2.0), "");
    }
}
