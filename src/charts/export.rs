//! Static Chart Export
//! Renders a ChartConfig to a PNG with plotters, dark-themed to match the
//! on-screen board.

use crate::charts::{ChartConfig, ChartKind};
use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::path::Path;

const EXPORT_SIZE: (u32, u32) = (900, 600);

const BACKGROUND: RGBColor = RGBColor(20, 20, 20);
const CAPTION: RGBColor = RGBColor(240, 240, 240);
const GRID: RGBColor = RGBColor(60, 60, 60);
const TEXT: RGBColor = RGBColor(200, 200, 200);

/// Write `config` as a PNG at `path`. Fails on empty datasets and on any
/// backend error.
pub fn render_chart_png(config: &ChartConfig, title: &str, path: &Path) -> Result<()> {
    if config.values.is_empty() {
        return Err(anyhow!("cannot export '{title}': empty dataset"));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let root = BitMapBackend::new(path, EXPORT_SIZE).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| anyhow!("fill failed: {e}"))?;

    match config.kind {
        ChartKind::Pie => draw_pie(&root, config, title)?,
        ChartKind::Line | ChartKind::Bar => draw_cartesian(&root, config, title)?,
    }

    root.present().map_err(|e| anyhow!("write failed: {e}"))?;
    Ok(())
}

fn stroke_rgb(config: &ChartConfig, index: usize) -> RGBColor {
    let c = config.palette.stroke(index);
    RGBColor(c.r(), c.g(), c.b())
}

fn draw_pie(
    root: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    config: &ChartConfig,
    title: &str,
) -> Result<()> {
    let title_style = TextStyle::from(("sans-serif", 32).into_font()).color(&CAPTION);
    let root = root
        .titled(title, title_style)
        .map_err(|e| anyhow!("title failed: {e}"))?;

    let dims = root.dim_in_pixel();
    let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
    let radius = (dims.0.min(dims.1) as f64) * 0.35;

    // Pie wants strictly positive slices; degenerate data still gets a file.
    let mut sizes = Vec::new();
    let mut colors = Vec::new();
    let mut labels = Vec::new();
    for (i, &v) in config.values.iter().enumerate() {
        if v.is_finite() && v > 0.0 {
            sizes.push(v);
            colors.push(stroke_rgb(config, i));
            labels.push(config.labels.get(i).cloned().unwrap_or_default());
        }
    }
    if sizes.is_empty() {
        return Ok(());
    }

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 18).into_font().color(&TEXT));
    root.draw(&pie).map_err(|e| anyhow!("pie draw failed: {e}"))?;
    Ok(())
}

fn draw_cartesian(
    root: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    config: &ChartConfig,
    title: &str,
) -> Result<()> {
    let n = config.values.len();
    let (y_min, y_max) = y_range(&config.values);
    let labels = config.labels.clone();

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 32).into_font().color(&CAPTION))
        .margin(24)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_labels(n.min(10))
        .y_labels(8)
        .axis_style(ShapeStyle::from(&RGBColor(120, 120, 120)).stroke_width(1))
        .light_line_style(ShapeStyle::from(&GRID).stroke_width(1))
        .x_label_style(("sans-serif", 14).into_font().color(&TEXT))
        .y_label_style(("sans-serif", 14).into_font().color(&TEXT))
        .x_label_formatter(&move |x| {
            let idx = x.round();
            if idx >= 0.0 && (idx as usize) < labels.len() && (x - idx).abs() < 1e-6 {
                labels[idx as usize].clone()
            } else {
                String::new()
            }
        })
        .draw()?;

    match config.kind {
        ChartKind::Line => {
            let color = stroke_rgb(config, 0);
            chart.draw_series(LineSeries::new(
                config.values.iter().enumerate().map(|(i, &v)| (i as f64, v)),
                ShapeStyle::from(&color).stroke_width(2),
            ))?;
        }
        ChartKind::Bar => {
            chart.draw_series(config.values.iter().enumerate().map(|(i, &v)| {
                let color = stroke_rgb(config, i);
                Rectangle::new(
                    [(i as f64 - 0.3, 0.0), (i as f64 + 0.3, v)],
                    color.filled(),
                )
            }))?;
        }
        ChartKind::Pie => unreachable!("pie is not cartesian"),
    }

    Ok(())
}

/// Y span with ten percent headroom, clamped so a flat series still plots.
fn y_range(values: &[f64]) -> (f64, f64) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return (0.0, 1.0);
    }
    let min = finite.iter().cloned().fold(f64::INFINITY, f64::min).min(0.0);
    let max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max - min) * 0.1).max(1.0);
    (min, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_range_pads_above_and_floors_at_zero() {
        let (lo, hi) = y_range(&[3.0, 5.0, 9.0]);
        assert_eq!(lo, 0.0);
        assert!(hi > 9.0);
    }

    #[test]
    fn y_range_handles_flat_and_empty_series() {
        let (lo, hi) = y_range(&[0.0, 0.0]);
        assert!(hi > lo);
        assert_eq!(y_range(&[]), (0.0, 1.0));
    }

    #[test]
    fn export_rejects_empty_dataset() {
        let mut config = ChartConfig::default_for(ChartKind::Line);
        config.values.clear();
        let err = render_chart_png(&config, "Empty", Path::new("/tmp/never.png"));
        assert!(err.is_err());
    }
}
