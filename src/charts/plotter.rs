//! Chart Plotter Module
//! Draws a ChartConfig into the UI: egui_plot for line/bar, direct painting
//! for pie sectors.

use crate::charts::{ChartConfig, ChartKind};
use egui::{Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

const PLOT_HEIGHT: f32 = 230.0;
const PIE_DIAMETER: f32 = 210.0;

/// Renders chart configurations with egui widgets.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw `config` into the current UI. `surface_id` keys the plot state so
    /// two charts never share zoom/drag state.
    pub fn draw(ui: &mut egui::Ui, surface_id: &str, config: &ChartConfig) {
        match config.kind {
            ChartKind::Line => Self::draw_line(ui, surface_id, config),
            ChartKind::Bar => Self::draw_bar(ui, surface_id, config),
            ChartKind::Pie => Self::draw_pie(ui, config),
        }
    }

    /// Legend row: one color swatch + label per segment.
    pub fn draw_legend(ui: &mut egui::Ui, config: &ChartConfig) {
        ui.horizontal_wrapped(|ui| {
            for (i, label) in config.labels.iter().enumerate() {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, config.palette.stroke(i));

                let text = match config.values.get(i) {
                    Some(v) => format!("{label} ({v:.0})"),
                    None => label.clone(),
                };
                ui.label(RichText::new(text).size(11.0));
                ui.add_space(8.0);
            }
        });
    }

    fn draw_line(ui: &mut egui::Ui, surface_id: &str, config: &ChartConfig) {
        let x_labels = config.labels.clone();
        let points: PlotPoints = config
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();
        let color = config.palette.stroke(0);

        Plot::new(format!("line_{surface_id}"))
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if mark.value >= 0.0 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).color(color).width(2.0));
            });
    }

    fn draw_bar(ui: &mut egui::Ui, surface_id: &str, config: &ChartConfig) {
        let x_labels = config.labels.clone();
        let bars: Vec<Bar> = config
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Bar::new(i as f64, v)
                    .width(0.6)
                    .fill(config.palette.fill(i))
                    .stroke(Stroke::new(1.0, config.palette.stroke(i)))
            })
            .collect();

        Plot::new(format!("bar_{surface_id}"))
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if mark.value >= 0.0 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }

    /// Pie chart as a fan of painted sectors, clockwise from 12 o'clock.
    fn draw_pie(ui: &mut egui::Ui, config: &ChartConfig) {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width().max(PIE_DIAMETER), PIE_DIAMETER),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);

        let total: f64 = config
            .values
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .sum();

        let center = rect.center();
        let radius = (rect.height().min(rect.width()) * 0.5 - 6.0).max(10.0);

        if total <= 0.0 {
            // Nothing to slice; keep the slot visibly present.
            painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::DARK_GRAY));
            return;
        }

        let mut start = -std::f64::consts::FRAC_PI_2;
        for (i, &value) in config.values.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                continue;
            }
            let sweep = value / total * std::f64::consts::TAU;
            start = Self::paint_sector(
                &painter,
                center,
                radius,
                start,
                sweep,
                config.palette.fill(i),
                config.palette.stroke(i),
            );
        }
    }

    fn paint_sector(
        painter: &egui::Painter,
        center: egui::Pos2,
        radius: f32,
        start: f64,
        sweep: f64,
        fill: Color32,
        stroke: Color32,
    ) -> f64 {
        // Enough arc steps that the rim reads as a curve.
        let steps = ((sweep / 0.05).ceil() as usize).clamp(2, 256);
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for s in 0..=steps {
            let angle = start + sweep * s as f64 / steps as f64;
            points.push(center + radius * egui::vec2(angle.cos() as f32, angle.sin() as f32));
        }
        painter.add(egui::Shape::convex_polygon(
            points,
            fill,
            Stroke::new(1.0, stroke),
        ));
        start + sweep
    }
}
