//! Chart Board
//! Card layout for the dashboard's chart slots.

use crate::charts::{ChartAdapter, ChartKind, ChartPlotter};
use egui::{Color32, RichText, ScrollArea};

const CARD_WIDTH: f32 = 380.0;
const CARD_SPACING: f32 = 15.0;

/// Draws one card per chart slot, wrapping into rows as width allows.
pub struct ChartBoard;

impl ChartBoard {
    pub fn show(ui: &mut egui::Ui, charts: &[&ChartAdapter]) {
        if charts.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No charts").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for adapter in charts {
                        Self::draw_card(ui, adapter);
                        ui.add_space(CARD_SPACING);
                    }
                });
            });
    }

    fn draw_card(ui: &mut egui::Ui, adapter: &ChartAdapter) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(70)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);

                match (adapter.surface(), adapter.config()) {
                    (Some(surface), Some(config)) => {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(surface.title()).size(16.0).strong());
                            ui.add_space(6.0);
                            ChartPlotter::draw(ui, surface.id(), config);
                            // Index labels on the line chart carry no meaning.
                            if config.kind != ChartKind::Line {
                                ui.add_space(6.0);
                                ChartPlotter::draw_legend(ui, config);
                            }
                        });
                    }
                    _ => {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new("Surface missing")
                                    .size(16.0)
                                    .color(Color32::from_rgb(220, 53, 69)),
                            );
                            ui.label(
                                RichText::new("This chart slot could not be bound at startup.")
                                    .size(12.0)
                                    .color(Color32::GRAY),
                            );
                        });
                    }
                }
            });
    }
}
