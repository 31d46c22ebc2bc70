//! Control Panel Widget
//! Left side panel: endpoint setting, refresh/export actions, status line.

use egui::{Color32, RichText};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const BASE_URL_ENV: &str = "NEWSPULSE_BASE_URL";

/// Dashboard settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, with the base URL overridable via NEWSPULSE_BASE_URL.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Actions triggered by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    Refresh,
    ExportPngs,
}

/// Left side control panel.
pub struct ControlPanel {
    pub settings: Settings,
    pub status: String,
    pub refresh_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: Settings::from_env(),
            status: "Ready".to_string(),
            refresh_enabled: true,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the panel and report the action the user took.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("NewsPulse")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("news trends dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Backend Section =====
        ui.label(RichText::new("Backend").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Base URL:").size(12.0));
                ui.add(
                    egui::TextEdit::singleline(&mut self.settings.base_url)
                        .desired_width(f32::INFINITY),
                );
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.refresh_enabled, |ui| {
                let button = egui::Button::new(RichText::new("Refresh Data").size(15.0))
                    .min_size(egui::vec2(180.0, 32.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Refresh;
                }
            });

            ui.add_space(8.0);

            let export_button = egui::Button::new(RichText::new("Export PNGs").size(13.0))
                .min_size(egui::vec2(140.0, 28.0));
            if ui.add(export_button).clicked() {
                action = ControlPanelAction::ExportPngs;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("Status").size(14.0).strong());
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("updated") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}
