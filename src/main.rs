//! NewsPulse - News Trends Dashboard
//!
//! Desktop dashboard for the news-analysis backend: live aggregate-count
//! charts, request metrics, and person search.

use eframe::egui;
use newspulse::gui::PulseApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("NewsPulse"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "NewsPulse",
        options,
        Box::new(|cc| Ok(Box::new(PulseApp::new(cc)))),
    )
}
