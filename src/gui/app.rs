//! NewsPulse Main Application
//! Dashboard window: chart board, person search routing, and background
//! fetches of the counts and metrics documents.

use crate::charts::{ChartAdapter, ChartKind, SurfaceRegistry};
use crate::data::{
    distribute, series_feed, AggregateCounts, CountsLoader, LoadError, MetricsLoader,
    INDIVIDUALS_CATEGORY, REQUESTS_TOTAL, TOPICS_CATEGORY,
};
use crate::gui::{
    ChartBoard, ControlPanel, ControlPanelAction, PersonView, SearchAction, SearchBar,
};
use egui::SidePanel;
use indexmap::IndexMap;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

const INDIVIDUALS_SURFACE: &str = "individuals";
const TOPICS_SURFACE: &str = "topics";
const REQUESTS_SURFACE: &str = "requests";

const EMPTY_QUERY_ALERT: &str = "Please enter a valid search term.";

/// Fetch result from a background thread.
enum FetchResult {
    Counts(Result<AggregateCounts, LoadError>),
    Metrics(Result<IndexMap<String, Vec<f64>>, LoadError>),
}

/// Where the window currently is.
enum Route {
    Dashboard,
    Person(PersonView),
}

/// Main application window.
pub struct PulseApp {
    count_charts: IndexMap<String, ChartAdapter>,
    requests_chart: ChartAdapter,

    control_panel: ControlPanel,
    search_bar: SearchBar,
    route: Route,
    alert: Option<String>,

    // Async document fetches
    fetch_rx: Option<Receiver<FetchResult>>,
    pending_fetches: usize,
}

impl PulseApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut registry = SurfaceRegistry::new();
        registry.register(INDIVIDUALS_SURFACE, "Individuals");
        registry.register(TOPICS_SURFACE, "Topics");
        registry.register(REQUESTS_SURFACE, "HTTP Requests Total");

        let mut count_charts = IndexMap::new();
        count_charts.insert(
            INDIVIDUALS_CATEGORY.to_string(),
            Self::mount(&registry, INDIVIDUALS_SURFACE, ChartKind::Pie),
        );
        count_charts.insert(
            TOPICS_CATEGORY.to_string(),
            Self::mount(&registry, TOPICS_SURFACE, ChartKind::Pie),
        );
        let requests_chart = Self::mount(&registry, REQUESTS_SURFACE, ChartKind::Line);

        let mut app = Self {
            count_charts,
            requests_chart,
            control_panel: ControlPanel::new(),
            search_bar: SearchBar::new(),
            route: Route::Dashboard,
            alert: None,
            fetch_rx: None,
            pending_fetches: 0,
        };

        // Same as page-load in the browser: fetch immediately.
        app.start_fetches();
        app
    }

    /// Bind a chart to a registered surface. A missing surface is logged and
    /// leaves the slot permanently inert; the dashboard stays up.
    fn mount(registry: &SurfaceRegistry, surface_id: &str, kind: ChartKind) -> ChartAdapter {
        match registry.resolve(surface_id) {
            Ok(surface) => ChartAdapter::new(surface, kind),
            Err(err) => {
                tracing::error!(%err, surface_id, "chart surface not found");
                ChartAdapter::inert(kind)
            }
        }
    }

    /// Kick off both document fetches on background threads.
    fn start_fetches(&mut self) {
        if self.pending_fetches > 0 {
            return;
        }

        let (tx, rx) = channel();
        self.fetch_rx = Some(rx);
        self.pending_fetches = 2;
        self.control_panel.set_status("Loading dashboard data...");

        let base = self.control_panel.settings.base_url.clone();
        {
            let tx = tx.clone();
            let base = base.clone();
            thread::spawn(move || {
                let _ = tx.send(FetchResult::Counts(CountsLoader::new().fetch_counts(&base)));
            });
        }
        thread::spawn(move || {
            let _ = tx.send(FetchResult::Metrics(
                MetricsLoader::new().fetch_metrics(&base),
            ));
        });
    }

    /// Drain finished fetches and apply them to the charts.
    fn check_fetch_results(&mut self, ctx: &egui::Context) {
        let Some(rx) = self.fetch_rx.take() else {
            return;
        };

        while let Ok(result) = rx.try_recv() {
            self.pending_fetches = self.pending_fetches.saturating_sub(1);
            match result {
                FetchResult::Counts(Ok(counts)) => {
                    distribute(&counts, &mut self.count_charts);
                    self.control_panel.set_status("Counts updated");
                    ctx.request_repaint();
                }
                FetchResult::Counts(Err(err)) => {
                    tracing::error!(%err, "failed to fetch aggregate counts");
                    self.control_panel.set_status(&format!("Error: {err}"));
                }
                FetchResult::Metrics(Ok(metrics)) => {
                    match series_feed(&metrics, REQUESTS_TOTAL) {
                        Some((labels, values)) => {
                            self.requests_chart.update(values, Some(labels));
                            ctx.request_repaint();
                        }
                        None => {
                            tracing::warn!(metric = REQUESTS_TOTAL, "metric absent from document");
                        }
                    }
                }
                FetchResult::Metrics(Err(err)) => {
                    tracing::error!(%err, "failed to fetch metrics");
                    self.control_panel.set_status(&format!("Error: {err}"));
                }
            }
        }

        if self.pending_fetches > 0 {
            self.fetch_rx = Some(rx);
        }
    }

    fn handle_search(&mut self, action: SearchAction) {
        match action {
            SearchAction::None => {}
            SearchAction::EmptyQuery => {
                self.alert = Some(EMPTY_QUERY_ALERT.to_string());
            }
            SearchAction::Navigate { query, path } => {
                tracing::info!(%path, "navigating to person view");
                self.route = Route::Person(PersonView::new(query, path));
            }
        }
    }

    /// Export every live chart as a PNG into a user-chosen folder.
    fn handle_export(&mut self) {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return; // User cancelled
        };

        let charts: Vec<&ChartAdapter> = self
            .count_charts
            .values()
            .chain(std::iter::once(&self.requests_chart))
            .collect();

        let mut exported = 0usize;
        for adapter in charts {
            let (Some(surface), Some(config)) = (adapter.surface(), adapter.config()) else {
                continue;
            };
            let path = dir.join(format!("{}.png", surface.id()));
            match crate::charts::export::render_chart_png(config, surface.title(), &path) {
                Ok(()) => exported += 1,
                Err(err) => {
                    tracing::error!(%err, "chart export failed");
                    self.control_panel.set_status(&format!("Error: {err}"));
                    return;
                }
            }
        }

        if exported == 0 {
            self.control_panel.set_status("No charts to export");
        } else {
            self.control_panel
                .set_status(&format!("Exported {exported} charts"));
            let _ = open::that(&dir);
        }
    }

    /// Blocking alert: the rest of the UI is disabled until dismissed.
    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Search")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.alert = None;
        }
    }
}

impl eframe::App for PulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_fetch_results(ctx);
        if self.pending_fetches > 0 {
            ctx.request_repaint();
        }

        let alert_open = self.alert.is_some();
        self.control_panel.refresh_enabled = self.pending_fetches == 0;

        // Top panel - Search Bar
        let mut search_action = SearchAction::None;
        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!alert_open, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(4.0);
                    search_action = self.search_bar.show(ui);
                });
            });
            ui.add_space(4.0);
        });
        self.handle_search(search_action);

        // Left panel - Control Panel
        let mut panel_action = ControlPanelAction::None;
        SidePanel::left("control_panel")
            .min_width(240.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!alert_open, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        panel_action = self.control_panel.show(ui);
                    });
                });
            });
        match panel_action {
            ControlPanelAction::Refresh => self.start_fetches(),
            ControlPanelAction::ExportPngs => self.handle_export(),
            ControlPanelAction::None => {}
        }

        // Central panel - board or person view
        let mut back_to_dashboard = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!alert_open, |ui| match &self.route {
                Route::Dashboard => {
                    let charts: Vec<&ChartAdapter> = self
                        .count_charts
                        .values()
                        .chain(std::iter::once(&self.requests_chart))
                        .collect();
                    ChartBoard::show(ui, &charts);
                }
                Route::Person(view) => {
                    back_to_dashboard = view.show(ui);
                }
            });
        });
        if back_to_dashboard {
            self.route = Route::Dashboard;
        }

        self.show_alert(ctx);
    }
}
