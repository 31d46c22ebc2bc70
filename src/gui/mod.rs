//! GUI module - User interface components

mod app;
mod board;
mod control_panel;
mod person_view;
mod search_bar;

pub use app::PulseApp;
pub use board::ChartBoard;
pub use control_panel::{ControlPanel, ControlPanelAction, Settings};
pub use person_view::PersonView;
pub use search_bar::{person_path, submit_query, SearchAction, SearchBar};
