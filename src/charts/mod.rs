//! Charts module - adapter, palettes, rendering

mod adapter;
pub mod export;
mod palette;
mod plotter;
mod surface;

pub use adapter::{ChartAdapter, ChartConfig, ChartInstance, ChartKind};
pub use palette::ChartPalette;
pub use plotter::ChartPlotter;
pub use surface::{Surface, SurfaceError, SurfaceRegistry};
