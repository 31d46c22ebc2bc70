//! NewsPulse - News Trends Dashboard
//!
//! Chart adapters over the dashboard's display surfaces, loaders for the
//! backend's counts/metrics documents, and the egui user interface.

pub mod charts;
pub mod data;
pub mod gui;
