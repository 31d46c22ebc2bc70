//! Chart Adapter
//! Thin configuration layer between the dashboard and the plotting widgets.
//! One adapter owns one chart instance; updates mutate the dataset in place
//! and request a redraw.

use crate::charts::{ChartPalette, Surface};

/// Kind of chart a slot renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Line
    }
}

impl ChartKind {
    /// Placeholder labels shown before any data arrives.
    pub fn default_labels(&self) -> Vec<String> {
        match self {
            ChartKind::Pie | ChartKind::Bar => {
                (1..=3).map(|i| format!("Category {i}")).collect()
            }
            ChartKind::Line => (1..=7).map(|i| format!("Item {i}")).collect(),
        }
    }

    /// Placeholder values parallel to `default_labels`.
    pub fn default_values(&self) -> Vec<f64> {
        match self {
            ChartKind::Pie | ChartKind::Bar => vec![1.0; 3],
            ChartKind::Line => vec![0.0; 7],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

/// What a chart currently shows: kind, parallel labels/values, colors.
///
/// Labels and values are parallel by caller convention; no length check is
/// performed here. A mismatch renders however the plotting layer renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub palette: ChartPalette,
}

impl ChartConfig {
    /// Default configuration for `kind`: placeholder dataset, default palette.
    pub fn default_for(kind: ChartKind) -> Self {
        Self {
            kind,
            labels: kind.default_labels(),
            values: kind.default_values(),
            palette: ChartPalette::default(),
        }
    }
}

/// The chart bound to a surface. Created once, mutated in place, never
/// recreated for the lifetime of its adapter.
#[derive(Debug, Clone)]
pub struct ChartInstance {
    surface: Surface,
    config: ChartConfig,
    redraws_requested: u64,
}

impl ChartInstance {
    fn new(surface: Surface, config: ChartConfig) -> Self {
        Self {
            surface,
            config,
            redraws_requested: 0,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}

/// Adapter owning a single chart instance, or nothing at all (inert).
///
/// Inert adapters come from mounting a chart onto a surface that does not
/// exist; every operation on them is a no-op so the rest of the dashboard
/// never has to special-case the missing slot.
#[derive(Debug, Clone)]
pub struct ChartAdapter {
    kind: ChartKind,
    chart: Option<ChartInstance>,
}

impl ChartAdapter {
    /// Bind a new chart of `kind` to `surface` with the default configuration.
    pub fn new(surface: Surface, kind: ChartKind) -> Self {
        let config = ChartConfig::default_for(kind);
        Self {
            kind,
            chart: Some(ChartInstance::new(surface, config)),
        }
    }

    /// Adapter with no live chart; all operations no-op.
    pub fn inert(kind: ChartKind) -> Self {
        Self { kind, chart: None }
    }

    pub fn is_inert(&self) -> bool {
        self.chart.is_none()
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.chart.as_ref().map(ChartInstance::surface)
    }

    pub fn config(&self) -> Option<&ChartConfig> {
        self.chart.as_ref().map(ChartInstance::config)
    }

    /// Displayed labels; empty for inert adapters.
    pub fn labels(&self) -> &[String] {
        self.chart
            .as_ref()
            .map(|c| c.config.labels.as_slice())
            .unwrap_or(&[])
    }

    /// Displayed values; empty for inert adapters.
    pub fn values(&self) -> &[f64] {
        self.chart
            .as_ref()
            .map(|c| c.config.values.as_slice())
            .unwrap_or(&[])
    }

    /// How many redraws have been requested since construction.
    pub fn redraws_requested(&self) -> u64 {
        self.chart.as_ref().map(|c| c.redraws_requested).unwrap_or(0)
    }

    /// Replace the displayed values, and the labels when given, then request
    /// a redraw. No-op on inert adapters.
    ///
    /// `labels = None` leaves the prior labels untouched. Lengths are not
    /// validated against each other.
    pub fn update(&mut self, values: Vec<f64>, labels: Option<Vec<String>>) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };

        chart.config.values = values;
        if let Some(labels) = labels {
            chart.config.labels = labels;
        }
        chart.redraws_requested += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new("individuals", "Individuals")
    }

    #[test]
    fn default_dataset_matches_kind() {
        for kind in [ChartKind::Line, ChartKind::Bar, ChartKind::Pie] {
            let adapter = ChartAdapter::new(surface(), kind);
            assert_eq!(adapter.labels().len(), kind.default_labels().len());
            assert_eq!(adapter.values().len(), adapter.labels().len());
        }
    }

    #[test]
    fn update_replaces_values_and_labels() {
        let mut adapter = ChartAdapter::new(surface(), ChartKind::Pie);
        adapter.update(
            vec![3.0, 5.0],
            Some(vec!["a".to_string(), "b".to_string()]),
        );

        assert_eq!(adapter.values(), &[3.0, 5.0]);
        assert_eq!(adapter.labels(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn update_without_labels_keeps_previous_labels() {
        let mut adapter = ChartAdapter::new(surface(), ChartKind::Pie);
        let before = adapter.labels().to_vec();

        adapter.update(vec![9.0, 8.0, 7.0], None);

        assert_eq!(adapter.labels(), before.as_slice());
        assert_eq!(adapter.values(), &[9.0, 8.0, 7.0]);
    }

    #[test]
    fn update_requests_a_redraw_each_time() {
        let mut adapter = ChartAdapter::new(surface(), ChartKind::Bar);
        assert_eq!(adapter.redraws_requested(), 0);

        adapter.update(vec![1.0], None);
        adapter.update(vec![2.0], None);
        assert_eq!(adapter.redraws_requested(), 2);
    }

    #[test]
    fn inert_adapter_ignores_updates() {
        let mut adapter = ChartAdapter::inert(ChartKind::Pie);
        adapter.update(vec![1.0, 2.0], Some(vec!["x".to_string()]));

        assert!(adapter.is_inert());
        assert!(adapter.labels().is_empty());
        assert!(adapter.values().is_empty());
        assert_eq!(adapter.redraws_requested(), 0);
    }

    #[test]
    fn mismatched_lengths_are_accepted_as_is() {
        let mut adapter = ChartAdapter::new(surface(), ChartKind::Bar);
        adapter.update(vec![1.0, 2.0, 3.0, 4.0], Some(vec!["only one".to_string()]));

        assert_eq!(adapter.values().len(), 4);
        assert_eq!(adapter.labels().len(), 1);
    }
}
