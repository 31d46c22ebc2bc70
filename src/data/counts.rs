//! Aggregate Counts Model
//! Category -> sub-key -> count, exactly as the /counts document ships it.

use indexmap::IndexMap;
use serde::Deserialize;

/// Categories with a chart bound on the dashboard.
pub const INDIVIDUALS_CATEGORY: &str = "Individuals";
pub const TOPICS_CATEGORY: &str = "Topics";

/// The /counts document. IndexMap keeps document order, which is the order
/// the charts receive labels and values in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AggregateCounts(pub IndexMap<String, IndexMap<String, u64>>);

impl AggregateCounts {
    pub fn categories(&self) -> impl Iterator<Item = (&String, &IndexMap<String, u64>)> {
        self.0.iter()
    }

    pub fn category(&self, name: &str) -> Option<&IndexMap<String, u64>> {
        self.0.get(name)
    }

    /// Split a category into a chart feed: labels = sub-keys, values = counts,
    /// both in document order.
    pub fn chart_feed(&self, name: &str) -> Option<(Vec<String>, Vec<f64>)> {
        let sub = self.0.get(name)?;
        let labels = sub.keys().cloned().collect();
        let values = sub.values().map(|&v| v as f64).collect();
        Some((labels, values))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        r#"{"Individuals": {"a": 3, "b": 5}, "Topics": {"x": 1}, "Sentiment": {"positive": 9}}"#;

    #[test]
    fn parse_keeps_document_order() {
        let counts: AggregateCounts = serde_json::from_str(SAMPLE).unwrap();

        let categories: Vec<&String> = counts.0.keys().collect();
        assert_eq!(categories, ["Individuals", "Topics", "Sentiment"]);

        let individuals = counts.category(INDIVIDUALS_CATEGORY).unwrap();
        let subs: Vec<&String> = individuals.keys().collect();
        assert_eq!(subs, ["a", "b"]);
    }

    #[test]
    fn chart_feed_splits_labels_and_counts() {
        let counts: AggregateCounts = serde_json::from_str(SAMPLE).unwrap();

        let (labels, values) = counts.chart_feed(INDIVIDUALS_CATEGORY).unwrap();
        assert_eq!(labels, ["a", "b"]);
        assert_eq!(values, [3.0, 5.0]);

        let (labels, values) = counts.chart_feed(TOPICS_CATEGORY).unwrap();
        assert_eq!(labels, ["x"]);
        assert_eq!(values, [1.0]);
    }

    #[test]
    fn chart_feed_for_unknown_category_is_none() {
        let counts: AggregateCounts = serde_json::from_str(SAMPLE).unwrap();
        assert!(counts.chart_feed("Publications").is_none());
    }
}
