//! Metrics Document Parsing
//! Plain-text `name value` samples from the backend /metrics endpoint, used
//! to drive the request-volume line chart.

use crate::data::LoadError;
use indexmap::IndexMap;

/// The series the dashboard charts.
pub const REQUESTS_TOTAL: &str = "requests_total";

/// Parse a metrics document: `#` lines are comments, everything else is
/// `name value` pairs. Repeated names accumulate samples in document order;
/// malformed lines are skipped.
pub fn parse_metrics(text: &str) -> IndexMap<String, Vec<f64>> {
    let mut metrics: IndexMap<String, Vec<f64>> = IndexMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        if let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) {
            if let Ok(value) = value.parse::<f64>() {
                metrics.entry(name.to_string()).or_default().push(value);
            }
        }
    }

    metrics
}

/// Chart feed for one series: labels are sample indices, values the samples.
pub fn series_feed(
    metrics: &IndexMap<String, Vec<f64>>,
    name: &str,
) -> Option<(Vec<String>, Vec<f64>)> {
    let samples = metrics.get(name)?;
    if samples.is_empty() {
        return None;
    }
    let labels = (0..samples.len()).map(|i| i.to_string()).collect();
    Some((labels, samples.clone()))
}

/// Fetches and parses the backend metrics document.
pub struct MetricsLoader {
    client: reqwest::blocking::Client,
}

impl Default for MetricsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// GET `<base>/metrics` and parse the document.
    pub fn fetch_metrics(&self, base_url: &str) -> Result<IndexMap<String, Vec<f64>>, LoadError> {
        let url = format!("{}/metrics", base_url.trim_end_matches('/'));
        let text = self.client.get(url).send()?.error_for_status()?.text()?;
        Ok(parse_metrics(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# HELP requests_total Total requests.
# TYPE requests_total counter
requests_total 4
requests_total 7
up 1
malformed line with extras
";

    #[test]
    fn parse_skips_comments_and_malformed_lines() {
        let metrics = parse_metrics(SAMPLE);
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[REQUESTS_TOTAL], [4.0, 7.0]);
        assert_eq!(metrics["up"], [1.0]);
    }

    #[test]
    fn series_feed_labels_samples_by_index() {
        let metrics = parse_metrics(SAMPLE);
        let (labels, values) = series_feed(&metrics, REQUESTS_TOTAL).unwrap();
        assert_eq!(labels, ["0", "1"]);
        assert_eq!(values, [4.0, 7.0]);
    }

    #[test]
    fn series_feed_for_absent_metric_is_none() {
        let metrics = parse_metrics("up 1\n");
        assert!(series_feed(&metrics, REQUESTS_TOTAL).is_none());
    }

    #[test]
    fn parse_of_empty_document_is_empty() {
        assert!(parse_metrics("").is_empty());
        assert!(parse_metrics("# only comments\n").is_empty());
    }
}
