//! Aggregate Count Loader
//! Fetches the /counts document and feeds the bound charts.

use crate::charts::ChartAdapter;
use crate::data::AggregateCounts;
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetches dashboard documents from the news backend.
///
/// Intentionally fire-and-forget friendly: no retry, no timeout beyond the
/// client default, no caching. Callers run it off the UI thread.
pub struct CountsLoader {
    client: reqwest::blocking::Client,
}

impl Default for CountsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CountsLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// GET `<base>/counts` and decode the category mapping.
    pub fn fetch_counts(&self, base_url: &str) -> Result<AggregateCounts, LoadError> {
        let url = format!("{}/counts", base_url.trim_end_matches('/'));
        let counts = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<AggregateCounts>()?;
        Ok(counts)
    }
}

/// Feed every bound chart its category: values = counts, labels = sub-keys,
/// in document order. Categories without a bound chart are ignored.
pub fn distribute(counts: &AggregateCounts, charts: &mut IndexMap<String, ChartAdapter>) {
    for (category, _) in counts.categories() {
        let Some(adapter) = charts.get_mut(category.as_str()) else {
            continue;
        };
        if let Some((labels, values)) = counts.chart_feed(category) {
            adapter.update(values, Some(labels));
        }
    }
}
