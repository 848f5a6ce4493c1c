//! Progress notifications of a validation run.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

/// A status message key with its interpolation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Message key, e.g. `status.loading-catalog`.
    pub message: String,
    /// Interpolation arguments.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub args: BTreeMap<String, String>,
}

impl Status {
    /// `status.loading-catalog`.
    #[must_use]
    pub fn loading_catalog(url: &str) -> Self {
        Self::new("status.loading-catalog").with_arg("url", url)
    }

    /// `status.validating-catalog`.
    #[must_use]
    pub fn validating_catalog() -> Self {
        Self::new("status.validating-catalog")
    }

    /// `status.loading-dataset`.
    #[must_use]
    pub fn loading_dataset(url: &str) -> Self {
        Self::new("status.loading-dataset").with_arg("url", url)
    }

    /// `status.done`.
    #[must_use]
    pub fn done() -> Self {
        Self::new("status.done")
    }

    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            args: BTreeMap::new(),
        }
    }

    fn with_arg(mut self, name: &str, value: &str) -> Self {
        self.args.insert(name.to_string(), value.to_string());
        self
    }
}

/// Receiver of progress notifications. Every method defaults to a no-op.
pub trait ProgressSink: Send + Sync {
    /// The run entered a new state.
    fn status(&self, _status: Status) {}

    /// Number of dataset resources to validate, sent once.
    fn datasets_total(&self, _total: usize) {}

    /// Validation of the dataset at `index` (discovery order) started.
    fn dataset_started(&self, _index: usize, _url: &str) {}

    /// A dataset finished; `completed` counts finished datasets so far.
    fn dataset_finished(&self, _completed: usize, _url: &str) {}
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}

/// Logs notifications with `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn status(&self, status: Status) {
        info!(key = %status.message, args = ?status.args, "status");
    }

    fn datasets_total(&self, total: usize) {
        info!(total, "datasets discovered");
    }

    fn dataset_started(&self, index: usize, url: &str) {
        info!(index, url, "dataset started");
    }

    fn dataset_finished(&self, completed: usize, url: &str) {
        info!(completed, url, "dataset finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_keys() {
        let status = Status::loading_dataset("https://data.example/sady/1");
        assert_eq!(status.message, "status.loading-dataset");
        assert_eq!(status.args["url"], "https://data.example/sady/1");
        assert!(Status::done().args.is_empty());
        assert_eq!(
            serde_json::to_string(&Status::validating_catalog()).unwrap_or_default(),
            r#"{"message":"status.validating-catalog"}"#
        );
    }
}
