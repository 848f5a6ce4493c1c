//! Resource rules for fetched documents.
//!
//! A loading failure is terminal: [`failure_issue`] is then the only issue of
//! the resource. Otherwise [`validate`] reports on the dataset count and the
//! JSON Schema checks of JSON dataset documents.

use crate::entry::{EntryFormat, ResourceEntryPoint};
use crate::report::{ContentType, Issue, LoadingFailure};

/// Message key of a loading failure.
#[must_use]
pub fn failure_key(failure: LoadingFailure, content_type: Option<ContentType>) -> String {
    match (failure, content_type) {
        (LoadingFailure::FetchFailed, Some(content_type)) => {
            format!("issues.resource.failed-to-fetch-{}", content_type.as_str())
        }
        (LoadingFailure::ContentTypeUnknown | LoadingFailure::FetchFailed, _) => {
            "issues.resource.failed-to-determine-content-type".to_string()
        }
        (LoadingFailure::InvalidJson, _) => "issues.resource.failed-to-parse-json".to_string(),
        (LoadingFailure::ConversionFailed, _) => {
            "issues.resource.failed-to-convert-to-rdf".to_string()
        }
        (LoadingFailure::Unexpected, _) => "issues.summary.unexpected-error".to_string(),
    }
}

/// The terminal CRITICAL issue of `entry`, if loading failed.
#[must_use]
pub fn failure_issue(entry: &ResourceEntryPoint) -> Option<Issue> {
    let failure = entry.failure?;
    Some(Issue::critical(failure_key(failure, entry.content_type())).with_arg("url", &entry.url))
}

/// Non-terminal rules of a loaded dataset resource.
#[must_use]
pub fn validate(entry: &ResourceEntryPoint, dataset_count: usize) -> Vec<Issue> {
    let issue = |issue: Issue| issue.with_arg("url", &entry.url);
    let mut issues = Vec::new();
    if dataset_count == 0 {
        issues.push(issue(Issue::error("issues.resource.no-dataset-found")));
    }
    if let EntryFormat::DatasetJson(checks) = entry.format {
        let schemas = [
            (checks.valid_by_hvd_schema, "hvd"),
            (checks.valid_by_dataset_schema, "dataset"),
            (checks.valid_by_series_schema, "series"),
        ];
        for (valid, schema) in schemas {
            if valid == Some(false) {
                issues.push(issue(Issue::error(format!(
                    "issues.resource.is-json-but-not-valid-by-{schema}-json-schema"
                ))));
            }
        }
    }
    issues
}
