//! Entry-point rules, followed by the issues of every catalog.

use crate::entry::{EntryFormat, ResourceEntryPoint};
use crate::report::{CatalogSection, Issue};

/// Summary issues of a loaded entry point.
#[must_use]
pub fn validate(entry: &ResourceEntryPoint, catalogs: &[CatalogSection]) -> Vec<Issue> {
    let issue = |issue: Issue| issue.with_arg("url", &entry.url);
    let mut issues = Vec::new();
    if entry.negotiation.is_from_extension() {
        issues.push(issue(Issue::warn("issues.summary.content-type-from-extension")));
    }
    if entry.valid_by_shacl == Some(false) {
        issues.push(issue(Issue::warn("issues.summary.invalid-shacl")));
    }
    if let EntryFormat::CatalogJson(checks) = entry.format {
        if !checks.valid_by_json_schema {
            issues.push(issue(Issue::warn("issues.summary.invalid-json-schema")));
        }
        if checks.can_be_ckan_api {
            issues.push(issue(Issue::error("issues.summary.can-be-ckan-api")));
        }
    }
    match catalogs.len() {
        0 => issues.push(issue(Issue::warn("issues.summary.missing-catalog"))),
        1 => {}
        _ => issues.push(issue(Issue::warn("issues.summary.multiple-catalogs"))),
    }
    issues.extend(catalogs.iter().flat_map(|c| c.issues.iter().cloned()));
    issues
}
