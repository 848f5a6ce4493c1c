//! Catalog rules.

use dcat_model::codelist::is_publisher_ovm;
use dcat_model::{has_czech, Catalog};

use super::present_but_none;
use crate::report::Issue;

/// Checks one catalog.
#[must_use]
pub fn validate(catalog: &Catalog) -> Vec<Issue> {
    let issue = |issue: Issue| issue.with_arg("catalog", &catalog.iri);
    let mut issues = Vec::new();
    if !has_czech(&catalog.title) {
        issues.push(issue(Issue::error("issues.catalog.missing-czech-title")));
    }
    if !has_czech(&catalog.description) {
        issues.push(issue(Issue::error("issues.catalog.missing-czech-description")));
    }
    if catalog.publishers.is_empty() {
        issues.push(issue(Issue::error("issues.catalog.missing-publisher")));
    }
    if present_but_none(&catalog.publishers, is_publisher_ovm) {
        issues.push(issue(Issue::warn("issues.catalog.missing-ovm-publisher")));
    }
    issues
}
