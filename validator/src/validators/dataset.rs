//! Dataset and dataset series rules.

use dcat_model::codelist::{
    is_eurovoc_theme, is_from_accrual_periodicity_codelist, is_from_ruian_codelist,
    is_publisher_ovm, is_top_hvd_category,
};
use dcat_model::{has_czech, is_czech_tag, Dataset, HighValue};

use super::present_but_none;
use crate::report::Issue;

/// Checks one dataset. Distribution rules run separately.
#[must_use]
pub fn validate(dataset: &Dataset) -> Vec<Issue> {
    let issue = |issue: Issue| issue.with_arg("dataset", &dataset.iri);
    let mut issues = Vec::new();

    if !dataset.has_dataset_class && !dataset.has_dataset_series_class {
        issues.push(issue(Issue::error("issues.dataset.missing-type")));
    }
    if !has_czech(&dataset.title) {
        issues.push(issue(Issue::error("issues.dataset.missing-czech-title")));
    }
    if !has_czech(&dataset.description) {
        issues.push(issue(Issue::error("issues.dataset.missing-czech-description")));
    }
    if dataset.publishers.is_empty() {
        issues.push(issue(Issue::error("issues.dataset.missing-publisher")));
    }
    if present_but_none(&dataset.publishers, is_publisher_ovm) {
        issues.push(issue(Issue::warn("issues.dataset.missing-ovm-publisher")));
    }

    let coded: [(&Vec<String>, &str, &str, fn(&str) -> bool); 3] = [
        (
            &dataset.accrual_periodicities,
            "missing-accrual-periodicity",
            "missing-eurovoc-accrual-periodicity",
            is_from_accrual_periodicity_codelist,
        ),
        (
            &dataset.spatials,
            "missing-spatial",
            "missing-ruian-spatial",
            is_from_ruian_codelist,
        ),
        (
            &dataset.themes,
            "missing-theme",
            "missing-eurovoc-theme",
            is_eurovoc_theme,
        ),
    ];
    for (values, missing, foreign, in_codelist) in coded {
        if values.is_empty() {
            issues.push(issue(Issue::error(format!("issues.dataset.{missing}"))));
        } else if !values.iter().any(|v| in_codelist(v)) {
            issues.push(issue(Issue::warn(format!("issues.dataset.{foreign}"))));
        }
    }

    if dataset.keywords.is_empty() {
        issues.push(issue(Issue::error("issues.dataset.missing-keyword")));
    } else if !dataset
        .keywords
        .iter()
        .any(|k| is_czech_tag(&k.language))
    {
        issues.push(issue(Issue::warn("issues.dataset.missing-czech-keyword")));
    }

    if let Some(high_value) = &dataset.high_value {
        issues.extend(high_value_rules(dataset, high_value).into_iter().map(issue));
    }

    if dataset.is_series() {
        if !dataset.distributions.is_empty() {
            issues.push(issue(Issue::info(
                "issues.dataset-series.distribution-found-but-not-expected",
            )));
        }
    } else if dataset.distributions.is_empty() {
        issues.push(issue(Issue::warn("issues.dataset.no-distribution-found")));
    }
    issues
}

fn high_value_rules(dataset: &Dataset, high_value: &HighValue) -> Vec<Issue> {
    let mut issues = vec![Issue::success("issues.dataset.this-is-hvd")];
    if high_value.hvd_categories.is_empty() {
        issues.push(Issue::error("issues.dataset.missing-hvd-category"));
    }
    if high_value.hvd_categories.iter().any(|c| is_top_hvd_category(c)) {
        issues.push(Issue::error("issues.dataset.contains-hvd-top-category"));
    }
    if !dataset.distributions.iter().any(|d| d.is_high_value) {
        issues.push(Issue::error(
            "issues.dataset.missing-hvd-distribution-for-hvd-dataset",
        ));
    }
    issues
}
