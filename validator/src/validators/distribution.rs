//! Distribution rules: the shared base, then the file or data-service variant.

use dcat_model::codelist::{
    is_applicable_legislation_hvd, is_from_format_codelist, is_from_media_type_codelist,
    is_top_hvd_category,
};
use dcat_model::{has_czech, DataService, Distribution, DistributionKind, FileDistribution};

use super::present_but_none;
use crate::report::Issue;

/// Checks one distribution.
#[must_use]
pub fn validate(distribution: &Distribution) -> Vec<Issue> {
    let issue = |issue: Issue| issue.with_arg("distribution", &distribution.iri);
    let mut issues = Vec::new();
    if distribution.access_urls.is_empty() {
        issues.push(issue(Issue::warn("issues.distribution.missing-access-url")));
    }
    if distribution.terms_of_use.is_empty() {
        issues.push(issue(Issue::warn("issues.distribution.missing-terms-of-use")));
    }
    match &distribution.kind {
        DistributionKind::File(file) => issues.extend(file_rules(file).into_iter().map(issue)),
        DistributionKind::DataService(service) => issues.extend(
            data_service_rules(service, distribution.is_high_value)
                .into_iter()
                .map(|i| issue(i).with_arg("data-service", &service.iri)),
        ),
    }
    issues
}

fn file_rules(file: &FileDistribution) -> Vec<Issue> {
    let mut issues = Vec::new();
    if file.download_urls.is_empty() {
        issues.push(Issue::warn("issues.distribution.missing-download-url"));
    }
    if file.media_types.is_empty() {
        issues.push(Issue::warn("issues.distribution.missing-media-type"));
    }
    if present_but_none(&file.media_types, is_from_media_type_codelist) {
        issues.push(Issue::warn("issues.distribution.media-type-not-from-codelist"));
    }
    if file.formats.is_empty() {
        issues.push(Issue::warn("issues.distribution.missing-format"));
    }
    if present_but_none(&file.formats, is_from_format_codelist) {
        issues.push(Issue::warn("issues.distribution.format-not-from-codelist"));
    }
    issues
}

fn data_service_rules(service: &DataService, is_high_value: bool) -> Vec<Issue> {
    let mut issues = Vec::new();
    if !has_czech(&service.title) {
        issues.push(Issue::warn("issues.data-service.missing-czech-title"));
    }
    if !is_high_value {
        return issues;
    }

    let has_legislation = service
        .applicable_legislations
        .iter()
        .any(|l| is_applicable_legislation_hvd(l));
    if has_legislation {
        issues.push(Issue::success("issues.data-service.this-is-hvd"));
    }
    if service.endpoint_urls.is_empty() {
        issues.push(Issue::error("issues.data-service.missing-endpoint-url"));
    }
    if service.hvd_categories.is_empty() {
        issues.push(Issue::error("issues.data-service.missing-hvd-category"));
    }
    if service.hvd_categories.iter().any(|c| is_top_hvd_category(c)) {
        issues.push(Issue::error("issues.data-service.using-hvd-top-category"));
    }
    if service.contact_points.is_empty() {
        issues.push(Issue::error("issues.data-service.missing-contact-point"));
    }
    if service.pages.is_empty() {
        issues.push(Issue::error("issues.data-service.missing-page"));
    }
    if !has_legislation {
        issues.push(Issue::error("issues.data-service.missing-legislation-for-hvd"));
    }
    issues
}
