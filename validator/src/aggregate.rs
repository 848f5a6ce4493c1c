//! Report aggregation.
//!
//! [`aggregate`] is the only place where levels are computed. Sections come
//! in with their issues and leave with their rolled-up levels; the summary
//! lists and counts are derived from the rolled-up dataset levels.

use crate::entry::{EntryFormat, ResourceEntryPoint};
use crate::report::{
    higher_level, issues_level, roll_up, CatalogSection, DatasetReference, Level, Report, Summary,
};
use crate::validators::{resource, summary as summary_rules};

/// Builds the report of one run.
///
/// A terminal failure of the entry point yields a report with the loading
/// failure, one CRITICAL summary issue, and no catalog or dataset sections.
#[must_use]
pub fn aggregate(
    entry: &ResourceEntryPoint,
    catalogs: Vec<CatalogSection>,
    references: Vec<DatasetReference>,
) -> Report {
    let mut report = Report {
        url: entry.url.clone(),
        loading_failure: entry.failure_details(),
        summary: Summary {
            content_type: entry.content_type(),
            is_content_type_from_extension: entry.negotiation.is_from_extension(),
            expected_catalog_url: entry.url.clone(),
            ..Summary::default()
        },
        ..Report::default()
    };

    if let Some(failure) = resource::failure_issue(entry) {
        report.summary.issues.push(failure);
        report.summary.level = Level::Critical;
        report.level = Level::Critical;
        return report;
    }

    let mut catalogs = catalogs;
    for catalog in &mut catalogs {
        catalog.level = issues_level(&catalog.issues);
    }
    let summary = &mut report.summary;
    summary.is_invalid_by_shacl = entry.valid_by_shacl == Some(false);
    if let EntryFormat::CatalogJson(checks) = entry.format {
        summary.is_invalid_by_json_schema = Some(!checks.valid_by_json_schema);
        summary.can_be_ckan_api = checks.can_be_ckan_api;
    }
    summary.found_catalog_iris = catalogs.iter().map(|c| c.iri.clone()).collect();
    summary.issues = summary_rules::validate(entry, &catalogs);
    summary.level = higher_level(
        issues_level(&summary.issues),
        roll_up(catalogs.iter().map(|c| c.level)),
    );
    summary.catalogs = catalogs;

    let mut references = references;
    for reference in &mut references {
        roll_up_reference(reference);
        if reference.level >= Level::Error {
            summary.resources_with_error.push(reference.access_url.clone());
        }
        for dataset in &reference.datasets {
            summary.all_found_datasets.push(dataset.iri.clone());
            *summary.counts.entry(dataset.level).or_default() += 1;
            if dataset.level >= Level::Error {
                summary.datasets_with_error.push(dataset.iri.clone());
            } else if dataset.level == Level::Warning {
                summary.datasets_with_only_warning.push(dataset.iri.clone());
            }
            if dataset.is_high_value {
                summary.high_value_datasets.push(dataset.iri.clone());
            }
        }
    }

    report.level = higher_level(summary.level, roll_up(references.iter().map(|r| r.level)));
    report.datasets = references;
    report
}

fn roll_up_reference(reference: &mut DatasetReference) {
    for dataset in &mut reference.datasets {
        for distribution in &mut dataset.distributions {
            distribution.level = issues_level(&distribution.issues);
        }
        dataset.level = higher_level(
            issues_level(&dataset.issues),
            roll_up(dataset.distributions.iter().map(|d| d.level)),
        );
    }
    reference.level = higher_level(
        issues_level(&reference.issues),
        roll_up(reference.datasets.iter().map(|d| d.level)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negotiate::Negotiation;
    use crate::report::{
        ContentType, DatasetSection, DistributionSection, DistributionVariant, Issue,
        LoadingFailure, LoadingFailureDetails,
    };

    const URL: &str = "https://data.example/katalog";

    fn entry() -> ResourceEntryPoint {
        let negotiation = Negotiation {
            url: URL.into(),
            content_type: Some(ContentType::Turtle),
            ..Negotiation::default()
        };
        let mut entry = ResourceEntryPoint::new(URL, negotiation);
        entry.valid_by_shacl = Some(true);
        entry
    }

    fn catalog() -> CatalogSection {
        CatalogSection {
            iri: URL.into(),
            dataset_count: 2,
            ..CatalogSection::default()
        }
    }

    fn dataset(iri: &str, issues: Vec<Issue>, distribution_issues: Vec<Issue>) -> DatasetSection {
        DatasetSection {
            iri: iri.into(),
            issues,
            distributions: vec![DistributionSection {
                iri: format!("{iri}/distribuce"),
                variant: DistributionVariant::File,
                data_service_iri: None,
                is_high_value: false,
                issues: distribution_issues,
                level: Level::Info,
            }],
            ..DatasetSection::default()
        }
    }

    fn reference(datasets: Vec<DatasetSection>) -> DatasetReference {
        DatasetReference {
            access_url: datasets.first().map(|d| d.iri.clone()).unwrap_or_default(),
            content_type: Some(ContentType::Turtle),
            datasets,
            ..DatasetReference::default()
        }
    }

    #[test]
    fn levels_roll_up_through_distributions() {
        let report = aggregate(
            &entry(),
            vec![catalog()],
            vec![
                reference(vec![dataset("https://d/1", vec![], vec![Issue::warn("w")])]),
                reference(vec![dataset("https://d/2", vec![Issue::error("e")], vec![])]),
            ],
        );
        assert_eq!(report.datasets[0].datasets[0].distributions[0].level, Level::Warning);
        assert_eq!(report.datasets[0].datasets[0].level, Level::Warning);
        assert_eq!(report.datasets[0].level, Level::Warning);
        assert_eq!(report.datasets[1].level, Level::Error);
        assert_eq!(report.level, Level::Error);
        assert_eq!(report.summary.level, Level::Info);

        let summary = &report.summary;
        assert_eq!(summary.all_found_datasets, vec!["https://d/1", "https://d/2"]);
        assert_eq!(summary.datasets_with_only_warning, vec!["https://d/1"]);
        assert_eq!(summary.datasets_with_error, vec!["https://d/2"]);
        assert_eq!(summary.resources_with_error, vec!["https://d/2"]);
        assert_eq!(summary.counts[&Level::Warning], 1);
        assert_eq!(summary.counts[&Level::Error], 1);
        assert_eq!(summary.found_catalog_iris, vec![URL]);
    }

    #[test]
    fn success_marker_outranks_info() {
        let mut hvd = dataset("https://d/1", vec![Issue::success("issues.dataset.this-is-hvd")], vec![]);
        hvd.is_high_value = true;
        let report = aggregate(&entry(), vec![catalog()], vec![reference(vec![hvd])]);
        assert_eq!(report.level, Level::Success);
        assert_eq!(report.summary.high_value_datasets, vec!["https://d/1"]);
        assert!(report.summary.datasets_with_only_warning.is_empty());
    }

    #[test]
    fn catalog_issues_reach_the_summary() {
        let mut catalog = catalog();
        catalog.issues.push(Issue::error("issues.catalog.missing-publisher"));
        let report = aggregate(&entry(), vec![catalog], vec![]);
        assert_eq!(report.summary.catalogs[0].level, Level::Error);
        assert_eq!(report.summary.issues.len(), 1);
        assert_eq!(report.summary.level, Level::Error);
        assert_eq!(report.level, Level::Error);
    }

    #[test]
    fn terminal_failure_has_no_sections() {
        let mut entry = entry();
        entry.failure = Some(LoadingFailure::FetchFailed);
        let report = aggregate(&entry, vec![catalog()], vec![reference(vec![])]);
        let failure = report.loading_failure.as_ref().map(|f| (f.kind, f.failed_to_fetch_data));
        assert_eq!(failure, Some((LoadingFailure::FetchFailed, true)));
        assert_eq!(report.level, Level::Critical);
        assert_eq!(report.summary.issues.len(), 1);
        assert_eq!(
            report.summary.issues[0].message,
            "issues.resource.failed-to-fetch-TURTLE"
        );
        assert!(report.summary.catalogs.is_empty());
        assert!(report.datasets.is_empty());
    }

    #[test]
    fn failure_keeps_negotiation_evidence() {
        let negotiation = Negotiation {
            url: URL.into(),
            content_type_header: Some("text/html".into()),
            status: Some(406),
            ..Negotiation::default()
        };
        let mut entry = ResourceEntryPoint::new(URL, negotiation);
        entry.failure = Some(LoadingFailure::ContentTypeUnknown);
        let report = aggregate(&entry, vec![], vec![]);
        assert_eq!(
            report.loading_failure,
            Some(LoadingFailureDetails {
                kind: LoadingFailure::ContentTypeUnknown,
                header_content_type: Some("text/html".into()),
                content_type_status_code: Some(406),
                fetch_status_code: None,
                failed_to_fetch_data: false,
                conversion_to_rdf_failed: false,
            })
        );
        assert_eq!(
            report.summary.issues[0].message,
            "issues.resource.failed-to-determine-content-type"
        );
    }

    #[test]
    fn fetch_failure_keeps_document_status() {
        let negotiation = Negotiation {
            url: URL.into(),
            content_type_from_url: Some(ContentType::Turtle),
            content_type_header: Some("text/plain".into()),
            status: Some(404),
            ..Negotiation::default()
        };
        let mut entry = ResourceEntryPoint::new(URL, negotiation);
        entry.failure = Some(LoadingFailure::FetchFailed);
        let failure = aggregate(&entry, vec![], vec![]).loading_failure;
        assert_eq!(failure.as_ref().and_then(|f| f.fetch_status_code), Some(404));
        assert_eq!(failure.as_ref().and_then(|f| f.content_type_status_code), Some(404));
    }

    #[test]
    fn missing_catalog_is_a_warning() {
        let report = aggregate(&entry(), vec![], vec![]);
        assert_eq!(report.summary.issues[0].message, "issues.summary.missing-catalog");
        assert_eq!(report.level, Level::Warning);
    }
}
