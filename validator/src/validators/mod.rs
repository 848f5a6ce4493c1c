//! Rule families of the validation pipeline.
//!
//! Every rule emits [`crate::report::Issue`]s in a fixed order, so the same
//! entities always produce the same issue lists.
//!
//! | Module | Key prefix | Checks |
//! |--------|------------|--------|
//! | [`catalog`] | `issues.catalog.` | Czech title and description, publisher |
//! | [`dataset`] | `issues.dataset.` | mandatory attributes, codelists, HVD, distributions |
//! | [`distribution`] | `issues.distribution.`, `issues.data-service.` | access, files, data services |
//! | [`resource`] | `issues.resource.` | loading failures, JSON Schema of dataset documents |
//! | [`summary`] | `issues.summary.` | entry point format, SHACL, catalog count |

pub mod catalog;
pub mod dataset;
pub mod distribution;
pub mod resource;
pub mod summary;

use dcat_model::{Catalog, Dataset, Distribution, DistributionKind};

use crate::entry::ResourceEntryPoint;
use crate::report::{
    CatalogSection, DatasetReference, DatasetSection, DistributionSection, DistributionVariant,
};

/// Runs the catalog rules. The level is set by [`crate::aggregate`].
#[must_use]
pub fn check_catalog(catalog: &Catalog) -> CatalogSection {
    CatalogSection {
        iri: catalog.iri.clone(),
        dataset_count: catalog.datasets.len(),
        issues: catalog::validate(catalog),
        ..CatalogSection::default()
    }
}

/// Runs the resource rules and, unless loading failed, the dataset and
/// distribution rules of every dataset found in it.
#[must_use]
pub fn check_resource(entry: &ResourceEntryPoint, datasets: &[Dataset]) -> DatasetReference {
    let mut reference = DatasetReference {
        access_url: entry.url.clone(),
        content_type: entry.content_type(),
        ..DatasetReference::default()
    };
    match resource::failure_issue(entry) {
        Some(failure) => reference.issues.push(failure),
        None => {
            reference.issues = resource::validate(entry, datasets.len());
            reference.datasets = datasets.iter().map(check_dataset).collect();
        }
    }
    reference
}

/// Runs the dataset rules and the rules of its distributions.
#[must_use]
pub fn check_dataset(dataset: &Dataset) -> DatasetSection {
    DatasetSection {
        iri: dataset.iri.clone(),
        is_series: dataset.is_series(),
        is_high_value: dataset.is_high_value(),
        issues: dataset::validate(dataset),
        distributions: dataset.distributions.iter().map(check_distribution).collect(),
        ..DatasetSection::default()
    }
}

fn check_distribution(distribution: &Distribution) -> DistributionSection {
    let (variant, data_service_iri) = match &distribution.kind {
        DistributionKind::File(_) => (DistributionVariant::File, None),
        DistributionKind::DataService(service) => {
            (DistributionVariant::DataService, Some(service.iri.clone()))
        }
    };
    DistributionSection {
        iri: distribution.iri.clone(),
        variant,
        data_service_iri,
        is_high_value: distribution.is_high_value,
        issues: distribution::validate(distribution),
        level: crate::report::Level::Info,
    }
}

/// True when `values` is not empty and no value satisfies `predicate`.
pub(crate) fn present_but_none(values: &[String], predicate: impl Fn(&str) -> bool) -> bool {
    !values.is_empty() && !values.iter().any(|v| predicate(v))
}
