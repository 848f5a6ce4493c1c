//! Entity extraction: typed catalogs, datasets and distributions read from
//! a [`Triples`] collection through a [`TripleIndex`].
//!
//! Extraction is pure; the same triples always produce the same entities.

use std::collections::HashSet;

use dcat_model::codelist::is_applicable_legislation_hvd;
use dcat_model::vocabulary::{dcat, dcterms, foaf, r5r, terms_of_use};
use dcat_model::{
    Catalog, DataService, Dataset, Distribution, DistributionKind, FileDistribution, HighValue,
    LangString, LanguageMap, Resource, TripleIndex, Triples,
};

/// Catalogs in first-seen order of their `rdf:type dcat:Catalog` triple.
#[must_use]
pub fn catalogs(triples: &Triples) -> Vec<Catalog> {
    let index = TripleIndex::new(triples);
    index
        .subjects_of_type(dcat::CATALOG)
        .iter()
        .map(|subject| Catalog {
            iri: subject.key(),
            datasets: index.values(subject, dcat::HAS_DATASET),
            title: language_map(&index, subject, dcterms::HAS_TITLE),
            description: language_map(&index, subject, dcterms::HAS_DESCRIPTION),
            publishers: index.values(subject, dcterms::HAS_PUBLISHER),
        })
        .collect()
}

/// Datasets and dataset series found in a dataset resource.
///
/// `requested` is the IRI the resource was loaded for. When it has triples
/// but no dataset type it is still returned, so the missing type is reported.
#[must_use]
pub fn datasets(triples: &Triples, requested: &str) -> Vec<Dataset> {
    let index = TripleIndex::new(triples);
    let mut seen = HashSet::new();
    let mut subjects: Vec<&Resource> = [dcat::DATASET, dcat::DATASET_SERIES]
        .into_iter()
        .flat_map(|class| index.subjects_of_type(class).iter().copied())
        .filter(|subject| seen.insert(*subject))
        .collect();
    // Keep the order of first appearance across both classes.
    subjects.sort_by_key(|subject| index.first_position(subject));

    let requested = resource_from_key(requested);
    let mut found: Vec<Dataset> = subjects.iter().map(|s| dataset(&index, s)).collect();
    if !seen.contains(&requested) && index.has_subject(&requested) {
        found.push(dataset(&index, &requested));
    }
    found
}

/// Turns an IRI or `_:`-prefixed blank label back into a [`Resource`].
#[must_use]
pub fn resource_from_key(key: &str) -> Resource {
    match key.strip_prefix("_:") {
        Some(label) => Resource::blank(label),
        None => Resource::iri(key),
    }
}

fn dataset(index: &TripleIndex<'_>, subject: &Resource) -> Dataset {
    let applicable_legislations = index.values(subject, r5r::HAS_APPLICABLE_LEGISLATION);
    let high_value = applicable_legislations
        .iter()
        .any(|iri| is_applicable_legislation_hvd(iri))
        .then(|| HighValue {
            hvd_categories: index.values(subject, r5r::HAS_HVD_CATEGORY),
        });
    Dataset {
        iri: subject.key(),
        has_dataset_class: index.has_type(subject, dcat::DATASET),
        has_dataset_series_class: index.has_type(subject, dcat::DATASET_SERIES),
        title: language_map(index, subject, dcterms::HAS_TITLE),
        description: language_map(index, subject, dcterms::HAS_DESCRIPTION),
        publishers: index.values(subject, dcterms::HAS_PUBLISHER),
        keywords: lang_strings(index, subject, dcat::HAS_KEYWORD),
        themes: index.values(subject, dcat::HAS_THEME),
        accrual_periodicities: index.values(subject, dcterms::HAS_ACCRUAL_PERIODICITY),
        spatials: index.values(subject, dcterms::HAS_SPATIAL),
        applicable_legislations,
        in_series: index.values(subject, dcat::HAS_IN_SERIES),
        distributions: index
            .resources(subject, dcat::HAS_DISTRIBUTION)
            .into_iter()
            .map(|d| distribution(index, d))
            .collect(),
        high_value,
    }
}

fn distribution(index: &TripleIndex<'_>, subject: &Resource) -> Distribution {
    let applicable_legislations = index.values(subject, r5r::HAS_APPLICABLE_LEGISLATION);
    let is_high_value = applicable_legislations
        .iter()
        .any(|iri| is_applicable_legislation_hvd(iri));
    let kind = match index.resources(subject, dcat::HAS_ACCESS_SERVICE).first() {
        Some(service) => DistributionKind::DataService(data_service(index, service)),
        None => DistributionKind::File(FileDistribution {
            download_urls: index.values(subject, dcat::HAS_DOWNLOAD_URL),
            media_types: index.values(subject, dcat::HAS_MEDIA_TYPE),
            formats: index.values(subject, dcterms::HAS_FORMAT),
        }),
    };
    Distribution {
        iri: subject.key(),
        access_urls: index.values(subject, dcat::HAS_ACCESS_URL),
        terms_of_use: index.values(subject, terms_of_use::HAS_TERMS_OF_USE),
        applicable_legislations,
        is_high_value,
        kind,
    }
}

fn data_service(index: &TripleIndex<'_>, service: &Resource) -> DataService {
    DataService {
        iri: service.key(),
        title: language_map(index, service, dcterms::HAS_TITLE),
        endpoint_urls: index.values(service, dcat::HAS_ENDPOINT_URL),
        contact_points: index.values(service, dcat::HAS_CONTACT_POINT),
        pages: index.values(service, foaf::HAS_PAGE),
        hvd_categories: index.values(service, r5r::HAS_HVD_CATEGORY),
        applicable_legislations: index.values(service, r5r::HAS_APPLICABLE_LEGISLATION),
    }
}

fn language_map(index: &TripleIndex<'_>, subject: &Resource, predicate: &str) -> LanguageMap {
    let mut map = LanguageMap::new();
    for value in lang_strings(index, subject, predicate) {
        map.entry(value.language).or_insert(value.value);
    }
    map
}

fn lang_strings(index: &TripleIndex<'_>, subject: &Resource, predicate: &str) -> Vec<LangString> {
    index
        .objects(subject, predicate)
        .iter()
        .filter_map(|object| object.as_literal())
        .map(|literal| LangString {
            value: literal.value.clone(),
            language: literal.language.clone().unwrap_or_default(),
        })
        .collect()
}
