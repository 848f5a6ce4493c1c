//! Validation report types: levels, issues, and the nested report tree.
//!
//! A [`Report`] is built once by [`crate::aggregate`] and is read-only
//! afterwards. Every node carries its own [`Issue`] list and a rolled-up
//! [`Level`]: the maximum over the node's issues and its children's levels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reporting severity.
///
/// The declaration order is the rank: `Info < Success < Warning < Error < Critical`.
/// `Info` ranks below `Success`, so a clean high-value dataset (which carries a
/// success marker) is distinguishable from an unremarkable one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Informational only.
    #[default]
    Info,
    /// A positive marker.
    Success,
    /// Non-blocking problem.
    Warning,
    /// Profile violation.
    Error,
    /// The resource could not be processed at all.
    Critical,
}

impl Level {
    /// Lower-case label used in logs and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }
}

/// The higher-ranked of two levels.
#[must_use]
pub fn higher_level(a: Level, b: Level) -> Level {
    a.max(b)
}

/// Folds `levels` with [`higher_level`], seeded with [`Level::Info`].
pub fn roll_up(levels: impl IntoIterator<Item = Level>) -> Level {
    levels.into_iter().fold(Level::Info, higher_level)
}

/// Highest level among `issues`, [`Level::Info`] when empty.
#[must_use]
pub fn issues_level(issues: &[Issue]) -> Level {
    roll_up(issues.iter().map(|i| i.level))
}

/// One finding: a level, a message key and interpolation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity.
    pub level: Level,
    /// Message key, e.g. `issues.dataset.missing-theme`.
    pub message: String,
    /// Interpolation arguments keyed by placeholder name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub args: BTreeMap<String, String>,
}

impl Issue {
    /// Creates an issue without arguments.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            args: BTreeMap::new(),
        }
    }

    /// Adds one interpolation argument.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Creates an [`Level::Info`] issue.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    /// Creates a [`Level::Success`] issue.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    /// Creates a [`Level::Warning`] issue.
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Creates an [`Level::Error`] issue.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Creates a [`Level::Critical`] issue.
    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Level::Critical, message)
    }
}

/// Serialization of a resource as decided by content negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    /// A SPARQL endpoint.
    Sparql,
    /// A Turtle (or N-Triples) document.
    Turtle,
    /// A JSON-LD document.
    Jsonld,
}

impl ContentType {
    /// Upper-case label, as used in `failed-to-fetch-*` keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Sparql => "SPARQL",
            ContentType::Turtle => "TURTLE",
            ContentType::Jsonld => "JSONLD",
        }
    }
}

/// Why the entry point could not be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadingFailure {
    /// No content type after probe, header and URL suffix.
    ContentTypeUnknown,
    /// Network failure or a non-2xx status.
    FetchFailed,
    /// The body is not JSON.
    InvalidJson,
    /// The document could not be turned into triples.
    ConversionFailed,
    /// An internal error was caught at the pipeline boundary.
    Unexpected,
}

/// A [`LoadingFailure`] with the evidence gathered before loading stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoadingFailureDetails {
    /// Why loading stopped.
    pub kind: LoadingFailure,
    /// Raw `Content-Type` header of the negotiation GET.
    pub header_content_type: Option<String>,
    /// Status of the negotiation GET.
    pub content_type_status_code: Option<u16>,
    /// Status of the document fetch, for Turtle and JSON-LD resources.
    pub fetch_status_code: Option<u16>,
    /// The resource could not be fetched.
    pub failed_to_fetch_data: bool,
    /// The resource was fetched but could not be turned into triples.
    pub conversion_to_rdf_failed: bool,
}

/// Entry-point summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Summary {
    /// Detected content type, or the one guessed from the URL suffix.
    pub content_type: Option<ContentType>,
    /// True when the content type comes from the URL suffix only.
    pub is_content_type_from_extension: bool,
    /// True when the catalog graph does not conform to the catalog shapes.
    pub is_invalid_by_shacl: bool,
    /// `Some` only for JSON entry points.
    pub is_invalid_by_json_schema: Option<bool>,
    /// The document looks like a CKAN action API response.
    pub can_be_ckan_api: bool,
    /// IRIs of the catalogs found.
    pub found_catalog_iris: Vec<String>,
    /// The entry-point URL, which is expected to be the catalog IRI.
    pub expected_catalog_url: String,
    /// Access URLs of dataset resources rolled up to ERROR or higher.
    pub resources_with_error: Vec<String>,
    /// Every dataset found, in discovery order.
    pub all_found_datasets: Vec<String>,
    /// Datasets rolled up to ERROR or higher.
    pub datasets_with_error: Vec<String>,
    /// Datasets rolled up to exactly WARNING.
    pub datasets_with_only_warning: Vec<String>,
    /// High-value datasets.
    pub high_value_datasets: Vec<String>,
    /// Number of datasets per rolled-up level.
    pub counts: BTreeMap<Level, usize>,
    /// Summary issues followed by every catalog's issues.
    pub issues: Vec<Issue>,
    /// Rolled-up level over `issues` and `catalogs`.
    pub level: Level,
    /// One section per catalog.
    pub catalogs: Vec<CatalogSection>,
}

/// Findings for one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogSection {
    /// Catalog IRI.
    pub iri: String,
    /// Number of `dcat:dataset` links.
    pub dataset_count: usize,
    /// Rule findings.
    pub issues: Vec<Issue>,
    /// Rolled-up level.
    pub level: Level,
}

/// Findings for one fetched dataset resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DatasetReference {
    /// URL the resource was fetched from (the dataset IRI).
    pub access_url: String,
    /// Content type used to load the resource.
    pub content_type: Option<ContentType>,
    /// Resource-level findings.
    pub issues: Vec<Issue>,
    /// Rolled-up level over `issues` and `datasets`.
    pub level: Level,
    /// Datasets found in the resource.
    pub datasets: Vec<DatasetSection>,
}

/// Findings for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DatasetSection {
    /// Dataset IRI.
    pub iri: String,
    /// True for `dcat:DatasetSeries`.
    pub is_series: bool,
    /// True when the dataset is high-value.
    pub is_high_value: bool,
    /// Rule findings.
    pub issues: Vec<Issue>,
    /// Rolled-up level over `issues` and `distributions`.
    pub level: Level,
    /// Distributions in `dcat:distribution` order.
    pub distributions: Vec<DistributionSection>,
}

/// Variant of a distribution, as shown in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionVariant {
    /// File distribution.
    File,
    /// Data-service distribution.
    DataService,
}

/// Findings for one distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DistributionSection {
    /// Distribution IRI.
    pub iri: String,
    /// File or data service.
    pub variant: DistributionVariant,
    /// The data service, for data-service distributions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_service_iri: Option<String>,
    /// True when the distribution is high-value.
    pub is_high_value: bool,
    /// Rule findings.
    pub issues: Vec<Issue>,
    /// Rolled-up level.
    pub level: Level,
}

/// The complete output of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report {
    /// Entry-point URL.
    pub url: String,
    /// Set when the entry point could not be validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_failure: Option<LoadingFailureDetails>,
    /// Entry-point summary and catalog sections.
    pub summary: Summary,
    /// One reference per discovered dataset resource, in discovery order.
    pub datasets: Vec<DatasetReference>,
    /// Rolled-up level over the summary and every dataset reference.
    pub level: Level,
}

impl Report {
    /// Removes every issue list, keeping levels and counts.
    pub fn strip_issues(&mut self) {
        self.summary.issues.clear();
        for catalog in &mut self.summary.catalogs {
            catalog.issues.clear();
        }
        for reference in &mut self.datasets {
            reference.issues.clear();
            for dataset in &mut reference.datasets {
                dataset.issues.clear();
                for distribution in &mut dataset.distributions {
                    distribution.issues.clear();
                }
            }
        }
    }

    /// Number of issues across the whole tree.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        let catalogs: usize = self.summary.catalogs.iter().map(|c| c.issues.len()).sum();
        let datasets: usize = self
            .datasets
            .iter()
            .map(|r| {
                r.issues.len()
                    + r.datasets
                        .iter()
                        .map(|d| {
                            d.issues.len()
                                + d.distributions.iter().map(|x| x.issues.len()).sum::<usize>()
                        })
                        .sum::<usize>()
            })
            .sum();
        self.summary.issues.len() + catalogs + datasets
    }
}
