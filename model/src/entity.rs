//! Typed DCAT-AP-CZ entities extracted from triples.
//!
//! Every field holds string values in source order: IRIs for node-valued
//! properties and lexical forms for literals. Language-tagged properties are
//! held in [`LanguageMap`]s.

use std::collections::BTreeMap;

/// Language tag → value. Untagged literals are stored under the empty key;
/// when a tag repeats, the first value wins.
pub type LanguageMap = BTreeMap<String, String>;

/// Language tags accepted as "Czech" by the rules.
pub const CZECH_TAGS: [&str; 2] = ["cs", "sk"];

/// True when the primary subtag of `tag` is one of [`CZECH_TAGS`], ignoring
/// case: `cs`, `CS` and `cs-CZ` all match.
#[must_use]
pub fn is_czech_tag(tag: &str) -> bool {
    let primary = tag.split('-').next().unwrap_or_default();
    CZECH_TAGS.iter().any(|czech| primary.eq_ignore_ascii_case(czech))
}

/// True when `map` has a value under a Czech tag.
#[must_use]
pub fn has_czech(map: &LanguageMap) -> bool {
    map.keys().any(|tag| is_czech_tag(tag))
}

/// A single language-tagged value, used where a property repeats per language.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LangString {
    /// Lexical form.
    pub value: String,
    /// Language tag, empty when the literal is untagged.
    pub language: String,
}

/// A `dcat:Catalog`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    /// Catalog IRI (or `_:`-prefixed blank label).
    pub iri: String,
    /// `dcat:dataset` values.
    pub datasets: Vec<String>,
    /// `dcterms:title`.
    pub title: LanguageMap,
    /// `dcterms:description`.
    pub description: LanguageMap,
    /// `dcterms:publisher`.
    pub publishers: Vec<String>,
}

/// HVD-specific data of a high-value dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighValue {
    /// `r5r:hvdCategory` values.
    pub hvd_categories: Vec<String>,
}

/// A `dcat:Dataset` or `dcat:DatasetSeries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset {
    /// Dataset IRI.
    pub iri: String,
    /// Typed `dcat:Dataset`.
    pub has_dataset_class: bool,
    /// Typed `dcat:DatasetSeries`.
    pub has_dataset_series_class: bool,
    /// `dcterms:title`.
    pub title: LanguageMap,
    /// `dcterms:description`.
    pub description: LanguageMap,
    /// `dcterms:publisher`.
    pub publishers: Vec<String>,
    /// `dcat:keyword`, every language kept.
    pub keywords: Vec<LangString>,
    /// `dcat:theme`.
    pub themes: Vec<String>,
    /// `dcterms:accrualPeriodicity`.
    pub accrual_periodicities: Vec<String>,
    /// `dcterms:spatial`.
    pub spatials: Vec<String>,
    /// `r5r:applicableLegislation`.
    pub applicable_legislations: Vec<String>,
    /// `dcat:inSeries`.
    pub in_series: Vec<String>,
    /// Distributions in `dcat:distribution` order.
    pub distributions: Vec<Distribution>,
    /// Present exactly when the dataset is high-value.
    pub high_value: Option<HighValue>,
}

impl Dataset {
    /// True when the dataset is a `dcat:DatasetSeries`.
    #[must_use]
    pub fn is_series(&self) -> bool {
        self.has_dataset_series_class
    }

    /// True when an applicable legislation marks the dataset as high-value.
    #[must_use]
    pub fn is_high_value(&self) -> bool {
        self.high_value.is_some()
    }
}

/// A `dcat:Distribution`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distribution {
    /// Distribution IRI (or `_:`-prefixed blank label).
    pub iri: String,
    /// `dcat:accessURL`.
    pub access_urls: Vec<String>,
    /// Terms-of-use specification resources.
    pub terms_of_use: Vec<String>,
    /// `r5r:applicableLegislation` of the distribution itself.
    pub applicable_legislations: Vec<String>,
    /// True when the distribution's own legislation marks it high-value.
    pub is_high_value: bool,
    /// File or data-service specific fields.
    pub kind: DistributionKind,
}

/// The two disjoint distribution variants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
pub enum DistributionKind {
    /// A downloadable file.
    File(FileDistribution),
    /// Access through a `dcat:DataService`.
    DataService(DataService),
}

/// Fields of a file distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileDistribution {
    /// `dcat:downloadURL`.
    pub download_urls: Vec<String>,
    /// `dcat:mediaType`.
    pub media_types: Vec<String>,
    /// `dcterms:format`.
    pub formats: Vec<String>,
}

/// The data service a distribution's `dcat:accessService` points to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataService {
    /// Data service IRI (or `_:`-prefixed blank label).
    pub iri: String,
    /// `dcterms:title`.
    pub title: LanguageMap,
    /// `dcat:endpointURL`.
    pub endpoint_urls: Vec<String>,
    /// `dcat:contactPoint`.
    pub contact_points: Vec<String>,
    /// `foaf:page`.
    pub pages: Vec<String>,
    /// `r5r:hvdCategory`.
    pub hvd_categories: Vec<String>,
    /// `r5r:applicableLegislation` of the service.
    pub applicable_legislations: Vec<String>,
}
