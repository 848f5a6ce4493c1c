//! IRIs of the vocabulary terms read by the validator.
//!
//! Grouped by namespace. Only the terms the extractor and the rules consume
//! are listed; unknown predicates are carried in [`crate::Triples`] untouched.

/// RDF core.
pub mod rdf {
    /// `rdf:type`.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// W3C Data Catalog Vocabulary.
pub mod dcat {
    /// Namespace IRI.
    pub const NS: &str = "http://www.w3.org/ns/dcat#";
    /// `dcat:Catalog`.
    pub const CATALOG: &str = "http://www.w3.org/ns/dcat#Catalog";
    /// `dcat:Dataset`.
    pub const DATASET: &str = "http://www.w3.org/ns/dcat#Dataset";
    /// `dcat:DatasetSeries`.
    pub const DATASET_SERIES: &str = "http://www.w3.org/ns/dcat#DatasetSeries";
    /// `dcat:Distribution`.
    pub const DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#Distribution";
    /// `dcat:DataService`.
    pub const DATA_SERVICE: &str = "http://www.w3.org/ns/dcat#DataService";
    /// `dcat:dataset`, linking a catalog to its datasets.
    pub const HAS_DATASET: &str = "http://www.w3.org/ns/dcat#dataset";
    /// `dcat:distribution`.
    pub const HAS_DISTRIBUTION: &str = "http://www.w3.org/ns/dcat#distribution";
    /// `dcat:keyword`.
    pub const HAS_KEYWORD: &str = "http://www.w3.org/ns/dcat#keyword";
    /// `dcat:theme`.
    pub const HAS_THEME: &str = "http://www.w3.org/ns/dcat#theme";
    /// `dcat:accessURL`.
    pub const HAS_ACCESS_URL: &str = "http://www.w3.org/ns/dcat#accessURL";
    /// `dcat:downloadURL`.
    pub const HAS_DOWNLOAD_URL: &str = "http://www.w3.org/ns/dcat#downloadURL";
    /// `dcat:mediaType`.
    pub const HAS_MEDIA_TYPE: &str = "http://www.w3.org/ns/dcat#mediaType";
    /// `dcat:endpointURL`.
    pub const HAS_ENDPOINT_URL: &str = "http://www.w3.org/ns/dcat#endpointURL";
    /// `dcat:contactPoint`.
    pub const HAS_CONTACT_POINT: &str = "http://www.w3.org/ns/dcat#contactPoint";
    /// `dcat:accessService`.
    pub const HAS_ACCESS_SERVICE: &str = "http://www.w3.org/ns/dcat#accessService";
    /// `dcat:inSeries`.
    pub const HAS_IN_SERIES: &str = "http://www.w3.org/ns/dcat#inSeries";
}

/// Dublin Core terms.
pub mod dcterms {
    /// `dcterms:title`.
    pub const HAS_TITLE: &str = "http://purl.org/dc/terms/title";
    /// `dcterms:description`.
    pub const HAS_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
    /// `dcterms:publisher`.
    pub const HAS_PUBLISHER: &str = "http://purl.org/dc/terms/publisher";
    /// `dcterms:accrualPeriodicity`.
    pub const HAS_ACCRUAL_PERIODICITY: &str = "http://purl.org/dc/terms/accrualPeriodicity";
    /// `dcterms:spatial`.
    pub const HAS_SPATIAL: &str = "http://purl.org/dc/terms/spatial";
    /// `dcterms:format`.
    pub const HAS_FORMAT: &str = "http://purl.org/dc/terms/format";
}

/// DCAT-AP reuse namespace (applicable legislation, HVD categories).
pub mod r5r {
    /// `r5r:applicableLegislation`.
    pub const HAS_APPLICABLE_LEGISLATION: &str = "http://data.europa.eu/r5r/applicableLegislation";
    /// `r5r:hvdCategory`.
    pub const HAS_HVD_CATEGORY: &str = "http://data.europa.eu/r5r/hvdCategory";
}

/// FOAF.
pub mod foaf {
    /// `foaf:page`.
    pub const HAS_PAGE: &str = "http://xmlns.com/foaf/0.1/page";
}

/// Czech terms-of-use vocabulary.
pub mod terms_of_use {
    /// `pu:specifikace`, linking a distribution to its terms-of-use resource.
    pub const HAS_TERMS_OF_USE: &str = "https://data.gov.cz/slovník/podmínky-užití/specifikace";
}
