//! Resource entry points: what is known about a fetched resource before
//! its entities are checked.
//!
//! An entry point records the negotiation evidence, how loading ended and
//! the format-specific side checks (JSON Schema for JSON-LD documents, SHACL
//! for the catalog). The rule engine turns it into resource and summary issues.

use dcat_model::codelist::is_applicable_legislation_hvd;
use serde_json::Value;

use crate::error::SchemaError;
use crate::negotiate::Negotiation;
use crate::report::{ContentType, LoadingFailure, LoadingFailureDetails};
use crate::schema::{
    SchemaRegistry, CATALOG_SCHEMA, DATASET_SCHEMA, DATASET_SERIES_SCHEMA, HVD_DATASET_SCHEMA,
};

/// URL suffix of the CKAN action API listing packages.
pub const CKAN_PACKAGE_LIST_SUFFIX: &str = "/action/package_list";
/// `typ` of a JSON dataset document.
pub const JSON_DATASET_TYPE: &str = "Datová sada";
/// `typ` of a JSON dataset series document.
pub const JSON_DATASET_SERIES_TYPE: &str = "Datová série";

/// A fetched resource, catalog or dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceEntryPoint {
    /// Requested URL.
    pub url: String,
    /// Content negotiation result. The response body is dropped after loading.
    pub negotiation: Negotiation,
    /// Why loading stopped, if it did.
    pub failure: Option<LoadingFailure>,
    /// Format-specific checks.
    pub format: EntryFormat,
    /// SHACL conformance, for the catalog entry point only.
    pub valid_by_shacl: Option<bool>,
}

impl ResourceEntryPoint {
    /// Entry point for `negotiation` with no checks recorded yet.
    #[must_use]
    pub fn new(url: impl Into<String>, negotiation: Negotiation) -> Self {
        Self {
            url: url.into(),
            negotiation,
            failure: None,
            format: EntryFormat::Rdf,
            valid_by_shacl: None,
        }
    }

    /// Detected content type, else the one guessed from the URL suffix.
    #[must_use]
    pub fn content_type(&self) -> Option<ContentType> {
        self.negotiation.effective()
    }

    /// Status of the document GET, if one completed. SPARQL resources are
    /// queried, not fetched, and have none.
    #[must_use]
    pub fn fetch_status(&self) -> Option<u16> {
        match self.content_type() {
            Some(ContentType::Turtle | ContentType::Jsonld) => self.negotiation.status,
            Some(ContentType::Sparql) | None => None,
        }
    }

    /// The loading failure together with the negotiation evidence, or `None`
    /// when loading succeeded.
    #[must_use]
    pub fn failure_details(&self) -> Option<LoadingFailureDetails> {
        let kind = self.failure?;
        Some(LoadingFailureDetails {
            kind,
            header_content_type: self.negotiation.content_type_header.clone(),
            content_type_status_code: self.negotiation.status,
            fetch_status_code: self.fetch_status(),
            failed_to_fetch_data: kind == LoadingFailure::FetchFailed,
            conversion_to_rdf_failed: matches!(
                kind,
                LoadingFailure::InvalidJson | LoadingFailure::ConversionFailed
            ),
        })
    }
}

/// Closed set of entry point formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryFormat {
    /// Turtle, SPARQL, or JSON-LD that was never parsed.
    #[default]
    Rdf,
    /// A JSON catalog document.
    CatalogJson(CatalogJsonChecks),
    /// A JSON dataset document.
    DatasetJson(DatasetJsonChecks),
}

/// JSON Schema checks of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogJsonChecks {
    /// Conforms to the catalog schema.
    pub valid_by_json_schema: bool,
    /// The URL and body look like the CKAN package list API.
    pub can_be_ckan_api: bool,
}

/// JSON Schema checks of a dataset document. `None` means "not applicable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetJsonChecks {
    /// Conforms to the dataset schema (`typ` = `Datová sada`).
    pub valid_by_dataset_schema: Option<bool>,
    /// Conforms to the HVD schema (dataset under the HVD regulation).
    pub valid_by_hvd_schema: Option<bool>,
    /// Conforms to the series schema (`typ` = `Datová série`).
    pub valid_by_series_schema: Option<bool>,
}

/// Runs the catalog JSON Schema and the CKAN heuristic.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownSchema`] if the catalog schema is not registered.
pub fn catalog_json_checks(
    registry: &SchemaRegistry,
    url: &str,
    document: &Value,
) -> Result<CatalogJsonChecks, SchemaError> {
    let valid_by_json_schema = registry.validate_json(CATALOG_SCHEMA, document)?;
    Ok(CatalogJsonChecks {
        valid_by_json_schema,
        can_be_ckan_api: !valid_by_json_schema && looks_like_ckan(url, document),
    })
}

/// True for a CKAN `package_list` response: the URL ends with
/// `/action/package_list` and the body has `success` and `result`.
#[must_use]
pub fn looks_like_ckan(url: &str, document: &Value) -> bool {
    url.trim_end_matches('/').ends_with(CKAN_PACKAGE_LIST_SUFFIX)
        && document.get("success").is_some()
        && document.get("result").is_some()
}

/// Selects schemas by the document's `typ` and validates against them.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownSchema`] if a dataset schema is not registered.
pub fn dataset_json_checks(registry: &SchemaRegistry, document: &Value) -> Result<DatasetJsonChecks, SchemaError> {
    let mut checks = DatasetJsonChecks::default();
    match document.get("typ").and_then(Value::as_str) {
        Some(JSON_DATASET_TYPE) => {
            checks.valid_by_dataset_schema = Some(registry.validate_json(DATASET_SCHEMA, document)?);
            if declares_hvd_legislation(document) {
                checks.valid_by_hvd_schema = Some(registry.validate_json(HVD_DATASET_SCHEMA, document)?);
            }
        }
        Some(JSON_DATASET_SERIES_TYPE) => {
            checks.valid_by_series_schema = Some(registry.validate_json(DATASET_SERIES_SCHEMA, document)?);
        }
        _ => {}
    }
    Ok(checks)
}

fn declares_hvd_legislation(document: &Value) -> bool {
    match document.get("právní_předpis") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .any(is_applicable_legislation_hvd),
        Some(Value::String(iri)) => is_applicable_legislation_hvd(iri),
        _ => false,
    }
}
