//! Format loaders: turn a negotiated resource into [`Triples`].
//!
//! | Content type | Source | Parser |
//! |--------------|--------|--------|
//! | `TURTLE` | GET body kept by negotiation | [`turtle::parse_turtle`] |
//! | `JSONLD` | GET body kept by negotiation | [`jsonld::to_triples`] |
//! | `SPARQL` | `CONSTRUCT` against the endpoint | [`crate::fetch::FetchService::sparql_construct`] |

pub mod jsonld;
pub mod sparql;
pub mod terms;
pub mod turtle;

use dcat_model::Triples;
use serde_json::Value;
use tracing::{debug, warn};

use crate::fetch::FetchService;
use crate::negotiate::Negotiation;
use crate::report::{ContentType, LoadingFailure};
use jsonld::ContextCache;

/// What to load from a SPARQL endpoint. Document formats ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Every catalog with its properties.
    Catalog,
    /// One dataset with its distributions and their data services.
    Dataset(&'a str),
}

/// A loaded resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loaded {
    /// The resource as triples.
    pub triples: Triples,
    /// The parsed JSON document, for JSON-LD resources.
    pub json: Option<Value>,
}

/// Loads a negotiated resource.
///
/// # Errors
///
/// Returns the [`LoadingFailure`] kind when the content type is unknown, the resource
/// could not be fetched, the JSON is malformed, or conversion failed.
pub async fn load(
    fetch: &dyn FetchService,
    negotiation: &Negotiation,
    scope: Scope<'_>,
    contexts: &ContextCache,
) -> Result<Loaded, LoadingFailure> {
    let content_type = negotiation
        .effective()
        .ok_or(LoadingFailure::ContentTypeUnknown)?;
    let url = negotiation.url.as_str();
    let loaded = match content_type {
        ContentType::Sparql => {
            let query = match scope {
                Scope::Catalog => sparql::CATALOG_QUERY.to_string(),
                Scope::Dataset(iri) => sparql::dataset_query(iri),
            };
            let triples = fetch.sparql_construct(url, &query).await.map_err(|error| {
                warn!(url, %error, "SPARQL CONSTRUCT failed");
                LoadingFailure::FetchFailed
            })?;
            Loaded { triples, json: None }
        }
        ContentType::Turtle => {
            let body = document_body(negotiation)?;
            let triples = turtle::parse_turtle(body, Some(url)).map_err(|error| {
                warn!(url, %error, "Turtle conversion failed");
                LoadingFailure::ConversionFailed
            })?;
            Loaded { triples, json: None }
        }
        ContentType::Jsonld => {
            let body = document_body(negotiation)?;
            let json: Value = serde_json::from_str(body).map_err(|error| {
                warn!(url, %error, "body is not JSON");
                LoadingFailure::InvalidJson
            })?;
            let triples = jsonld::to_triples(fetch, &json, url, contexts)
                .await
                .map_err(|error| {
                    warn!(url, %error, "JSON-LD conversion failed");
                    LoadingFailure::ConversionFailed
                })?;
            Loaded {
                triples,
                json: Some(json),
            }
        }
    };
    debug!(url, content_type = content_type.as_str(), triples = loaded.triples.len(), "loaded");
    Ok(loaded)
}

fn document_body(negotiation: &Negotiation) -> Result<&str, LoadingFailure> {
    match &negotiation.response {
        Some(response) if response.is_success() => Ok(&response.body),
        Some(response) => {
            warn!(url = %negotiation.url, status = response.status, "non-2xx response");
            Err(LoadingFailure::FetchFailed)
        }
        None => Err(LoadingFailure::FetchFailed),
    }
}

/// Dataset IRIs of a SPARQL catalog in `ORDER BY` order, or `None` when the
/// `SELECT` fails.
pub async fn sparql_dataset_order(fetch: &dyn FetchService, endpoint: &str) -> Option<Vec<String>> {
    match fetch.sparql_select(endpoint, sparql::DATASET_ORDER_QUERY).await {
        Ok(rows) => Some(
            rows.iter()
                .filter_map(|row| row.get(sparql::DATASET_VARIABLE))
                .map(|object| object.value())
                .collect(),
        ),
        Err(error) => {
            debug!(endpoint, %error, "dataset ordering query failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::HttpResponse;

    fn negotiated(content_type: Option<ContentType>, response: Option<HttpResponse>) -> Negotiation {
        Negotiation {
            url: "https://data.example/katalog".to_string(),
            content_type,
            response,
            ..Negotiation::default()
        }
    }

    #[test]
    fn missing_response_is_a_fetch_failure() {
        let negotiation = negotiated(Some(ContentType::Turtle), None);
        assert_eq!(document_body(&negotiation), Err(LoadingFailure::FetchFailed));
    }

    #[test]
    fn non_success_status_is_a_fetch_failure() {
        let response = HttpResponse::new(404, Some("text/turtle"), "");
        let negotiation = negotiated(Some(ContentType::Turtle), Some(response));
        assert_eq!(document_body(&negotiation), Err(LoadingFailure::FetchFailed));
    }

    #[test]
    fn success_body_is_reused() {
        let response = HttpResponse::new(200, Some("text/turtle"), "<a> <b> <c> .");
        let negotiation = negotiated(Some(ContentType::Turtle), Some(response));
        assert_eq!(document_body(&negotiation), Ok("<a> <b> <c> ."));
    }
}
