//! Network capability: plain HTTP and the SPARQL 1.1 protocol.
//!
//! The pipeline only talks to the network through [`FetchService`], so tests
//! substitute an in-memory implementation. [`HttpFetchService`] is the
//! production implementation on top of `reqwest`.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use dcat_model::{Literal, Object, Resource, Triples};
use reqwest::header::{HeaderMap, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::error::{ConfigError, FetchError};
use crate::loader::turtle::parse_turtle;

/// `Accept` header for document fetches.
pub const DOCUMENT_ACCEPT: &str =
    "text/turtle, application/ld+json;q=0.9, application/json;q=0.8, */*;q=0.1";
/// `Accept` header for `ASK` and `SELECT`.
pub const SPARQL_RESULTS_ACCEPT: &str = "application/sparql-results+json";
/// `Accept` header for `CONSTRUCT`.
pub const SPARQL_GRAPH_ACCEPT: &str = "application/n-triples, text/turtle;q=0.9";

/// A completed HTTP exchange. Non-2xx statuses are responses, not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response headers, names lower-cased.
    pub headers: BTreeMap<String, String>,
    /// Body decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with one `Content-Type` header.
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        if let Some(value) = content_type {
            headers.insert("content-type".to_string(), value.to_string());
        }
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Raw `Content-Type` header.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(String::as_str)
    }
}

/// One solution of a `SELECT` query.
pub type Bindings = BTreeMap<String, Object>;

/// Network operations used by the pipeline.
#[async_trait]
pub trait FetchService: Send + Sync {
    /// Performs a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] when no response was received.
    async fn http_get(&self, url: &str) -> Result<HttpResponse, FetchError>;

    /// Runs an `ASK` query.
    ///
    /// # Errors
    ///
    /// Fails on network errors, non-2xx statuses and non-boolean results.
    async fn sparql_ask(&self, endpoint: &str, query: &str) -> Result<bool, FetchError>;

    /// Runs a `CONSTRUCT` query and parses the returned graph.
    ///
    /// # Errors
    ///
    /// Fails on network errors, non-2xx statuses and unparsable graphs.
    async fn sparql_construct(&self, endpoint: &str, query: &str) -> Result<Triples, FetchError>;

    /// Runs a `SELECT` query.
    ///
    /// # Errors
    ///
    /// Fails on network errors, non-2xx statuses and malformed result documents.
    async fn sparql_select(&self, endpoint: &str, query: &str) -> Result<Vec<Bindings>, FetchError>;
}

/// [`FetchService`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetchService {
    client: Client,
}

impl HttpFetchService {
    /// Builds the client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend cannot be initialised
    /// or a header value is invalid.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        if let Some(language) = &config.accept_language {
            let value = language
                .parse()
                .map_err(|_| ConfigError::HttpClient(format!("invalid Accept-Language {language}")))?;
            headers.insert(ACCEPT_LANGUAGE, value);
        }
        let user_agent = config
            .user_agent
            .parse()
            .map_err(|_| ConfigError::HttpClient(format!("invalid User-Agent {}", config.user_agent)))?;
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    /// Sends a SPARQL protocol GET and returns the body of a 2xx response.
    async fn sparql_request(&self, endpoint: &str, query: &str, accept: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(endpoint)
            .query(&[("query", query)])
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| network(endpoint, &e))?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(FetchError::SparqlStatus {
                endpoint: endpoint.to_string(),
                status,
            });
        }
        response.text().await.map_err(|e| network(endpoint, &e))
    }
}

fn network(url: &str, e: &reqwest::Error) -> FetchError {
    FetchError::Network {
        url: url.to_string(),
        message: e.to_string(),
    }
}

fn sparql_response(endpoint: &str, message: impl Into<String>) -> FetchError {
    FetchError::SparqlResponse {
        endpoint: endpoint.to_string(),
        message: message.into(),
    }
}

#[async_trait]
impl FetchService for HttpFetchService {
    async fn http_get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, DOCUMENT_ACCEPT)
            .send()
            .await
            .map_err(|e| network(url, &e))?;
        let status = response.status().as_u16();
        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_ascii_lowercase())
                    .or_insert_with(|| value.to_string());
            }
        }
        debug!(url, status, content_type = ?headers.get(CONTENT_TYPE.as_str()), "GET");
        let body = response.text().await.map_err(|e| network(url, &e))?;
        Ok(HttpResponse { status, headers, body })
    }

    async fn sparql_ask(&self, endpoint: &str, query: &str) -> Result<bool, FetchError> {
        let body = self.sparql_request(endpoint, query, SPARQL_RESULTS_ACCEPT).await?;
        parse_ask_result(&body).map_err(|m| sparql_response(endpoint, m))
    }

    async fn sparql_construct(&self, endpoint: &str, query: &str) -> Result<Triples, FetchError> {
        let body = self.sparql_request(endpoint, query, SPARQL_GRAPH_ACCEPT).await?;
        parse_turtle(&body, None).map_err(|e| sparql_response(endpoint, e.to_string()))
    }

    async fn sparql_select(&self, endpoint: &str, query: &str) -> Result<Vec<Bindings>, FetchError> {
        let body = self.sparql_request(endpoint, query, SPARQL_RESULTS_ACCEPT).await?;
        parse_select_results(&body).map_err(|m| sparql_response(endpoint, m))
    }
}

/// Decodes an `ASK` result in the SPARQL 1.1 JSON results format.
///
/// # Errors
///
/// Returns a message when the body is not JSON or has no boolean `boolean` member.
pub fn parse_ask_result(body: &str) -> Result<bool, String> {
    let document: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    document
        .get("boolean")
        .and_then(Value::as_bool)
        .ok_or_else(|| "missing boolean result".to_string())
}

/// Decodes a `SELECT` result in the SPARQL 1.1 JSON results format.
///
/// # Errors
///
/// Returns a message when `results.bindings` is missing or a term is malformed.
pub fn parse_select_results(body: &str) -> Result<Vec<Bindings>, String> {
    let document: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;
    let rows = document
        .pointer("/results/bindings")
        .and_then(Value::as_array)
        .ok_or_else(|| "missing results.bindings".to_string())?;
    let mut solutions = Vec::with_capacity(rows.len());
    for row in rows {
        let row = row
            .as_object()
            .ok_or_else(|| "binding is not an object".to_string())?;
        let mut bindings = Bindings::new();
        for (name, term) in row {
            bindings.insert(name.clone(), select_term(term)?);
        }
        solutions.push(bindings);
    }
    Ok(solutions)
}

fn select_term(term: &Value) -> Result<Object, String> {
    let value = term
        .get("value")
        .and_then(Value::as_str)
        .ok_or_else(|| "term without value".to_string())?;
    match term.get("type").and_then(Value::as_str) {
        Some("uri") => Ok(Object::iri(value)),
        Some("bnode") => Ok(Object::Resource(Resource::blank(value))),
        Some("literal" | "typed-literal") => {
            if let Some(language) = term.get("xml:lang").and_then(Value::as_str) {
                Ok(Literal::lang(value, language).into())
            } else if let Some(datatype) = term.get("datatype").and_then(Value::as_str) {
                Ok(Literal::typed(value, datatype).into())
            } else {
                Ok(Literal::plain(value).into())
            }
        }
        other => Err(format!("unknown term type {other:?}")),
    }
}
