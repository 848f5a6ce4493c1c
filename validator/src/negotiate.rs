//! Content negotiation: decides how a URL is to be loaded.
//!
//! Strategies run in a fixed order and the first one that succeeds wins:
//! 1. `ASK {?s ?p ?o}` against the URL as a SPARQL endpoint
//! 2. the media type of the `Content-Type` header of a plain GET
//! 3. the extension of the URL path
//!
//! The GET response is kept in the [`Negotiation`] and reused by the loader.

use tracing::debug;

use crate::fetch::{FetchService, HttpResponse};
use crate::report::ContentType;

/// Probe query for SPARQL endpoints.
pub const SPARQL_PROBE: &str = "ASK {?s ?p ?o}";

/// Outcome of content negotiation, with the evidence collected on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Negotiation {
    /// URL that was negotiated.
    pub url: String,
    /// Content type from the probe or the header. `None` when neither decided.
    pub content_type: Option<ContentType>,
    /// Content type guessed from the URL suffix; recorded even when unused.
    pub content_type_from_url: Option<ContentType>,
    /// Raw `Content-Type` header of the GET.
    pub content_type_header: Option<String>,
    /// Status of the GET, `None` when it was not sent or failed on the network.
    pub status: Option<u16>,
    /// The GET response, reused as the document fetch.
    pub response: Option<HttpResponse>,
}

impl Negotiation {
    /// The content type to load with: detected, else guessed from the suffix.
    #[must_use]
    pub fn effective(&self) -> Option<ContentType> {
        self.content_type.or(self.content_type_from_url)
    }

    /// True when only the URL suffix decided the content type.
    #[must_use]
    pub fn is_from_extension(&self) -> bool {
        self.content_type.is_none() && self.content_type_from_url.is_some()
    }

    /// A negotiation result forced to SPARQL, for datasets of a SPARQL catalog.
    pub fn sparql(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content_type: Some(ContentType::Sparql),
            ..Self::default()
        }
    }
}

/// Negotiates `url`. The SPARQL probe is skipped unless `allow_sparql`.
pub async fn negotiate(fetch: &dyn FetchService, url: &str, allow_sparql: bool) -> Negotiation {
    let mut negotiation = Negotiation {
        url: url.to_string(),
        content_type_from_url: content_type_from_url(url),
        ..Negotiation::default()
    };

    if allow_sparql {
        match fetch.sparql_ask(url, SPARQL_PROBE).await {
            Ok(_) => {
                debug!(url, "SPARQL probe succeeded");
                negotiation.content_type = Some(ContentType::Sparql);
                return negotiation;
            }
            Err(error) => debug!(url, %error, "SPARQL probe failed"),
        }
    }

    match fetch.http_get(url).await {
        Ok(response) => {
            negotiation.status = Some(response.status);
            negotiation.content_type_header = response.content_type().map(str::to_string);
            negotiation.content_type = response.content_type().and_then(content_type_from_header);
            negotiation.response = Some(response);
        }
        Err(error) => debug!(url, %error, "GET failed during negotiation"),
    }

    debug!(
        url,
        content_type = ?negotiation.content_type,
        from_url = ?negotiation.content_type_from_url,
        "negotiated"
    );
    negotiation
}

/// Maps a `Content-Type` header value to a content type. Parameters are
/// ignored and the comparison is case-insensitive.
#[must_use]
pub fn content_type_from_header(header: &str) -> Option<ContentType> {
    let media_type = header.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match media_type.as_str() {
        "text/turtle" | "application/n-triples" => Some(ContentType::Turtle),
        "application/json" | "application/ld+json" => Some(ContentType::Jsonld),
        _ => None,
    }
}

/// Maps the extension of the URL path to a content type. Query and fragment
/// are ignored.
#[must_use]
pub fn content_type_from_url(url: &str) -> Option<ContentType> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    let (_, extension) = last_segment.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "ttl" | "nt" => Some(ContentType::Turtle),
        "json" | "jsonld" => Some(ContentType::Jsonld),
        _ => None,
    }
}
