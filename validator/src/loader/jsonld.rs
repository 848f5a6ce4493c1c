//! JSON-LD loading on top of `sophia_jsonld`.
//!
//! Conversion runs in two phases. [`collect_remote_contexts`] walks the
//! document and downloads every referenced remote context through the
//! [`FetchService`], following references inside the downloaded contexts.
//! [`inline_contexts`] then replaces each reference with the context it
//! names, and the JSON-LD processor runs on a self-contained document without
//! a document loader.
//!
//! Downloaded contexts are kept in a [`ContextCache`] for the duration of one
//! validation run.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dcat_model::{Triple, Triples};
use reqwest::Url;
use serde_json::Value;
use sophia_api::iri::Iri;
use sophia_api::prelude::*;
use sophia_api::source::StreamError;
use sophia_jsonld::{JsonLdOptions, JsonLdParser};
use tracing::debug;

use super::terms;
use crate::error::{JsonLdError, LoadError};
use crate::fetch::FetchService;

/// Remote context references followed from a document before giving up.
pub const MAX_CONTEXT_DEPTH: usize = 8;

/// Context documents by absolute URL.
pub type RemoteContexts = HashMap<String, Value>;

/// Remote context documents shared by all loads of one validation run.
#[derive(Debug, Default)]
pub struct ContextCache {
    documents: Mutex<RemoteContexts>,
}

impl ContextCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RemoteContexts> {
        self.documents.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of cached contexts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Converts a parsed JSON-LD document located at `url` to triples.
///
/// # Errors
///
/// Returns [`LoadError::JsonLd`] when the document is not an object or array,
/// when a remote context cannot be fetched, or when the JSON-LD processor
/// rejects the document, and [`LoadError::UnsupportedTerm`] for terms the
/// triple model cannot hold.
pub async fn to_triples(
    fetch: &dyn FetchService,
    document: &Value,
    url: &str,
    cache: &ContextCache,
) -> Result<Triples, LoadError> {
    if !matches!(document, Value::Object(_) | Value::Array(_)) {
        return Err(JsonLdError::InvalidDocument.into());
    }
    let remote = collect_remote_contexts(fetch, document, url, cache).await?;
    let mut document = document.clone();
    inline_contexts(&mut document, url, &remote, 0)?;
    parse_document(&document, url)
}

/// Downloads every remote context reachable from `document`. References in
/// the document resolve against `url`; references in a downloaded context
/// resolve against that context's URL.
///
/// # Errors
///
/// Returns [`JsonLdError::RemoteContext`] when a context cannot be fetched
/// or is not JSON, and [`JsonLdError::ContextRecursion`] when references nest
/// deeper than [`MAX_CONTEXT_DEPTH`].
pub async fn collect_remote_contexts(
    fetch: &dyn FetchService,
    document: &Value,
    url: &str,
    cache: &ContextCache,
) -> Result<RemoteContexts, JsonLdError> {
    let mut remote = RemoteContexts::new();
    let mut pending = Vec::new();
    context_references(document, url, &mut pending);

    let mut depth = 0;
    while !pending.is_empty() {
        if depth >= MAX_CONTEXT_DEPTH {
            return Err(JsonLdError::ContextRecursion(pending.remove(0)));
        }
        let mut next = Vec::new();
        for reference in pending {
            if remote.contains_key(&reference) {
                continue;
            }
            let cached = cache.lock().get(&reference).cloned();
            let context = match cached {
                Some(context) => context,
                None => {
                    let context = fetch_context(fetch, &reference).await?;
                    cache.lock().insert(reference.clone(), context.clone());
                    context
                }
            };
            context_references(&context, &reference, &mut next);
            remote.insert(reference, context);
        }
        pending = next;
        depth += 1;
    }
    Ok(remote)
}

async fn fetch_context(fetch: &dyn FetchService, url: &str) -> Result<Value, JsonLdError> {
    debug!(url, "fetching remote JSON-LD context");
    let remote_error = |message: String| JsonLdError::RemoteContext {
        url: url.to_string(),
        message,
    };
    let response = fetch.http_get(url).await.map_err(|e| remote_error(e.to_string()))?;
    if !response.is_success() {
        return Err(remote_error(format!("HTTP {}", response.status)));
    }
    serde_json::from_str(&response.body).map_err(|e| remote_error(e.to_string()))
}

/// Replaces every remote reference under an `@context` key of `value` with
/// the context it names. Arrays of contexts stay flat, and `@base` of a
/// remote context is dropped.
///
/// # Errors
///
/// Returns [`JsonLdError::RemoteContext`] for a reference missing from
/// `remote`, [`JsonLdError::InvalidContext`] for malformed contexts, and
/// [`JsonLdError::ContextRecursion`] for reference cycles.
pub fn inline_contexts(
    value: &mut Value,
    base: &str,
    remote: &RemoteContexts,
    depth: usize,
) -> Result<(), JsonLdError> {
    match value {
        Value::Object(map) => {
            for (key, inner) in map.iter_mut() {
                if key == "@context" {
                    let inlined = inline_context(inner, base, remote, depth)?;
                    *inner = inlined;
                } else {
                    inline_contexts(inner, base, remote, depth)?;
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                inline_contexts(item, base, remote, depth)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn inline_context(
    context: &Value,
    base: &str,
    remote: &RemoteContexts,
    depth: usize,
) -> Result<Value, JsonLdError> {
    match context {
        Value::String(reference) => {
            let url = resolve(base, reference);
            if depth >= MAX_CONTEXT_DEPTH {
                return Err(JsonLdError::ContextRecursion(url));
            }
            let document = remote.get(&url).ok_or_else(|| JsonLdError::RemoteContext {
                url: url.clone(),
                message: "not loaded".to_string(),
            })?;
            let inner = document
                .get("@context")
                .ok_or_else(|| JsonLdError::InvalidContext(format!("{url} has no @context")))?;
            let mut inlined = inline_context(inner, &url, remote, depth + 1)?;
            drop_base(&mut inlined);
            Ok(inlined)
        }
        Value::Array(items) => {
            let mut flat = Vec::with_capacity(items.len());
            for item in items {
                match inline_context(item, base, remote, depth)? {
                    Value::Array(inner) => flat.extend(inner),
                    other => flat.push(other),
                }
            }
            Ok(Value::Array(flat))
        }
        Value::Object(_) => {
            // Term definitions may carry scoped contexts of their own.
            let mut inlined = context.clone();
            inline_contexts(&mut inlined, base, remote, depth)?;
            Ok(inlined)
        }
        Value::Null => Ok(Value::Null),
        other => Err(JsonLdError::InvalidContext(other.to_string())),
    }
}

fn drop_base(context: &mut Value) {
    match context {
        Value::Object(map) => {
            map.remove("@base");
        }
        Value::Array(items) => items.iter_mut().for_each(drop_base),
        _ => {}
    }
}

/// Runs the JSON-LD processor on a document whose contexts are all inline.
/// Relative IRIs resolve against `base`.
///
/// # Errors
///
/// Returns [`LoadError::JsonLd`] when the processor rejects the document and
/// [`LoadError::UnsupportedTerm`] for terms the triple model cannot hold.
pub fn parse_document(document: &Value, base: &str) -> Result<Triples, LoadError> {
    let mut options = JsonLdOptions::new();
    if let Ok(base) = Iri::new(Arc::<str>::from(base)) {
        options = options.with_base(base);
    }
    let text = document.to_string();
    let mut triples = Triples::new();
    JsonLdParser::new_with_options(options)
        .parse_str(&text)
        .try_for_each_quad(|q| -> Result<(), LoadError> {
            let graph = match q.g() {
                Some(graph) => Some(terms::resource(graph)?),
                None => None,
            };
            triples.push(
                Triple::new(
                    terms::resource(q.s())?,
                    terms::predicate(q.p())?,
                    terms::object(q.o())?,
                )
                .in_graph(graph),
            );
            Ok(())
        })
        .map_err(|e| match e {
            StreamError::SourceError(e) => JsonLdError::Conversion(e.to_string()).into(),
            StreamError::SinkError(e) => e,
        })?;
    Ok(triples)
}

/// Appends the absolute URL of every remote reference under an `@context`
/// key of `value`.
fn context_references(value: &Value, base: &str, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                context_references(item, base, out);
            }
        }
        Value::Object(map) => {
            for (key, inner) in map {
                if key == "@context" {
                    context_strings(inner, base, out);
                }
                context_references(inner, base, out);
            }
        }
        _ => {}
    }
}

fn context_strings(value: &Value, base: &str, out: &mut Vec<String>) {
    match value {
        Value::String(reference) => {
            let url = resolve(base, reference);
            if !out.contains(&url) {
                out.push(url);
            }
        }
        Value::Array(items) => {
            for item in items {
                context_strings(item, base, out);
            }
        }
        _ => {}
    }
}

/// Resolves a context reference. Absolute references are kept verbatim.
fn resolve(base: &str, reference: &str) -> String {
    if Url::parse(reference).is_ok() {
        return reference.to_string();
    }
    Url::parse(base)
        .and_then(|base| base.join(reference))
        .map_or_else(|_| reference.to_string(), |url| url.to_string())
}
