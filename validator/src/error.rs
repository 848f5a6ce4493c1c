//! Error types of the validation pipeline.
//!
//! None of these reach the caller of [`crate::CatalogValidator::validate_catalog`]:
//! fetch and load failures become CRITICAL issues on the affected resource, and
//! anything else is caught at the pipeline boundary.

use thiserror::Error;

/// Failure of a network operation. A non-2xx status is not an error; it is
/// carried in [`crate::fetch::HttpResponse::status`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body transfer failure.
    #[error("Network error for {url}: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying cause.
        message: String,
    },

    /// A SPARQL endpoint answered with a non-2xx status.
    #[error("SPARQL endpoint {endpoint} answered with HTTP {status}")]
    SparqlStatus {
        /// Endpoint URL.
        endpoint: String,
        /// Response status.
        status: u16,
    },

    /// The SPARQL response could not be decoded.
    #[error("Invalid SPARQL response from {endpoint}: {message}")]
    SparqlResponse {
        /// Endpoint URL.
        endpoint: String,
        /// Decoding failure.
        message: String,
    },
}

/// Failure to turn a fetched document into triples.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Turtle syntax error.
    #[error("Turtle parse error: {0}")]
    Turtle(String),

    /// JSON-LD error.
    #[error(transparent)]
    JsonLd(#[from] JsonLdError),

    /// A term could not be represented in the triple model.
    #[error("Unsupported RDF term: {0}")]
    UnsupportedTerm(String),
}

/// JSON-LD context resolution and conversion errors.
#[derive(Debug, Error)]
pub enum JsonLdError {
    /// A context value is not a string, object, array or null, or a remote
    /// context document has no `@context`.
    #[error("Invalid @context: {0}")]
    InvalidContext(String),

    /// A remote context could not be dereferenced.
    #[error("Failed to load remote context {url}: {message}")]
    RemoteContext {
        /// Context URL.
        url: String,
        /// Cause.
        message: String,
    },

    /// Remote contexts nest deeper than allowed.
    #[error("Context recursion limit exceeded at {0}")]
    ContextRecursion(String),

    /// The document root is not an object or array.
    #[error("JSON-LD document must be an object or an array")]
    InvalidDocument,

    /// The JSON-LD processor rejected the document.
    #[error("JSON-LD conversion failed: {0}")]
    Conversion(String),
}

/// Errors of the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A JSON Schema document has no `$id`.
    #[error("JSON Schema without $id")]
    MissingId,

    /// A JSON Schema document failed to compile.
    #[error("Invalid JSON Schema {id}: {message}")]
    InvalidSchema {
        /// Schema id.
        id: String,
        /// Compilation failure.
        message: String,
    },

    /// Validation was requested against an unknown schema or shapes graph.
    #[error("Unknown schema {0}")]
    UnknownSchema(String),

    /// Bundled schema text is not JSON.
    #[error("Bundled schema is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A shapes graph failed to load.
    #[error(transparent)]
    Shacl(#[from] ShaclError),
}

/// SHACL shape loading and evaluation errors.
#[derive(Debug, Error)]
pub enum ShaclError {
    /// The shapes graph is not valid Turtle.
    #[error("Failed to parse shapes graph: {0}")]
    Parse(String),

    /// A constraint has a value the engine cannot use.
    #[error("Invalid constraint on shape {shape}: {message}")]
    InvalidConstraint {
        /// Shape identifier.
        shape: String,
        /// What was wrong.
        message: String,
    },

    /// Invalid regex pattern in `sh:pattern`.
    #[error("Invalid regex pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern.
        pattern: String,
        /// Regex compilation failure.
        message: String,
    },
}

/// Invalid validator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::ValidatorConfig`].
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: &'static str,
        /// Constraint that was violated.
        message: String,
    },

    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

/// Failure to set up a [`crate::CatalogValidator`].
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Invalid configuration or HTTP client.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The bundled schemas or shapes failed to load.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
