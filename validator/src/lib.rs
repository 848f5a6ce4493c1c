//! DCAT-AP-CZ catalog validator.
//!
//! This crate validates a published open-data catalog against the Czech
//! national DCAT application profile. It fetches the catalog, decides how to
//! read it, checks the catalog and every dataset it lists, and produces one
//! severity-ranked [`Report`].
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Content negotiation | [`negotiate`] | SPARQL, Turtle or JSON-LD |
//! | Loading | [`loader`] | triples, plus the JSON document for JSON-LD |
//! | Side checks | [`entry`], [`schema`] | JSON Schema and SHACL conformance |
//! | Extraction | [`extract`] | typed catalogs, datasets, distributions |
//! | Rules | [`validators`] | issues per entity |
//! | Aggregation | [`aggregate`] | rolled-up levels, summary lists and counts |
//! | Orchestration | [`pipeline`], [`service`] | runs, progress, staleness |
//!
//! # Entry Point
//!
//! ```no_run
//! use dcat_validator::{CatalogValidator, TracingProgress, ValidatorConfig};
//!
//! # async fn run() -> Result<(), dcat_validator::error::ValidatorError> {
//! let validator = CatalogValidator::from_config(ValidatorConfig::default())?;
//! let report = validator
//!     .validate_catalog("https://data.example/katalog", &TracingProgress)
//!     .await;
//! println!("{}", report.level.as_str());
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod aggregate;
pub mod config;
pub mod entry;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod loader;
pub mod negotiate;
pub mod pipeline;
pub mod progress;
pub mod report;
pub mod schema;
pub mod service;
pub mod tests;
pub mod validators;

pub use config::ValidatorConfig;
pub use error::ValidatorError;
pub use fetch::{FetchService, HttpFetchService, HttpResponse};
pub use pipeline::CatalogValidator;
pub use progress::{NoProgress, ProgressSink, Status, TracingProgress};
pub use report::{ContentType, Issue, Level, LoadingFailure, LoadingFailureDetails, Report};
pub use schema::SchemaRegistry;
pub use service::{Snapshot, ValidationService};
