//! Catalog and dataset documents used by the tests.
//!
//! Each constant holds one published resource. The Turtle and JSON-LD
//! variants of the catalog describe the same graph.

mod catalog;
mod dataset;
mod jsonld;

pub use catalog::{CATALOG_INVALID_TTL, CATALOG_TTL, CATALOG_TWO_DATASETS_TTL};
pub use dataset::{DATASET_SERIES_TTL, DATASET_TTL, HVD_DATASET_TTL, INCOMPLETE_DATASET_TTL};
pub use jsonld::{
    CATALOG_CONTEXT, CATALOG_JSONLD, CATALOG_JSONLD_REMOTE, CATALOG_JSONLD_SCOPED, DATASET_JSONLD,
};

/// IRI of the catalog in the catalog fixtures.
pub const CATALOG_IRI: &str = "https://data.example/katalog";
/// IRI of the dataset listed by [`CATALOG_TTL`].
pub const DATASET_IRI: &str = "https://data.example/sady/1";
/// Second dataset listed by [`CATALOG_TWO_DATASETS_TTL`].
pub const SECOND_DATASET_IRI: &str = "https://data.example/sady/2";
/// URL the remote context of [`CATALOG_JSONLD_REMOTE`] is served from.
pub const CONTEXT_URL: &str = "https://data.example/kontext.jsonld";
