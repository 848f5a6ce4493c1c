//! DCAT-AP-CZ data model.
//!
//! The `dcat-model` crate holds the pure data side of the catalog validator:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`model`] | RDF triples: [`Resource`], [`Object`], [`Literal`], [`Triple`], [`Triples`] |
//! | [`index`] | [`TripleIndex`], a (subject, predicate) and `rdf:type` lookup |
//! | [`vocabulary`] | IRIs of the DCAT, Dublin Core, DCAT-AP and FOAF terms in use |
//! | [`codelist`] | Controlled-vocabulary membership predicates |
//! | [`entity`] | Typed [`Catalog`], [`Dataset`], [`Distribution`] entities |
//! | [`serializer`] | N-Triples output |
//!
//! # Entry Point
//!
//! ```
//! use dcat_model::{Literal, Object, Resource, Triple, TripleIndex, Triples};
//! use dcat_model::vocabulary::{dcat, dcterms, rdf};
//!
//! let catalog = Resource::iri("https://data.example/catalog");
//! let triples: Triples = vec![
//!     Triple::new(catalog.clone(), rdf::TYPE, Object::iri(dcat::CATALOG)),
//!     Triple::new(catalog.clone(), dcterms::HAS_TITLE, Literal::lang("Katalog", "cs")),
//! ]
//! .into();
//! let index = TripleIndex::new(&triples);
//! assert_eq!(index.subjects_of_type(dcat::CATALOG).len(), 1);
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::missing_errors_doc)]
#![warn(missing_docs)]

pub mod codelist;
pub mod entity;
pub mod index;
pub mod model;
pub mod serializer;
pub mod vocabulary;

pub use entity::{
    has_czech, is_czech_tag, Catalog, DataService, Dataset, Distribution, DistributionKind,
    FileDistribution, HighValue, LangString, LanguageMap,
};
pub use index::TripleIndex;
pub use model::{Literal, Object, Resource, Triple, Triples, RDF_LANG_STRING, XSD_STRING};
