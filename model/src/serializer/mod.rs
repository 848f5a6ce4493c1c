//! Serializers for loaded triples.
//!
//! - **N-Triples** ([`ntriples`]): one statement per line, absolute IRIs. Used for
//!   diagnostics and for SPARQL `CONSTRUCT` test fixtures.

pub mod ntriples;
