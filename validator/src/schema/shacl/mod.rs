//! A small SHACL Core engine for the shapes graphs bundled with the validator.
//!
//! Shapes are compiled once ([`compile::compile_shapes`]) and evaluated
//! against a loaded resource ([`validate::validate`]). Targets are
//! `sh:targetClass` and `sh:targetNode`; paths are predicates and inverse
//! predicates; the supported constraints are listed in [`constraints`].

pub mod compile;
pub mod constraints;
pub mod validate;

pub use compile::{compile_shapes, CompiledShape, NodeKind, Path, PropertyShape, Severity, TargetType};
pub use constraints::{Constraint, ConstraintViolation};
pub use validate::{validate, ValidationReport, ValidationResult};

/// SHACL namespace.
pub const SH: &str = "http://www.w3.org/ns/shacl#";
