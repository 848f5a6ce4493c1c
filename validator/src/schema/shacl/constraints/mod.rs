//! SHACL constraint types and validators.
//!
//! Supported components: `sh:minCount`, `sh:maxCount`, `sh:nodeKind`,
//! `sh:datatype`, `sh:uniqueLang` and `sh:pattern` with `sh:flags`.

pub mod cardinality;
pub mod pattern;
pub mod value;

use dcat_model::Object;

use super::compile::NodeKind;
use crate::error::ShaclError;

use super::SH;

/// A constraint on the value nodes of a property shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// sh:minCount
    MinCount(usize),
    /// sh:maxCount
    MaxCount(usize),
    /// sh:nodeKind
    NodeKind(NodeKind),
    /// sh:datatype
    Datatype(String),
    /// sh:uniqueLang
    UniqueLang(bool),
    /// sh:pattern with optional sh:flags
    Pattern(String, Option<String>),
}

impl Constraint {
    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Constraint::MinCount(n) => format!("sh:minCount {n}"),
            Constraint::MaxCount(n) => format!("sh:maxCount {n}"),
            Constraint::NodeKind(kind) => format!("sh:nodeKind {kind:?}"),
            Constraint::Datatype(datatype) => format!("sh:datatype <{datatype}>"),
            Constraint::UniqueLang(unique) => format!("sh:uniqueLang {unique}"),
            Constraint::Pattern(pattern, _) => format!("sh:pattern \"{pattern}\""),
        }
    }

    /// IRI of the SHACL constraint component.
    #[must_use]
    pub fn component(&self) -> String {
        let local = match self {
            Constraint::MinCount(_) => "MinCountConstraintComponent",
            Constraint::MaxCount(_) => "MaxCountConstraintComponent",
            Constraint::NodeKind(_) => "NodeKindConstraintComponent",
            Constraint::Datatype(_) => "DatatypeConstraintComponent",
            Constraint::UniqueLang(_) => "UniqueLangConstraintComponent",
            Constraint::Pattern(..) => "PatternConstraintComponent",
        };
        format!("{SH}{local}")
    }

    /// Checks the value nodes of one focus node.
    ///
    /// # Errors
    ///
    /// Returns [`ShaclError::InvalidPattern`] when a pattern does not compile.
    pub fn check(&self, values: &[Object]) -> Result<Vec<ConstraintViolation>, ShaclError> {
        Ok(match self {
            Constraint::MinCount(min) => cardinality::validate_min_count(values, *min).into_iter().collect(),
            Constraint::MaxCount(max) => cardinality::validate_max_count(values, *max).into_iter().collect(),
            Constraint::NodeKind(kind) => values
                .iter()
                .filter_map(|v| value::validate_node_kind(v, *kind))
                .collect(),
            Constraint::Datatype(datatype) => values
                .iter()
                .filter_map(|v| value::validate_datatype(v, datatype))
                .collect(),
            Constraint::UniqueLang(true) => value::validate_unique_lang(values),
            Constraint::UniqueLang(false) => Vec::new(),
            Constraint::Pattern(source, flags) => {
                let regex = pattern::build_regex(source, flags.as_deref())?;
                values
                    .iter()
                    .filter_map(|v| pattern::validate_pattern(v, &regex, self))
                    .collect()
            }
        })
    }
}

/// One failed constraint check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// The violated constraint.
    pub constraint: Constraint,
    /// The offending value node, when the violation is about one value.
    pub value: Option<Object>,
    /// What went wrong.
    pub message: String,
}
