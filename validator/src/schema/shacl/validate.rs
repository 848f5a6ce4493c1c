//! Shape evaluation.

use dcat_model::{Object, Resource, TripleIndex, Triples};
use tracing::debug;

use super::compile::{CompiledShape, Path, PropertyShape, Severity, TargetType};
use crate::error::ShaclError;

/// SHACL validation report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Whether all shapes conform (no Violation-level results)
    pub conforms: bool,
    /// Individual validation results
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    /// Create an empty conforming report
    #[must_use]
    pub fn conforming() -> Self {
        Self {
            conforms: true,
            results: Vec::new(),
        }
    }

    /// Count violations (Severity::Violation results)
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == Severity::Violation)
            .count()
    }
}

/// Individual validation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The focus node that was validated
    pub focus_node: Resource,
    /// The predicate of the property path
    pub result_path: String,
    /// The property shape that produced this result
    pub source_shape: Resource,
    /// IRI of the constraint component
    pub source_constraint: String,
    /// Severity level
    pub severity: Severity,
    /// sh:message of the shape, else the constraint's own message
    pub message: String,
    /// The value that caused the violation (if applicable)
    pub value: Option<Object>,
}

/// Evaluates `shapes` against `triples`.
///
/// # Errors
///
/// Returns [`ShaclError::InvalidPattern`] when a pattern fails to compile.
pub fn validate(shapes: &[CompiledShape], triples: &Triples) -> Result<ValidationReport, ShaclError> {
    let index = TripleIndex::new(triples);
    let mut report = ValidationReport::conforming();
    for shape in shapes {
        for focus in focus_nodes(&index, shape) {
            for property in &shape.properties {
                let values = value_nodes(&index, triples, &focus, &property.path);
                check_property(property, &focus, &values, &mut report.results)?;
            }
        }
    }
    report.conforms = report.violation_count() == 0;
    debug!(
        shapes = shapes.len(),
        results = report.results.len(),
        conforms = report.conforms,
        "SHACL validation"
    );
    Ok(report)
}

fn focus_nodes(index: &TripleIndex<'_>, shape: &CompiledShape) -> Vec<Resource> {
    let mut nodes: Vec<Resource> = Vec::new();
    for target in &shape.targets {
        let selected: Vec<Resource> = match target {
            TargetType::Class(class) => index.subjects_of_type(class).iter().map(|r| (*r).clone()).collect(),
            TargetType::Node(node) => vec![node.clone()],
        };
        for node in selected {
            if !nodes.contains(&node) {
                nodes.push(node);
            }
        }
    }
    nodes
}

fn value_nodes(index: &TripleIndex<'_>, triples: &Triples, focus: &Resource, path: &Path) -> Vec<Object> {
    match path {
        Path::Predicate(predicate) => index
            .objects(focus, predicate)
            .iter()
            .map(|o| (*o).clone())
            .collect(),
        Path::Inverse(predicate) => triples
            .iter()
            .filter(|t| &t.predicate == predicate && t.object.as_resource() == Some(focus))
            .map(|t| Object::Resource(t.subject.clone()))
            .collect(),
    }
}

fn check_property(
    property: &PropertyShape,
    focus: &Resource,
    values: &[Object],
    results: &mut Vec<ValidationResult>,
) -> Result<(), ShaclError> {
    for constraint in &property.constraints {
        for violation in constraint.check(values)? {
            results.push(ValidationResult {
                focus_node: focus.clone(),
                result_path: property.path.predicate().to_string(),
                source_shape: property.id.clone(),
                source_constraint: constraint.component(),
                severity: property.severity,
                message: property.message.clone().unwrap_or(violation.message),
                value: violation.value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::loader::turtle::parse_turtle;
    use crate::schema::shacl::compile_shapes;
    use crate::tests::fixtures;

    const SHAPES: &str = include_str!("../../../shapes/catalog.ttl");

    fn run(data: &str) -> ValidationReport {
        let shapes = compile_shapes(SHAPES).unwrap();
        let triples = parse_turtle(data, None).unwrap();
        validate(&shapes, &triples).unwrap()
    }

    #[test]
    fn complete_catalog_conforms() {
        let report = run(fixtures::CATALOG_TTL);
        assert!(report.conforms, "{:?}", report.results);
    }

    #[test]
    fn missing_description_and_datasets_violate() {
        let report = run(fixtures::CATALOG_INVALID_TTL);
        assert!(!report.conforms);
        let messages: Vec<&str> = report.results.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Katalog musí mít popis v češtině", "Katalog musí mít datovou sadu"]
        );
    }

    #[test]
    fn document_without_catalog_violates_existence() {
        let report = run(fixtures::DATASET_TTL);
        assert_eq!(report.violation_count(), 1);
        assert_eq!(
            report.results[0].focus_node,
            Resource::iri("http://www.w3.org/ns/dcat#Catalog")
        );
    }

    #[test]
    fn repeated_language_violates_unique_lang() {
        let report = run(
            r#"@prefix dcat: <http://www.w3.org/ns/dcat#> .
               @prefix dcterms: <http://purl.org/dc/terms/> .
               <https://data.example/k> a dcat:Catalog ;
                   dcterms:title "A"@cs, "B"@cs ;
                   dcterms:description "Popis"@cs ;
                   dcterms:publisher <https://data.example/p> ;
                   dcat:dataset <https://data.example/d> ."#,
        );
        assert_eq!(report.results.len(), 1);
        assert!(report.results[0].source_constraint.ends_with("UniqueLangConstraintComponent"));
    }
}
