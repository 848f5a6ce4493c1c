//! Shape compilation from a Turtle shapes graph.

use dcat_model::{Object, Resource, TripleIndex, Triples};

use super::constraints::{pattern, Constraint};
use super::SH;
use crate::error::ShaclError;
use crate::loader::turtle::parse_turtle;

/// How a shape selects its focus nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    /// sh:targetClass - all instances of the class
    Class(String),
    /// sh:targetNode - the node itself, whether or not it occurs in the data
    Node(Resource),
}

/// Severity of results produced by a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// sh:Violation
    #[default]
    Violation,
    /// sh:Warning
    Warning,
    /// sh:Info
    Info,
}

/// sh:nodeKind values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// sh:BlankNode
    BlankNode,
    /// sh:IRI
    Iri,
    /// sh:Literal
    Literal,
    /// sh:BlankNodeOrIRI
    BlankNodeOrIri,
    /// sh:BlankNodeOrLiteral
    BlankNodeOrLiteral,
    /// sh:IRIOrLiteral
    IriOrLiteral,
}

impl NodeKind {
    fn from_iri(iri: &str) -> Option<Self> {
        Some(match iri.strip_prefix(SH)? {
            "BlankNode" => NodeKind::BlankNode,
            "IRI" => NodeKind::Iri,
            "Literal" => NodeKind::Literal,
            "BlankNodeOrIRI" => NodeKind::BlankNodeOrIri,
            "BlankNodeOrLiteral" => NodeKind::BlankNodeOrLiteral,
            "IRIOrLiteral" => NodeKind::IriOrLiteral,
            _ => return None,
        })
    }

    /// True when IRIs satisfy this kind.
    #[must_use]
    pub fn allows_iri(self) -> bool {
        matches!(self, NodeKind::Iri | NodeKind::BlankNodeOrIri | NodeKind::IriOrLiteral)
    }

    /// True when blank nodes satisfy this kind.
    #[must_use]
    pub fn allows_blank_node(self) -> bool {
        matches!(
            self,
            NodeKind::BlankNode | NodeKind::BlankNodeOrIri | NodeKind::BlankNodeOrLiteral
        )
    }

    /// True when literals satisfy this kind.
    #[must_use]
    pub fn allows_literal(self) -> bool {
        matches!(
            self,
            NodeKind::Literal | NodeKind::BlankNodeOrLiteral | NodeKind::IriOrLiteral
        )
    }
}

/// A property path: a predicate or the inverse of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    /// `sh:path ex:p`
    Predicate(String),
    /// `sh:path [ sh:inversePath ex:p ]`
    Inverse(String),
}

impl Path {
    /// The predicate IRI the path walks.
    #[must_use]
    pub fn predicate(&self) -> &str {
        match self {
            Path::Predicate(p) | Path::Inverse(p) => p,
        }
    }
}

/// A compiled property shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyShape {
    /// The shape node (usually blank)
    pub id: Resource,
    /// The property path
    pub path: Path,
    /// Constraints on the value nodes
    pub constraints: Vec<Constraint>,
    /// Severity of violations
    pub severity: Severity,
    /// sh:message, if any
    pub message: Option<String>,
}

/// A compiled node shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledShape {
    /// The shape IRI
    pub id: Resource,
    /// Focus node selectors
    pub targets: Vec<TargetType>,
    /// Property shapes
    pub properties: Vec<PropertyShape>,
}

/// Parses and compiles every `sh:NodeShape` of a Turtle shapes graph.
///
/// # Errors
///
/// Returns [`ShaclError::Parse`] for invalid Turtle and
/// [`ShaclError::InvalidConstraint`] / [`ShaclError::InvalidPattern`] for
/// constraint values the engine cannot use.
pub fn compile_shapes(turtle: &str) -> Result<Vec<CompiledShape>, ShaclError> {
    let triples = parse_turtle(turtle, None).map_err(|e| ShaclError::Parse(e.to_string()))?;
    compile_triples(&triples)
}

/// Compiles the shapes found in an already parsed graph.
///
/// # Errors
///
/// As [`compile_shapes`], minus parsing.
pub fn compile_triples(triples: &Triples) -> Result<Vec<CompiledShape>, ShaclError> {
    let index = TripleIndex::new(triples);
    let node_shape = format!("{SH}NodeShape");
    index
        .subjects_of_type(&node_shape)
        .iter()
        .map(|shape| compile_node_shape(&index, shape))
        .collect()
}

fn compile_node_shape(index: &TripleIndex<'_>, shape: &Resource) -> Result<CompiledShape, ShaclError> {
    let mut targets = Vec::new();
    for class in index.values(shape, &sh("targetClass")) {
        targets.push(TargetType::Class(class));
    }
    for node in index.resources(shape, &sh("targetNode")) {
        targets.push(TargetType::Node(node.clone()));
    }
    let properties = index
        .resources(shape, &sh("property"))
        .into_iter()
        .map(|property| compile_property_shape(index, shape, property))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CompiledShape {
        id: shape.clone(),
        targets,
        properties,
    })
}

fn compile_property_shape(
    index: &TripleIndex<'_>,
    shape: &Resource,
    property: &Resource,
) -> Result<PropertyShape, ShaclError> {
    let invalid = |message: String| ShaclError::InvalidConstraint {
        shape: shape.key(),
        message,
    };

    let path = match index.objects(property, &sh("path")).first() {
        Some(Object::Resource(Resource::Iri(predicate))) => Path::Predicate(predicate.clone()),
        Some(Object::Resource(node)) => match index.values(node, &sh("inversePath")).first() {
            Some(predicate) => Path::Inverse(predicate.clone()),
            None => return Err(invalid("only predicate and inverse paths are supported".to_string())),
        },
        _ => return Err(invalid("property shape without sh:path".to_string())),
    };

    let mut constraints = Vec::new();
    if let Some(min) = first_value(index, property, "minCount") {
        constraints.push(Constraint::MinCount(
            min.parse().map_err(|_| invalid(format!("sh:minCount {min}")))?,
        ));
    }
    if let Some(max) = first_value(index, property, "maxCount") {
        constraints.push(Constraint::MaxCount(
            max.parse().map_err(|_| invalid(format!("sh:maxCount {max}")))?,
        ));
    }
    if let Some(kind) = first_value(index, property, "nodeKind") {
        let kind = NodeKind::from_iri(&kind).ok_or_else(|| invalid(format!("sh:nodeKind {kind}")))?;
        constraints.push(Constraint::NodeKind(kind));
    }
    if let Some(datatype) = first_value(index, property, "datatype") {
        constraints.push(Constraint::Datatype(datatype));
    }
    if let Some(unique) = first_value(index, property, "uniqueLang") {
        constraints.push(Constraint::UniqueLang(unique == "true" || unique == "1"));
    }
    if let Some(source) = first_value(index, property, "pattern") {
        let flags = first_value(index, property, "flags");
        pattern::build_regex(&source, flags.as_deref())?;
        constraints.push(Constraint::Pattern(source, flags));
    }

    let severity = match first_value(index, property, "severity").as_deref() {
        Some(s) if s == sh("Warning") => Severity::Warning,
        Some(s) if s == sh("Info") => Severity::Info,
        _ => Severity::Violation,
    };

    Ok(PropertyShape {
        id: property.clone(),
        path,
        constraints,
        severity,
        message: first_value(index, property, "message"),
    })
}

fn first_value(index: &TripleIndex<'_>, subject: &Resource, local: &str) -> Option<String> {
    index.values(subject, &sh(local)).into_iter().next()
}

fn sh(local: &str) -> String {
    format!("{SH}{local}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SHAPES: &str = include_str!("../../../shapes/catalog.ttl");

    #[test]
    fn bundled_catalog_shapes_compile() {
        let shapes = compile_shapes(SHAPES).unwrap();
        assert_eq!(shapes.len(), 2);
        let existence = &shapes[0];
        assert_eq!(
            existence.targets,
            vec![TargetType::Node(Resource::iri("http://www.w3.org/ns/dcat#Catalog"))]
        );
        assert_eq!(
            existence.properties[0].path,
            Path::Inverse("http://www.w3.org/1999/02/22-rdf-syntax-ns#type".to_string())
        );
        let attributes = &shapes[1];
        assert_eq!(attributes.properties.len(), 4);
        let publisher = &attributes.properties[3];
        assert_eq!(
            publisher.constraints,
            vec![
                Constraint::MinCount(1),
                Constraint::MaxCount(1),
                Constraint::NodeKind(NodeKind::Iri),
            ]
        );
        assert_eq!(publisher.message.as_deref(), Some("Katalog musí mít poskytovatele"));
    }

    #[test]
    fn bad_counts_are_rejected() {
        let shapes = r#"
            @prefix sh: <http://www.w3.org/ns/shacl#> .
            <https://s.example/S> a sh:NodeShape ;
                sh:property [ sh:path <https://s.example/p> ; sh:minCount "many" ] .
        "#;
        assert!(matches!(
            compile_shapes(shapes),
            Err(ShaclError::InvalidConstraint { .. })
        ));
    }
}
