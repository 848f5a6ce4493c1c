//! Core RDF model types.
//!
//! Every loader in the validator produces the same representation: an ordered
//! [`Triples`] collection of immutable [`Triple`] values. Subjects are IRIs or
//! blank nodes; objects add literals carrying a lexical value, an optional
//! language tag, and an optional datatype IRI.

use std::fmt;

/// `rdf:langString`, the datatype of every language-tagged literal.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
/// `xsd:string`, the datatype of plain literals.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// A named or anonymous RDF node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "kebab-case"))]
pub enum Resource {
    /// An absolute IRI.
    Iri(String),
    /// A blank node, identified by its document-local label.
    Blank(String),
}

impl Resource {
    /// Creates an IRI resource.
    pub fn iri(value: impl Into<String>) -> Self {
        Resource::Iri(value.into())
    }

    /// Creates a blank node resource.
    pub fn blank(label: impl Into<String>) -> Self {
        Resource::Blank(label.into())
    }

    /// Returns the IRI when this resource is named.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Resource::Iri(iri) => Some(iri),
            Resource::Blank(_) => None,
        }
    }

    /// Returns the IRI, or the blank node label prefixed with `_:`.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Resource::Iri(iri) => iri.clone(),
            Resource::Blank(label) => format!("_:{label}"),
        }
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Resource::Blank(_))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Iri(iri) => write!(f, "<{iri}>"),
            Resource::Blank(label) => write!(f, "_:{label}"),
        }
    }
}

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Language tag, lower-cased. Present only on `rdf:langString` literals.
    pub language: Option<String>,
    /// Datatype IRI, when known.
    pub datatype: Option<String>,
}

impl Literal {
    /// Creates a plain (`xsd:string`) literal.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(XSD_STRING.to_string()),
        }
    }

    /// Creates a language-tagged literal. The tag is normalised to lower case.
    pub fn lang(value: impl Into<String>, language: impl AsRef<str>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.as_ref().to_ascii_lowercase()),
            datatype: Some(RDF_LANG_STRING.to_string()),
        }
    }

    /// Creates a typed literal.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }
}

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Object {
    /// A node reference.
    Resource(Resource),
    /// A literal value.
    Literal(Literal),
}

impl Object {
    /// Creates an IRI object.
    pub fn iri(value: impl Into<String>) -> Self {
        Object::Resource(Resource::Iri(value.into()))
    }

    /// Returns the node when the object is not a literal.
    #[must_use]
    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Object::Resource(resource) => Some(resource),
            Object::Literal(_) => None,
        }
    }

    /// Returns the IRI when the object is a named node.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        self.as_resource().and_then(Resource::as_iri)
    }

    /// Returns the literal when the object is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Object::Literal(literal) => Some(literal),
            Object::Resource(_) => None,
        }
    }

    /// The string value: the IRI, the `_:`-prefixed blank label, or the
    /// literal's lexical form.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Object::Resource(resource) => resource.key(),
            Object::Literal(literal) => literal.value.clone(),
        }
    }
}

impl From<Resource> for Object {
    fn from(resource: Resource) -> Self {
        Object::Resource(resource)
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Object::Literal(literal)
    }
}

/// A single RDF statement, optionally placed in a named graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple {
    /// Subject node.
    pub subject: Resource,
    /// Predicate IRI.
    pub predicate: String,
    /// Object node or literal.
    pub object: Object,
    /// Named graph, `None` for the default graph.
    pub graph: Option<Resource>,
}

impl Triple {
    /// Creates a default-graph triple.
    pub fn new(subject: Resource, predicate: impl Into<String>, object: impl Into<Object>) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: object.into(),
            graph: None,
        }
    }

    /// Places the triple in a named graph.
    #[must_use]
    pub fn in_graph(mut self, graph: Option<Resource>) -> Self {
        self.graph = graph;
        self
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::ntriples::triple_line(self))
    }
}

/// An ordered collection of triples produced by one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Triples(Vec<Triple>);

impl Triples {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a triple, keeping source order.
    pub fn push(&mut self, triple: Triple) {
        self.0.push(triple);
    }

    /// Number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when there are no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.0.iter()
    }
}

impl From<Vec<Triple>> for Triples {
    fn from(triples: Vec<Triple>) -> Self {
        Self(triples)
    }
}

impl FromIterator<Triple> for Triples {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Triple> for Triples {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Triples {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Triples {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
