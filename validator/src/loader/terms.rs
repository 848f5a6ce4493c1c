//! Conversion of `sophia` terms into the triple model.

use dcat_model::{Literal, Object, Resource, RDF_LANG_STRING};
use sophia_api::term::{Term, TermKind};

use crate::error::LoadError;

/// A subject or graph name.
///
/// # Errors
///
/// Returns [`LoadError::UnsupportedTerm`] for literals, quoted triples and
/// variables.
pub fn resource<T: Term>(term: T) -> Result<Resource, LoadError> {
    match term.kind() {
        TermKind::Iri => term
            .iri()
            .map(|iri| Resource::iri(iri.as_str()))
            .ok_or_else(|| unsupported(term.kind())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Resource::blank(id.as_str()))
            .ok_or_else(|| unsupported(term.kind())),
        other => Err(unsupported(other)),
    }
}

/// A predicate IRI.
///
/// # Errors
///
/// Returns [`LoadError::UnsupportedTerm`] for anything but an IRI.
pub fn predicate<T: Term>(term: T) -> Result<String, LoadError> {
    term.iri()
        .map(|iri| iri.as_str().to_string())
        .ok_or_else(|| LoadError::UnsupportedTerm("non-IRI predicate".to_string()))
}

/// An object: a resource or a literal.
///
/// # Errors
///
/// Returns [`LoadError::UnsupportedTerm`] for quoted triples and variables.
pub fn object<T: Term>(term: T) -> Result<Object, LoadError> {
    if term.kind() != TermKind::Literal {
        return resource(term).map(Object::Resource);
    }
    let lexical = term
        .lexical_form()
        .ok_or_else(|| unsupported(TermKind::Literal))?
        .to_string();
    if let Some(tag) = term.language_tag() {
        return Ok(Literal::lang(lexical, tag.as_str()).into());
    }
    Ok(match term.datatype() {
        Some(datatype) if datatype.as_str() != RDF_LANG_STRING => {
            Literal::typed(lexical, datatype.as_str()).into()
        }
        _ => Literal::plain(lexical).into(),
    })
}

fn unsupported(kind: TermKind) -> LoadError {
    LoadError::UnsupportedTerm(format!("{kind:?}"))
}
