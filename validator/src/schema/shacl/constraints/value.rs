//! Value type and language constraint validators (sh:nodeKind, sh:datatype,
//! sh:uniqueLang)

use std::collections::BTreeSet;

use dcat_model::{Object, Resource, XSD_STRING};

use super::{Constraint, ConstraintViolation};
use crate::schema::shacl::compile::NodeKind;

/// Validate sh:nodeKind for one value
#[must_use]
pub fn validate_node_kind(value: &Object, kind: NodeKind) -> Option<ConstraintViolation> {
    let matches = match value {
        Object::Resource(Resource::Iri(_)) => kind.allows_iri(),
        Object::Resource(Resource::Blank(_)) => kind.allows_blank_node(),
        Object::Literal(_) => kind.allows_literal(),
    };
    (!matches).then(|| ConstraintViolation {
        constraint: Constraint::NodeKind(kind),
        value: Some(value.clone()),
        message: format!("Value {} is not of node kind {kind:?}", value.value()),
    })
}

/// Validate sh:datatype for one value. Untyped literals count as `xsd:string`.
#[must_use]
pub fn validate_datatype(value: &Object, datatype: &str) -> Option<ConstraintViolation> {
    let actual = match value {
        Object::Literal(literal) => literal.datatype.as_deref().unwrap_or(XSD_STRING),
        Object::Resource(_) => "",
    };
    (actual != datatype).then(|| ConstraintViolation {
        constraint: Constraint::Datatype(datatype.to_string()),
        value: Some(value.clone()),
        message: format!("Value {} does not have datatype <{datatype}>", value.value()),
    })
}

/// Validate sh:uniqueLang: one violation per language tag used more than once
#[must_use]
pub fn validate_unique_lang(values: &[Object]) -> Vec<ConstraintViolation> {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut violations = Vec::new();
    for value in values {
        let Some(language) = value.as_literal().and_then(|l| l.language.as_deref()) else {
            continue;
        };
        if !seen.insert(language) && reported.insert(language) {
            violations.push(ConstraintViolation {
                constraint: Constraint::UniqueLang(true),
                value: Some(value.clone()),
                message: format!("Language tag '{language}' is used more than once"),
            });
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcat_model::{Literal, RDF_LANG_STRING};

    #[test]
    fn node_kind() {
        let iri = Object::iri("https://a.example/x");
        let literal: Object = Literal::plain("x").into();
        assert!(validate_node_kind(&iri, NodeKind::Iri).is_none());
        assert!(validate_node_kind(&literal, NodeKind::Iri).is_some());
        assert!(validate_node_kind(&literal, NodeKind::IriOrLiteral).is_none());
    }

    #[test]
    fn datatype() {
        let tagged: Object = Literal::lang("název", "cs").into();
        let plain: Object = Literal::plain("název").into();
        assert!(validate_datatype(&tagged, RDF_LANG_STRING).is_none());
        assert!(validate_datatype(&plain, RDF_LANG_STRING).is_some());
    }

    #[test]
    fn unique_lang_reports_each_tag_once() {
        let values: Vec<Object> = vec![
            Literal::lang("a", "cs").into(),
            Literal::lang("b", "cs").into(),
            Literal::lang("c", "cs").into(),
            Literal::lang("d", "en").into(),
        ];
        assert_eq!(validate_unique_lang(&values).len(), 1);
    }
}
