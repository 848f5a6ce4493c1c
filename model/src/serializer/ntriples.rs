//! N-Triples serializer for loaded triples.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs).
//! Named graphs are dropped; N-Triples has no graph position.

use crate::model::{Literal, Object, Triple, Triples, XSD_STRING};

/// Serializes `triples` to an N-Triples string, in source order.
#[must_use]
pub fn to_ntriples(triples: &Triples) -> String {
    let mut out = String::with_capacity(triples.len() * 96);
    for t in triples {
        out.push_str(&triple_line(t));
        out.push('\n');
    }
    out
}

/// Renders one triple as an N-Triples statement without the trailing newline.
#[must_use]
pub fn triple_line(t: &Triple) -> String {
    format!("{} <{}> {} .", t.subject, t.predicate, object(&t.object))
}

fn object(o: &Object) -> String {
    match o {
        Object::Resource(resource) => resource.to_string(),
        Object::Literal(literal) => lit(literal),
    }
}

fn lit(l: &Literal) -> String {
    let escaped = l
        .value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    match (&l.language, &l.datatype) {
        (Some(lang), _) => format!("\"{escaped}\"@{lang}"),
        (None, Some(dt)) if dt != XSD_STRING => format!("\"{escaped}\"^^<{dt}>"),
        _ => format!("\"{escaped}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Resource;

    fn sample() -> Triples {
        vec![
            Triple::new(
                Resource::iri("https://data.example/catalog"),
                "http://purl.org/dc/terms/title",
                Literal::lang("Katalog \"A\"", "cs"),
            ),
            Triple::new(
                Resource::blank("b1"),
                "http://www.w3.org/ns/dcat#keyword",
                Literal::plain("line\nbreak"),
            ),
            Triple::new(
                Resource::iri("https://data.example/catalog"),
                "http://purl.org/dc/terms/issued",
                Literal::typed("2024-01-01", "http://www.w3.org/2001/XMLSchema#date"),
            ),
        ]
        .into()
    }

    #[test]
    fn every_line_ends_with_period() {
        let nt = to_ntriples(&sample());
        assert_eq!(nt.lines().count(), 3);
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
    }

    #[test]
    fn literals_are_escaped_and_tagged() {
        let nt = to_ntriples(&sample());
        assert!(nt.contains(r#""Katalog \"A\""@cs"#));
        assert!(nt.contains(r#"_:b1 <http://www.w3.org/ns/dcat#keyword> "line\nbreak" ."#));
        assert!(nt.contains("\"2024-01-01\"^^<http://www.w3.org/2001/XMLSchema#date>"));
    }
}
