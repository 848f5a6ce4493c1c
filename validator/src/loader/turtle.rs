//! Turtle and N-Triples loading on top of `sophia_turtle`.

use dcat_model::{Triple, Triples};
use sophia_api::iri::Iri;
use sophia_api::prelude::*;
use sophia_api::source::StreamError;
use sophia_turtle::parser::turtle::TurtleParser;

use super::terms;
use crate::error::LoadError;

/// Parses a Turtle (or N-Triples) document. Relative IRIs resolve against
/// `base` when given.
///
/// # Errors
///
/// Returns [`LoadError::Turtle`] on syntax errors and
/// [`LoadError::UnsupportedTerm`] for quoted triples and variables.
pub fn parse_turtle(body: &str, base: Option<&str>) -> Result<Triples, LoadError> {
    let base = base.and_then(|b| Iri::new(b.to_string()).ok());
    let parser = TurtleParser { base };
    let mut triples = Triples::new();
    parser
        .parse_str(body)
        .try_for_each_triple(|t| -> Result<(), LoadError> {
            triples.push(Triple::new(
                terms::resource(t.s())?,
                terms::predicate(t.p())?,
                terms::object(t.o())?,
            ));
            Ok(())
        })
        .map_err(|e| match e {
            StreamError::SourceError(e) => LoadError::Turtle(e.to_string()),
            StreamError::SinkError(e) => e,
        })?;
    Ok(triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcat_model::vocabulary::{dcat, dcterms, rdf};
    use dcat_model::{Resource, TripleIndex};

    #[test]
    fn relative_iris_resolve_against_base() {
        let body = r#"
            @prefix dcat: <http://www.w3.org/ns/dcat#> .
            @prefix dcterms: <http://purl.org/dc/terms/> .
            <> a dcat:Catalog ;
               dcterms:title "Katalog"@CS, "Catalog"@en ;
               dcat:dataset <sady/1>, [ dcterms:title "anonymous" ] .
        "#;
        let triples = parse_turtle(body, Some("https://data.example/katalog")).unwrap_or_default();
        let index = TripleIndex::new(&triples);
        let catalog = Resource::iri("https://data.example/katalog");
        assert!(index.has_type(&catalog, dcat::CATALOG));
        let datasets = index.resources(&catalog, dcat::HAS_DATASET);
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].as_iri(), Some("https://data.example/sady/1"));
        assert!(datasets[1].is_blank());
        let languages: Vec<Option<String>> = index
            .objects(&catalog, dcterms::HAS_TITLE)
            .iter()
            .map(|o| o.as_literal().and_then(|l| l.language.clone()))
            .collect();
        assert_eq!(languages, vec![Some("cs".to_string()), Some("en".to_string())]);
    }

    #[test]
    fn ntriples_are_accepted() {
        let body = format!(
            "<https://data.example/ds> <{}> <{}> .\n",
            rdf::TYPE,
            dcat::DATASET
        );
        let triples = parse_turtle(&body, None).unwrap_or_default();
        assert_eq!(triples.len(), 1);
    }

    #[test]
    fn syntax_errors_are_reported() {
        let result = parse_turtle("<https://data.example/ds> a", None);
        assert!(matches!(result, Err(LoadError::Turtle(_))));
    }
}
