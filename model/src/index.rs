//! Lookup index over a [`Triples`] collection.
//!
//! Built once per load. Queries by (subject, predicate) and by `rdf:type`
//! return values in source order, so everything derived from the index is
//! deterministic for a given input.

use std::collections::{HashMap, HashSet};

use crate::model::{Object, Resource, Triple, Triples};
use crate::vocabulary::rdf;

/// Borrowing index over a triple collection.
#[derive(Debug)]
pub struct TripleIndex<'a> {
    by_subject_predicate: HashMap<(&'a Resource, &'a str), Vec<&'a Object>>,
    by_type: HashMap<&'a str, Vec<&'a Resource>>,
    first_seen: HashMap<&'a Resource, usize>,
}

impl<'a> TripleIndex<'a> {
    /// Indexes `triples`. Graph names are ignored.
    #[must_use]
    pub fn new(triples: &'a Triples) -> Self {
        let mut by_subject_predicate: HashMap<(&Resource, &str), Vec<&Object>> = HashMap::new();
        let mut by_type: HashMap<&str, Vec<&Resource>> = HashMap::new();
        let mut typed: HashSet<(&str, &Resource)> = HashSet::new();
        let mut first_seen: HashMap<&Resource, usize> = HashMap::new();
        for (position, triple) in triples.iter().enumerate() {
            let Triple {
                subject,
                predicate,
                object,
                ..
            } = triple;
            first_seen.entry(subject).or_insert(position);
            by_subject_predicate
                .entry((subject, predicate.as_str()))
                .or_default()
                .push(object);
            if predicate == rdf::TYPE {
                if let Some(class) = object.as_iri() {
                    if typed.insert((class, subject)) {
                        by_type.entry(class).or_default().push(subject);
                    }
                }
            }
        }
        Self {
            by_subject_predicate,
            by_type,
            first_seen,
        }
    }

    /// Position of the first triple with `subject` in subject position.
    #[must_use]
    pub fn first_position(&self, subject: &Resource) -> Option<usize> {
        self.first_seen.get(subject).copied()
    }

    /// True when `subject` appears in subject position.
    #[must_use]
    pub fn has_subject(&self, subject: &Resource) -> bool {
        self.first_seen.contains_key(subject)
    }

    /// All objects of `(subject, predicate)` in source order.
    #[must_use]
    pub fn objects(&self, subject: &Resource, predicate: &str) -> &[&'a Object] {
        self.by_subject_predicate
            .get(&(subject, predicate))
            .map_or(&[], Vec::as_slice)
    }

    /// Node objects of `(subject, predicate)`; literals are skipped.
    #[must_use]
    pub fn resources(&self, subject: &Resource, predicate: &str) -> Vec<&'a Resource> {
        self.objects(subject, predicate)
            .iter()
            .filter_map(|o| o.as_resource())
            .collect()
    }

    /// String values of `(subject, predicate)`, see [`Object::value`].
    #[must_use]
    pub fn values(&self, subject: &Resource, predicate: &str) -> Vec<String> {
        self.objects(subject, predicate)
            .iter()
            .map(|o| o.value())
            .collect()
    }

    /// Subjects typed `class`, first-seen order, without duplicates.
    #[must_use]
    pub fn subjects_of_type(&self, class: &str) -> &[&'a Resource] {
        self.by_type.get(class).map_or(&[], Vec::as_slice)
    }

    /// True when `subject` carries `rdf:type class`.
    #[must_use]
    pub fn has_type(&self, subject: &Resource, class: &str) -> bool {
        self.objects(subject, rdf::TYPE)
            .iter()
            .any(|o| o.as_iri() == Some(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Literal;
    use crate::vocabulary::{dcat, dcterms};

    fn triples() -> Triples {
        let ds = Resource::iri("https://data.example/ds/1");
        vec![
            Triple::new(ds.clone(), rdf::TYPE, Object::iri(dcat::DATASET)),
            Triple::new(ds.clone(), dcterms::HAS_TITLE, Literal::lang("První", "cs")),
            Triple::new(ds.clone(), dcterms::HAS_TITLE, Literal::lang("First", "en")),
            Triple::new(ds.clone(), rdf::TYPE, Object::iri(dcat::DATASET)),
            Triple::new(
                Resource::iri("https://data.example/ds/0"),
                rdf::TYPE,
                Object::iri(dcat::DATASET),
            ),
        ]
        .into()
    }

    #[test]
    fn objects_keep_source_order() {
        let triples = triples();
        let index = TripleIndex::new(&triples);
        let titles = index.values(&Resource::iri("https://data.example/ds/1"), dcterms::HAS_TITLE);
        assert_eq!(titles, vec!["První".to_string(), "First".to_string()]);
    }

    #[test]
    fn type_index_is_first_seen_and_deduplicated() {
        let triples = triples();
        let index = TripleIndex::new(&triples);
        let keys: Vec<String> = index
            .subjects_of_type(dcat::DATASET)
            .iter()
            .map(|r| r.key())
            .collect();
        assert_eq!(keys, vec!["https://data.example/ds/1", "https://data.example/ds/0"]);
        assert!(index.subjects_of_type(dcat::CATALOG).is_empty());
    }

    #[test]
    fn subjects_remember_their_first_triple() {
        let triples = triples();
        let index = TripleIndex::new(&triples);
        assert_eq!(index.first_position(&Resource::iri("https://data.example/ds/1")), Some(0));
        assert_eq!(index.first_position(&Resource::iri("https://data.example/ds/0")), Some(4));
        assert!(!index.has_subject(&Resource::iri("https://data.example/none")));
    }

    #[test]
    fn missing_pairs_are_empty() {
        let triples = triples();
        let index = TripleIndex::new(&triples);
        assert!(index
            .objects(&Resource::iri("https://data.example/none"), dcterms::HAS_TITLE)
            .is_empty());
    }
}
