//! SPARQL query builders for catalog and dataset scopes.

/// `CONSTRUCT` returning every `dcat:Catalog` with all its properties.
pub const CATALOG_QUERY: &str = "PREFIX dcat: <http://www.w3.org/ns/dcat#>
CONSTRUCT { ?catalog ?catalogPredicate ?catalogObject . }
WHERE { ?catalog a dcat:Catalog ; ?catalogPredicate ?catalogObject . }";

/// `SELECT` listing the datasets of every catalog, ordered by IRI.
pub const DATASET_ORDER_QUERY: &str = "PREFIX dcat: <http://www.w3.org/ns/dcat#>
SELECT DISTINCT ?dataset
WHERE { ?catalog a dcat:Catalog ; dcat:dataset ?dataset . }
ORDER BY ?dataset";

/// Variable bound by [`DATASET_ORDER_QUERY`].
pub const DATASET_VARIABLE: &str = "dataset";

/// `CONSTRUCT` for one dataset: its own triples and, one hop away, its
/// distributions, their terms of use and their data services.
#[must_use]
pub fn dataset_query(iri: &str) -> String {
    let iri = escape_iri(iri);
    format!(
        "PREFIX dcat: <http://www.w3.org/ns/dcat#>
PREFIX pu: <https://data.gov.cz/slovník/podmínky-užití/>
CONSTRUCT {{
  <{iri}> ?p ?o .
  ?distributionS ?distributionP ?distributionO .
  ?podmínkyS ?podmínkyP ?podmínkyO .
  ?serviceS ?serviceP ?serviceO .
}} WHERE {{
  <{iri}> ?p ?o .
  OPTIONAL {{
    <{iri}> dcat:distribution ?distributionS .
    ?distributionS ?distributionP ?distributionO .
  }}
  OPTIONAL {{
    <{iri}> dcat:distribution ?distributionS .
    ?distributionS pu:specifikace ?podmínkyS .
    ?podmínkyS ?podmínkyP ?podmínkyO .
  }}
  OPTIONAL {{
    <{iri}> dcat:distribution ?distributionS .
    ?distributionS dcat:accessService ?serviceS .
    ?serviceS ?serviceP ?serviceO .
  }}
}}"
    )
}

/// Percent-encodes the characters that may not appear inside `<...>`.
fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | ' ' => {
                out.push_str(&format!("%{:02X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_query_names_the_dataset_in_every_group() {
        let query = dataset_query("https://data.example/sady/1");
        assert_eq!(query.matches("<https://data.example/sady/1>").count(), 5);
        assert!(query.contains("pu:specifikace"));
        assert!(query.contains("dcat:accessService"));
    }

    #[test]
    fn iris_cannot_break_out_of_brackets() {
        let query = dataset_query("https://data.example/a> } DROP ALL {<b");
        assert!(!query.contains("a> }"));
        assert!(query.contains("%3E%20%7D"));
    }
}
