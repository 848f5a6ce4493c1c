//! Catalog documents.

/// A complete catalog: Czech title and description, an OVM publisher, one dataset.
pub const CATALOG_TTL: &str = r#"
@prefix dcat:    <http://www.w3.org/ns/dcat#> .
@prefix dcterms: <http://purl.org/dc/terms/> .

<https://data.example/katalog>
    a                   dcat:Catalog ;
    dcterms:title       "Katalog otevřených dat"@cs, "Open data catalog"@en ;
    dcterms:description "Datové sady města."@cs ;
    dcterms:publisher   <https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581> ;
    dcat:dataset        <https://data.example/sady/1> .
"#;

/// Same catalog listing two datasets, the first one twice.
pub const CATALOG_TWO_DATASETS_TTL: &str = r#"
@prefix dcat:    <http://www.w3.org/ns/dcat#> .
@prefix dcterms: <http://purl.org/dc/terms/> .

<https://data.example/katalog>
    a                   dcat:Catalog ;
    dcterms:title       "Katalog otevřených dat"@cs ;
    dcterms:description "Datové sady města."@cs ;
    dcterms:publisher   <https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581> ;
    dcat:dataset        <https://data.example/sady/1>, <https://data.example/sady/2> .

<https://data.example/katalog-kopie>
    a                   dcat:Catalog ;
    dcat:dataset        <https://data.example/sady/1> .
"#;

/// A catalog with an English title only, no description, a non-OVM
/// publisher and no datasets.
pub const CATALOG_INVALID_TTL: &str = r#"
@prefix dcat:    <http://www.w3.org/ns/dcat#> .
@prefix dcterms: <http://purl.org/dc/terms/> .

<https://data.example/katalog>
    a                   dcat:Catalog ;
    dcterms:title       "Open data catalog"@en ;
    dcterms:publisher   <https://publisher.example/city> .
"#;
