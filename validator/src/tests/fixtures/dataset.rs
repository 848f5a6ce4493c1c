//! Dataset documents.

/// A dataset that passes every rule: one complete file distribution.
pub const DATASET_TTL: &str = r#"
@prefix dcat:    <http://www.w3.org/ns/dcat#> .
@prefix dcterms: <http://purl.org/dc/terms/> .
@prefix pu:      <https://data.gov.cz/slovník/podmínky-užití/> .

<https://data.example/sady/1>
    a                           dcat:Dataset ;
    dcterms:title               "Rozpočet města"@cs ;
    dcterms:description         "Schválený rozpočet na kalendářní rok."@cs ;
    dcterms:publisher           <https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581> ;
    dcterms:accrualPeriodicity  <http://publications.europa.eu/resource/authority/frequency/ANNUAL> ;
    dcterms:spatial             <https://linked.cuzk.cz/resource/ruian/obec/554782> ;
    dcat:theme                  <http://publications.europa.eu/resource/authority/data-theme/GOVE> ;
    dcat:keyword                "rozpočet"@cs, "budget"@en ;
    dcat:distribution           <https://data.example/sady/1/distribuce/csv> .

<https://data.example/sady/1/distribuce/csv>
    a                   dcat:Distribution ;
    pu:specifikace      <https://data.example/sady/1/distribuce/csv/podmínky> ;
    dcat:accessURL      <https://data.example/soubory/rozpocet.csv> ;
    dcat:downloadURL    <https://data.example/soubory/rozpocet.csv> ;
    dcat:mediaType      <http://www.iana.org/assignments/media-types/text/csv> ;
    dcterms:format      <http://publications.europa.eu/resource/authority/file-type/CSV> .
"#;

/// A dataset whose only triple is an untyped title, and whose terms are
/// outside every codelist.
pub const INCOMPLETE_DATASET_TTL: &str = r#"
@prefix dcat:    <http://www.w3.org/ns/dcat#> .
@prefix dcterms: <http://purl.org/dc/terms/> .

<https://data.example/sady/1>
    dcterms:title               "Budget"@en ;
    dcterms:accrualPeriodicity  <https://vocab.example/yearly> ;
    dcterms:spatial             <https://vocab.example/city> ;
    dcat:theme                  <https://vocab.example/finance> ;
    dcat:keyword                "budget"@en .
"#;

/// A high-value dataset with a file distribution and a data-service
/// distribution, both under the HVD regulation.
pub const HVD_DATASET_TTL: &str = r#"
@prefix dcat:    <http://www.w3.org/ns/dcat#> .
@prefix dcterms: <http://purl.org/dc/terms/> .
@prefix foaf:    <http://xmlns.com/foaf/0.1/> .
@prefix r5r:     <http://data.europa.eu/r5r/> .
@prefix pu:      <https://data.gov.cz/slovník/podmínky-užití/> .

<https://data.example/sady/1>
    a                           dcat:Dataset ;
    dcterms:title               "Měření ovzduší"@cs ;
    dcterms:description         "Hodinová měření kvality ovzduší."@cs ;
    dcterms:publisher           <https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581> ;
    dcterms:accrualPeriodicity  <http://publications.europa.eu/resource/authority/frequency/HOURLY> ;
    dcterms:spatial             <https://linked.cuzk.cz/resource/ruian/obec/554782> ;
    dcat:theme                  <http://publications.europa.eu/resource/authority/data-theme/ENVI> ;
    dcat:keyword                "ovzduší"@cs ;
    r5r:applicableLegislation   <http://data.europa.eu/eli/reg_impl/2023/138/oj> ;
    r5r:hvdCategory             <http://data.europa.eu/bna/c_4ba9548e> ;
    dcat:distribution           <https://data.example/sady/1/distribuce/csv>,
                                <https://data.example/sady/1/distribuce/api> .

<https://data.example/sady/1/distribuce/csv>
    a                           dcat:Distribution ;
    pu:specifikace              <https://data.example/sady/1/distribuce/csv/podmínky> ;
    dcat:accessURL              <https://data.example/soubory/ovzdusi.csv> ;
    dcat:downloadURL            <https://data.example/soubory/ovzdusi.csv> ;
    dcat:mediaType              <http://www.iana.org/assignments/media-types/text/csv> ;
    dcterms:format              <http://publications.europa.eu/resource/authority/file-type/CSV> ;
    r5r:applicableLegislation   <http://data.europa.eu/eli/reg_impl/2023/138/oj> .

<https://data.example/sady/1/distribuce/api>
    a                           dcat:Distribution ;
    pu:specifikace              <https://data.example/sady/1/distribuce/api/podmínky> ;
    dcat:accessURL              <https://data.example/api> ;
    r5r:applicableLegislation   <http://data.europa.eu/eli/reg_impl/2023/138/oj> ;
    dcat:accessService          <https://data.example/sluzby/api> .

<https://data.example/sluzby/api>
    a                           dcat:DataService ;
    dcterms:title               "API měření"@cs ;
    dcat:endpointURL            <https://data.example/api> ;
    dcat:contactPoint           <https://data.example/kontakt> ;
    foaf:page                   <https://data.example/api/dokumentace> ;
    r5r:hvdCategory             <http://data.europa.eu/bna/c_4ba9548e> ;
    r5r:applicableLegislation   <http://data.europa.eu/eli/reg_impl/2023/138/oj> .
"#;

/// A dataset series that lists a distribution.
pub const DATASET_SERIES_TTL: &str = r#"
@prefix dcat:    <http://www.w3.org/ns/dcat#> .
@prefix dcterms: <http://purl.org/dc/terms/> .

<https://data.example/sady/1>
    a                           dcat:DatasetSeries ;
    dcterms:title               "Rozpočty"@cs ;
    dcterms:description         "Rozpočty po letech."@cs ;
    dcterms:publisher           <https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581> ;
    dcterms:accrualPeriodicity  <http://publications.europa.eu/resource/authority/frequency/ANNUAL> ;
    dcterms:spatial             <https://linked.cuzk.cz/resource/ruian/obec/554782> ;
    dcat:theme                  <http://publications.europa.eu/resource/authority/data-theme/GOVE> ;
    dcat:keyword                "rozpočet"@cs ;
    dcat:distribution           <https://data.example/sady/1/distribuce/csv> .

<https://data.example/sady/1/distribuce/csv>
    dcat:accessURL              <https://data.example/soubory/rozpocty.csv> .
"#;
