//! JSON-LD documents in the shape of the national catalog interface.

/// The catalog of `CATALOG_TTL` with an inline context.
pub const CATALOG_JSONLD: &str = r#"{
  "@context": {
    "dcat": "http://www.w3.org/ns/dcat#",
    "dcterms": "http://purl.org/dc/terms/",
    "iri": "@id",
    "typ": "@type",
    "Katalog": "dcat:Catalog",
    "název": {"@id": "dcterms:title", "@container": "@language"},
    "popis": {"@id": "dcterms:description", "@container": "@language"},
    "poskytovatel": {"@id": "dcterms:publisher", "@type": "@id"},
    "datová_sada": {"@id": "dcat:dataset", "@type": "@id"}
  },
  "iri": "https://data.example/katalog",
  "typ": "Katalog",
  "název": {"cs": "Katalog otevřených dat", "en": "Open data catalog"},
  "popis": {"cs": "Datové sady města."},
  "poskytovatel": "https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581",
  "datová_sada": ["https://data.example/sady/1"]
}"#;

/// The catalog of `CATALOG_TTL` with an inline context that scopes each
/// property to the class using it.
pub const CATALOG_JSONLD_SCOPED: &str = r#"{
  "@context": {
    "@version": 1.1,
    "iri": "@id",
    "typ": "@type",
    "Katalog": {
      "@id": "http://www.w3.org/ns/dcat#Catalog",
      "@context": {
        "název": {"@id": "http://purl.org/dc/terms/title", "@container": "@language"},
        "popis": {"@id": "http://purl.org/dc/terms/description", "@container": "@language"},
        "poskytovatel": {"@id": "http://purl.org/dc/terms/publisher", "@type": "@id"},
        "datová_sada": {"@id": "http://www.w3.org/ns/dcat#dataset", "@type": "@id"}
      }
    }
  },
  "iri": "https://data.example/katalog",
  "typ": "Katalog",
  "název": {"cs": "Katalog otevřených dat", "en": "Open data catalog"},
  "popis": {"cs": "Datové sady města."},
  "poskytovatel": "https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581",
  "datová_sada": ["https://data.example/sady/1"]
}"#;

/// A remote context document covering catalogs, datasets and distributions.
/// Like the published national context, every class carries the context of
/// its own properties.
pub const CATALOG_CONTEXT: &str = r#"{
  "@context": {
    "@version": 1.1,
    "dcat": "http://www.w3.org/ns/dcat#",
    "dcterms": "http://purl.org/dc/terms/",
    "r5r": "http://data.europa.eu/r5r/",
    "pu": "https://data.gov.cz/slovník/podmínky-užití/",
    "iri": "@id",
    "typ": "@type",
    "Katalog": {
      "@id": "dcat:Catalog",
      "@context": {
        "název": {"@id": "dcterms:title", "@container": "@language"},
        "popis": {"@id": "dcterms:description", "@container": "@language"},
        "poskytovatel": {"@id": "dcterms:publisher", "@type": "@id"},
        "datová_sada": {"@id": "dcat:dataset", "@type": "@id"}
      }
    },
    "Datová sada": {
      "@id": "dcat:Dataset",
      "@context": {
        "název": {"@id": "dcterms:title", "@container": "@language"},
        "popis": {"@id": "dcterms:description", "@container": "@language"},
        "poskytovatel": {"@id": "dcterms:publisher", "@type": "@id"},
        "klíčové_slovo": {"@id": "dcat:keyword", "@container": "@language"},
        "periodicita_aktualizace": {"@id": "dcterms:accrualPeriodicity", "@type": "@id"},
        "prvek_rúian": {"@id": "dcterms:spatial", "@type": "@id"},
        "téma": {"@id": "dcat:theme", "@type": "@id"},
        "právní_předpis": {"@id": "r5r:applicableLegislation", "@type": "@id"},
        "kategorie_hvd": {"@id": "r5r:hvdCategory", "@type": "@id"},
        "distribuce": {"@id": "dcat:distribution"}
      }
    },
    "Datová série": {
      "@id": "dcat:DatasetSeries",
      "@context": {
        "název": {"@id": "dcterms:title", "@container": "@language"},
        "popis": {"@id": "dcterms:description", "@container": "@language"},
        "poskytovatel": {"@id": "dcterms:publisher", "@type": "@id"}
      }
    },
    "Distribuce": {
      "@id": "dcat:Distribution",
      "@context": {
        "přístupové_url": {"@id": "dcat:accessURL", "@type": "@id"},
        "soubor_ke_stažení": {"@id": "dcat:downloadURL", "@type": "@id"},
        "typ_média": {"@id": "dcat:mediaType", "@type": "@id"},
        "formát": {"@id": "dcterms:format", "@type": "@id"},
        "podmínky_užití": {"@id": "pu:specifikace", "@type": "@id"},
        "právní_předpis": {"@id": "r5r:applicableLegislation", "@type": "@id"}
      }
    }
  }
}"#;

/// The catalog of `CATALOG_TTL` referencing the context at `CONTEXT_URL`.
pub const CATALOG_JSONLD_REMOTE: &str = r#"{
  "@context": "https://data.example/kontext.jsonld",
  "iri": "https://data.example/katalog",
  "typ": "Katalog",
  "název": {"cs": "Katalog otevřených dat", "en": "Open data catalog"},
  "popis": {"cs": "Datové sady města."},
  "poskytovatel": "https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581",
  "datová_sada": ["https://data.example/sady/1"]
}"#;

/// The dataset of `DATASET_TTL` referencing the context at `CONTEXT_URL`.
pub const DATASET_JSONLD: &str = r#"{
  "@context": "https://data.example/kontext.jsonld",
  "iri": "https://data.example/sady/1",
  "typ": "Datová sada",
  "název": {"cs": "Rozpočet města"},
  "popis": {"cs": "Schválený rozpočet na kalendářní rok."},
  "poskytovatel": "https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581",
  "periodicita_aktualizace": "http://publications.europa.eu/resource/authority/frequency/ANNUAL",
  "prvek_rúian": ["https://linked.cuzk.cz/resource/ruian/obec/554782"],
  "téma": ["http://publications.europa.eu/resource/authority/data-theme/GOVE"],
  "klíčové_slovo": {"cs": ["rozpočet"], "en": ["budget"]},
  "distribuce": [{
    "typ": "Distribuce",
    "iri": "https://data.example/sady/1/distribuce/csv",
    "podmínky_užití": "https://data.example/sady/1/distribuce/csv/podmínky",
    "přístupové_url": "https://data.example/soubory/rozpocet.csv",
    "soubor_ke_stažení": "https://data.example/soubory/rozpocet.csv",
    "typ_média": "http://www.iana.org/assignments/media-types/text/csv",
    "formát": "http://publications.europa.eu/resource/authority/file-type/CSV"
  }]
}"#;
