//! Controlled-vocabulary membership predicates.
//!
//! Membership is decided by IRI prefix, except for HVD legislation (exact IRI)
//! and HVD top categories (a closed set). All predicates are pure.

/// Public authority register (OVM) prefix.
pub const OVM_PREFIX: &str = "https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/";
/// EU data-theme authority table prefix.
pub const EUROVOC_THEME_PREFIX: &str = "http://publications.europa.eu/resource/authority/data-theme/";
/// EU frequency authority table prefix.
pub const FREQUENCY_PREFIX: &str = "http://publications.europa.eu/resource/authority/frequency/";
/// RÚIAN territorial register prefix.
pub const RUIAN_PREFIX: &str = "https://linked.cuzk.cz/resource/ruian/";
/// IANA media-type registry prefix.
pub const IANA_MEDIA_TYPE_PREFIX: &str = "http://www.iana.org/assignments/media-types/";
/// EU file-type authority table prefix.
pub const FILE_TYPE_PREFIX: &str = "http://publications.europa.eu/resource/authority/file-type/";
/// Implementing regulation (EU) 2023/138 on high-value datasets.
pub const HVD_LEGISLATION: &str = "http://data.europa.eu/eli/reg_impl/2023/138/oj";

/// Top-level HVD categories with their Czech labels.
pub const HVD_TOP_CATEGORIES: [(&str, &str); 6] = [
    ("http://data.europa.eu/bna/c_164e0bf5", "Meteorologie"),
    ("http://data.europa.eu/bna/c_a9135398", "Společnosti a vlastnictví společností"),
    ("http://data.europa.eu/bna/c_ac64a52d", "Geoprostorové údaje"),
    ("http://data.europa.eu/bna/c_b79e35eb", "Mobilita"),
    ("http://data.europa.eu/bna/c_dd313021", "Země a životní prostředí"),
    ("http://data.europa.eu/bna/c_e1da4e07", "Statistika"),
];

/// True when the publisher IRI is registered in the OVM register.
#[must_use]
pub fn is_publisher_ovm(iri: &str) -> bool {
    iri.starts_with(OVM_PREFIX)
}

/// True when the theme comes from the EU data-theme table.
#[must_use]
pub fn is_eurovoc_theme(iri: &str) -> bool {
    iri.starts_with(EUROVOC_THEME_PREFIX)
}

/// True when the periodicity comes from the EU frequency table.
#[must_use]
pub fn is_from_accrual_periodicity_codelist(iri: &str) -> bool {
    iri.starts_with(FREQUENCY_PREFIX)
}

/// True when the spatial coverage is a RÚIAN resource.
#[must_use]
pub fn is_from_ruian_codelist(iri: &str) -> bool {
    iri.starts_with(RUIAN_PREFIX)
}

/// True when the media type is an IANA registry IRI.
#[must_use]
pub fn is_from_media_type_codelist(iri: &str) -> bool {
    iri.starts_with(IANA_MEDIA_TYPE_PREFIX)
}

/// True when the format comes from the EU file-type table.
#[must_use]
pub fn is_from_format_codelist(iri: &str) -> bool {
    iri.starts_with(FILE_TYPE_PREFIX)
}

/// True when the legislation IRI marks a high-value dataset.
///
/// Exact match only: versioned or language-suffixed ELI IRIs do not count.
#[must_use]
pub fn is_applicable_legislation_hvd(iri: &str) -> bool {
    iri == HVD_LEGISLATION
}

/// True when the category is one of the six HVD top categories.
#[must_use]
pub fn is_top_hvd_category(iri: &str) -> bool {
    HVD_TOP_CATEGORIES.iter().any(|(top, _)| *top == iri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_match_members_only() {
        assert!(is_publisher_ovm(
            "https://rpp-opendata.egon.gov.cz/odrpp/zdroj/orgán-veřejné-moci/00064581"
        ));
        assert!(!is_publisher_ovm("https://example.org/publisher"));
        assert!(is_eurovoc_theme("http://publications.europa.eu/resource/authority/data-theme/ECON"));
        assert!(is_from_accrual_periodicity_codelist(
            "http://publications.europa.eu/resource/authority/frequency/ANNUAL"
        ));
        assert!(is_from_ruian_codelist("https://linked.cuzk.cz/resource/ruian/stat/1"));
        assert!(is_from_media_type_codelist("http://www.iana.org/assignments/media-types/text/csv"));
        assert!(is_from_format_codelist(
            "http://publications.europa.eu/resource/authority/file-type/CSV"
        ));
        assert!(!is_from_format_codelist("https://publications.europa.eu/resource/authority/file-type/CSV"));
    }

    #[test]
    fn hvd_legislation_is_exact() {
        assert!(is_applicable_legislation_hvd(HVD_LEGISLATION));
        assert!(!is_applicable_legislation_hvd("http://data.europa.eu/eli/reg_impl/2023/138/oj/ces"));
    }

    #[test]
    fn top_categories_are_a_closed_set() {
        assert!(is_top_hvd_category("http://data.europa.eu/bna/c_e1da4e07"));
        assert!(!is_top_hvd_category("http://data.europa.eu/bna/c_0000000"));
    }
}
