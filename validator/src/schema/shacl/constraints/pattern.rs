//! String pattern constraint validators

use dcat_model::Object;
use regex::Regex;

use super::{Constraint, ConstraintViolation};
use crate::error::ShaclError;

/// Compiles `pattern`, prefixing the supported `sh:flags` as inline flags.
///
/// # Errors
///
/// Returns [`ShaclError::InvalidPattern`] when the regex does not compile.
pub fn build_regex(pattern: &str, flags: Option<&str>) -> Result<Regex, ShaclError> {
    let regex_pattern = match flags {
        Some(f) => {
            let inline: String = f.chars().filter(|c| matches!(c, 'i' | 'm' | 's' | 'x')).collect();
            if inline.is_empty() {
                pattern.to_string()
            } else {
                format!("(?{inline}){pattern}")
            }
        }
        None => pattern.to_string(),
    };
    Regex::new(&regex_pattern).map_err(|e| ShaclError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Validate sh:pattern for one value. Blank nodes always fail.
#[must_use]
pub fn validate_pattern(value: &Object, regex: &Regex, constraint: &Constraint) -> Option<ConstraintViolation> {
    if value.as_resource().is_some_and(|r| r.is_blank()) {
        return Some(ConstraintViolation {
            constraint: constraint.clone(),
            value: Some(value.clone()),
            message: "Pattern constraint cannot match a blank node".to_string(),
        });
    }
    let text = value.value();
    (!regex.is_match(&text)).then(|| ConstraintViolation {
        constraint: constraint.clone(),
        value: Some(value.clone()),
        message: format!("Value '{text}' does not match pattern '{}'", regex.as_str()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dcat_model::Literal;

    #[test]
    fn flags_become_inline_flags() {
        let regex = build_regex("^praha$", Some("i")).unwrap();
        assert!(regex.is_match("PRAHA"));
    }

    #[test]
    fn invalid_pattern() {
        assert!(matches!(build_regex("(", None), Err(ShaclError::InvalidPattern { .. })));
    }

    #[test]
    fn literal_and_iri_values() {
        let constraint = Constraint::Pattern("^https://".to_string(), None);
        let regex = build_regex("^https://", None).unwrap();
        let iri = Object::iri("https://data.example/");
        let literal: Object = Literal::plain("ftp://data.example/").into();
        assert!(validate_pattern(&iri, &regex, &constraint).is_none());
        assert!(validate_pattern(&literal, &regex, &constraint).is_some());
    }
}
