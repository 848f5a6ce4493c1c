//! Cardinality constraint validators (sh:minCount, sh:maxCount)

use dcat_model::Object;

use super::{Constraint, ConstraintViolation};

/// Validate sh:minCount constraint
#[must_use]
pub fn validate_min_count(values: &[Object], min: usize) -> Option<ConstraintViolation> {
    (values.len() < min).then(|| ConstraintViolation {
        constraint: Constraint::MinCount(min),
        value: None,
        message: format!("Expected at least {min} value(s) but found {}", values.len()),
    })
}

/// Validate sh:maxCount constraint
#[must_use]
pub fn validate_max_count(values: &[Object], max: usize) -> Option<ConstraintViolation> {
    (values.len() > max).then(|| ConstraintViolation {
        constraint: Constraint::MaxCount(max),
        value: None,
        message: format!("Expected at most {max} value(s) but found {}", values.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_count() {
        let values = vec![Object::iri("https://a.example/1")];
        assert!(validate_min_count(&values, 1).is_none());
        let violation = validate_min_count(&values, 2);
        assert!(violation.is_some_and(|v| v.message.contains("at least 2")));
    }

    #[test]
    fn max_count() {
        let values = vec![Object::iri("https://a.example/1"), Object::iri("https://a.example/2")];
        assert!(validate_max_count(&values, 2).is_none());
        assert!(validate_max_count(&values, 1).is_some());
    }
}
