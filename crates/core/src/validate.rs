//! Field-level constraint checkers.
//!
//! Declarative constraint metadata from the route contracts is expressed
//! here as plain functions composed per field. Each checker returns either
//! `Ok(())` or a [`FieldError`] naming the field and the constraint that
//! rejected it; types with constrained fields implement [`Validate`] by
//! accumulating checker results into [`ValidationErrors`].

use regex::Regex;

use crate::error::{FieldError, ValidationErrors};

/// A value whose field constraints can be checked after deserialization.
///
/// The API layer invokes this from its extractors, so handlers only ever
/// see values that passed every check.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Numeric bounds with distinct inclusive and exclusive edges.
///
/// `gt`/`lt` are exclusive, `ge`/`le` inclusive; `gt: Some(1)` rejects 1
/// itself while `le: Some(500)` accepts 500.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub gt: Option<T>,
    pub ge: Option<T>,
    pub lt: Option<T>,
    pub le: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            gt: None,
            ge: None,
            lt: None,
            le: None,
        }
    }
}

/// Check a numeric value against [`Bounds`].
pub fn in_bounds<T>(field: &str, value: T, bounds: &Bounds<T>) -> Result<(), FieldError>
where
    T: PartialOrd + Copy + core::fmt::Display,
{
    if let Some(min) = bounds.gt
        && value <= min
    {
        return Err(FieldError::new(
            field,
            "gt",
            format!("must be greater than {min}"),
        ));
    }
    if let Some(min) = bounds.ge
        && value < min
    {
        return Err(FieldError::new(
            field,
            "ge",
            format!("must be greater than or equal to {min}"),
        ));
    }
    if let Some(max) = bounds.lt
        && value >= max
    {
        return Err(FieldError::new(
            field,
            "lt",
            format!("must be less than {max}"),
        ));
    }
    if let Some(max) = bounds.le
        && value > max
    {
        return Err(FieldError::new(
            field,
            "le",
            format!("must be less than or equal to {max}"),
        ));
    }
    Ok(())
}

/// Check a string's character length against optional min/max bounds.
pub fn length(
    field: &str,
    value: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), FieldError> {
    let chars = value.chars().count();
    if let Some(min) = min
        && chars < min
    {
        return Err(FieldError::new(
            field,
            "min_length",
            format!("must be at least {min} characters"),
        ));
    }
    if let Some(max) = max
        && chars > max
    {
        return Err(FieldError::new(
            field,
            "max_length",
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Check a string against a compiled pattern.
pub fn matches(
    field: &str,
    value: &str,
    pattern: &Regex,
    description: &str,
) -> Result<(), FieldError> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::new(
            field,
            "pattern",
            format!("must match {description}"),
        ))
    }
}

/// Check that a string parses as a well-formed absolute URL.
pub fn well_formed_url(field: &str, value: &str) -> Result<(), FieldError> {
    match url::Url::parse(value) {
        Ok(_) => Ok(()),
        Err(err) => Err(FieldError::new(
            field,
            "url",
            format!("must be a well-formed URL: {err}"),
        )),
    }
}

/// Convenience for implementing [`Validate`] over a list of checks.
pub fn collect<const N: usize>(checks: [Result<(), FieldError>; N]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for check in checks {
        errors.check(check);
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exclusive_lower_bound_rejects_the_boundary_value() {
        let bounds = Bounds {
            gt: Some(1),
            le: Some(500),
            ..Bounds::default()
        };
        assert!(in_bounds("item_id", 1, &bounds).is_err());
        assert!(in_bounds("item_id", 2, &bounds).is_ok());
    }

    #[test]
    fn inclusive_upper_bound_accepts_the_boundary_value() {
        let bounds = Bounds {
            gt: Some(1),
            le: Some(500),
            ..Bounds::default()
        };
        assert!(in_bounds("item_id", 500, &bounds).is_ok());
        let err = in_bounds("item_id", 501, &bounds).unwrap_err();
        assert_eq!(err.constraint, "le");
    }

    #[test]
    fn float_bounds_distinguish_gt_from_ge() {
        let exclusive = Bounds {
            gt: Some(0.0),
            ..Bounds::default()
        };
        assert!(in_bounds("price", 0.0, &exclusive).is_err());

        let inclusive = Bounds {
            ge: Some(0.0),
            ..Bounds::default()
        };
        assert!(in_bounds("price", 0.0, &inclusive).is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Three characters, more than three bytes.
        assert!(length("q", "äöü", Some(3), Some(50)).is_ok());
        assert!(length("q", "ab", Some(3), Some(50)).is_err());
    }

    #[test]
    fn length_rejects_over_maximum() {
        let err = length("description", &"x".repeat(11), None, Some(10)).unwrap_err();
        assert_eq!(err.constraint, "max_length");
        assert!(length("description", &"x".repeat(10), None, Some(10)).is_ok());
    }

    #[test]
    fn pattern_mismatch_names_the_constraint() {
        let pattern = Regex::new("^[A-Z]").unwrap();
        assert!(matches("q", "Abcdef", &pattern, "^[A-Z]").is_ok());
        let err = matches("q", "abcdef", &pattern, "^[A-Z]").unwrap_err();
        assert_eq!(err.constraint, "pattern");
    }

    #[test]
    fn url_check_rejects_relative_and_garbage_values() {
        assert!(well_formed_url("url", "https://example.com/foo.png").is_ok());
        assert!(well_formed_url("url", "not a url").is_err());
        assert!(well_formed_url("url", "/relative/path").is_err());
    }

    #[test]
    fn collect_reports_every_failing_field() {
        let result = collect([
            in_bounds(
                "price",
                -1.0,
                &Bounds {
                    gt: Some(0.0),
                    ..Bounds::default()
                },
            ),
            length("description", &"x".repeat(20), None, Some(10)),
            Ok(()),
        ]);
        let errors = result.unwrap_err();
        assert_eq!(errors.0.len(), 2);
    }

    proptest! {
        /// Property: the (1, 500] bound accepts exactly 2..=500.
        #[test]
        fn bounded_id_domain_is_exact(value in -1000i64..1000) {
            let bounds = Bounds { gt: Some(1), le: Some(500), ..Bounds::default() };
            let accepted = in_bounds("item_id", value, &bounds).is_ok();
            prop_assert_eq!(accepted, (2..=500).contains(&value));
        }

        /// Property: a value inside both edges always passes.
        #[test]
        fn values_strictly_inside_bounds_pass(lo in -500.0f64..0.0, hi in 1.0f64..500.0) {
            let bounds = Bounds { gt: Some(lo), lt: Some(hi), ..Bounds::default() };
            prop_assert!(in_bounds("v", 0.5, &bounds).is_ok());
        }
    }
}
