use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shopfront_core::FieldError;

/// An arbitrary mapping from integer index to weight, received as an entire
/// request body.
///
/// JSON object keys are always strings, so the key domain is made explicit
/// here: a key must be the base-10 representation of an unsigned integer
/// (no sign, no whitespace, no leading `+`). Any other key rejects the
/// whole body with a field-level error; there is no silent fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>")]
pub struct IndexWeights(BTreeMap<u32, f64>);

impl IndexWeights {
    pub fn get(&self, index: u32) -> Option<f64> {
        self.0.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for IndexWeights {
    type Error = FieldError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut weights = BTreeMap::new();
        for (key, value) in raw {
            // str::parse would also accept a leading `+`; the key domain is
            // digits only.
            let parsed = if key.bytes().all(|b| b.is_ascii_digit()) && !key.is_empty() {
                key.parse::<u32>().ok()
            } else {
                None
            };
            let index = parsed.ok_or_else(|| {
                FieldError::new(
                    key.clone(),
                    "integer_key",
                    format!("key {key:?} is not a base-10 unsigned integer"),
                )
            })?;
            weights.insert(index, value);
        }
        Ok(Self(weights))
    }
}

impl FromIterator<(u32, f64)> for IndexWeights {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_string_keys_are_coerced() {
        let weights: IndexWeights =
            serde_json::from_value(json!({ "1": 0.5, "2": 1.25 })).unwrap();
        assert_eq!(weights.get(1), Some(0.5));
        assert_eq!(weights.get(2), Some(1.25));
        assert_eq!(weights.len(), 2);
    }

    #[test]
    fn non_numeric_key_rejects_the_whole_body() {
        let result: Result<IndexWeights, _> =
            serde_json::from_value(json!({ "1": 0.5, "first": 1.0 }));
        assert!(result.is_err());
    }

    #[test]
    fn signed_and_padded_keys_are_rejected() {
        for key in ["-1", "+1", " 1", "1.0"] {
            let result: Result<IndexWeights, _> =
                serde_json::from_value(json!({ key: 0.5 }));
            assert!(result.is_err(), "key {key:?} should be rejected");
        }
    }

    #[test]
    fn absent_index_returns_none() {
        let weights: IndexWeights = serde_json::from_value(json!({ "2": 1.0 })).unwrap();
        assert_eq!(weights.get(1), None);
    }

    #[test]
    fn serializes_with_string_keys() {
        let weights: IndexWeights = [(1, 0.5)].into_iter().collect();
        assert_eq!(serde_json::to_value(&weights).unwrap(), json!({ "1": 0.5 }));
    }
}
