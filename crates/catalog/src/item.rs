use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use shopfront_core::validate::{self, Bounds};
use shopfront_core::{FieldError, Validate, ValidationErrors};

use crate::image::{Image, WebImage};

/// An item as sent in request bodies. No field constraints; the strict
/// variant is [`StrictItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

/// Item variant with field constraints: description capped at 10
/// characters, price strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrictItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl Validate for StrictItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate::collect([
            match &self.description {
                Some(description) => validate::length("description", description, None, Some(10)),
                None => Ok(()),
            },
            validate::in_bounds(
                "price",
                self.price,
                &Bounds {
                    gt: Some(0.0),
                    ..Bounds::default()
                },
            ),
        ])
    }
}

/// Item carrying a set of unique tags and an optional nested image.
///
/// `tags` deserializes from a JSON array into a set, so duplicates collapse
/// silently and order is not significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub image: Option<Image>,
}

/// [`TaggedItem`] whose nested image URL must be well-formed.
///
/// The URL is a parse-level constraint: a malformed `image.url` fails
/// deserialization of the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub image: Option<WebImage>,
}

/// Item identifier constrained to the range (1, 500].
///
/// The bound is enforced when deserializing, so path extraction rejects
/// out-of-range ids before any handler sees them. The lower edge is
/// exclusive: 1 itself is invalid, 2 and 500 are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64")]
pub struct ItemId(i64);

impl ItemId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ItemId {
    type Error = FieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        validate::in_bounds(
            "item_id",
            value,
            &Bounds {
                gt: Some(1),
                le: Some(500),
                ..Bounds::default()
            },
        )?;
        Ok(Self(value))
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
