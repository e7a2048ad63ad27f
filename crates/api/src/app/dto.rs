//! Request DTOs and JSON shaping helpers.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use shopfront_catalog::{Coordinates, Item, Point, StrictItem, User};
use shopfront_core::{Validate, ValidationErrors, validate};

// -------------------------
// Query DTOs
// -------------------------

fn default_limit() -> usize {
    10
}

/// Paging window over the item fixture. Out-of-range values are legal and
/// simply truncate the result.
#[derive(Debug, Deserialize)]
pub struct ListRange {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Query parameters of the detailed-item route: a required boolean toggle
/// and an optional amount.
#[derive(Debug, Deserialize)]
pub struct DetailToggle {
    #[serde(deserialize_with = "lenient_bool")]
    pub short: bool,
    pub q: Option<i64>,
}

/// Optional integer query parameter shared by the item-creation route.
#[derive(Debug, Deserialize)]
pub struct OptionalAmount {
    pub q: Option<i64>,
}

/// Optional search string: when present it must be 3–50 characters and
/// start with an uppercase letter.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

static STARTS_UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z]").expect("hardcoded pattern compiles"));

impl Validate for SearchQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match &self.q {
            Some(q) => validate::collect([
                validate::length("q", q, Some(3), Some(50)),
                validate::matches("q", q, &STARTS_UPPERCASE, "^[A-Z]"),
            ]),
            None => Ok(()),
        }
    }
}

/// Required search string (no constraints beyond presence).
#[derive(Debug, Deserialize)]
pub struct RequiredSearch {
    pub q: String,
}

// -------------------------
// Body DTOs
// -------------------------

/// Two body records at once: the item plus an optional user.
#[derive(Debug, Deserialize)]
pub struct ItemAndUser {
    pub item: Item,
    pub user: Option<User>,
}

/// Item, user, and a scalar forced into the body alongside them.
#[derive(Debug, Deserialize)]
pub struct ItemUserImportance {
    pub item: Item,
    pub user: User,
    pub importance: i64,
}

/// A lone body record still wrapped under its own field name.
#[derive(Debug, Deserialize)]
pub struct EmbeddedItem {
    pub item: Item,
}

/// Embedded wrapper around the constrained item variant.
#[derive(Debug, Deserialize)]
pub struct EmbeddedStrictItem {
    pub item: StrictItem,
}

impl Validate for EmbeddedStrictItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.item
            .validate()
            .map_err(|errors| errors.with_prefix("item"))
    }
}

/// Two tuple-form coordinates: `{"loc1": [x, y], "loc2": [x, y]}`.
#[derive(Debug, Deserialize)]
pub struct CoordinatePair {
    pub loc1: Coordinates,
    pub loc2: Coordinates,
}

/// Two record-form coordinates: `{"loc1": {"x": .., "y": ..}, ...}`.
#[derive(Debug, Deserialize)]
pub struct PointPair {
    pub loc1: Point,
    pub loc2: Point,
}

// -------------------------
// Helpers
// -------------------------

/// Query-string booleans accept the same spellings the upstream dispatch
/// layer documents: 1/0, true/false, yes/no, on/off (case-insensitive).
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean value {other:?}"
        ))),
    }
}

/// Serialize a record into a JSON object map so handlers can merge extra
/// keys into it.
pub fn to_json_object<T: Serialize>(value: &T) -> serde_json::Map<String, serde_json::Value> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    }
}
