use serde::{Deserialize, Serialize};

/// A user as supplied in request bodies. Immutable value record; two users
/// with the same fields are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub full_name: Option<String>,
}
