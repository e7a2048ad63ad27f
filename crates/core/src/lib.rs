//! `shopfront-core` — validation building blocks.
//!
//! This crate contains the **pure validation** primitives shared by the
//! schema and API layers: field-level constraint checkers, the structured
//! errors they produce, and the [`Validate`] trait the API layer invokes
//! before any handler runs.

pub mod error;
pub mod validate;

pub use error::{FieldError, ValidationErrors};
pub use validate::{Bounds, Validate};
