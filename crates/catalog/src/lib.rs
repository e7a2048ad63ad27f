//! `shopfront-catalog` — the schema definitions served by the demo API.
//!
//! Plain immutable value records: equality is structural, nothing here has
//! identity or a lifecycle beyond "deserialized from a request, consumed by
//! a handler". Constrained variants implement `shopfront_core::Validate`;
//! types whose constraints are representable as parses (bounded ids,
//! well-formed URLs, closed enums, integer-keyed maps) reject invalid input
//! during deserialization instead.

pub mod geometry;
pub mod image;
pub mod item;
pub mod model;
pub mod user;
pub mod weights;

pub use geometry::{Coordinates, Meters, Point, distance};
pub use image::{Image, WebImage};
pub use item::{Item, ItemId, LinkedItem, StrictItem, TaggedItem};
pub use model::ModelName;
pub use user::User;
pub use weights::IndexWeights;
