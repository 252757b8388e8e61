//! World model for Roomwright: rooms, items, and directions.
//!
//! This crate defines the immutable graph a text adventure is authored as.
//! It knows nothing about sessions or inventories. You can construct the
//! model programmatically or parse it from the JSON payloads served by a
//! room/item endpoint.

/// Keyed collections of world definitions.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Item definitions.
pub mod item;
/// Load-boundary parsing of raw JSON payloads.
pub mod payload;
/// Room and direction definitions.
pub mod room;

/// Re-export catalog types.
pub use catalog::{Catalog, Items, Keyed, Rooms};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::Item;
/// Re-export payload parsers.
pub use payload::{parse_items, parse_rooms};
/// Re-export room types.
pub use room::{Direction, Room};
