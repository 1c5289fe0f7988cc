//! Hex-grid coordinate algebra and topology.
//!
//! This crate provides the shared value types underlying pathfinding and
//! field-of-view computation on a hexagonal grid:
//!
//! - [`HexCoord`]: a dual-frame hex coordinate (canonical 120°-basis for
//!   geometry, rectangular frame for storage and display)
//! - [`Hexside`]: the six edge-directions of a hexagon, clockwise from North
//! - [`Hexsides`]: a bit-flag combination of hexsides
//! - [`Neighbour`]: one edge traversal, the hex reached plus the exit side
//!
//! All types are small `Copy` values; the grid itself lives elsewhere and is
//! consumed through capability traits in the dependent crates.

mod coords;
mod hexside;

pub use coords::{HexCoord, Neighbour};
pub use hexside::{Hexside, Hexsides};
