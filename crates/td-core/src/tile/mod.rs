//! Tiles
//!
//! Tile kinds, their connector templates, and the lattice they are placed on.

mod catalog;
mod geometry;
mod kind;

pub use catalog::TileCatalog;
pub use geometry::{Connector, GridPos, Rotation};
pub use kind::TileKind;
