//! td-core: tile-bag dungeon layout
//!
//! Draws tiles from a shuffled bag, lays them out on a grid so their
//! connectors line up, closes leftover openings with caps, and answers
//! shortest-path queries over the resulting adjacency graph.
//!
//! ```
//! use td_core::{Dungeon, GenerationConfig};
//!
//! let dungeon = Dungeon::generate(&GenerationConfig::with_seed(42)).unwrap();
//! let start = dungeon.start().unwrap().id;
//! let end = dungeon.end().unwrap().id;
//! let path = dungeon.shortest_path(start, end).unwrap();
//! assert_eq!(path.first().unwrap().id, start);
//! ```

pub mod bag;
pub mod config;
pub mod dungeon;
pub mod error;
pub mod generation;
pub mod pathfinding;
pub mod tile;

mod rng;

pub use bag::TileBag;
pub use config::{GenerationConfig, TileCounts};
pub use dungeon::{AdjacencyGraph, Dungeon, PlacedTile, TileId};
pub use error::{DungeonError, DungeonResult};
pub use generation::{GridPlacer, PlacementSink, generate_dungeon};
pub use pathfinding::{DistanceMap, PathFinder};
pub use rng::GameRng;
pub use tile::{Connector, GridPos, Rotation, TileCatalog, TileKind};
