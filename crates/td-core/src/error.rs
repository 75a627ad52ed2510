//! Generation and query errors

use thiserror::Error;

use crate::dungeon::TileId;
use crate::tile::{Connector, GridPos, TileKind};

/// Everything that can go wrong while building or querying a dungeon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    /// Draw or peek on an exhausted bag
    #[error("cannot draw from an empty tile bag")]
    EmptyPool,

    /// The catalog has no connector template for this kind
    #[error("no connector template for tile kind {0}")]
    UnknownTileKind(TileKind),

    /// The end tile is not reachable from the start tile
    #[error("no path from tile {start} to tile {end}")]
    NoPathFound { start: TileId, end: TileId },

    /// A cap has no rotation that faces exactly one existing connector
    #[error("cap at {position} cannot face a single connector (best match: {matches})")]
    DegenerateCapping { position: GridPos, matches: usize },

    /// Every open cell was filled while the bag still held tiles
    #[error("no open cell left for {kind} with {remaining} tile(s) still in the bag")]
    FrontierExhausted { kind: TileKind, remaining: usize },

    /// The id does not name a tile in this graph
    #[error("tile {0} does not exist")]
    TileNotFound(TileId),

    /// A catalog template has an offset that is not a distinct edge midpoint
    #[error("invalid connector {offset} in template for {kind}")]
    InvalidConnector { kind: TileKind, offset: Connector },
}

pub type DungeonResult<T> = Result<T, DungeonError>;
