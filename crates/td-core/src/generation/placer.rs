//! Grid placement
//!
//! Each drawn tile goes into the open cell nearest the origin and is turned
//! to line up as many of its connectors as possible with connectors already
//! on the grid. Once the bag is empty every cell still open gets a cap.

use std::collections::HashSet;

use log::{debug, warn};

use super::{Frontier, PlacementSink};
use crate::bag::TileBag;
use crate::dungeon::{Dungeon, PlacedTile, TileId};
use crate::error::{DungeonError, DungeonResult};
use crate::tile::{Connector, GridPos, Rotation, TileCatalog, TileKind};

/// Fixed orientation of the start tile, whatever its neighbours
pub const START_ROTATION: Rotation = Rotation::from_steps(2);

/// Result of a rotation search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationChoice {
    pub rotation: Rotation,
    /// Connectors meeting an already placed connector
    pub matches: usize,
}

/// Working state of one generation run
#[derive(Debug, Clone)]
pub struct GridPlacer<'c> {
    catalog: &'c TileCatalog,
    frontier: Frontier,
    tiles: Vec<PlacedTile>,
    /// World connector points (half-cell units) of every placed tile
    connector_points: HashSet<GridPos>,
    degenerate_caps: Vec<TileId>,
    strict_capping: bool,
}

impl<'c> GridPlacer<'c> {
    pub fn new(catalog: &'c TileCatalog) -> Self {
        Self {
            catalog,
            frontier: Frontier::new(),
            tiles: Vec::new(),
            connector_points: HashSet::new(),
            degenerate_caps: Vec::new(),
            strict_capping: false,
        }
    }

    /// Fail with [`DungeonError::DegenerateCapping`] instead of warning
    pub fn with_strict_capping(mut self, strict: bool) -> Self {
        self.strict_capping = strict;
        self
    }

    /// Placed tiles in placement order
    pub fn tiles(&self) -> &[PlacedTile] {
        &self.tiles
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// How many of `kind`'s connectors, posed at `position`/`rotation`,
    /// land on a connector of a tile already placed.
    ///
    /// Every placed tile counts, so asking about a tile after it was placed
    /// also counts its own connectors.
    pub fn connector_matches(
        &self,
        kind: TileKind,
        position: GridPos,
        rotation: Rotation,
    ) -> DungeonResult<usize> {
        let connectors = self.catalog.connectors(kind)?;
        Ok(connectors
            .iter()
            .filter(|c| {
                self.connector_points
                    .contains(&c.world_point(position, rotation))
            })
            .count())
    }

    /// Rotation with the most matches; the lowest rotation wins ties and the
    /// search stops as soon as one reaches `target` matches
    pub fn best_rotation(
        &self,
        kind: TileKind,
        position: GridPos,
        target: usize,
    ) -> DungeonResult<RotationChoice> {
        let mut best = RotationChoice {
            rotation: Rotation::IDENTITY,
            matches: self.connector_matches(kind, position, Rotation::IDENTITY)?,
        };

        for rotation in Rotation::ALL.into_iter().skip(1) {
            if best.matches == target {
                break;
            }
            let matches = self.connector_matches(kind, position, rotation)?;
            if matches > best.matches {
                best = RotationChoice { rotation, matches };
            }
        }

        Ok(best)
    }

    /// Cap rotation: the first one facing exactly one connector, otherwise
    /// the best match
    pub fn cap_rotation(&self, position: GridPos) -> DungeonResult<RotationChoice> {
        for rotation in Rotation::ALL {
            if self.connector_matches(TileKind::Cap, position, rotation)? == 1 {
                return Ok(RotationChoice {
                    rotation,
                    matches: 1,
                });
            }
        }
        self.best_rotation(TileKind::Cap, position, 1)
    }

    /// Place one tile in the nearest open cell
    pub fn place(&mut self, kind: TileKind) -> DungeonResult<PlacedTile> {
        let catalog = self.catalog;
        let connectors = catalog.connectors(kind)?;

        let position = self
            .frontier
            .take_nearest()
            .ok_or(DungeonError::FrontierExhausted { kind, remaining: 0 })?;

        let choice = self.best_rotation(kind, position, connectors.len())?;
        let rotation = if kind == TileKind::Start {
            START_ROTATION
        } else {
            choice.rotation
        };

        let tile = self.push(kind, position, rotation, connectors);
        self.frontier.open(tile.neighbor_cells(connectors));

        debug!(
            "placed {kind} {} at {position} facing {rotation} ({}/{} connectors matched)",
            tile.id,
            choice.matches,
            connectors.len()
        );
        Ok(tile)
    }

    /// Draw and place tiles until the bag is empty.
    ///
    /// A terminator that would fill the last open cell is put back behind
    /// the next tile when that tile opens new cells.
    pub fn place_all(
        &mut self,
        bag: &mut TileBag,
        sink: &mut impl PlacementSink,
    ) -> DungeonResult<()> {
        while !bag.is_empty() {
            let kind = bag.draw()?;

            let next_opens = bag.peek().is_ok_and(|next| !next.is_terminator());
            if kind.is_terminator() && next_opens && self.frontier.available().len() <= 1 {
                debug!("holding {kind} back, it would close the last open cell");
                bag.defer(kind);
                continue;
            }

            if self.frontier.available().is_empty() {
                return Err(DungeonError::FrontierExhausted {
                    kind,
                    remaining: bag.len(),
                });
            }

            let tile = self.place(kind)?;
            sink.tile_placed(&tile);
        }
        Ok(())
    }

    /// Put a cap on every open cell, facing the connector that opened it.
    /// Returns the number of caps placed.
    pub fn cap_open_connectors(&mut self, sink: &mut impl PlacementSink) -> DungeonResult<usize> {
        let catalog = self.catalog;
        let connectors = catalog.connectors(TileKind::Cap)?;
        let open = self.frontier.close_all();

        for &position in &open {
            let choice = self.cap_rotation(position)?;
            if choice.matches != 1 {
                let err = DungeonError::DegenerateCapping {
                    position,
                    matches: choice.matches,
                };
                if self.strict_capping {
                    return Err(err);
                }
                warn!("{err}; keeping rotation {}", choice.rotation);
                self.degenerate_caps.push(TileId(self.tiles.len()));
            }

            let tile = self.push(TileKind::Cap, position, choice.rotation, connectors);
            debug!("capped {position} facing {}", tile.rotation);
            sink.tile_placed(&tile);
        }

        Ok(open.len())
    }

    /// Freeze the layout and link neighbouring tiles
    pub fn finalize(self, seed: u64) -> DungeonResult<Dungeon> {
        Dungeon::assemble(seed, self.tiles, self.degenerate_caps, self.catalog)
    }

    fn push(
        &mut self,
        kind: TileKind,
        position: GridPos,
        rotation: Rotation,
        connectors: &[Connector],
    ) -> PlacedTile {
        let tile = PlacedTile {
            id: TileId(self.tiles.len()),
            kind,
            position,
            rotation,
        };
        self.connector_points
            .extend(tile.connector_points(connectors));
        self.tiles.push(tile);
        tile
    }
}
