//! The finished dungeon
//!
//! Owns every placed tile of one generation run together with their
//! adjacency. Built once by the placer and read-only afterwards, so it can
//! be shared freely between path queries.

mod graph;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use graph::{AdjacencyGraph, TileId};

use crate::config::GenerationConfig;
use crate::error::DungeonResult;
use crate::generation::generate_dungeon;
use crate::pathfinding::PathFinder;
use crate::rng::GameRng;
use crate::tile::{Connector, GridPos, Rotation, TileCatalog, TileKind};

/// A tile at its final cell and orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub id: TileId,
    pub kind: TileKind,
    pub position: GridPos,
    pub rotation: Rotation,
}

impl PlacedTile {
    /// Connector points in world half-cell units
    pub fn connector_points(self, connectors: &[Connector]) -> impl Iterator<Item = GridPos> + '_ {
        let (position, rotation) = (self.position, self.rotation);
        connectors
            .iter()
            .map(move |c| c.world_point(position, rotation))
    }

    /// Cells the connectors open into
    pub fn neighbor_cells(self, connectors: &[Connector]) -> impl Iterator<Item = GridPos> + '_ {
        let (position, rotation) = (self.position, self.rotation);
        connectors
            .iter()
            .map(move |c| c.neighbor_cell(position, rotation))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dungeon {
    seed: u64,
    tiles: Vec<PlacedTile>,
    graph: AdjacencyGraph,
    /// Caps whose rotation could not face exactly one connector
    degenerate_caps: Vec<TileId>,
    #[serde(skip)]
    by_position: HashMap<GridPos, TileId>,
}

impl Dungeon {
    /// Generate with the standard catalog and the config's seed
    pub fn generate(config: &GenerationConfig) -> DungeonResult<Self> {
        let mut rng = config.rng();
        generate_dungeon(config, &TileCatalog::standard(), &mut rng, &mut ())
    }

    /// Link every tile to the tiles sitting in the cells its connectors
    /// open into. Links are stored both ways.
    pub(crate) fn assemble(
        seed: u64,
        tiles: Vec<PlacedTile>,
        degenerate_caps: Vec<TileId>,
        catalog: &TileCatalog,
    ) -> DungeonResult<Self> {
        let by_position: HashMap<_, _> = tiles.iter().map(|t| (t.position, t.id)).collect();
        let mut graph = AdjacencyGraph::with_nodes(tiles.len());

        for tile in &tiles {
            let connectors = catalog.connectors(tile.kind)?;
            for cell in tile.neighbor_cells(connectors) {
                if let Some(&other) = by_position.get(&cell) {
                    graph.add_edge(tile.id, other)?;
                }
            }
        }

        Ok(Self {
            seed,
            tiles,
            graph,
            degenerate_caps,
            by_position,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All tiles in placement order
    pub fn tiles(&self) -> &[PlacedTile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&PlacedTile> {
        self.tiles.get(id.0)
    }

    pub fn tile_at(&self, position: GridPos) -> Option<&PlacedTile> {
        self.by_position.get(&position).and_then(|&id| self.tile(id))
    }

    /// The entrance; always the first tile placed
    pub fn start(&self) -> Option<&PlacedTile> {
        self.tiles.first()
    }

    /// The exit tile
    pub fn end(&self) -> Option<&PlacedTile> {
        self.tiles.iter().find(|t| t.kind == TileKind::End)
    }

    /// Any tile, picked uniformly
    pub fn random_tile(&self, rng: &mut GameRng) -> Option<&PlacedTile> {
        rng.choose(&self.tiles)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn cap_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.kind == TileKind::Cap).count()
    }

    /// Tiles drawn from the bag, Start and End included
    pub fn interior_count(&self) -> usize {
        self.len() - self.cap_count()
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn neighbors(&self, id: TileId) -> impl Iterator<Item = &PlacedTile> + '_ {
        self.graph.neighbors(id).filter_map(|n| self.tile(n))
    }

    pub fn degenerate_caps(&self) -> &[TileId] {
        &self.degenerate_caps
    }

    pub fn pathfinder(&self) -> PathFinder<'_> {
        PathFinder::new(&self.graph)
    }

    /// Fewest-hop route between two tiles, both included
    pub fn shortest_path(&self, start: TileId, end: TileId) -> DungeonResult<Vec<&PlacedTile>> {
        let path = self.pathfinder().shortest_path(start, end)?;
        Ok(path.into_iter().filter_map(|id| self.tile(id)).collect())
    }
}
