//! Undirected tile adjacency

use std::collections::BTreeSet;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::{DungeonError, DungeonResult};

/// Index of a tile in placement order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub usize);

impl TileId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Adjacency between tiles
///
/// Edges are unordered: adding `a - b` always records both directions, so a
/// traversal can never see a link one way only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGraph {
    neighbors: Vec<BTreeSet<TileId>>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `count` tiles and no edges
    pub fn with_nodes(count: usize) -> Self {
        Self {
            neighbors: vec![BTreeSet::new(); count],
        }
    }

    pub fn add_node(&mut self) -> TileId {
        self.neighbors.push(BTreeSet::new());
        TileId(self.neighbors.len() - 1)
    }

    /// Link two tiles. Self-links are ignored.
    pub fn add_edge(&mut self, a: TileId, b: TileId) -> DungeonResult<()> {
        self.check(a)?;
        self.check(b)?;
        if a != b {
            self.neighbors[a.0].insert(b);
            self.neighbors[b.0].insert(a);
        }
        Ok(())
    }

    pub fn contains(&self, id: TileId) -> bool {
        id.0 < self.neighbors.len()
    }

    pub(crate) fn check(&self, id: TileId) -> DungeonResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DungeonError::TileNotFound(id))
        }
    }

    /// Neighbours in ascending id order; empty for unknown ids
    pub fn neighbors(&self, id: TileId) -> impl Iterator<Item = TileId> + '_ {
        self.neighbors.get(id.0).into_iter().flatten().copied()
    }

    pub fn degree(&self, id: TileId) -> usize {
        self.neighbors.get(id.0).map_or(0, BTreeSet::len)
    }

    pub fn is_adjacent(&self, a: TileId, b: TileId) -> bool {
        self.neighbors.get(a.0).is_some_and(|n| n.contains(&b))
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Each edge once, as `(lower, higher)`
    pub fn edges(&self) -> impl Iterator<Item = (TileId, TileId)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(i, set)| {
            set.iter()
                .filter(move |n| n.0 > i)
                .map(move |&n| (TileId(i), n))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_symmetric() {
        let mut graph = AdjacencyGraph::with_nodes(3);
        graph.add_edge(TileId(0), TileId(2)).unwrap();
        assert!(graph.is_adjacent(TileId(0), TileId(2)));
        assert!(graph.is_adjacent(TileId(2), TileId(0)));
        assert!(!graph.is_adjacent(TileId(0), TileId(1)));

        // Adding the reverse direction does not create a second edge.
        graph.add_edge(TileId(2), TileId(0)).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(TileId(0), TileId(2))]);
    }

    #[test]
    fn test_unknown_tile() {
        let mut graph = AdjacencyGraph::new();
        let a = graph.add_node();
        assert_eq!(
            graph.add_edge(a, TileId(5)),
            Err(DungeonError::TileNotFound(TileId(5)))
        );
        assert_eq!(graph.degree(TileId(5)), 0);
        assert_eq!(graph.neighbors(TileId(5)).count(), 0);
    }

    #[test]
    fn test_self_link_ignored() {
        let mut graph = AdjacencyGraph::with_nodes(1);
        graph.add_edge(TileId(0), TileId(0)).unwrap();
        assert_eq!(graph.degree(TileId(0)), 0);
    }
}
