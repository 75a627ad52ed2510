//! Shortest paths over the tile adjacency graph
//!
//! Every link costs one step, so a breadth-first search gives exact hop
//! distances. The search records the tile each tile was discovered from and
//! the route is read back along those parents.

use std::collections::{HashMap, VecDeque};

use crate::dungeon::{AdjacencyGraph, TileId};
use crate::error::{DungeonError, DungeonResult};

/// Hop distances and discovery parents from one start tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    start: TileId,
    distances: HashMap<TileId, u32>,
    parents: HashMap<TileId, TileId>,
}

impl DistanceMap {
    pub fn start(&self) -> TileId {
        self.start
    }

    /// Hops from the start, or `None` if unreachable
    pub fn distance(&self, id: TileId) -> Option<u32> {
        self.distances.get(&id).copied()
    }

    pub fn is_reachable(&self, id: TileId) -> bool {
        self.distances.contains_key(&id)
    }

    /// Number of tiles reachable from the start, itself included
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Furthest reachable tile; lowest id wins ties
    pub fn furthest(&self) -> (TileId, u32) {
        self.distances
            .iter()
            .map(|(&id, &d)| (id, d))
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .unwrap_or((self.start, 0))
    }

    /// Route from the start to `end`, both included
    pub fn path_to(&self, end: TileId) -> DungeonResult<Vec<TileId>> {
        if !self.is_reachable(end) {
            return Err(DungeonError::NoPathFound {
                start: self.start,
                end,
            });
        }

        let mut path = vec![end];
        let mut current = end;
        while current != self.start {
            current = self.parents[&current];
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }
}

/// Read-only queries over a finished graph
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    graph: &'a AdjacencyGraph,
}

impl<'a> PathFinder<'a> {
    pub fn new(graph: &'a AdjacencyGraph) -> Self {
        Self { graph }
    }

    /// Breadth-first distances from `start`; first discovery fixes a distance
    pub fn distance_map(&self, start: TileId) -> DungeonResult<DistanceMap> {
        self.graph.check(start)?;

        let mut distances = HashMap::from([(start, 0)]);
        let mut parents = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(tile) = queue.pop_front() {
            let next = distances[&tile] + 1;
            for neighbor in self.graph.neighbors(tile) {
                if distances.contains_key(&neighbor) {
                    continue;
                }
                distances.insert(neighbor, next);
                parents.insert(neighbor, tile);
                queue.push_back(neighbor);
            }
        }

        Ok(DistanceMap {
            start,
            distances,
            parents,
        })
    }

    /// Fewest-hop route from `start` to `end`, both included
    pub fn shortest_path(&self, start: TileId, end: TileId) -> DungeonResult<Vec<TileId>> {
        self.graph.check(end)?;
        self.distance_map(start)?.path_to(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// start(0) - a(1), start - b(2), a - end(3), b - end
    fn diamond() -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::with_nodes(4);
        for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            graph.add_edge(TileId(a), TileId(b)).unwrap();
        }
        graph
    }

    #[test]
    fn test_same_tile() {
        let graph = diamond();
        let finder = PathFinder::new(&graph);
        assert_eq!(finder.shortest_path(TileId(2), TileId(2)), Ok(vec![TileId(2)]));
    }

    #[test]
    fn test_diamond() {
        let graph = diamond();
        let path = PathFinder::new(&graph)
            .shortest_path(TileId(0), TileId(3))
            .unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], TileId(0));
        assert_eq!(path[2], TileId(3));
        assert!(path[1] == TileId(1) || path[1] == TileId(2));
        for pair in path.windows(2) {
            assert!(graph.is_adjacent(pair[0], pair[1]));
        }
    }

    #[test]
    fn test_disconnected() {
        let mut graph = AdjacencyGraph::with_nodes(4);
        graph.add_edge(TileId(0), TileId(1)).unwrap();
        graph.add_edge(TileId(2), TileId(3)).unwrap();

        let finder = PathFinder::new(&graph);
        assert_eq!(
            finder.shortest_path(TileId(0), TileId(3)),
            Err(DungeonError::NoPathFound {
                start: TileId(0),
                end: TileId(3)
            })
        );
    }

    #[test]
    fn test_unknown_ids() {
        let graph = diamond();
        let finder = PathFinder::new(&graph);
        assert_eq!(
            finder.shortest_path(TileId(9), TileId(0)),
            Err(DungeonError::TileNotFound(TileId(9)))
        );
        assert_eq!(
            finder.shortest_path(TileId(0), TileId(9)),
            Err(DungeonError::TileNotFound(TileId(9)))
        );
    }

    #[test]
    fn test_prefers_short_route_over_long_ring() {
        // Ring 0-1-2-3-4-5-0: the way to 4 goes backwards through 5.
        let mut graph = AdjacencyGraph::with_nodes(6);
        for i in 0..6 {
            graph.add_edge(TileId(i), TileId((i + 1) % 6)).unwrap();
        }
        let map = PathFinder::new(&graph).distance_map(TileId(0)).unwrap();
        assert_eq!(map.distance(TileId(4)), Some(2));
        assert_eq!(map.path_to(TileId(4)).unwrap(), vec![TileId(0), TileId(5), TileId(4)]);
        assert_eq!(map.furthest(), (TileId(3), 3));
        assert_eq!(map.reachable_count(), 6);
    }
}
