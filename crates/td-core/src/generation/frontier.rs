//! Occupied and open cells during placement

use std::collections::HashSet;

use crate::tile::GridPos;

/// Cells that hold a tile, and empty cells a placed connector opens into
///
/// The two sets never overlap. Open cells keep the order they were found
/// in, which decides ties when picking the next cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    occupied: HashSet<GridPos>,
    available: Vec<GridPos>,
}

impl Frontier {
    /// Nothing placed yet; only the origin is open
    pub fn new() -> Self {
        Self {
            occupied: HashSet::new(),
            available: vec![GridPos::ORIGIN],
        }
    }

    /// Take the open cell closest to the origin, first found on ties
    pub fn take_nearest(&mut self) -> Option<GridPos> {
        let (index, _) = self
            .available
            .iter()
            .enumerate()
            .min_by_key(|(_, pos)| pos.norm_squared())?;
        let pos = self.available.remove(index);
        self.occupied.insert(pos);
        Some(pos)
    }

    /// Open every candidate cell that is neither occupied nor already open
    pub fn open(&mut self, candidates: impl IntoIterator<Item = GridPos>) {
        for pos in candidates {
            if !self.occupied.contains(&pos) && !self.available.contains(&pos) {
                self.available.push(pos);
            }
        }
    }

    /// Occupy all open cells, returning them in discovery order
    pub fn close_all(&mut self) -> Vec<GridPos> {
        let closed = std::mem::take(&mut self.available);
        self.occupied.extend(closed.iter().copied());
        closed
    }

    pub fn available(&self) -> &[GridPos] {
        &self.available
    }

    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.occupied.contains(&pos)
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.available(), &[GridPos::ORIGIN]);
        assert_eq!(frontier.take_nearest(), Some(GridPos::ORIGIN));
        assert!(frontier.is_occupied(GridPos::ORIGIN));
        assert_eq!(frontier.take_nearest(), None);
    }

    #[test]
    fn test_nearest_with_first_found_tie_break() {
        let mut frontier = Frontier::new();
        frontier.take_nearest();
        frontier.open([
            GridPos::cell(2, 0),
            GridPos::cell(0, -1),
            GridPos::cell(1, 0),
        ]);
        assert_eq!(frontier.take_nearest(), Some(GridPos::cell(0, -1)));
        assert_eq!(frontier.take_nearest(), Some(GridPos::cell(1, 0)));
        assert_eq!(frontier.take_nearest(), Some(GridPos::cell(2, 0)));
    }

    #[test]
    fn test_open_skips_known_cells() {
        let mut frontier = Frontier::new();
        frontier.take_nearest();
        frontier.open([GridPos::ORIGIN, GridPos::cell(0, 1), GridPos::cell(0, 1)]);
        assert_eq!(frontier.available(), &[GridPos::cell(0, 1)]);
    }

    #[test]
    fn test_close_all() {
        let mut frontier = Frontier::new();
        frontier.take_nearest();
        frontier.open([GridPos::cell(1, 0), GridPos::cell(-1, 0)]);
        assert_eq!(
            frontier.close_all(),
            vec![GridPos::cell(1, 0), GridPos::cell(-1, 0)]
        );
        assert!(frontier.available().is_empty());
        assert_eq!(frontier.occupied_count(), 3);
    }
}
