//! The tile bag
//!
//! A shuffled, front-drawn sequence of tile kinds. Start is always drawn
//! first and End always sits somewhere in the second half, so the exit
//! ends up away from the entrance.

use std::collections::VecDeque;

use crate::config::TileCounts;
use crate::error::{DungeonError, DungeonResult};
use crate::rng::GameRng;
use crate::tile::TileKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBag {
    tiles: VecDeque<TileKind>,
}

impl TileBag {
    /// Fill and shuffle a bag for the requested counts
    pub fn new(counts: &TileCounts, rng: &mut GameRng) -> Self {
        let mut tiles = Vec::with_capacity(counts.total());
        tiles.extend(std::iter::repeat_n(TileKind::Corner, counts.corner));
        tiles.extend(std::iter::repeat_n(TileKind::Straight, counts.straight));
        tiles.extend(std::iter::repeat_n(TileKind::Cross, counts.cross));

        rng.shuffle(&mut tiles);

        tiles.insert(0, TileKind::Start);
        let len = tiles.len();
        let end_index = rng.range_inclusive(len.div_ceil(2), len);
        tiles.insert(end_index, TileKind::End);

        Self {
            tiles: tiles.into(),
        }
    }

    /// A bag holding exactly this sequence, drawn front to back
    pub fn from_sequence(tiles: impl IntoIterator<Item = TileKind>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Remove and return the front tile
    pub fn draw(&mut self) -> DungeonResult<TileKind> {
        self.tiles.pop_front().ok_or(DungeonError::EmptyPool)
    }

    /// Front tile, without removing it
    pub fn peek(&self) -> DungeonResult<TileKind> {
        self.tiles.front().copied().ok_or(DungeonError::EmptyPool)
    }

    /// Return a drawn tile to the bag behind the next one
    pub fn defer(&mut self, kind: TileKind) {
        let index = self.tiles.len().min(1);
        self.tiles.insert(index, kind);
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Remaining tiles in draw order
    pub fn iter(&self) -> impl Iterator<Item = TileKind> + '_ {
        self.tiles.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn drain(bag: &mut TileBag) -> Vec<TileKind> {
        let mut drawn = Vec::new();
        while !bag.is_empty() {
            drawn.push(bag.draw().unwrap());
        }
        drawn
    }

    #[test]
    fn test_start_first_and_counts() {
        let mut rng = GameRng::new(42);
        let counts = TileCounts::new(3, 2, 1);
        let mut bag = TileBag::new(&counts, &mut rng);
        assert_eq!(bag.len(), 8);
        assert_eq!(bag.peek(), Ok(TileKind::Start));

        let drawn = drain(&mut bag);
        assert_eq!(drawn[0], TileKind::Start);
        let count = |kind| drawn.iter().filter(|&&k| k == kind).count();
        assert_eq!(count(TileKind::Start), 1);
        assert_eq!(count(TileKind::End), 1);
        assert_eq!(count(TileKind::Corner), 3);
        assert_eq!(count(TileKind::Straight), 2);
        assert_eq!(count(TileKind::Cross), 1);
        assert_eq!(count(TileKind::Cap), 0);
    }

    #[test]
    fn test_empty_bag_errors() {
        let mut bag = TileBag::from_sequence([TileKind::Start]);
        assert!(!bag.is_empty());
        assert_eq!(bag.draw(), Ok(TileKind::Start));
        assert!(bag.is_empty());
        assert_eq!(bag.draw(), Err(DungeonError::EmptyPool));
        assert_eq!(bag.peek(), Err(DungeonError::EmptyPool));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let bag = TileBag::from_sequence([TileKind::Cross, TileKind::Cap]);
        assert_eq!(bag.peek(), Ok(TileKind::Cross));
        assert_eq!(bag.peek(), Ok(TileKind::Cross));
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_defer_goes_behind_next() {
        let mut bag = TileBag::from_sequence([TileKind::End, TileKind::Corner, TileKind::Cross]);
        let end = bag.draw().unwrap();
        bag.defer(end);
        assert_eq!(
            bag.iter().collect::<Vec<_>>(),
            vec![TileKind::Corner, TileKind::End, TileKind::Cross]
        );

        let mut last = TileBag::from_sequence([TileKind::End]);
        let end = last.draw().unwrap();
        last.defer(end);
        assert_eq!(last.peek(), Ok(TileKind::End));
    }

    #[test]
    fn test_no_interior_tiles() {
        let mut rng = GameRng::new(42);
        let mut bag = TileBag::new(&TileCounts::new(0, 0, 0), &mut rng);
        assert_eq!(drain(&mut bag), vec![TileKind::Start, TileKind::End]);
    }

    #[test]
    fn test_end_can_be_last() {
        let counts = TileCounts::new(1, 1, 1);
        let last_seen = (0..200).any(|seed| {
            let mut rng = GameRng::new(seed);
            let bag = TileBag::new(&counts, &mut rng);
            bag.iter().last() == Some(TileKind::End)
        });
        assert!(last_seen);
    }

    proptest! {
        #[test]
        fn prop_bag_shape(
            corner in 0usize..12,
            straight in 0usize..12,
            cross in 0usize..12,
            seed in any::<u64>(),
        ) {
            let counts = TileCounts::new(corner, straight, cross);
            let mut rng = GameRng::new(seed);
            let mut bag = TileBag::new(&counts, &mut rng);
            let drawn = drain(&mut bag);
            let size = counts.total();

            prop_assert_eq!(drawn.len(), size);
            prop_assert_eq!(drawn[0], TileKind::Start);

            let end_index = drawn.iter().position(|&k| k == TileKind::End).unwrap();
            prop_assert!(end_index >= (size - 1).div_ceil(2));
            prop_assert!(end_index <= size - 1);
            prop_assert!(bag.is_empty());
        }
    }
}
