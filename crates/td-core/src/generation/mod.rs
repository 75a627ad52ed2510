//! Dungeon generation
//!
//! Fills a bag, places its tiles one at a time, caps whatever is still
//! open and links the result into a [`Dungeon`].

mod frontier;
mod placer;

use log::{info, warn};

pub use frontier::Frontier;
pub use placer::{GridPlacer, RotationChoice, START_ROTATION};

use crate::bag::TileBag;
use crate::config::GenerationConfig;
use crate::dungeon::{Dungeon, PlacedTile};
use crate::error::{DungeonError, DungeonResult};
use crate::rng::GameRng;
use crate::tile::TileCatalog;

/// Receives tiles as they are placed, bag tiles first and caps last
pub trait PlacementSink {
    fn tile_placed(&mut self, tile: &PlacedTile);

    /// The tiles reported so far were discarded and placement starts over
    fn restarted(&mut self) {}
}

impl PlacementSink for () {
    fn tile_placed(&mut self, _tile: &PlacedTile) {}
}

impl PlacementSink for Vec<PlacedTile> {
    fn tile_placed(&mut self, tile: &PlacedTile) {
        self.push(*tile);
    }

    fn restarted(&mut self) {
        self.clear();
    }
}

impl<F: FnMut(&PlacedTile)> PlacementSink for F {
    fn tile_placed(&mut self, tile: &PlacedTile) {
        self(tile)
    }
}

/// Run the whole pipeline.
///
/// A layout that seals itself before the bag is empty is thrown away and a
/// new bag is drawn from the same random stream, up to
/// `config.max_attempts` times.
pub fn generate_dungeon(
    config: &GenerationConfig,
    catalog: &TileCatalog,
    rng: &mut GameRng,
    sink: &mut impl PlacementSink,
) -> DungeonResult<Dungeon> {
    let attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let mut bag = TileBag::new(&config.counts, rng);
        let mut placer = GridPlacer::new(catalog).with_strict_capping(config.strict_capping);

        match placer.place_all(&mut bag, sink) {
            Ok(()) => {}
            Err(err @ DungeonError::FrontierExhausted { .. }) if attempt < attempts => {
                warn!("attempt {attempt}/{attempts} discarded: {err}");
                sink.restarted();
                attempt += 1;
                continue;
            }
            Err(err) => return Err(err),
        }

        let caps = placer.cap_open_connectors(sink)?;
        let dungeon = placer.finalize(rng.seed())?;
        info!(
            "seed {}: placed {} bag tiles and {caps} caps ({} links)",
            rng.seed(),
            dungeon.interior_count(),
            dungeon.graph().edge_count()
        );
        return Ok(dungeon);
    }
}
