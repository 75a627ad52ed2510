//! Generation parameters

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// How many of each interior kind go into the bag.
/// Start and End are always added exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileCounts {
    pub corner: usize,
    pub straight: usize,
    pub cross: usize,
}

impl TileCounts {
    pub const fn new(corner: usize, straight: usize, cross: usize) -> Self {
        Self {
            corner,
            straight,
            cross,
        }
    }

    /// Interior tiles only
    pub const fn interior(&self) -> usize {
        self.corner + self.straight + self.cross
    }

    /// Everything the bag will hold, Start and End included
    pub const fn total(&self) -> usize {
        self.interior() + 2
    }
}

impl Default for TileCounts {
    fn default() -> Self {
        Self::new(3, 2, 1)
    }
}

/// Options for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Fixed seed; `None` picks one from entropy
    pub seed: Option<u64>,

    pub counts: TileCounts,

    /// Fail instead of warning when a cap cannot face exactly one connector
    pub strict_capping: bool,

    /// Fresh bags to try when a layout seals itself before the bag is empty
    pub max_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            counts: TileCounts::default(),
            strict_capping: false,
            max_attempts: 16,
        }
    }
}

impl GenerationConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// RNG for this run, seeded from the config when it has a seed
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
