//! Tile kinds drawn from the bag

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Tile kind - decides the connector layout of a tile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    /// Entrance; always drawn first and placed with a fixed orientation
    Start = 0,

    /// Exit; a single connector
    End = 1,

    /// Two connectors at a right angle
    Corner = 2,

    /// Two opposite connectors
    Straight = 3,

    /// Four connectors
    Cross = 4,

    /// Dead end used to close open connectors after the bag runs out
    Cap = 5,
}

impl TileKind {
    /// Kinds that close a corridor with their only connector
    pub const fn is_terminator(self) -> bool {
        matches!(self, Self::End | Self::Cap)
    }

    /// Single-character glyph for text output
    pub const fn glyph(self) -> char {
        match self {
            Self::Start => 'S',
            Self::End => 'E',
            Self::Corner => 'L',
            Self::Straight => '|',
            Self::Cross => '+',
            Self::Cap => 'o',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_terminators() {
        let terminators: Vec<_> = TileKind::iter().filter(|k| k.is_terminator()).collect();
        assert_eq!(terminators, vec![TileKind::End, TileKind::Cap]);
    }

    #[test]
    fn test_display_and_serde_names() {
        assert_eq!(TileKind::Cross.to_string(), "Cross");
        assert_eq!(serde_json::to_string(&TileKind::Corner).unwrap(), "\"Corner\"");
    }
}
