//! Connector templates per tile kind

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{Connector, TileKind};
use crate::error::{DungeonError, DungeonResult};

/// Lookup table from tile kind to its local connector offsets
///
/// Loaded once and never mutated. Deserializes from a JSON object such as
/// `{"Cap": [{"x": 0, "y": 0, "z": 1}], ...}`; every template is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<TileKind, Vec<Connector>>")]
#[serde(into = "BTreeMap<TileKind, Vec<Connector>>")]
pub struct TileCatalog {
    templates: BTreeMap<TileKind, Vec<Connector>>,
}

impl TileCatalog {
    /// Built-in templates, with north as the default facing
    pub fn standard() -> Self {
        use crate::tile::Connector as C;

        let templates = BTreeMap::from([
            (TileKind::Start, vec![C::NORTH]),
            (TileKind::End, vec![C::NORTH]),
            (TileKind::Corner, vec![C::NORTH, C::EAST]),
            (TileKind::Straight, vec![C::NORTH, C::SOUTH]),
            (TileKind::Cross, vec![C::NORTH, C::EAST, C::SOUTH, C::WEST]),
            (TileKind::Cap, vec![C::NORTH]),
        ]);
        Self { templates }
    }

    /// Build a catalog from caller-supplied templates.
    ///
    /// Kinds may be missing; asking for one later fails with
    /// [`DungeonError::UnknownTileKind`].
    pub fn from_templates(
        templates: impl IntoIterator<Item = (TileKind, Vec<Connector>)>,
    ) -> DungeonResult<Self> {
        let templates: BTreeMap<_, _> = templates.into_iter().collect();

        for (&kind, connectors) in &templates {
            let mut seen = BTreeSet::new();
            for &offset in connectors {
                if !offset.is_cardinal() || !seen.insert(offset) {
                    return Err(DungeonError::InvalidConnector { kind, offset });
                }
            }
        }

        Ok(Self { templates })
    }

    /// Parse and validate a JSON catalog
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn connectors(&self, kind: TileKind) -> DungeonResult<&[Connector]> {
        self.templates
            .get(&kind)
            .map(Vec::as_slice)
            .ok_or(DungeonError::UnknownTileKind(kind))
    }

    pub fn connector_count(&self, kind: TileKind) -> DungeonResult<usize> {
        self.connectors(kind).map(<[_]>::len)
    }
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<BTreeMap<TileKind, Vec<Connector>>> for TileCatalog {
    type Error = DungeonError;

    fn try_from(templates: BTreeMap<TileKind, Vec<Connector>>) -> Result<Self, Self::Error> {
        Self::from_templates(templates)
    }
}

impl From<TileCatalog> for BTreeMap<TileKind, Vec<Connector>> {
    fn from(catalog: TileCatalog) -> Self {
        catalog.templates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::GridPos;
    use strum::IntoEnumIterator;

    #[test]
    fn test_standard_connector_counts() {
        let catalog = TileCatalog::standard();
        let counts: Vec<_> = TileKind::iter()
            .map(|k| catalog.connector_count(k).unwrap())
            .collect();
        // Start, End, Corner, Straight, Cross, Cap
        assert_eq!(counts, vec![1, 1, 2, 2, 4, 1]);
    }

    #[test]
    fn test_missing_kind_is_unknown() {
        let catalog = TileCatalog::from_templates([(TileKind::Cap, vec![Connector::NORTH])]).unwrap();
        assert_eq!(
            catalog.connectors(TileKind::Cross),
            Err(DungeonError::UnknownTileKind(TileKind::Cross))
        );
    }

    #[test]
    fn test_rejects_bad_offsets() {
        let diagonal = Connector(GridPos::cell(1, 1));
        assert_eq!(
            TileCatalog::from_templates([(TileKind::Corner, vec![Connector::NORTH, diagonal])]),
            Err(DungeonError::InvalidConnector {
                kind: TileKind::Corner,
                offset: diagonal
            })
        );

        let repeated = TileCatalog::from_templates([(
            TileKind::Straight,
            vec![Connector::NORTH, Connector::NORTH],
        )]);
        assert!(repeated.is_err());
    }

    #[test]
    fn test_json_round_trip_validates() {
        let json = serde_json::to_string(&TileCatalog::standard()).unwrap();
        assert_eq!(TileCatalog::from_json(&json).unwrap(), TileCatalog::standard());

        let bad = r#"{"Cap": [{"x": 0, "y": 0, "z": 2}]}"#;
        assert!(TileCatalog::from_json(bad).is_err());
    }
}
