//! Typed board layer over the hex grid
//!
//! The grid stores opaque payloads; this module pins down the record shapes
//! a settlers-style board actually stores at each location kind and enforces
//! the kind match at the boundary. Game rules (move legality, production,
//! turns) live above this layer.

use crate::coords::{Location, LocationKind};
use crate::error::GridError;
use crate::grid::{HexGrid, Snapshot};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resource printed on a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Wheat,
    Sheep,
    Rocks,
    Clay,
    Wood,
    Desert,
    Ocean,
}

/// Building occupying a corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Building {
    Settlement,
    City,
}

/// Payload stored at a tile location
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileData {
    /// Number in the circle on the tile
    pub number: Option<u8>,
    pub resource: Option<Resource>,
    /// True while the thief sits on this tile
    #[serde(default)]
    pub thief: bool,
    /// Hidden until someone builds nearby
    #[serde(default)]
    pub facedown: bool,
}

/// Payload stored at a corner location
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerData {
    /// Owning player, `None` while unclaimed
    pub player: Option<String>,
    pub building: Option<Building>,
}

/// Payload stored at an edge location
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Owning player, `None` while unclaimed
    pub player: Option<String>,
    pub port: Option<String>,
}

/// Payload stored at any board location, tagged by kind
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellData {
    Tile(TileData),
    Corner(CornerData),
    Edge(EdgeData),
}

impl CellData {
    /// Location kind this payload belongs at
    pub fn kind(&self) -> LocationKind {
        match self {
            CellData::Tile(_) => LocationKind::Tile,
            CellData::Corner(_) => LocationKind::Corner,
            CellData::Edge(_) => LocationKind::Edge,
        }
    }
}

/// A hex grid holding typed tile/corner/edge records.
///
/// Placement goes through the `add_*` operations, which reject locations of
/// the wrong kind; raw reads go through the typed getters or the underlying
/// grid.
#[derive(Clone, Debug, Default)]
pub struct GameBoard {
    grid: HexGrid<CellData>,
}

impl GameBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying grid
    pub fn grid(&self) -> &HexGrid<CellData> {
        &self.grid
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn contains(&self, location: Location) -> bool {
        self.grid.contains(location)
    }

    /// Place a tile record, creating default records at every surrounding
    /// corner and edge slot that does not exist yet.
    pub fn add_tile(&mut self, location: Location, tile: TileData) -> Result<(), GridError> {
        check_kind(location, LocationKind::Tile)?;
        self.grid.set(location, CellData::Tile(tile));

        for corner in location.corner_neighbors() {
            if !self.grid.contains(corner) {
                self.grid.set(corner, CellData::Corner(CornerData::default()));
            }
        }
        for edge in location.edge_neighbors() {
            if !self.grid.contains(edge) {
                self.grid.set(edge, CellData::Edge(EdgeData::default()));
            }
        }
        tracing::trace!("added tile at {}", location);
        Ok(())
    }

    /// Place a corner record
    pub fn add_corner(&mut self, location: Location, corner: CornerData) -> Result<(), GridError> {
        check_kind(location, LocationKind::Corner)?;
        self.grid.set(location, CellData::Corner(corner));
        Ok(())
    }

    /// Place an edge record
    pub fn add_edge(&mut self, location: Location, edge: EdgeData) -> Result<(), GridError> {
        check_kind(location, LocationKind::Edge)?;
        self.grid.set(location, CellData::Edge(edge));
        Ok(())
    }

    /// Tile record at a location, `None` when absent or not a tile entry
    pub fn tile_at(&self, location: Location) -> Option<&TileData> {
        match self.grid.get(location) {
            Some(CellData::Tile(tile)) => Some(tile),
            _ => None,
        }
    }

    /// Corner record at a location, `None` when absent or not a corner entry
    pub fn corner_at(&self, location: Location) -> Option<&CornerData> {
        match self.grid.get(location) {
            Some(CellData::Corner(corner)) => Some(corner),
            _ => None,
        }
    }

    /// Edge record at a location, `None` when absent or not an edge entry
    pub fn edge_at(&self, location: Location) -> Option<&EdgeData> {
        match self.grid.get(location) {
            Some(CellData::Edge(edge)) => Some(edge),
            _ => None,
        }
    }

    /// Remove and return the record at a location; a no-op when absent
    pub fn remove(&mut self, location: Location) -> Option<CellData> {
        self.grid.delete(location)
    }

    pub fn tile_neighbors(&self, location: Location, filter_to_existing: bool) -> Vec<Location> {
        self.grid.tile_neighbors(location, filter_to_existing)
    }

    pub fn edge_neighbors(&self, location: Location, filter_to_existing: bool) -> Vec<Location> {
        self.grid.edge_neighbors(location, filter_to_existing)
    }

    pub fn corner_neighbors(&self, location: Location, filter_to_existing: bool) -> Vec<Location> {
        self.grid.corner_neighbors(location, filter_to_existing)
    }

    /// Export every record under its canonical location string
    pub fn export(&self) -> Snapshot<CellData> {
        self.grid.export()
    }

    /// Rebuild a board from an exported snapshot.
    ///
    /// Beyond key parsing, every payload's kind must match its location's
    /// kind; a corner record filed under a tile key is a malformed snapshot,
    /// not something to coerce.
    pub fn from_snapshot(snapshot: Snapshot<CellData>) -> Result<Self, GridError> {
        let mut grid = HexGrid::new();
        for (key, value) in snapshot.tiles {
            let location: Location = key.parse()?;
            if value.kind() != location.kind() {
                return Err(GridError::MalformedPayload(format!(
                    "{} payload stored at {} location {}",
                    value.kind(),
                    location.kind(),
                    location
                )));
            }
            grid.set(location, value);
        }
        tracing::debug!("loaded board snapshot with {} entries", grid.len());
        Ok(Self { grid })
    }

    /// Load a board from a JSON snapshot file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file {}", path.display()))?;
        let snapshot: Snapshot<CellData> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse board file {}", path.display()))?;
        Ok(Self::from_snapshot(snapshot)?)
    }

    /// Save the board as a JSON snapshot file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&self.export())?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write board file {}", path.display()))?;
        Ok(())
    }
}

fn check_kind(location: Location, expected: LocationKind) -> Result<(), GridError> {
    if location.kind() == expected {
        Ok(())
    } else {
        Err(GridError::WrongLocationKind { location, expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    fn wheat_tile(number: u8) -> TileData {
        TileData {
            number: Some(number),
            resource: Some(Resource::Wheat),
            thief: false,
            facedown: false,
        }
    }

    #[test]
    fn test_add_tile_populates_surroundings() {
        let mut board = GameBoard::new();
        board.add_tile(loc("0,0"), wheat_tile(5)).unwrap();

        // 1 tile + 6 corners + 6 edges
        assert_eq!(board.len(), 13);
        assert_eq!(board.tile_at(loc("0,0")), Some(&wheat_tile(5)));
        for corner in board.corner_neighbors(loc("0,0"), false) {
            assert_eq!(board.corner_at(corner), Some(&CornerData::default()));
        }
        for edge in board.edge_neighbors(loc("0,0"), false) {
            assert_eq!(board.edge_at(edge), Some(&EdgeData::default()));
        }
    }

    #[test]
    fn test_add_tile_keeps_existing_records() {
        let mut board = GameBoard::new();
        let corner = CornerData {
            player: Some("ada".to_string()),
            building: Some(Building::Settlement),
        };
        board.add_corner(loc("0,0,CORNER_N"), corner.clone()).unwrap();
        board.add_tile(loc("0,0"), wheat_tile(8)).unwrap();

        assert_eq!(board.corner_at(loc("0,0,CORNER_N")), Some(&corner));
    }

    #[test]
    fn test_add_rejects_wrong_kind() {
        let mut board = GameBoard::new();
        let err = board.add_tile(loc("0,0,CORNER_N"), TileData::default());
        assert!(matches!(
            err,
            Err(GridError::WrongLocationKind {
                expected: LocationKind::Tile,
                ..
            })
        ));

        let err = board.add_corner(loc("0,0,EDGE_E"), CornerData::default());
        assert!(matches!(
            err,
            Err(GridError::WrongLocationKind {
                expected: LocationKind::Corner,
                ..
            })
        ));

        let err = board.add_edge(loc("0,0"), EdgeData::default());
        assert!(matches!(
            err,
            Err(GridError::WrongLocationKind {
                expected: LocationKind::Edge,
                ..
            })
        ));
        assert!(board.is_empty());
    }

    #[test]
    fn test_typed_getters_ignore_other_kinds() {
        let mut board = GameBoard::new();
        board.add_tile(loc("0,0"), wheat_tile(3)).unwrap();
        assert!(board.corner_at(loc("0,0")).is_none());
        assert!(board.edge_at(loc("0,0")).is_none());
        assert!(board.tile_at(loc("0,0,CORNER_N")).is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut board = GameBoard::new();
        board.add_edge(loc("2,2,EDGE_W"), EdgeData::default()).unwrap();
        assert!(board.remove(loc("1,2,EDGE_E")).is_some());
        assert!(board.remove(loc("1,2,EDGE_E")).is_none());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut board = GameBoard::new();
        board.add_tile(loc("1,-1"), wheat_tile(6)).unwrap();
        board
            .add_corner(
                loc("1,-1,CORNER_SE"),
                CornerData {
                    player: Some("grace".to_string()),
                    building: Some(Building::City),
                },
            )
            .unwrap();

        let snapshot = board.export();
        // The corner was spelled CORNER_SE; it exports under its canonical key
        assert!(snapshot.tiles.contains_key("2,-2,CORNER_N"));

        let restored = GameBoard::from_snapshot(snapshot).unwrap();
        assert_eq!(restored.export(), board.export());
        assert_eq!(
            restored.corner_at(loc("1,-1,CORNER_SE")).unwrap().building,
            Some(Building::City)
        );
    }

    #[test]
    fn test_snapshot_rejects_kind_mismatch() {
        let mut snapshot: Snapshot<CellData> = Snapshot::default();
        snapshot
            .tiles
            .insert("0,0".to_string(), CellData::Corner(CornerData::default()));
        assert!(matches!(
            GameBoard::from_snapshot(snapshot),
            Err(GridError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_cell_data_json_tagging() {
        let cell = CellData::Tile(wheat_tile(9));
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["kind"], "tile");
        assert_eq!(json["resource"], "wheat");
        assert_eq!(json["number"], 9);

        let parsed: CellData = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, cell);
    }

    #[test]
    fn test_load_save_round_trip() {
        let mut board = GameBoard::new();
        board.add_tile(loc("0,0"), wheat_tile(11)).unwrap();
        board
            .add_edge(
                loc("0,0,EDGE_SE"),
                EdgeData {
                    player: Some("alan".to_string()),
                    port: None,
                },
            )
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        board.save(&path).unwrap();

        let restored = GameBoard::load(&path).unwrap();
        assert_eq!(restored.export(), board.export());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(GameBoard::load(&dir.path().join("nope.json")).is_err());
    }
}
