//! Hex board geometry with axial coordinates
//!
//! A location on the board is a tile `(x, y)`, or a corner/edge addressed as
//! a tile plus one of 12 symbolic directions. Each corner is shared by up to
//! three tiles and each edge by two, so the same physical spot has several
//! spellings; `Location` collapses them into one canonical form so that
//! equality and hashing just work.

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axial neighbor offsets (dx, dy)
pub const TILE_OFFSETS: [(i32, i32); 6] = [
    (1, 0),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (0, -1),
    (1, -1),
];

// ============================================================================
// DIRECTIONS
// ============================================================================

/// One of the 12 symbolic directions identifying a corner or edge of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    CornerNe,
    CornerN,
    CornerNw,
    CornerSw,
    CornerS,
    CornerSe,
    EdgeNe,
    EdgeNw,
    EdgeW,
    EdgeSw,
    EdgeSe,
    EdgeE,
}

impl Direction {
    /// All six corner directions
    pub const CORNERS: [Direction; 6] = [
        Direction::CornerNe,
        Direction::CornerN,
        Direction::CornerNw,
        Direction::CornerSw,
        Direction::CornerS,
        Direction::CornerSe,
    ];

    /// All six edge directions
    pub const EDGES: [Direction; 6] = [
        Direction::EdgeE,
        Direction::EdgeNe,
        Direction::EdgeNw,
        Direction::EdgeW,
        Direction::EdgeSw,
        Direction::EdgeSe,
    ];

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Direction::CornerNe
                | Direction::CornerN
                | Direction::CornerNw
                | Direction::CornerSw
                | Direction::CornerS
                | Direction::CornerSe
        )
    }

    pub fn is_edge(self) -> bool {
        !self.is_corner()
    }

    /// Identifier used in the textual coordinate form
    pub fn name(self) -> &'static str {
        match self {
            Direction::CornerNe => "CORNER_NE",
            Direction::CornerN => "CORNER_N",
            Direction::CornerNw => "CORNER_NW",
            Direction::CornerSw => "CORNER_SW",
            Direction::CornerS => "CORNER_S",
            Direction::CornerSe => "CORNER_SE",
            Direction::EdgeNe => "EDGE_NE",
            Direction::EdgeNw => "EDGE_NW",
            Direction::EdgeW => "EDGE_W",
            Direction::EdgeSw => "EDGE_SW",
            Direction::EdgeSe => "EDGE_SE",
            Direction::EdgeE => "EDGE_E",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let dir = match s {
            "CORNER_NE" => Direction::CornerNe,
            "CORNER_N" => Direction::CornerN,
            "CORNER_NW" => Direction::CornerNw,
            "CORNER_SW" => Direction::CornerSw,
            "CORNER_S" => Direction::CornerS,
            "CORNER_SE" => Direction::CornerSe,
            "EDGE_NE" => Direction::EdgeNe,
            "EDGE_NW" => Direction::EdgeNw,
            "EDGE_W" => Direction::EdgeW,
            "EDGE_SW" => Direction::EdgeSw,
            "EDGE_SE" => Direction::EdgeSe,
            "EDGE_E" => Direction::EdgeE,
            _ => return Err(GridError::InvalidCoordinate(s.to_string())),
        };
        Ok(dir)
    }
}

// ============================================================================
// LOCATIONS
// ============================================================================

/// Coarse location classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Tile,
    Edge,
    Corner,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocationKind::Tile => "tile",
            LocationKind::Edge => "edge",
            LocationKind::Corner => "corner",
        };
        f.write_str(name)
    }
}

/// Canonical slot of a location relative to its anchor tile.
///
/// Every corner resolves to CORNER_NE or CORNER_N of some tile, and every
/// edge to EDGE_E, EDGE_NE, or EDGE_NW, so five slots (plus the tile itself)
/// cover the whole board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Slot {
    Tile,
    EdgeE,
    EdgeNe,
    EdgeNw,
    CornerNe,
    CornerN,
}

/// A tile, edge, or corner location, always held in canonical form.
///
/// Two `Location` values are equal iff they address the same spot on the
/// board, regardless of which of the redundant spellings they were built
/// from, which makes them directly usable as map keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    x: i32,
    y: i32,
    slot: Slot,
}

impl Location {
    /// The tile at (x, y)
    pub const fn tile(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            slot: Slot::Tile,
        }
    }

    /// Build a location from any of its spellings, canonicalizing once.
    ///
    /// The rewrite moves the anchor tile so the direction lands on one of
    /// the five canonical slots; canonical directions are fixed points.
    pub fn new(x: i32, y: i32, direction: Option<Direction>) -> Self {
        let (dx, dy, slot) = match direction {
            None => (0, 0, Slot::Tile),
            Some(Direction::CornerNe) => (0, 0, Slot::CornerNe),
            Some(Direction::CornerN) => (0, 0, Slot::CornerN),
            Some(Direction::CornerNw) => (-1, 0, Slot::CornerNe),
            Some(Direction::CornerSw) => (0, -1, Slot::CornerN),
            Some(Direction::CornerS) => (0, -1, Slot::CornerNe),
            Some(Direction::CornerSe) => (1, -1, Slot::CornerN),
            Some(Direction::EdgeE) => (0, 0, Slot::EdgeE),
            Some(Direction::EdgeNe) => (0, 0, Slot::EdgeNe),
            Some(Direction::EdgeNw) => (0, 0, Slot::EdgeNw),
            Some(Direction::EdgeW) => (-1, 0, Slot::EdgeE),
            Some(Direction::EdgeSw) => (0, -1, Slot::EdgeNe),
            Some(Direction::EdgeSe) => (1, -1, Slot::EdgeNw),
        };
        Self {
            x: x + dx,
            y: y + dy,
            slot,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Canonical direction, `None` for tiles
    pub fn direction(&self) -> Option<Direction> {
        match self.slot {
            Slot::Tile => None,
            Slot::EdgeE => Some(Direction::EdgeE),
            Slot::EdgeNe => Some(Direction::EdgeNe),
            Slot::EdgeNw => Some(Direction::EdgeNw),
            Slot::CornerNe => Some(Direction::CornerNe),
            Slot::CornerN => Some(Direction::CornerN),
        }
    }

    pub fn kind(&self) -> LocationKind {
        match self.slot {
            Slot::Tile => LocationKind::Tile,
            Slot::EdgeE | Slot::EdgeNe | Slot::EdgeNw => LocationKind::Edge,
            Slot::CornerNe | Slot::CornerN => LocationKind::Corner,
        }
    }

    pub fn is_tile(&self) -> bool {
        self.kind() == LocationKind::Tile
    }

    pub fn is_edge(&self) -> bool {
        self.kind() == LocationKind::Edge
    }

    pub fn is_corner(&self) -> bool {
        self.kind() == LocationKind::Corner
    }

    // ------------------------------------------------------------------
    // Neighbor tables, hand-enumerated per canonical slot. These sets are
    // the adjacency geometry for the canonical-direction convention above.
    // ------------------------------------------------------------------

    /// Tiles adjacent to this location: 6 for a tile, 3 for a corner,
    /// 2 for an edge.
    pub fn tile_neighbors(&self) -> Vec<Location> {
        let (x, y) = (self.x, self.y);
        match self.slot {
            Slot::Tile => TILE_OFFSETS
                .iter()
                .map(|&(dx, dy)| Location::tile(x + dx, y + dy))
                .collect(),
            Slot::CornerNe => vec![
                Location::tile(x, y),
                Location::tile(x + 1, y),
                Location::tile(x, y + 1),
            ],
            Slot::CornerN => vec![
                Location::tile(x, y),
                Location::tile(x - 1, y + 1),
                Location::tile(x, y + 1),
            ],
            Slot::EdgeE => vec![Location::tile(x, y), Location::tile(x + 1, y)],
            Slot::EdgeNe => vec![Location::tile(x, y), Location::tile(x, y + 1)],
            Slot::EdgeNw => vec![Location::tile(x, y), Location::tile(x - 1, y + 1)],
        }
    }

    /// Edges adjacent to this location: the 6 sides of a tile, the 3 edges
    /// meeting at a corner, or the 4 edges continuing an edge.
    pub fn edge_neighbors(&self) -> Vec<Location> {
        let (x, y) = (self.x, self.y);
        let edge = |x, y, d| Location::new(x, y, Some(d));
        match self.slot {
            Slot::Tile => Direction::EDGES.iter().map(|&d| edge(x, y, d)).collect(),
            Slot::CornerNe => vec![
                edge(x, y, Direction::EdgeE),
                edge(x, y, Direction::EdgeNe),
                edge(x + 1, y, Direction::EdgeNw),
            ],
            Slot::CornerN => vec![
                edge(x, y, Direction::EdgeNe),
                edge(x, y, Direction::EdgeNw),
                edge(x, y + 1, Direction::EdgeW),
            ],
            Slot::EdgeE => vec![
                edge(x, y, Direction::EdgeNe),
                edge(x, y, Direction::EdgeSe),
                edge(x + 1, y, Direction::EdgeNw),
                edge(x + 1, y, Direction::EdgeSw),
            ],
            Slot::EdgeNe => vec![
                edge(x, y, Direction::EdgeE),
                edge(x, y, Direction::EdgeNw),
                edge(x, y + 1, Direction::EdgeSe),
                edge(x, y + 1, Direction::EdgeW),
            ],
            Slot::EdgeNw => vec![
                edge(x, y, Direction::EdgeNe),
                edge(x, y, Direction::EdgeW),
                edge(x - 1, y + 1, Direction::EdgeE),
                edge(x - 1, y + 1, Direction::EdgeSw),
            ],
        }
    }

    /// Corners adjacent to this location: the 6 corners of a tile, the 3
    /// corners one edge-step from a corner, or the 2 endpoints of an edge.
    pub fn corner_neighbors(&self) -> Vec<Location> {
        let (x, y) = (self.x, self.y);
        let corner = |x, y, d| Location::new(x, y, Some(d));
        match self.slot {
            Slot::Tile => Direction::CORNERS
                .iter()
                .map(|&d| corner(x, y, d))
                .collect(),
            Slot::CornerNe => vec![
                corner(x, y, Direction::CornerSe),
                corner(x, y, Direction::CornerN),
                corner(x + 1, y, Direction::CornerN),
            ],
            Slot::CornerN => vec![
                corner(x, y, Direction::CornerNe),
                corner(x, y, Direction::CornerNw),
                corner(x - 1, y + 1, Direction::CornerNe),
            ],
            Slot::EdgeE => vec![
                corner(x, y, Direction::CornerNe),
                corner(x, y, Direction::CornerSe),
            ],
            Slot::EdgeNe => vec![
                corner(x, y, Direction::CornerNe),
                corner(x, y, Direction::CornerN),
            ],
            Slot::EdgeNw => vec![
                corner(x, y, Direction::CornerN),
                corner(x, y, Direction::CornerNw),
            ],
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            None => write!(f, "{},{}", self.x, self.y),
            Some(dir) => write!(f, "{},{},{}", self.x, self.y, dir),
        }
    }
}

impl FromStr for Location {
    type Err = GridError;

    /// Parse `"x,y"` or `"x,y,DIRECTION_NAME"`, canonicalizing the result.
    fn from_str(s: &str) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidCoordinate(s.to_string());

        let mut parts = s.split(',').map(str::trim);
        let x: i32 = parts
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(invalid)?;
        let y: i32 = parts
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(invalid)?;
        let direction = match parts.next() {
            None => None,
            Some(token) => Some(token.parse::<Direction>().map_err(|_| invalid())?),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Location::new(x, y, direction))
    }
}
