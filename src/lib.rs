//! Hexboard - coordinate core for hex-grid board games
//!
//! This crate provides the board-geometry layer for a settlers-style game:
//! - Axial coordinates on an unbounded hex lattice
//! - Tiles, edges, and corners with one canonical spelling per location
//! - Payload storage keyed by canonical location
//! - Adjacency queries between all three location kinds
//! - Flat snapshot export for a persistence layer
//!
//! Game rules (move legality, resource production, turn order) are out of
//! scope; callers build them on top of the adjacency queries.

pub mod board;
pub mod coords;
pub mod error;
pub mod grid;

// Re-exports for convenient access
pub use board::{Building, CellData, CornerData, EdgeData, GameBoard, Resource, TileData};
pub use coords::{Direction, Location, LocationKind, TILE_OFFSETS};
pub use error::GridError;
pub use grid::{HexGrid, Snapshot};
