//! Payload storage keyed by canonical location
//!
//! `HexGrid` is the ownership container of the board layer: an unbounded map
//! from canonical `Location` to an opaque payload type, with the adjacency
//! queries needed to walk tiles, edges, and corners. It never inspects the
//! payload; kind checking belongs to the caller (see `board`).

use crate::coords::Location;
use crate::error::GridError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat transport form of a grid, suitable for a persistence layer.
///
/// Keys are canonical location strings (`"x,y"` or `"x,y,DIRECTION"`);
/// feeding a snapshot back into `HexGrid::from_snapshot` reconstructs the
/// grid it was exported from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<V> {
    pub tiles: BTreeMap<String, V>,
}

impl<V> Default for Snapshot<V> {
    fn default() -> Self {
        Self {
            tiles: BTreeMap::new(),
        }
    }
}

/// Unbounded hex grid mapping canonical locations to payloads of type `V`
#[derive(Clone, Debug)]
pub struct HexGrid<V> {
    cells: FxHashMap<Location, V>,
}

impl<V> HexGrid<V> {
    pub fn new() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Insert or overwrite the payload at a location
    pub fn set(&mut self, location: Location, value: V) {
        self.cells.insert(location, value);
    }

    /// Payload at a location, `None` when nothing is stored there
    pub fn get(&self, location: Location) -> Option<&V> {
        self.cells.get(&location)
    }

    pub fn get_mut(&mut self, location: Location) -> Option<&mut V> {
        self.cells.get_mut(&location)
    }

    /// Remove and return the payload at a location; a no-op when absent
    pub fn delete(&mut self, location: Location) -> Option<V> {
        self.cells.remove(&location)
    }

    pub fn contains(&self, location: Location) -> bool {
        self.cells.contains_key(&location)
    }

    /// All stored entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Location, &V)> {
        self.cells.iter()
    }

    /// Tiles adjacent to `location`, optionally reduced to entries present
    /// in this grid
    pub fn tile_neighbors(&self, location: Location, filter_to_existing: bool) -> Vec<Location> {
        self.filtered(location.tile_neighbors(), filter_to_existing)
    }

    /// Edges adjacent to `location`, optionally reduced to entries present
    /// in this grid
    pub fn edge_neighbors(&self, location: Location, filter_to_existing: bool) -> Vec<Location> {
        self.filtered(location.edge_neighbors(), filter_to_existing)
    }

    /// Corners adjacent to `location`, optionally reduced to entries present
    /// in this grid
    pub fn corner_neighbors(&self, location: Location, filter_to_existing: bool) -> Vec<Location> {
        self.filtered(location.corner_neighbors(), filter_to_existing)
    }

    fn filtered(&self, mut locations: Vec<Location>, filter_to_existing: bool) -> Vec<Location> {
        if filter_to_existing {
            locations.retain(|l| self.contains(*l));
        }
        locations
    }

    /// Export every stored entry under its canonical location string
    pub fn export(&self) -> Snapshot<V>
    where
        V: Clone,
    {
        let tiles = self
            .cells
            .iter()
            .map(|(location, value)| (location.to_string(), value.clone()))
            .collect();
        Snapshot { tiles }
    }

    /// Rebuild a grid from an exported snapshot.
    ///
    /// Keys are parsed and re-canonicalized, so snapshots written with
    /// non-canonical spellings load fine; later duplicates of the same
    /// canonical location overwrite earlier ones.
    pub fn from_snapshot(snapshot: Snapshot<V>) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (key, value) in snapshot.tiles {
            let location: Location = key.parse()?;
            grid.set(location, value);
        }
        Ok(grid)
    }
}

impl<V> Default for HexGrid<V> {
    fn default() -> Self {
        Self::new()
    }
}
