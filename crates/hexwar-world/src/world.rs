//! The world: tiles and units keyed by coordinate, with a per-player
//! unit roster kept in sync and a lazily recomputed bounds cache.

use std::collections::HashMap;

use hexwar_contracts::{coord::hex_to_pixel, AxialCoord, EngineError};

use crate::{Tile, Unit};

#[cfg(test)]
mod tests;

/// Axial bounding box of the tiles currently on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_q: i32,
    pub max_q: i32,
    pub min_r: i32,
    pub max_r: i32,
}

/// Pixel-space bounding box under a given tile layout, plus the anchor
/// tile an editor or renderer should use to place the map's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub starting_coord: AxialCoord,
    pub starting_x: f64,
}

/// The live map: terrain and units, each keyed by coord, plus an index
/// from player to the coords of the units they own. The two unit
/// indices (`units_by_coord`, `units_by_player`) are kept consistent by
/// every mutating method on this type; nothing outside this module
/// writes to either map directly.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub name: String,
    tiles_by_coord: HashMap<AxialCoord, Tile>,
    units_by_coord: HashMap<AxialCoord, Unit>,
    units_by_player: HashMap<i32, Vec<AxialCoord>>,
    cached_bounds: Option<Bounds>,
    bounds_changed: bool,
}

impl World {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tiles_by_coord: HashMap::new(),
            units_by_coord: HashMap::new(),
            units_by_player: HashMap::new(),
            cached_bounds: None,
            bounds_changed: false,
        }
    }

    #[must_use]
    pub fn tile_at(&self, coord: AxialCoord) -> Option<&Tile> {
        self.tiles_by_coord.get(&coord)
    }

    #[must_use]
    pub fn unit_at(&self, coord: AxialCoord) -> Option<&Unit> {
        self.units_by_coord.get(&coord)
    }

    /// Mutable access to the unit at `coord`, for in-place field updates
    /// (health, `distance_left`, `turn_counter`) that don't change the
    /// unit's coord or player and so never need to touch the roster.
    pub fn unit_at_mut(&mut self, coord: AxialCoord) -> Option<&mut Unit> {
        self.units_by_coord.get_mut(&coord)
    }

    #[must_use]
    pub fn units_of(&self, player: i32) -> Vec<&Unit> {
        self.units_by_player
            .get(&player)
            .into_iter()
            .flatten()
            .filter_map(|coord| self.units_by_coord.get(coord))
            .collect()
    }

    #[must_use]
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles_by_coord.values()
    }

    #[must_use]
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units_by_coord.values()
    }

    /// The highest player id with any unit ever assigned to it. Players
    /// are numbered `1..=player_count`; `0` is reserved for neutral.
    #[must_use]
    pub fn player_count(&self) -> i32 {
        self.units_by_player.keys().copied().max().unwrap_or(0)
    }

    /// Inserts or replaces the tile at `tile.coord`. Invalidates the
    /// bounds cache when the coord falls outside it.
    pub fn add_tile(&mut self, tile: Tile) {
        if let Some(bounds) = self.cached_bounds {
            if tile.coord.q < bounds.min_q
                || tile.coord.q > bounds.max_q
                || tile.coord.r < bounds.min_r
                || tile.coord.r > bounds.max_r
            {
                self.bounds_changed = true;
            }
        }
        self.tiles_by_coord.insert(tile.coord, tile);
    }

    /// Removes the tile at `coord`. Fails with [`EngineError::TileOccupied`]
    /// if a unit currently stands there.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TileOccupied`] if a unit occupies `coord`.
    pub fn delete_tile(&mut self, coord: AxialCoord) -> Result<(), EngineError> {
        if self.units_by_coord.contains_key(&coord) {
            return Err(EngineError::TileOccupied);
        }
        if self.tiles_by_coord.remove(&coord).is_some() {
            self.bounds_changed = true;
        }
        Ok(())
    }

    /// Places `unit` at `unit.coord`, returning any unit that previously
    /// stood there. Keeps the per-player roster consistent.
    pub fn add_unit(&mut self, unit: Unit) -> Option<Unit> {
        let displaced = self.units_by_coord.insert(unit.coord, unit);
        if let Some(old) = displaced {
            self.remove_from_roster(old.player, old.coord);
        }
        self.units_by_player
            .entry(unit.player)
            .or_default()
            .push(unit.coord);
        displaced
    }

    /// Removes the unit at `coord` from the world.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoSuchUnit`] if no unit stands at `coord`.
    pub fn remove_unit(&mut self, coord: AxialCoord) -> Result<Unit, EngineError> {
        let unit = self.units_by_coord.remove(&coord).ok_or(EngineError::NoSuchUnit)?;
        self.remove_from_roster(unit.player, coord);
        Ok(unit)
    }

    /// Moves the unit at `from` to `to`, failing if `from` is empty or
    /// `to` is already occupied. Updates both unit indices atomically.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoSuchUnit`] if `from` is empty, or
    /// [`EngineError::InvalidMove`] if `to` is occupied.
    pub fn move_unit(&mut self, from: AxialCoord, to: AxialCoord) -> Result<(), EngineError> {
        if self.units_by_coord.contains_key(&to) {
            return Err(EngineError::InvalidMove {
                reason: "destination occupied".to_string(),
            });
        }
        let mut unit = self.units_by_coord.remove(&from).ok_or(EngineError::NoSuchUnit)?;
        self.remove_from_roster(unit.player, from);
        unit.coord = to;
        self.units_by_coord.insert(to, unit);
        self.units_by_player.entry(unit.player).or_default().push(to);
        Ok(())
    }

    fn remove_from_roster(&mut self, player: i32, coord: AxialCoord) {
        if let Some(coords) = self.units_by_player.get_mut(&player) {
            coords.retain(|c| *c != coord);
        }
    }

    fn recompute_bounds(&mut self) {
        let mut iter = self.tiles_by_coord.keys();
        let Some(first) = iter.next() else {
            self.cached_bounds = None;
            self.bounds_changed = false;
            return;
        };
        let mut bounds = Bounds {
            min_q: first.q,
            max_q: first.q,
            min_r: first.r,
            max_r: first.r,
        };
        for coord in iter {
            bounds.min_q = bounds.min_q.min(coord.q);
            bounds.max_q = bounds.max_q.max(coord.q);
            bounds.min_r = bounds.min_r.min(coord.r);
            bounds.max_r = bounds.max_r.max(coord.r);
        }
        self.cached_bounds = Some(bounds);
        self.bounds_changed = false;
    }

    /// Returns the axial bounds of the current tile set, recomputing the
    /// cache first if it was invalidated by a tile edit.
    pub fn bounds(&mut self) -> Option<Bounds> {
        if self.bounds_changed || self.cached_bounds.is_none() {
            self.recompute_bounds();
        }
        self.cached_bounds
    }

    /// Returns the pixel-space bounds of the map under the given tile
    /// layout, along with the top-left-most tile to use as a rendering
    /// anchor (lowest row, ties broken by lowest pixel x).
    pub fn get_world_bounds(&mut self, tile_w: f64, tile_h: f64, y_inc: f64) -> Option<PixelBounds> {
        self.bounds()?;
        let coords: Vec<AxialCoord> = self.tiles_by_coord.keys().copied().collect();
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let (fx, fy) = hex_to_pixel(first, tile_w, tile_h, y_inc);

        let mut min_x = fx;
        let mut max_x = fx + tile_w;
        let mut min_y = fy;
        let mut max_y = fy + tile_h;
        let mut starting_coord = first;
        let mut starting_x = fx;
        let mut starting_y = fy;

        for coord in iter {
            let (x, y) = hex_to_pixel(coord, tile_w, tile_h, y_inc);
            min_x = min_x.min(x);
            max_x = max_x.max(x + tile_w);
            min_y = min_y.min(y);
            max_y = max_y.max(y + tile_h);
            if y < starting_y || (y == starting_y && x < starting_x) {
                starting_coord = coord;
                starting_x = x;
                starting_y = y;
            }
        }

        Some(PixelBounds {
            min_x,
            max_x,
            min_y,
            max_y,
            starting_coord,
            starting_x,
        })
    }
}
