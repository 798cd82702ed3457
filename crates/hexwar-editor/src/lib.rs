//! The world editor core (C7): brush painting, flood fill, and map
//! diagnostics layered on top of [`hexwar_world::World`]. No rendering,
//! no input handling — those belong to a UI collaborator.

pub mod state;
pub mod validate;

pub use state::EditorState;
pub use validate::{get_map_info, validate_map, MapInfo};

use std::collections::VecDeque;

use hexwar_contracts::{coord::range, AxialCoord, EngineError};
use hexwar_world::{Tile, World};

/// Paints `terrain_type` over the `radius`-hex neighborhood of `center`
/// (§4.6). `radius == 0` touches just the center. `terrain_type == 0` is
/// the sentinel "Clear/Delete": every touched coord has its tile
/// removed instead of overwritten. Returns the coords touched.
///
/// # Errors
///
/// Returns [`EngineError::TileOccupied`] if clearing a touched coord
/// would delete a tile a unit currently stands on.
pub fn set_tiles_at(
    world: &mut World,
    center: AxialCoord,
    terrain_type: i32,
    radius: u32,
) -> Result<Vec<AxialCoord>, EngineError> {
    let touched = range(center, radius);
    for coord in &touched {
        if terrain_type == 0 {
            world.delete_tile(*coord)?;
        } else {
            world.add_tile(Tile::new(*coord, terrain_type, 0));
        }
    }
    log::debug!("set_tiles_at: touched {} coord(s) with terrain {terrain_type}", touched.len());
    Ok(touched)
}

/// Replaces the connected region of tiles sharing `start`'s current
/// terrain type with `replacement`, via breadth-first search over
/// existing tiles only (painting outside the current tile set requires
/// an explicit [`set_tiles_at`]). A no-op if `start` is already
/// `replacement`'s terrain.
///
/// # Errors
///
/// Returns [`EngineError::OutOfBounds`] if there is no tile at `start`.
pub fn flood_fill(world: &mut World, start: AxialCoord, replacement: i32) -> Result<Vec<AxialCoord>, EngineError> {
    let target_type = world.tile_at(start).ok_or(EngineError::OutOfBounds)?.tile_type;
    if target_type == replacement {
        return Ok(Vec::new());
    }

    let mut visited = Vec::new();
    let mut seen = std::collections::HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);
    seen.insert(start);

    while let Some(coord) = queue.pop_front() {
        visited.push(coord);
        for neighbor in hexwar_contracts::coord::neighbors(coord) {
            if seen.contains(&neighbor) {
                continue;
            }
            let Some(tile) = world.tile_at(neighbor) else {
                continue;
            };
            if tile.tile_type != target_type {
                continue;
            }
            seen.insert(neighbor);
            queue.push_back(neighbor);
        }
    }

    for coord in &visited {
        let player = world.tile_at(*coord).map_or(0, |t| t.player);
        world.add_tile(Tile::new(*coord, replacement, player));
    }

    Ok(visited)
}

#[cfg(test)]
mod tests;
