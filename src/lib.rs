//! Facade crate wiring the hex engine's game lifecycle entry points
//! (§6.4): creating a game, processing move batches, and querying
//! movement/attack options and unit selectability.

pub use hexwar_contracts::{
    coord, AxialCoord, EngineError, GameMove, GameMoveKind, GameMoveResult, UnitSnapshot, WorldChange,
};
pub use hexwar_editor::{flood_fill, get_map_info, set_tiles_at, validate_map, EditorState, MapInfo};
pub use hexwar_game::{Game, GameSnapshot, GameStatus, VictoryPredicate};
pub use hexwar_move_processor::{process_moves, MoveBatchError};
pub use hexwar_rules_catalog::{CatalogError, DamageProfile, RulesCatalog, TerrainDefinition, UnitDefinition};
pub use hexwar_rules_engine::{RulesEngine, TileOption};
pub use hexwar_world::{Bounds, PixelBounds, Tile, Unit, World};

use std::path::Path;

/// Creates a new game over `world`, governed by `rules`, deterministically
/// seeded by `seed` (§6.4).
#[must_use]
pub fn create_game(world: World, rules: RulesCatalog, seed: u64) -> Game {
    Game::new(world, rules, seed)
}

/// Loads a rules catalog from `rules_path` and creates a game over
/// `world` with it (§6.4, ADDED).
///
/// # Errors
///
/// Returns [`CatalogError`] if the catalog file can't be read or parsed.
pub fn create_game_with_rules_file(
    world: World,
    rules_path: impl AsRef<Path>,
    seed: u64,
) -> Result<Game, CatalogError> {
    Game::create_with_rules_file(world, rules_path, seed)
}

/// The tiles the unit at `(q, r)` can reach this turn, or an empty list
/// if there is no unit there (§6.4).
#[must_use]
pub fn get_movement_options(game: &Game, q: i32, r: i32) -> Vec<TileOption> {
    let coord = AxialCoord::new(q, r);
    game.world.unit_at(coord).map_or_else(Vec::new, |unit| {
        game.rules()
            .movement_options(&game.world, unit, f64::from(unit.distance_left))
    })
}

/// The enemy-occupied coords the unit at `(q, r)` can attack this turn,
/// or an empty list if there is no unit there (§6.4).
#[must_use]
pub fn get_attack_options(game: &Game, q: i32, r: i32) -> Vec<AxialCoord> {
    let coord = AxialCoord::new(q, r);
    game.world
        .unit_at(coord)
        .map_or_else(Vec::new, |unit| game.rules().attack_options(&game.world, unit))
}

/// Whether the unit at `(q, r)` may currently act, and why not if it
/// can't (§6.4).
#[must_use]
pub fn can_select_unit(game: &Game, q: i32, r: i32) -> (bool, Option<&'static str>) {
    game.can_select_unit(AxialCoord::new(q, r))
}
