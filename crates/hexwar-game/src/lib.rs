//! The game (C5): the single resource island binding a world, a rules
//! engine, and a deterministic RNG into one playable match (§5). Every
//! mutating operation on a game must be serialized by the caller; the
//! core itself never spawns threads or suspends.

pub mod status;
pub mod victory;

pub use status::GameStatus;
pub use victory::VictoryPredicate;

use std::collections::HashMap;
use std::time::Instant;

use hexwar_contracts::AxialCoord;
use hexwar_rules_catalog::{CatalogError, RulesCatalog};
use hexwar_rules_engine::RulesEngine;
use hexwar_world::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A single playable match: the world, the rules it's governed by, and
/// the turn/player bookkeeping around it.
pub struct Game {
    pub world: World,
    pub current_player: i32,
    pub turn_counter: i32,
    pub status: GameStatus,
    pub teams: Option<HashMap<i32, i32>>,
    pub winner: i32,
    pub has_winner: bool,
    pub player_count: i32,
    pub last_action_at: Instant,
    rules: RulesEngine,
    rng: ChaCha8Rng,
    victory_predicate: VictoryPredicate,
    sequence_counter: u64,
}

/// A restore point for the whole resource island, used by the move
/// processor's snapshot-rollback strategy (§4.4). Cloning a [`Game`]
/// this way is the "recommended design" the spec calls out rather than
/// reversing individual mutations.
#[derive(Clone)]
pub struct GameSnapshot {
    world: World,
    current_player: i32,
    turn_counter: i32,
    status: GameStatus,
    winner: i32,
    has_winner: bool,
    rng: ChaCha8Rng,
    sequence_counter: u64,
}

impl Game {
    /// Creates a new game over `world`, governed by `rules`, seeded
    /// deterministically by `seed` (§6.4). Play starts with player 1 on
    /// turn 1, using the default "last player standing" victory rule.
    #[must_use]
    pub fn new(world: World, rules: RulesCatalog, seed: u64) -> Self {
        let player_count = world.player_count();
        log::debug!("create_game: {} player(s), seed={seed}", player_count);
        Self {
            current_player: 1,
            turn_counter: 1,
            status: GameStatus::Playing,
            teams: None,
            winner: 0,
            has_winner: false,
            player_count,
            last_action_at: Instant::now(),
            world,
            rules: RulesEngine::new(rules),
            rng: ChaCha8Rng::seed_from_u64(seed),
            victory_predicate: victory::last_player_standing,
            sequence_counter: 1,
        }
    }

    /// Loads a rules catalog from `rules_path` and creates a game over
    /// `world` with it (§6.4, grounded in `CreateGameWithRules`).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the catalog file can't be read or
    /// parsed.
    pub fn create_with_rules_file(
        world: World,
        rules_path: impl AsRef<std::path::Path>,
        seed: u64,
    ) -> Result<Self, CatalogError> {
        let catalog = RulesCatalog::load_from_file(rules_path)?;
        Ok(Self::new(world, catalog, seed))
    }

    #[must_use]
    pub fn rules(&self) -> &RulesEngine {
        &self.rules
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Overrides the default victory predicate (§4.5) — used by game
    /// modes such as capture-objective or survival that define winning
    /// differently from "last player standing".
    pub fn set_victory_predicate(&mut self, predicate: VictoryPredicate) {
        self.victory_predicate = predicate;
    }

    #[must_use]
    pub fn victory_predicate(&self) -> VictoryPredicate {
        self.victory_predicate
    }

    /// Returns the next sequence number and advances the counter. Used
    /// by the move processor to stamp each [`hexwar_contracts::GameMoveResult`]
    /// with a monotonically increasing id across the game's lifetime.
    pub fn next_sequence_num(&mut self) -> u64 {
        let current = self.sequence_counter;
        self.sequence_counter += 1;
        current
    }

    /// Captures a restore point for this game's mutable state, for the
    /// move processor's snapshot-rollback strategy (§4.4).
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            world: self.world.clone(),
            current_player: self.current_player,
            turn_counter: self.turn_counter,
            status: self.status,
            winner: self.winner,
            has_winner: self.has_winner,
            rng: self.rng.clone(),
            sequence_counter: self.sequence_counter,
        }
    }

    /// Restores this game's mutable state to a previously captured
    /// [`GameSnapshot`], discarding any changes made since.
    pub fn restore(&mut self, snapshot: GameSnapshot) {
        self.world = snapshot.world;
        self.current_player = snapshot.current_player;
        self.turn_counter = snapshot.turn_counter;
        self.status = snapshot.status;
        self.winner = snapshot.winner;
        self.has_winner = snapshot.has_winner;
        self.rng = snapshot.rng;
        self.sequence_counter = snapshot.sequence_counter;
    }

    /// Whether the unit at `coord` may currently act: it exists, it
    /// belongs to `current_player`, and the game is still being played.
    /// Returns a human-readable reason on `false`.
    #[must_use]
    pub fn can_select_unit(&self, coord: AxialCoord) -> (bool, Option<&'static str>) {
        if self.status != GameStatus::Playing {
            return (false, Some("game is not in progress"));
        }
        let Some(unit) = self.world.unit_at(coord) else {
            return (false, Some("no unit at that coordinate"));
        };
        if unit.player != self.current_player {
            return (false, Some("unit does not belong to the current player"));
        }
        (true, None)
    }

    /// Convenience wrapper around [`hexwar_rules_engine::is_valid_path`]
    /// for the single-step case used by UI hover checks.
    #[must_use]
    pub fn is_valid_move(&self, from: AxialCoord, to: AxialCoord) -> bool {
        let Some(unit) = self.world.unit_at(from) else {
            return false;
        };
        self.rules.valid_path(unit, &[from, to], &self.world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexwar_world::{Tile, Unit};

    fn sample_catalog() -> RulesCatalog {
        RulesCatalog::from_json(
            r#"{
                "terrains": { "1": { "name": "Plains", "defense_bonus": 0.0, "base_move_cost": 1.0 } },
                "units": { "1": { "name": "Infantry", "base_health": 10, "base_movement": 3, "base_attack": 4 } },
                "movementMatrix": { "1": { "1": 1.0 } },
                "attackMatrix": {}
            }"#,
        )
        .unwrap()
    }

    fn world_with_one_unit() -> World {
        let mut world = World::new("test");
        world.add_tile(Tile::new(AxialCoord::new(0, 0), 1, 0));
        world.add_tile(Tile::new(AxialCoord::new(1, 0), 1, 0));
        world.add_unit(Unit::new(AxialCoord::new(0, 0), 1, 1, 10));
        world
    }

    #[test]
    fn new_game_starts_on_player_one_turn_one() {
        let game = Game::new(world_with_one_unit(), sample_catalog(), 42);
        assert_eq!(game.current_player, 1);
        assert_eq!(game.turn_counter, 1);
        assert_eq!(game.status, GameStatus::Playing);
        assert!(!game.has_winner);
    }

    #[test]
    fn can_select_unit_owned_by_current_player() {
        let game = Game::new(world_with_one_unit(), sample_catalog(), 1);
        let (ok, reason) = game.can_select_unit(AxialCoord::new(0, 0));
        assert!(ok);
        assert!(reason.is_none());
    }

    #[test]
    fn cannot_select_unit_with_no_unit_present() {
        let game = Game::new(world_with_one_unit(), sample_catalog(), 1);
        let (ok, reason) = game.can_select_unit(AxialCoord::new(5, 5));
        assert!(!ok);
        assert!(reason.is_some());
    }

    #[test]
    fn is_valid_move_checks_adjacency_and_budget() {
        let mut game = Game::new(world_with_one_unit(), sample_catalog(), 1);
        let mut unit = *game.world.unit_at(AxialCoord::new(0, 0)).unwrap();
        unit.distance_left = 2;
        game.world.add_unit(unit);
        assert!(game.is_valid_move(AxialCoord::new(0, 0), AxialCoord::new(1, 0)));
        assert!(!game.is_valid_move(AxialCoord::new(0, 0), AxialCoord::new(5, 5)));
    }
}
