//! The rules engine (C4): the algorithmic heart of the game. Every
//! operation here is a pure function of `(world, unit, ...)` or
//! `(attacker_type, defender_type, rng)` — nothing in this crate
//! mutates the world.

pub mod attack;
pub mod movement;

pub use attack::{can_unit_attack_target, calculate_combat_damage, get_attack_options};
pub use movement::{get_movement_cost, get_movement_options, is_valid_path, TileOption};

use hexwar_contracts::EngineError;
use hexwar_rules_catalog::RulesCatalog;

/// A thin, stateless wrapper pairing the rules catalog with the pure
/// movement/attack algorithms. Cheap to clone; the catalog itself is
/// immutable once loaded and may be shared across games (§5).
#[derive(Debug, Clone)]
pub struct RulesEngine {
    catalog: RulesCatalog,
}

impl RulesEngine {
    #[must_use]
    pub fn new(catalog: RulesCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &RulesCatalog {
        &self.catalog
    }

    /// See [`movement::get_movement_cost`].
    ///
    /// # Errors
    ///
    /// See [`movement::get_movement_cost`].
    pub fn movement_cost(
        &self,
        world: &hexwar_world::World,
        unit: &hexwar_world::Unit,
        destination: hexwar_contracts::AxialCoord,
    ) -> Result<f64, EngineError> {
        movement::get_movement_cost(&self.catalog, world, unit, destination)
    }

    /// See [`movement::get_movement_options`].
    #[must_use]
    pub fn movement_options(
        &self,
        world: &hexwar_world::World,
        unit: &hexwar_world::Unit,
        budget: f64,
    ) -> Vec<TileOption> {
        movement::get_movement_options(&self.catalog, world, unit, budget)
    }

    /// See [`movement::is_valid_path`].
    #[must_use]
    pub fn valid_path(
        &self,
        unit: &hexwar_world::Unit,
        path: &[hexwar_contracts::AxialCoord],
        world: &hexwar_world::World,
    ) -> bool {
        movement::is_valid_path(&self.catalog, unit, path, world)
    }

    /// See [`attack::get_attack_options`].
    #[must_use]
    pub fn attack_options(
        &self,
        world: &hexwar_world::World,
        unit: &hexwar_world::Unit,
    ) -> Vec<hexwar_contracts::AxialCoord> {
        attack::get_attack_options(&self.catalog, world, unit)
    }

    /// See [`attack::can_unit_attack_target`].
    #[must_use]
    pub fn can_attack(&self, attacker: &hexwar_world::Unit, defender: &hexwar_world::Unit) -> bool {
        attack::can_unit_attack_target(&self.catalog, attacker, defender)
    }

    /// See [`attack::calculate_combat_damage`].
    #[must_use]
    pub fn combat_damage(
        &self,
        attacker_type: i32,
        defender_type: i32,
        rng: &mut impl rand::Rng,
    ) -> i32 {
        attack::calculate_combat_damage(&self.catalog, attacker_type, defender_type, rng)
    }
}
