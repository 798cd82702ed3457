//! Pluggable victory conditions (§4.5).

use hexwar_world::World;

/// A victory predicate: given the world, returns the winning player's
/// id if the game has ended. Plain `fn` pointers (not closures) keep
/// this `Copy` and trivially swappable on [`crate::Game`].
pub type VictoryPredicate = fn(&World) -> Option<i32>;

/// The built-in rule: once only one player has any living unit, they
/// win. Returns `None` while two or more players still have units, or
/// if no player has any units left at all.
#[must_use]
pub fn last_player_standing(world: &World) -> Option<i32> {
    let living_players: Vec<i32> = (1..=world.player_count())
        .filter(|player| world.units_of(*player).iter().any(|u| u.is_alive()))
        .collect();
    match living_players.as_slice() {
        [only_survivor] => Some(*only_survivor),
        _ => None,
    }
}
