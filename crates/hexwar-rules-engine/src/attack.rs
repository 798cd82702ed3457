//! Attack targeting and combat damage resolution (§4.3.4–§4.3.5).

use hexwar_contracts::{coord::distance, AxialCoord};
use hexwar_rules_catalog::RulesCatalog;
use hexwar_world::{Unit, World};
use rand::Rng;


/// Every enemy-occupied coord within `unit`'s attack range that the
/// attack matrix doesn't mark as "cannot attack" (§4.3.4).
#[must_use]
pub fn get_attack_options(catalog: &RulesCatalog, world: &World, unit: &Unit) -> Vec<AxialCoord> {
    let Some(def) = catalog.unit(unit.unit_type) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (coord, target) in world_units_in_range(world, unit.coord, def.min_range, def.max_range) {
        if target.player == unit.player {
            continue;
        }
        if catalog.damage_profile(unit.unit_type, target.unit_type).is_some() {
            out.push(coord);
        }
    }
    out.sort_by_key(|c| (c.q, c.r));
    out
}

fn world_units_in_range(
    world: &World,
    center: AxialCoord,
    min_range: i32,
    max_range: i32,
) -> Vec<(AxialCoord, &Unit)> {
    world
        .tiles()
        .filter_map(|tile| {
            let d = distance(center, tile.coord);
            if d < min_range || d > max_range {
                return None;
            }
            world.unit_at(tile.coord).map(|u| (tile.coord, u))
        })
        .collect()
}

/// Whether `attacker` can attack `defender`: different players, within
/// range, and the attack matrix defines a damage profile for the pair.
#[must_use]
pub fn can_unit_attack_target(catalog: &RulesCatalog, attacker: &Unit, defender: &Unit) -> bool {
    if attacker.player == defender.player {
        return false;
    }
    let Some(def) = catalog.unit(attacker.unit_type) else {
        return false;
    };
    let d = distance(attacker.coord, defender.coord);
    if d < def.min_range || d > def.max_range {
        return false;
    }
    catalog
        .damage_profile(attacker.unit_type, defender.unit_type)
        .is_some()
}

/// Draws one damage sample for `attacker_type` hitting `defender_type`
/// from `rng` (§4.3.5). Unknown pairings deal zero damage.
#[must_use]
pub fn calculate_combat_damage(
    catalog: &RulesCatalog,
    attacker_type: i32,
    defender_type: i32,
    rng: &mut impl Rng,
) -> i32 {
    catalog
        .damage_profile(attacker_type, defender_type)
        .map_or(0, |profile| profile.sample(rng))
}
