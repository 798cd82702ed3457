//! Movement cost, reachability, and path validity (§4.3.1–§4.3.3).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use hexwar_contracts::{coord::neighbors, AxialCoord, EngineError};
use hexwar_rules_catalog::RulesCatalog;
use hexwar_world::{Unit, World};

#[cfg(test)]
mod tests;

/// One reachable destination and the cheapest accumulated cost to
/// reach it (§4.3.2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileOption {
    pub coord: AxialCoord,
    pub total_cost: f64,
}

/// The cost for `unit` to enter `destination`, based on `unit`'s type
/// and the terrain at `destination` ("enter" semantics, not "leave").
///
/// # Errors
///
/// Returns [`EngineError::InvalidMove`] if there is no tile at
/// `destination`, the terrain/unit pairing is unknown, or the pairing
/// is marked impassable.
pub fn get_movement_cost(
    catalog: &RulesCatalog,
    world: &World,
    unit: &Unit,
    destination: AxialCoord,
) -> Result<f64, EngineError> {
    let tile = world.tile_at(destination).ok_or_else(|| EngineError::InvalidMove {
        reason: "no tile at destination".to_string(),
    })?;
    let cost = catalog.movement_cost(unit.unit_type, tile.tile_type);
    if !cost.is_finite() {
        return Err(EngineError::InvalidMove {
            reason: "terrain is impassable for this unit type".to_string(),
        });
    }
    Ok(cost)
}

/// Min-heap entry ordered by ascending cost (reverse of the default
/// max-heap `Ord` for `f64`'s total-order wrapper).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Visit {
    cost: f64,
    coord: AxialCoord,
}

impl Eq for Visit {}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// All tiles `unit` can reach within `budget` movement points
/// (§4.3.2): a uniform-cost search from the unit's coord. A neighbor is
/// eligible iff a tile exists there, the movement cost is finite, no
/// other unit occupies it, and the accumulated cost doesn't exceed
/// `budget`. The unit's own starting coord is excluded from the result.
#[must_use]
pub fn get_movement_options(
    catalog: &RulesCatalog,
    world: &World,
    unit: &Unit,
    budget: f64,
) -> Vec<TileOption> {
    let mut best: HashMap<AxialCoord, f64> = HashMap::new();
    best.insert(unit.coord, 0.0);

    let mut frontier = BinaryHeap::new();
    frontier.push(Visit {
        cost: 0.0,
        coord: unit.coord,
    });

    while let Some(Visit { cost, coord }) = frontier.pop() {
        if cost > best.get(&coord).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        for next in neighbors(coord) {
            if world.tile_at(next).is_none() {
                continue;
            }
            if next != unit.coord && world.unit_at(next).is_some() {
                continue;
            }
            let Ok(step_cost) = get_movement_cost(catalog, world, unit, next) else {
                continue;
            };
            let next_cost = cost + step_cost;
            if next_cost > budget {
                continue;
            }
            if next_cost < best.get(&next).copied().unwrap_or(f64::INFINITY) {
                best.insert(next, next_cost);
                frontier.push(Visit {
                    cost: next_cost,
                    coord: next,
                });
            }
        }
    }

    let options: Vec<TileOption> = best
        .into_iter()
        .filter(|(coord, _)| *coord != unit.coord)
        .map(|(coord, total_cost)| TileOption { coord, total_cost })
        .collect();
    log::trace!("get_movement_options: {} reachable tile(s) within budget {budget}", options.len());
    options
}

/// Whether `path` is a legal route for `unit` through `world` (§4.3.3):
/// `path[0]` must be the unit's coord, each step must be hex-adjacent,
/// every intermediate tile must be passable and unoccupied (other than
/// the start), and the summed entry cost of `path[1..]`, half-up rounded
/// to the nearest whole point (§4.4.1), must not exceed
/// `unit.distance_left`.
#[must_use]
pub fn is_valid_path(catalog: &RulesCatalog, unit: &Unit, path: &[AxialCoord], world: &World) -> bool {
    let Some(&first) = path.first() else {
        return false;
    };
    if first != unit.coord {
        return false;
    }

    let mut total_cost = 0.0;
    for window in path.windows(2) {
        let from = window[0];
        let to = window[1];
        if !neighbors(from).contains(&to) {
            return false;
        }
        if to != unit.coord && world.unit_at(to).is_some() {
            return false;
        }
        let Ok(cost) = get_movement_cost(catalog, world, unit, to) else {
            return false;
        };
        total_cost += cost;
    }

    let rounded_cost = (total_cost + 0.5) as i32;
    rounded_cost <= unit.distance_left
}
