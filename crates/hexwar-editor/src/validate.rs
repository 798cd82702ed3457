//! Map diagnostics: summary info and structural validation (§4.6).

use std::collections::HashMap;

use hexwar_rules_catalog::RulesCatalog;
use hexwar_world::World;

/// Map dimensions below this size are flagged by [`validate_map`].
pub const MIN_MAP_DIMENSION: i32 = 3;
/// Map dimensions above this size are flagged by [`validate_map`].
pub const MAX_MAP_DIMENSION: i32 = 50;

/// A snapshot of the current map's shape, for display in an editor UI.
#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    pub filename: String,
    pub width: i32,
    pub height: i32,
    pub total_tiles: usize,
    pub terrain_counts: HashMap<i32, usize>,
    pub modified: bool,
}

/// Summarizes the current map: dimensions (derived from the axial
/// bounds), per-terrain tile counts, and the editor's dirty flag.
#[must_use]
pub fn get_map_info(world: &mut World, filename: &str, modified: bool) -> MapInfo {
    let bounds = world.bounds();
    let (width, height) = bounds.map_or((0, 0), |b| (b.max_q - b.min_q + 1, b.max_r - b.min_r + 1));

    let mut terrain_counts = HashMap::new();
    let mut total_tiles = 0;
    for tile in world.tiles() {
        *terrain_counts.entry(tile.tile_type).or_insert(0) += 1;
        total_tiles += 1;
    }

    MapInfo {
        filename: filename.to_string(),
        width,
        height,
        total_tiles,
        terrain_counts,
        modified,
    }
}

/// Checks the map for structural problems (§4.6): terrain ids with no
/// entry in `catalog`, and axial dimensions outside
/// `[MIN_MAP_DIMENSION, MAX_MAP_DIMENSION]`. Returns one message per
/// issue found, in no particular order.
#[must_use]
pub fn validate_map(world: &mut World, catalog: &RulesCatalog) -> Vec<String> {
    let mut issues = Vec::new();

    for tile in world.tiles() {
        if catalog.terrain(tile.tile_type).is_none() {
            issues.push(format!(
                "unknown terrain type {} at ({}, {})",
                tile.tile_type, tile.coord.q, tile.coord.r
            ));
        }
    }

    if let Some(bounds) = world.bounds() {
        let width = bounds.max_q - bounds.min_q + 1;
        let height = bounds.max_r - bounds.min_r + 1;
        if width < MIN_MAP_DIMENSION || height < MIN_MAP_DIMENSION {
            issues.push(format!(
                "map is too small: {width}x{height}, minimum is {MIN_MAP_DIMENSION}x{MIN_MAP_DIMENSION}"
            ));
        }
        if width > MAX_MAP_DIMENSION || height > MAX_MAP_DIMENSION {
            issues.push(format!(
                "map is too large: {width}x{height}, maximum is {MAX_MAP_DIMENSION}x{MAX_MAP_DIMENSION}"
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexwar_contracts::AxialCoord;
    use hexwar_world::Tile;

    fn small_catalog() -> RulesCatalog {
        RulesCatalog::from_json(
            r#"{
                "terrains": { "1": { "name": "Plains", "defense_bonus": 0.0, "base_move_cost": 1.0 } },
                "units": {}, "movementMatrix": {}, "attackMatrix": {}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn map_info_counts_tiles_by_terrain() {
        let mut world = World::new("test");
        world.add_tile(Tile::new(AxialCoord::new(0, 0), 1, 0));
        world.add_tile(Tile::new(AxialCoord::new(1, 0), 1, 0));
        world.add_tile(Tile::new(AxialCoord::new(2, 0), 2, 0));
        let info = get_map_info(&mut world, "demo.json", false);
        assert_eq!(info.total_tiles, 3);
        assert_eq!(info.terrain_counts[&1], 2);
        assert_eq!(info.terrain_counts[&2], 1);
    }

    #[test]
    fn validate_map_flags_unknown_terrain() {
        let mut world = World::new("test");
        for q in 0..5 {
            for r in 0..5 {
                world.add_tile(Tile::new(AxialCoord::new(q, r), 1, 0));
            }
        }
        world.add_tile(Tile::new(AxialCoord::new(0, 0), 99, 0));
        let issues = validate_map(&mut world, &small_catalog());
        assert!(issues.iter().any(|m| m.contains("unknown terrain")));
    }

    #[test]
    fn validate_map_flags_too_small_dimensions() {
        let mut world = World::new("test");
        world.add_tile(Tile::new(AxialCoord::new(0, 0), 1, 0));
        let issues = validate_map(&mut world, &small_catalog());
        assert!(issues.iter().any(|m| m.contains("too small")));
    }

    #[test]
    fn validate_map_is_clean_for_a_well_formed_map() {
        let mut world = World::new("test");
        for q in 0..10 {
            for r in 0..10 {
                world.add_tile(Tile::new(AxialCoord::new(q, r), 1, 0));
            }
        }
        let issues = validate_map(&mut world, &small_catalog());
        assert!(issues.is_empty());
    }
}
