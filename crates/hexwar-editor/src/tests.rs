use super::*;

#[test]
fn set_tiles_at_radius_zero_touches_only_center() {
    let mut world = World::new("test");
    let touched = set_tiles_at(&mut world, AxialCoord::new(0, 0), 1, 0).unwrap();
    assert_eq!(touched, vec![AxialCoord::new(0, 0)]);
    assert!(world.tile_at(AxialCoord::new(0, 0)).is_some());
}

#[test]
fn set_tiles_at_paints_the_whole_neighborhood() {
    let mut world = World::new("test");
    let touched = set_tiles_at(&mut world, AxialCoord::new(0, 0), 2, 1).unwrap();
    assert_eq!(touched.len(), 7);
    for coord in touched {
        assert_eq!(world.tile_at(coord).unwrap().tile_type, 2);
    }
}

#[test]
fn set_tiles_at_zero_terrain_clears_tiles() {
    let mut world = World::new("test");
    set_tiles_at(&mut world, AxialCoord::new(0, 0), 1, 1).unwrap();
    set_tiles_at(&mut world, AxialCoord::new(0, 0), 0, 1).unwrap();
    assert!(world.tile_at(AxialCoord::new(0, 0)).is_none());
}

#[test]
fn set_tiles_at_clear_fails_when_unit_present() {
    let mut world = World::new("test");
    set_tiles_at(&mut world, AxialCoord::new(0, 0), 1, 0).unwrap();
    world.add_unit(hexwar_world::Unit::new(AxialCoord::new(0, 0), 1, 1, 10));
    let err = set_tiles_at(&mut world, AxialCoord::new(0, 0), 0, 0).unwrap_err();
    assert_eq!(err, EngineError::TileOccupied);
}

#[test]
fn flood_fill_replaces_connected_region_only() {
    let mut world = World::new("test");
    // a line of plains (1) with a mountain (2) breaking it
    set_tiles_at(&mut world, AxialCoord::new(-2, 0), 1, 0).unwrap();
    set_tiles_at(&mut world, AxialCoord::new(-1, 0), 1, 0).unwrap();
    set_tiles_at(&mut world, AxialCoord::new(0, 0), 2, 0).unwrap();
    set_tiles_at(&mut world, AxialCoord::new(1, 0), 1, 0).unwrap();

    let touched = flood_fill(&mut world, AxialCoord::new(-2, 0), 3).unwrap();
    assert_eq!(touched.len(), 2);
    assert_eq!(world.tile_at(AxialCoord::new(-2, 0)).unwrap().tile_type, 3);
    assert_eq!(world.tile_at(AxialCoord::new(-1, 0)).unwrap().tile_type, 3);
    // unaffected: across the mountain break
    assert_eq!(world.tile_at(AxialCoord::new(1, 0)).unwrap().tile_type, 1);
    assert_eq!(world.tile_at(AxialCoord::new(0, 0)).unwrap().tile_type, 2);
}

#[test]
fn flood_fill_is_a_no_op_when_already_the_target_terrain() {
    let mut world = World::new("test");
    set_tiles_at(&mut world, AxialCoord::new(0, 0), 1, 0).unwrap();
    let touched = flood_fill(&mut world, AxialCoord::new(0, 0), 1).unwrap();
    assert!(touched.is_empty());
}

#[test]
fn flood_fill_fails_without_a_starting_tile() {
    let mut world = World::new("test");
    let err = flood_fill(&mut world, AxialCoord::new(0, 0), 2).unwrap_err();
    assert_eq!(err, EngineError::OutOfBounds);
}

#[test]
fn flood_fill_does_not_expand_past_existing_tiles() {
    let mut world = World::new("test");
    set_tiles_at(&mut world, AxialCoord::new(0, 0), 1, 0).unwrap();
    let touched = flood_fill(&mut world, AxialCoord::new(0, 0), 3).unwrap();
    assert_eq!(touched, vec![AxialCoord::new(0, 0)]);
    assert!(world.tile_at(AxialCoord::new(1, 0)).is_none());
}
