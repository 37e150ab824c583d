use {
    super::*,
    multiblock::{Composition, MultiBlockPlugin, PendingBlockChanges, StructureCandidate},
};

#[test]
fn test_pit_size_predicate() {
    // minimum footprint
    assert!(charcoal_pit_size_allowed(IVec3::new(3, 3, 3)));
    assert!(charcoal_pit_size_allowed(IVec3::new(5, 3, 5)));
    // height only needs the minimum, no parity
    assert!(charcoal_pit_size_allowed(IVec3::new(3, 4, 3)));
    assert!(charcoal_pit_size_allowed(IVec3::new(3, 9, 3)));
    // even footprint dimensions are rejected
    assert!(!charcoal_pit_size_allowed(IVec3::new(4, 3, 3)));
    assert!(!charcoal_pit_size_allowed(IVec3::new(5, 3, 4)));
    // too small
    assert!(!charcoal_pit_size_allowed(IVec3::new(1, 3, 3)));
    assert!(!charcoal_pit_size_allowed(IVec3::new(3, 2, 3)));
}

#[test]
fn test_charcoal_pit_replacement_map() {
    let region = BlockRegion::from_min_and_size(IVec3::new(10, 0, 10), IVec3::new(3, 3, 3));
    let map = CharcoalPitCallback.replacement_map(&region);

    // full shell is rebuilt
    assert_eq!(map.len(), 27);

    // two solid layers of brick
    let bricks = map.values().filter(|&&b| b == blocks::BRICK).count();
    assert_eq!(bricks, 18);

    // chimney sits on the center block of the top layer
    assert_eq!(map[&IVec3::new(11, 2, 11)], blocks::BRICK_PILLAR_BASE);

    // rim: one slope per side, a corner piece per corner
    assert_eq!(map[&IVec3::new(11, 2, 10)], blocks::BRICK_SLOPE_FRONT);
    assert_eq!(map[&IVec3::new(11, 2, 12)], blocks::BRICK_SLOPE_BACK);
    assert_eq!(map[&IVec3::new(10, 2, 11)], blocks::BRICK_SLOPE_LEFT);
    assert_eq!(map[&IVec3::new(12, 2, 11)], blocks::BRICK_SLOPE_RIGHT);
    assert_eq!(map[&IVec3::new(10, 2, 10)], blocks::BRICK_SLOPE_CORNER_LEFT);
    assert_eq!(map[&IVec3::new(12, 2, 12)], blocks::BRICK_SLOPE_CORNER_RIGHT);
    assert_eq!(map[&IVec3::new(10, 2, 12)], blocks::BRICK_SLOPE_CORNER_BACK);
    assert_eq!(map[&IVec3::new(12, 2, 10)], blocks::BRICK_SLOPE_CORNER_FRONT);

    // a larger top layer keeps half blocks between rim and chimney
    let region = BlockRegion::from_min_and_size(IVec3::ZERO, IVec3::new(5, 3, 5));
    let map = CharcoalPitCallback.replacement_map(&region);
    assert_eq!(map[&IVec3::new(1, 2, 1)], blocks::BRICK_HALF);
    assert_eq!(map[&IVec3::new(2, 2, 2)], blocks::BRICK_PILLAR_BASE);
}

fn formation_app() -> App {
    let mut app = App::new();
    app.add_plugins(MultiBlockPlugin)
        .init_resource::<WorkstationRegistry>()
        .add_systems(Startup, register_smithing_recipes);
    app
}

fn form_pit(app: &mut App, size: IVec3) {
    app.world_mut().trigger(StructureCandidate {
        tool: "hammer".to_string(),
        region: BlockRegion::from_min_and_size(IVec3::ZERO, size),
        composition: Composition::Shell {
            wall: blocks::BRICK,
            interior: blocks::AIR,
        },
    });
    app.update();
}

#[test]
fn test_pit_formation_sizes_components_from_interior() {
    let mut app = formation_app();
    app.update();
    form_pit(&mut app, IVec3::new(5, 3, 5));

    let mut pits = app.world_mut().query::<(&CharcoalPit, &Inventory, &BlockDrops)>();
    let (pit, inv, drops) = pits.iter(app.world()).next().expect("pit formed");

    // 3x1x3 air interior
    assert_eq!(pit.minimum_log_count, 72);
    assert_eq!(pit.maximum_log_count, 144);
    assert_eq!(pit.input_slot_count, 9);
    assert_eq!(pit.output_slot_count, 9);
    assert_eq!(inv.slot_count(), 18);

    // 2*(5+5-2)*(3-1) + (5-2)*(5-2) bricks refunded
    assert_eq!(
        drops.entries,
        vec![BlockDropEntry {
            count: 41,
            block: blocks::BRICK,
        }]
    );
}

#[test]
fn test_minimal_pit_formation() {
    let mut app = formation_app();
    app.update();
    form_pit(&mut app, IVec3::new(3, 3, 3));

    let mut pits = app.world_mut().query::<(&CharcoalPit, &Inventory)>();
    let (pit, inv) = pits.iter(app.world()).next().expect("pit formed");
    assert_eq!(pit.minimum_log_count, 8);
    assert_eq!(pit.maximum_log_count, 16);
    assert_eq!(inv.slot_count(), 2);

    let pending = app.world().resource::<PendingBlockChanges>();
    assert_eq!(pending.changes.len(), 27);
}

#[test]
fn test_even_footprint_forms_nothing() {
    let mut app = formation_app();
    app.update();
    form_pit(&mut app, IVec3::new(4, 3, 3));

    assert_eq!(
        app.world_mut()
            .query::<&CharcoalPit>()
            .iter(app.world())
            .count(),
        0
    );
    assert!(app.world().resource::<PendingBlockChanges>().changes.is_empty());
}

#[test]
fn test_bloomery_and_station_recipes_registered() {
    let mut app = formation_app();
    app.update();

    // station: two cobblestone in a row
    app.world_mut().trigger(StructureCandidate {
        tool: "hammer".to_string(),
        region: BlockRegion::from_min_and_size(IVec3::ZERO, IVec3::new(2, 1, 1)),
        composition: Composition::Uniform(blocks::COBBLESTONE),
    });
    // bloomery: copper structure under two brick layers on a 2x2 footprint
    app.world_mut().trigger(StructureCandidate {
        tool: "hammer".to_string(),
        region: BlockRegion::from_min_and_size(IVec3::new(8, 0, 8), IVec3::new(2, 3, 2)),
        composition: Composition::Layered(vec![
            (1, blocks::COPPER_STRUCTURE),
            (2, blocks::BRICK),
        ]),
    });
    app.update();

    let mut names = app.world_mut().query::<&Name>();
    let mut found: Vec<_> = names.iter(app.world()).map(|n| n.as_str().to_string()).collect();
    found.sort();
    assert_eq!(found, vec![BASIC_SMITHING_STATION_STRUCTURE, BLOOMERY_STRUCTURE]);

    let pending = app.world().resource::<PendingBlockChanges>();
    assert_eq!(pending.changes[&IVec3::new(1, 0, 0)], blocks::BASIC_SMITHING_STATION);
}
