//! Registers the smithing structures: the basic smithing station, the
//! charcoal pit, and the bloomery, plus the workstation process factories.

pub mod blocks;

use {
    bevy::{ecs::system::EntityCommands, prelude::*},
    inventory::Inventory,
    multiblock::{
        BlockDropEntry, BlockDrops, BlockId, BlockRegion, FormationCallback, LayerSpec,
        MultiBlockRecipe, MultiBlockRegistry, RecipeShape,
    },
    smithing_components::CharcoalPit,
    std::collections::HashMap,
    workstations::{
        BASIC_SMITHING_PROCESS, CraftingProcessFactory, STANDARD_SMITHING_PROCESS,
        WorkstationRegistry,
    },
};

pub const CHARCOAL_PIT_STRUCTURE: &str = "smithing:charcoal_pit";
pub const BLOOMERY_STRUCTURE: &str = "smithing:bloomery";
pub const BASIC_SMITHING_STATION_STRUCTURE: &str = "smithing:basic_smithing_station";

pub struct StructuresPlugin;

impl Plugin for StructuresPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, register_smithing_recipes);
    }
}

/// One-time registration of process factories and multiblock recipes.
pub fn register_smithing_recipes(
    mut workstations: ResMut<WorkstationRegistry>,
    mut multiblocks: ResMut<MultiBlockRegistry>,
) {
    workstations.register_process_factory(BASIC_SMITHING_PROCESS, Box::new(CraftingProcessFactory));
    workstations
        .register_process_factory(STANDARD_SMITHING_PROCESS, Box::new(CraftingProcessFactory));

    // Two cobblestone blocks in a row become the basic smithing station.
    multiblocks.add_recipe(MultiBlockRecipe {
        structure_id: BASIC_SMITHING_STATION_STRUCTURE,
        tool: "hammer",
        shape: RecipeShape::Uniform {
            block: blocks::COBBLESTONE,
            size: IVec3::new(2, 1, 1),
            replacement: blocks::BASIC_SMITHING_STATION,
        },
        callback: None,
    });

    // A hollow brick shell becomes a charcoal pit.
    multiblocks.add_recipe(MultiBlockRecipe {
        structure_id: CHARCOAL_PIT_STRUCTURE,
        tool: "hammer",
        shape: RecipeShape::Surround {
            wall: blocks::BRICK,
            interior: blocks::AIR,
            size_allowed: charcoal_pit_size_allowed,
        },
        callback: Some(Box::new(CharcoalPitCallback)),
    });

    // A copper structure layer under two brick layers becomes a bloomery.
    multiblocks.add_recipe(MultiBlockRecipe {
        structure_id: BLOOMERY_STRUCTURE,
        tool: "hammer",
        shape: RecipeShape::Layered {
            footprint: (2, 2),
            layers: vec![
                LayerSpec {
                    min_height: 1,
                    max_height: 1,
                    block: blocks::COPPER_STRUCTURE,
                },
                LayerSpec {
                    min_height: 2,
                    max_height: 2,
                    block: blocks::BRICK,
                },
            ],
        },
        callback: None,
    });

    info!("smithing recipes registered");
}

/// Minimum 3x3x3, with an odd footprint so the chimney has a center block.
pub fn charcoal_pit_size_allowed(size: IVec3) -> bool {
    size.x >= 3
        && size.y >= 3
        && size.z >= 3
        && size.x % 2 == 1
        && size.z % 2 == 1
}

/// Builds the pit shell (solid walls, sloped top rim with corner pieces, a
/// center chimney) and sizes the pit's gameplay components from the interior
/// volume.
struct CharcoalPitCallback;

impl FormationCallback for CharcoalPitCallback {
    fn replacement_map(&self, region: &BlockRegion) -> HashMap<IVec3, BlockId> {
        let (min, max, size) = (region.min, region.max, region.size());
        let mut result = HashMap::new();

        // Everything below the top layer is solid brick.
        let below_top =
            BlockRegion::from_min_and_size(min, IVec3::new(size.x, size.y - 1, size.z));
        for pos in below_top.iter() {
            result.insert(pos, blocks::BRICK);
        }

        // Top layer interior, then the rim overwrites the edges.
        let top_layer = BlockRegion::from_min_and_size(
            IVec3::new(min.x, max.y, min.z),
            IVec3::new(size.x, 1, size.z),
        );
        for pos in top_layer.iter() {
            result.insert(pos, blocks::BRICK_HALF);
        }

        for x in min.x + 1..max.x {
            result.insert(IVec3::new(x, max.y, min.z), blocks::BRICK_SLOPE_FRONT);
            result.insert(IVec3::new(x, max.y, max.z), blocks::BRICK_SLOPE_BACK);
        }
        for z in min.z + 1..max.z {
            result.insert(IVec3::new(min.x, max.y, z), blocks::BRICK_SLOPE_LEFT);
            result.insert(IVec3::new(max.x, max.y, z), blocks::BRICK_SLOPE_RIGHT);
        }

        result.insert(IVec3::new(min.x, max.y, min.z), blocks::BRICK_SLOPE_CORNER_LEFT);
        result.insert(IVec3::new(max.x, max.y, max.z), blocks::BRICK_SLOPE_CORNER_RIGHT);
        result.insert(IVec3::new(min.x, max.y, max.z), blocks::BRICK_SLOPE_CORNER_BACK);
        result.insert(IVec3::new(max.x, max.y, min.z), blocks::BRICK_SLOPE_CORNER_FRONT);

        result.insert(region.top_center_block(), blocks::BRICK_PILLAR_BASE);

        result
    }

    fn on_formed(&self, region: &BlockRegion, structure: &mut EntityCommands) {
        let size = region.size();
        let air_block_count = (size.x - 2) * (size.y - 2) * (size.z - 2);

        // The top rim is rendered unusable by the burn, so the refund skips it.
        let brick_refund = 2 * (size.x + size.z - 2) * (size.y - 1) + (size.x - 2) * (size.z - 2);

        structure.insert((
            CharcoalPit::sized_for(air_block_count),
            Inventory::new(2 * air_block_count as usize),
            BlockDrops {
                entries: vec![BlockDropEntry {
                    count: brick_refund,
                    block: blocks::BRICK,
                }],
            },
        ));
    }
}

#[cfg(test)]
mod tests;
