//! Multiblock formation recipes.
//!
//! The world scanner is external: it reports candidate arrangements through
//! [`StructureCandidate`] events. This crate owns the recipe registry, matches
//! candidates against registered shapes, queues the block replacements for the
//! host to apply, and spawns the structure entity with its components.

mod recipe;
pub mod region;

pub use recipe::{FormationCallback, LayerSpec, MultiBlockRecipe, RecipeShape};
pub use region::BlockRegion;

use {bevy::prelude::*, std::collections::HashMap};

pub struct MultiBlockPlugin;

impl Plugin for MultiBlockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MultiBlockRegistry>()
            .init_resource::<PendingBlockChanges>()
            .register_type::<StructureRegion>()
            .add_observer(on_structure_candidate);
    }
}

/// Identifies a block type, e.g. "core:brick".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub &'static str);

/// All registered formation recipes. Gameplay crates add theirs at startup.
#[derive(Resource, Default)]
pub struct MultiBlockRegistry {
    recipes: Vec<MultiBlockRecipe>,
}

impl MultiBlockRegistry {
    pub fn add_recipe(&mut self, recipe: MultiBlockRecipe) {
        self.recipes.push(recipe);
    }

    pub fn recipes(&self) -> &[MultiBlockRecipe] {
        &self.recipes
    }
}

/// Block replacements queued for the host world to apply.
#[derive(Resource, Default)]
pub struct PendingBlockChanges {
    pub changes: HashMap<IVec3, BlockId>,
}

/// The world region a formed structure occupies.
#[derive(Component, Debug, Clone, Copy, Reflect, Deref)]
#[reflect(Component)]
pub struct StructureRegion(pub BlockRegion);

/// Materials refunded when a formed structure is taken apart.
#[derive(Component, Debug, Clone)]
pub struct BlockDrops {
    pub entries: Vec<BlockDropEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDropEntry {
    pub count: i32,
    pub block: BlockId,
}

/// How the scanner summarized a candidate arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// A solid box of one block type.
    Uniform(BlockId),
    /// Walls of one block type around a hollow interior of another.
    Shell { wall: BlockId, interior: BlockId },
    /// Uniform layers bottom-up, as (layer height, block) pairs.
    Layered(Vec<(i32, BlockId)>),
}

/// The scanner found a candidate arrangement struck with a tool.
#[derive(Event, Debug)]
pub struct StructureCandidate {
    pub tool: String,
    pub region: BlockRegion,
    pub composition: Composition,
}

/// Matches a candidate against registered recipes. First match wins: the
/// replacement map is queued, the structure entity spawned, and the recipe's
/// formation callback run against it.
fn on_structure_candidate(
    trigger: On<StructureCandidate>,
    mut commands: Commands,
    registry: Res<MultiBlockRegistry>,
    mut pending: ResMut<PendingBlockChanges>,
) {
    let candidate = trigger.event();
    for recipe in registry.recipes() {
        if recipe.tool != candidate.tool
            || !recipe.shape.matches(&candidate.region, &candidate.composition)
        {
            continue;
        }

        let replacements = match (&recipe.callback, &recipe.shape) {
            (Some(callback), _) => callback.replacement_map(&candidate.region),
            (None, RecipeShape::Uniform { replacement, .. }) => candidate
                .region
                .iter()
                .map(|pos| (pos, *replacement))
                .collect(),
            (None, _) => HashMap::new(),
        };
        pending.changes.extend(replacements);

        let mut structure = commands.spawn((
            Name::new(recipe.structure_id),
            StructureRegion(candidate.region),
            Transform::from_translation(candidate.region.center()),
        ));
        if let Some(callback) = &recipe.callback {
            callback.on_formed(&candidate.region, &mut structure);
        }
        info!(
            "formed '{}' at {:?} (size {:?})",
            recipe.structure_id,
            candidate.region.min,
            candidate.region.size()
        );
        return;
    }
    debug!("no multiblock recipe matched candidate {:?}", candidate.region);
}

#[cfg(test)]
mod tests {
    use super::*;

    const STONE: BlockId = BlockId("core:stone");
    const STATION: BlockId = BlockId("test:station");

    fn app_with_recipe(recipe: MultiBlockRecipe) -> App {
        let mut app = App::new();
        app.init_resource::<PendingBlockChanges>()
            .insert_resource({
                let mut registry = MultiBlockRegistry::default();
                registry.add_recipe(recipe);
                registry
            })
            .add_observer(on_structure_candidate);
        app
    }

    #[test]
    fn test_uniform_recipe_forms_and_queues_replacement() {
        let mut app = app_with_recipe(MultiBlockRecipe {
            structure_id: "test:station",
            tool: "hammer",
            shape: RecipeShape::Uniform {
                block: STONE,
                size: IVec3::new(2, 1, 1),
                replacement: STATION,
            },
            callback: None,
        });

        let region = BlockRegion::from_min_and_size(IVec3::new(4, 0, 4), IVec3::new(2, 1, 1));
        app.world_mut().trigger(StructureCandidate {
            tool: "hammer".into(),
            region,
            composition: Composition::Uniform(STONE),
        });
        app.update();

        let pending = app.world().resource::<PendingBlockChanges>();
        assert_eq!(pending.changes.len(), 2);
        assert_eq!(pending.changes[&IVec3::new(4, 0, 4)], STATION);

        let mut regions = app.world_mut().query::<(&Name, &StructureRegion)>();
        let (name, formed) = regions.iter(app.world()).next().expect("structure spawned");
        assert_eq!(name.as_str(), "test:station");
        assert_eq!(formed.0, region);
    }

    #[test]
    fn test_wrong_tool_forms_nothing() {
        let mut app = app_with_recipe(MultiBlockRecipe {
            structure_id: "test:station",
            tool: "hammer",
            shape: RecipeShape::Uniform {
                block: STONE,
                size: IVec3::new(2, 1, 1),
                replacement: STATION,
            },
            callback: None,
        });

        app.world_mut().trigger(StructureCandidate {
            tool: "axe".into(),
            region: BlockRegion::from_min_and_size(IVec3::ZERO, IVec3::new(2, 1, 1)),
            composition: Composition::Uniform(STONE),
        });
        app.update();

        assert!(app.world().resource::<PendingBlockChanges>().changes.is_empty());
        assert_eq!(
            app.world_mut()
                .query::<&StructureRegion>()
                .iter(app.world())
                .count(),
            0
        );
    }
}
