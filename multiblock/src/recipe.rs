use {
    crate::{BlockId, Composition, region::BlockRegion},
    bevy::{ecs::system::EntityCommands, prelude::*},
    std::collections::HashMap,
};

/// Hook run when a recipe's shape is matched.
///
/// `replacement_map` decides what the formed structure is built from;
/// `on_formed` attaches gameplay components to the structure entity.
pub trait FormationCallback: Send + Sync {
    fn replacement_map(&self, region: &BlockRegion) -> HashMap<IVec3, BlockId>;

    fn on_formed(&self, _region: &BlockRegion, _structure: &mut EntityCommands) {}
}

/// A registered multiblock formation recipe.
pub struct MultiBlockRecipe {
    /// Id of the resulting structure, used as the entity name.
    pub structure_id: &'static str,
    /// Tool the player must use for this recipe to apply.
    pub tool: &'static str,
    pub shape: RecipeShape,
    /// Absent for recipes that replace nothing and need no extra components
    /// (uniform recipes fall back to filling the region with `replacement`).
    pub callback: Option<Box<dyn FormationCallback>>,
}

/// Height band a layer of a layered recipe may occupy.
pub struct LayerSpec {
    pub min_height: i32,
    pub max_height: i32,
    pub block: BlockId,
}

pub enum RecipeShape {
    /// A solid box of one block type with an exact size (any axis order).
    Uniform {
        block: BlockId,
        size: IVec3,
        replacement: BlockId,
    },
    /// A hollow shell: walls of one block type around an interior of another.
    Surround {
        wall: BlockId,
        interior: BlockId,
        size_allowed: fn(IVec3) -> bool,
    },
    /// Stacked uniform layers over an exact footprint, bottom-up.
    Layered {
        footprint: (i32, i32),
        layers: Vec<LayerSpec>,
    },
}

impl RecipeShape {
    pub fn matches(&self, region: &BlockRegion, composition: &Composition) -> bool {
        let size = region.size();
        match (self, composition) {
            (Self::Uniform { block, size: want, .. }, Composition::Uniform(found)) => {
                block == found && sorted_dims(size) == sorted_dims(*want)
            }
            (
                Self::Surround {
                    wall,
                    interior,
                    size_allowed,
                },
                Composition::Shell {
                    wall: found_wall,
                    interior: found_interior,
                },
            ) => wall == found_wall && interior == found_interior && size_allowed(size),
            (
                Self::Layered { footprint, layers },
                Composition::Layered(found_layers),
            ) => {
                (size.x, size.z) == *footprint
                    && layers.len() == found_layers.len()
                    && layers.iter().zip(found_layers).all(|(spec, (height, block))| {
                        spec.block == *block
                            && (spec.min_height..=spec.max_height).contains(height)
                    })
            }
            _ => false,
        }
    }
}

fn sorted_dims(size: IVec3) -> [i32; 3] {
    let mut dims = size.to_array();
    dims.sort_unstable();
    dims
}
