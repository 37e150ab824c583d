//! Workstation smithing recipe definitions.
//!
//! Recipes are loaded from `.smithing.ron` files under `assets/recipes/`.

use {
    bevy::{platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::Deserialize,
};

pub struct SmithingAssetsPlugin;

impl Plugin for SmithingAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<SmithingRecipeDefinition>::new(&[
            "smithing.ron",
        ]))
        .register_type::<ProcessType>();
    }
}

/// A single workstation recipe loaded from a `.smithing.ron` asset file.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct SmithingRecipeDefinition {
    /// Unique identifier, e.g. "iron_blade"
    pub id: String,
    /// Display name shown in UI
    pub display_name: String,
    /// Which workstation process runs this recipe
    pub process: ProcessType,
    /// Required ingredient tags and counts, consumed from the station's input slots
    pub ingredients: HashMap<String, u32>,
    /// Item id produced on completion
    pub output_item: String,
    /// Units produced on completion
    pub output_count: u32,
    /// Time in seconds the process takes
    pub process_seconds: f32,
}

/// The workstation process family a recipe belongs to.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ProcessType {
    #[default]
    BasicSmithing,
    StandardSmithing,
}
