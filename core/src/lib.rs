use {
    bevy::{asset::LoadedFolder, prelude::*},
    charcoal_pit::CharcoalPitPlugin,
    delay::DelayPlugin,
    inventory::InventoryPlugin,
    multiblock::MultiBlockPlugin,
    smithing_assets::{SmithingAssetsPlugin, SmithingRecipeDefinition},
    smithing_components::SmithingComponentsPlugin,
    states::GameState,
    structures::StructuresPlugin,
    system_schedule::GameSchedule,
    workstations::{SmithingRecipeMap, WorkstationsPlugin},
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                Update,
                (
                    GameSchedule::FrameStart,
                    GameSchedule::PerformAction,
                    GameSchedule::Effect,
                )
                    .chain(),
            )
            .add_plugins((
                SmithingComponentsPlugin,
                InventoryPlugin,
                MultiBlockPlugin,
                DelayPlugin,
                SmithingAssetsPlugin,
                WorkstationsPlugin,
                StructuresPlugin,
                CharcoalPitPlugin,
            ))
            .add_systems(Startup, (setup_camera, load_recipe_assets))
            .add_systems(
                Update,
                check_assets_loaded.run_if(in_state(GameState::Loading)),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

#[derive(Resource)]
struct RecipesFolderHandle(Handle<LoadedFolder>);

fn load_recipe_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("loading smithing recipes");
    let handle = asset_server.load_folder("recipes");
    commands.insert_resource(RecipesFolderHandle(handle));
}

/// Fills the recipe map once the recipes folder finishes loading, then starts
/// the game.
fn check_assets_loaded(
    folder_handle: Res<RecipesFolderHandle>,
    folders: Res<Assets<LoadedFolder>>,
    defs: Res<Assets<SmithingRecipeDefinition>>,
    mut recipe_map: ResMut<SmithingRecipeMap>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(folder) = folders.get(&folder_handle.0) else {
        return;
    };
    for handle in &folder.handles {
        let Ok(typed) = handle.clone().try_typed::<SmithingRecipeDefinition>() else {
            continue;
        };
        let Some(def) = defs.get(&typed) else {
            continue;
        };
        recipe_map.handles.entry(def.id.clone()).or_insert(typed);
    }
    info!("{} smithing recipes loaded", recipe_map.handles.len());
    next_state.set(GameState::Running);
}
