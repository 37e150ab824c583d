//! Workstation process execution.
//!
//! A workstation entity carries a [`Workstation`] component and an
//! [`Inventory`]. Process factories are registered per process id; starting a
//! recipe consumes its ingredients from the station's input slots and pays the
//! output into the first free output slot once the process timer elapses.

use {
    bevy::{platform::collections::HashMap, prelude::*},
    inventory::{Inventory, ItemStack},
    smithing_assets::{ProcessType, SmithingRecipeDefinition},
    smithing_events::StartWorkstationProcess,
    states::GameState,
    std::{collections::HashMap as StdHashMap, ops::Range, time::Duration},
    system_schedule::GameSchedule,
};

pub const BASIC_SMITHING_PROCESS: &str = "smithing:basic_smithing";
pub const STANDARD_SMITHING_PROCESS: &str = "smithing:standard_smithing";

pub struct WorkstationsPlugin;

impl Plugin for WorkstationsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorkstationRegistry>()
            .init_resource::<SmithingRecipeMap>()
            .add_observer(start_workstation_process)
            .add_systems(
                Update,
                update_workstation_processes
                    .in_set(GameSchedule::PerformAction)
                    .run_if(in_state(GameState::Running)),
            );
    }
}

/// The process id a [`ProcessType`] is registered under.
pub fn process_id(process: ProcessType) -> &'static str {
    match process {
        ProcessType::BasicSmithing => BASIC_SMITHING_PROCESS,
        ProcessType::StandardSmithing => STANDARD_SMITHING_PROCESS,
    }
}

/// A station able to run processes of one process family.
#[derive(Component, Debug, Clone)]
pub struct Workstation {
    pub process_type: String,
    pub input_slot_count: usize,
    pub output_slot_count: usize,
}

impl Workstation {
    pub fn input_slots(&self) -> Range<usize> {
        0..self.input_slot_count
    }

    pub fn output_slots(&self) -> Range<usize> {
        self.input_slot_count..self.input_slot_count + self.output_slot_count
    }
}

/// A recipe turned into a runnable process by a factory.
pub struct WorkstationProcess {
    pub recipe_id: String,
    pub ingredients: HashMap<String, u32>,
    pub output: ItemStack,
    pub duration: Duration,
}

pub trait ProcessFactory: Send + Sync {
    /// Builds a process from a recipe definition, or refuses it.
    fn create(&self, def: &SmithingRecipeDefinition) -> Option<WorkstationProcess>;
}

/// Factory for plain crafting processes: ingredients in, one output stack out.
pub struct CraftingProcessFactory;

impl ProcessFactory for CraftingProcessFactory {
    fn create(&self, def: &SmithingRecipeDefinition) -> Option<WorkstationProcess> {
        if def.ingredients.is_empty() || def.output_count == 0 {
            return None;
        }
        Some(WorkstationProcess {
            recipe_id: def.id.clone(),
            ingredients: def.ingredients.clone(),
            output: ItemStack::new(def.output_item.clone(), def.output_count),
            duration: Duration::from_secs_f32(def.process_seconds),
        })
    }
}

/// Process factories keyed by process id.
#[derive(Resource, Default)]
pub struct WorkstationRegistry {
    factories: StdHashMap<String, Box<dyn ProcessFactory>>,
}

impl WorkstationRegistry {
    pub fn register_process_factory(
        &mut self,
        process_type: impl Into<String>,
        factory: Box<dyn ProcessFactory>,
    ) {
        self.factories.insert(process_type.into(), factory);
    }

    pub fn factory(&self, process_type: &str) -> Option<&dyn ProcessFactory> {
        self.factories.get(process_type).map(|f| f.as_ref())
    }
}

/// Recipe id -> asset handle, filled while loading.
#[derive(Resource, Default)]
pub struct SmithingRecipeMap {
    pub handles: StdHashMap<String, Handle<SmithingRecipeDefinition>>,
}

/// An in-flight process. Spawned on its own carrier entity so a station can
/// be queried without exclusive access while the timer runs.
#[derive(Component)]
pub struct ProcessInProgress {
    pub station: Entity,
    pub recipe_id: String,
    pub output: ItemStack,
    pub timer: Timer,
}

pub fn start_workstation_process(
    trigger: On<StartWorkstationProcess>,
    mut commands: Commands,
    registry: Res<WorkstationRegistry>,
    recipe_map: Res<SmithingRecipeMap>,
    defs: Res<Assets<SmithingRecipeDefinition>>,
    mut stations: Query<(&Workstation, &mut Inventory)>,
) {
    let event = trigger.event();

    let Ok((station, mut inv)) = stations.get_mut(event.station) else {
        warn!("start process on {:?}: not a workstation", event.station);
        return;
    };
    let Some(def) = recipe_map
        .handles
        .get(&event.recipe_id)
        .and_then(|handle| defs.get(handle))
    else {
        warn!("unknown smithing recipe '{}'", event.recipe_id);
        return;
    };
    if process_id(def.process) != station.process_type {
        debug!(
            "recipe '{}' needs process '{}', station runs '{}'",
            def.id,
            process_id(def.process),
            station.process_type
        );
        return;
    }
    let Some(factory) = registry.factory(&station.process_type) else {
        warn!("no factory registered for '{}'", station.process_type);
        return;
    };
    let Some(process) = factory.create(def) else {
        warn!("recipe '{}' rejected by its process factory", def.id);
        return;
    };

    // All-or-nothing ingredient check before consuming anything.
    for (tag, &count) in &process.ingredients {
        if inv.count_ingredient(station.input_slots(), tag) < count {
            debug!("recipe '{}': not enough '{}'", process.recipe_id, tag);
            return;
        }
    }
    for (tag, &count) in &process.ingredients {
        inv.consume_ingredient(station.input_slots(), tag, count);
    }

    info!("process '{}' started", process.recipe_id);
    commands.spawn(ProcessInProgress {
        station: event.station,
        recipe_id: process.recipe_id,
        output: process.output,
        timer: Timer::new(process.duration, TimerMode::Once),
    });
}

pub fn update_workstation_processes(
    mut commands: Commands,
    time: Res<Time>,
    mut processes: Query<(Entity, &mut ProcessInProgress)>,
    mut stations: Query<(&Workstation, &mut Inventory)>,
) {
    for (carrier, mut process) in &mut processes {
        if !process.timer.tick(time.delta()).just_finished() {
            continue;
        }
        match stations.get_mut(process.station) {
            Ok((station, mut inv)) => {
                match inv.first_empty_in(station.output_slots()) {
                    Some(slot) => {
                        inv.put(slot, process.output.clone());
                        info!("process '{}' finished", process.recipe_id);
                    }
                    // Output slots full: the item is lost, as with any
                    // failed item placement.
                    None => warn!("process '{}': no free output slot", process.recipe_id),
                }
            }
            Err(_) => warn!(
                "process '{}': station disappeared mid-process",
                process.recipe_id
            ),
        }
        commands.entity(carrier).despawn();
    }
}
