use bevy::prelude::*;

/// A player activated (clicked/used) a formed structure.
/// Used with observers via `commands.trigger()`.
#[derive(Event)]
pub struct StructureActivated {
    pub structure: Entity,
    pub player: Entity,
}

/// Request to show the charcoal pit screen for a pit entity.
/// The UI layer is external; this event is the module's boundary.
#[derive(Event)]
pub struct OpenCharcoalPitRequest {
    pub pit: Entity,
}

/// Request to start burning the logs currently in the pit's input slots.
#[derive(Event)]
pub struct ProduceCharcoalRequest {
    pub pit: Entity,
}

/// Request to run a smithing recipe on a workstation.
#[derive(Event)]
pub struct StartWorkstationProcess {
    pub station: Entity,
    pub recipe_id: String,
}
