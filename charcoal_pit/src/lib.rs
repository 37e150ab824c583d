//! Charcoal pit burn cycle.
//!
//! A formed pit converts logs placed in its input slots into charcoal over a
//! fixed burn, paid out into its output slots. See [`systems`] for the event
//! flow; the arithmetic lives here so it can be checked in isolation.

use {
    bevy::prelude::*,
    inventory::{Inventory, MAX_STACK_SIZE},
    smithing_components::CharcoalPit,
    states::GameState,
    system_schedule::GameSchedule,
};

pub mod systems;

pub use smithing_components::{CharcoalPit as CharcoalPitComponent, CharcoalSmoke};

/// Delayed-action key for the burn completion, with the yield appended.
pub const PRODUCE_CHARCOAL_ACTION_PREFIX: &str = "smithing:produce_charcoal|";

/// A burn always takes five minutes of game time.
pub const BURN_LENGTH_MS: u64 = 5 * 60 * 1000;

/// Ingredient tag marking items that may fuel the pit.
pub const WOOD_INGREDIENT: &str = "wood";

/// Item id of the produced charcoal.
pub const CHARCOAL_ITEM: &str = "smithing:charcoal";

pub struct CharcoalPitPlugin;

impl Plugin for CharcoalPitPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(systems::on_structure_activated)
            .add_observer(systems::start_burning_charcoal)
            .add_observer(systems::charcoal_burning_finished)
            .add_systems(
                Update,
                systems::tick_smoke
                    .in_set(GameSchedule::Effect)
                    .run_if(in_state(GameState::Running)),
            );
    }
}

/// Total logs across the pit's input slots, or -1 if any occupied input slot
/// holds something that is not wood.
pub fn get_log_count(pit: &CharcoalPit, inventory: &Inventory) -> i32 {
    let mut log_count = 0;
    for slot in pit.input_slots() {
        match inventory.item_at(slot) {
            Some(stack) if stack.has_ingredient(WOOD_INGREDIENT) => {
                log_count += stack.count as i32;
            }
            Some(_) => return -1,
            None => {}
        }
    }
    log_count
}

/// Charcoal produced by burning `log_count` logs: round(n^2 / max).
pub fn get_result_charcoal_count(log_count: i32, pit: &CharcoalPit) -> i32 {
    (log_count as f32 * log_count as f32 / pit.maximum_log_count as f32).round() as i32
}

/// A burn may start when the log count is within the pit's bounds and the
/// empty output slots can hold the full yield.
pub fn can_burn_charcoal(log_count: i32, pit: &CharcoalPit, inventory: &Inventory) -> bool {
    let result_charcoal_count = get_result_charcoal_count(log_count, pit);
    let available_charcoal_place = pit
        .output_slots()
        .filter(|&slot| inventory.is_empty_slot(slot))
        .count() as i32
        * MAX_STACK_SIZE as i32;

    log_count >= pit.minimum_log_count
        && log_count <= pit.maximum_log_count
        && result_charcoal_count <= available_charcoal_place
}
