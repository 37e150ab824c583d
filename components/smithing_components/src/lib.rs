//! Components for the smithing structures.

use {bevy::prelude::*, std::ops::Range};

pub struct SmithingComponentsPlugin;

impl Plugin for SmithingComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CharcoalPit>();
        app.register_type::<CharcoalSmoke>();
    }
}

/// State of a formed charcoal pit structure. Created exactly once, when the
/// multiblock forms, and lives as long as the structure entity.
///
/// The burn window fields hold the *last* burn cycle after it completes; they
/// are only overwritten when a new cycle starts.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct CharcoalPit {
    /// Game time in ms when the current (or last) burn started.
    pub burn_start_world_ms: u64,
    /// Game time in ms when the current (or last) burn finishes.
    pub burn_finish_world_ms: u64,
    /// Minimum number of logs for a burn to start.
    pub minimum_log_count: i32,
    /// Maximum number of logs a single burn can consume.
    pub maximum_log_count: i32,
    /// Number of leading inventory slots reserved for fuel input.
    pub input_slot_count: usize,
    /// Number of inventory slots reserved for charcoal output.
    pub output_slot_count: usize,
}

impl CharcoalPit {
    /// Sizes a pit from the structure's interior air volume:
    /// 8..=16 logs per air block, one input and one output slot per air block.
    pub fn sized_for(air_block_count: i32) -> Self {
        Self {
            burn_start_world_ms: 0,
            burn_finish_world_ms: 0,
            minimum_log_count: 8 * air_block_count,
            maximum_log_count: 16 * air_block_count,
            input_slot_count: air_block_count as usize,
            output_slot_count: air_block_count as usize,
        }
    }

    pub fn input_slots(&self) -> Range<usize> {
        0..self.input_slot_count
    }

    pub fn output_slots(&self) -> Range<usize> {
        self.input_slot_count..self.input_slot_count + self.output_slot_count
    }
}

/// Smoke column shown while a pit is burning. Removed when the burn finishes.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct CharcoalSmoke {
    /// Spawns one smoke puff per tick cycle.
    pub puff_timer: Timer,
    /// Puffs emitted so far this burn.
    pub puffs: u32,
}

impl Default for CharcoalSmoke {
    fn default() -> Self {
        Self {
            puff_timer: Timer::from_seconds(0.5, TimerMode::Repeating),
            puffs: 0,
        }
    }
}
