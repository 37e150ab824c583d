use bevy::prelude::*;

/// Ordering sets for `Update` systems. Chained in the core plugin.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameSchedule {
    /// Timer ticking: delayed actions fire here.
    FrameStart,
    /// Gameplay state changes: workstation processes resolve here.
    PerformAction,
    /// Cosmetic follow-up work (smoke puffs etc).
    Effect,
}
