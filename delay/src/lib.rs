//! Delayed-action scheduling: register an action against a target entity and
//! a string key, and receive a [`DelayedActionTriggered`] exactly once when
//! the delay elapses.
//!
//! Each scheduled action lives on its own carrier entity so a target can have
//! any number of pending actions.

use {
    bevy::prelude::*,
    states::GameState,
    std::time::Duration,
    system_schedule::GameSchedule,
};

pub struct DelayPlugin;

impl Plugin for DelayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            tick_delayed_actions
                .in_set(GameSchedule::FrameStart)
                .run_if(in_state(GameState::Running)),
        );
    }
}

/// A pending action. Spawn one to schedule; the tick system despawns it when
/// it fires.
#[derive(Component, Debug)]
pub struct DelayedAction {
    pub target: Entity,
    pub action_id: String,
    pub timer: Timer,
}

impl DelayedAction {
    pub fn new(target: Entity, action_id: impl Into<String>, delay: Duration) -> Self {
        Self {
            target,
            action_id: action_id.into(),
            timer: Timer::new(delay, TimerMode::Once),
        }
    }
}

/// Fired once per scheduled action when its delay elapses.
#[derive(Event, Debug, Clone)]
pub struct DelayedActionTriggered {
    /// The entity the action was registered against.
    pub entity: Entity,
    pub action_id: String,
}

pub fn tick_delayed_actions(
    mut commands: Commands,
    time: Res<Time>,
    mut pending: Query<(Entity, &mut DelayedAction)>,
) {
    for (carrier, mut action) in &mut pending {
        if action.timer.tick(time.delta()).just_finished() {
            debug!("delayed action '{}' fired", action.action_id);
            commands.trigger(DelayedActionTriggered {
                entity: action.target,
                action_id: action.action_id.clone(),
            });
            commands.entity(carrier).despawn();
        }
    }
}
