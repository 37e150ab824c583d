use {
    crate::{
        BURN_LENGTH_MS, CHARCOAL_ITEM, PRODUCE_CHARCOAL_ACTION_PREFIX, can_burn_charcoal,
        get_log_count, get_result_charcoal_count,
    },
    bevy::prelude::*,
    delay::{DelayedAction, DelayedActionTriggered},
    inventory::{Inventory, ItemStack, MAX_STACK_SIZE},
    multiblock::StructureRegion,
    smithing_components::{CharcoalPit, CharcoalSmoke},
    smithing_events::{OpenCharcoalPitRequest, ProduceCharcoalRequest, StructureActivated},
    std::time::Duration,
};

/// Activating a formed pit routes to the open-screen request.
pub fn on_structure_activated(
    trigger: On<StructureActivated>,
    mut commands: Commands,
    pits: Query<(), With<CharcoalPit>>,
) {
    let event = trigger.event();
    if pits.get(event.structure).is_ok() {
        commands.trigger(OpenCharcoalPitRequest {
            pit: event.structure,
        });
    }
}

/// Starts a burn if the input slots pass the log checks: clears the inputs,
/// stamps the burn window, attaches the smoke column above the structure, and
/// schedules the completion action carrying the computed yield.
pub fn start_burning_charcoal(
    trigger: On<ProduceCharcoalRequest>,
    mut commands: Commands,
    time: Res<Time>,
    mut pits: Query<(
        &mut CharcoalPit,
        &mut Inventory,
        Option<&StructureRegion>,
        Option<&mut Transform>,
    )>,
) {
    let pit_entity = trigger.event().pit;
    let Ok((mut pit, mut inventory, region, transform)) = pits.get_mut(pit_entity) else {
        warn!("produce charcoal on {:?}: not a charcoal pit", pit_entity);
        return;
    };

    let log_count = get_log_count(&pit, &inventory);
    if !can_burn_charcoal(log_count, &pit, &inventory) {
        debug!("burn refused: {} logs in {:?}", log_count, pit_entity);
        return;
    }

    for slot in pit.input_slots() {
        inventory.clear_slot(slot);
    }

    let charcoal_count = get_result_charcoal_count(log_count, &pit);
    let now_ms = time.elapsed().as_millis() as u64;
    pit.burn_start_world_ms = now_ms;
    pit.burn_finish_world_ms = now_ms + BURN_LENGTH_MS;

    commands.entity(pit_entity).insert(CharcoalSmoke::default());
    if let (Some(region), Some(mut transform)) = (region, transform) {
        // Anchor the smoke column on top of the chimney.
        let center = region.center();
        transform.translation = Vec3::new(
            center.x - 0.5,
            region.max.y as f32 + 1.0,
            center.z - 0.5,
        );
    }

    commands.spawn(DelayedAction::new(
        pit_entity,
        format!("{PRODUCE_CHARCOAL_ACTION_PREFIX}{charcoal_count}"),
        Duration::from_millis(BURN_LENGTH_MS),
    ));
    info!(
        "burning {} logs into {} charcoal in {:?}",
        log_count, charcoal_count, pit_entity
    );
}

/// Completes a burn: removes the smoke and distributes the yield over empty
/// output slots, at most [`MAX_STACK_SIZE`] per slot. A refused placement
/// loses that chunk; the rest keeps moving to the next empty slot.
pub fn charcoal_burning_finished(
    trigger: On<DelayedActionTriggered>,
    mut commands: Commands,
    mut pits: Query<(&CharcoalPit, &mut Inventory)>,
) {
    let event = trigger.event();
    let Some(count_str) = event.action_id.strip_prefix(PRODUCE_CHARCOAL_ACTION_PREFIX) else {
        return;
    };
    let Ok((pit, mut inventory)) = pits.get_mut(event.entity) else {
        warn!("burn finished on {:?}: no charcoal pit", event.entity);
        return;
    };

    commands.entity(event.entity).remove::<CharcoalSmoke>();

    let Ok(mut count) = count_str.parse::<i32>() else {
        warn!("malformed charcoal action id '{}'", event.action_id);
        return;
    };
    for slot in pit.output_slots() {
        if count == 0 {
            break;
        }
        if !inventory.is_empty_slot(slot) {
            continue;
        }
        let to_add = count.min(MAX_STACK_SIZE as i32);
        if inventory.put(slot, ItemStack::new(CHARCOAL_ITEM, to_add as u32)) {
            count -= to_add;
        }
    }
    info!("burn finished in {:?}, {} charcoal undelivered", event.entity, count);
}

/// Animates the smoke column while a pit is burning.
pub fn tick_smoke(time: Res<Time>, mut smokes: Query<&mut CharcoalSmoke>) {
    for mut smoke in &mut smokes {
        if smoke.puff_timer.tick(time.delta()).just_finished() {
            smoke.puffs += 1;
            trace!("smoke puff {}", smoke.puffs);
        }
    }
}
