//! Slot-based inventory contract used by smithing structures.
//!
//! This is the fixed surface the gameplay crates program against: numbered
//! slots holding optional item stacks, with a hard per-slot stack limit.

use {bevy::prelude::*, std::ops::Range};

/// Hard cap on how many units a single slot can hold.
pub const MAX_STACK_SIZE: u32 = 99;

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Inventory>().register_type::<ItemStack>();
    }
}

/// A stack of identical items occupying one inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Reflect)]
pub struct ItemStack {
    /// Item id, e.g. "smithing:charcoal".
    pub id: String,
    /// Crafting-ingredient tag ("wood" marks burnable logs), if any.
    pub ingredient: Option<String>,
    pub count: u32,
}

impl ItemStack {
    pub fn new(id: impl Into<String>, count: u32) -> Self {
        Self {
            id: id.into(),
            ingredient: None,
            count,
        }
    }

    pub fn with_ingredient(
        id: impl Into<String>,
        ingredient: impl Into<String>,
        count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            ingredient: Some(ingredient.into()),
            count,
        }
    }

    pub fn has_ingredient(&self, tag: &str) -> bool {
        self.ingredient.as_deref() == Some(tag)
    }
}

/// Fixed-size slotted inventory attached to a structure entity.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Inventory {
    pub slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn item_at(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    pub fn is_empty_slot(&self, slot: usize) -> bool {
        self.item_at(slot).is_none()
    }

    /// Takes whatever is in `slot`, leaving it empty.
    pub fn clear_slot(&mut self, slot: usize) -> Option<ItemStack> {
        self.slots.get_mut(slot).and_then(|s| s.take())
    }

    /// Places a stack into an *empty* slot. Returns false (stack refused) if
    /// the slot is occupied or out of range.
    pub fn put(&mut self, slot: usize, stack: ItemStack) -> bool {
        match self.slots.get_mut(slot) {
            Some(s @ None) => {
                *s = Some(stack);
                true
            }
            _ => false,
        }
    }

    pub fn first_empty_in(&self, range: Range<usize>) -> Option<usize> {
        range.into_iter().find(|&slot| self.is_empty_slot(slot))
    }

    /// Total units carrying the given ingredient tag within `range`.
    pub fn count_ingredient(&self, range: Range<usize>, tag: &str) -> u32 {
        range
            .filter_map(|slot| self.item_at(slot))
            .filter(|stack| stack.has_ingredient(tag))
            .map(|stack| stack.count)
            .sum()
    }

    /// Removes `amount` units of an ingredient tag from `range`, draining
    /// stacks front to back. Returns false and removes nothing if the range
    /// does not hold enough.
    pub fn consume_ingredient(&mut self, range: Range<usize>, tag: &str, amount: u32) -> bool {
        if self.count_ingredient(range.clone(), tag) < amount {
            return false;
        }
        let mut remaining = amount;
        for slot in range {
            if remaining == 0 {
                break;
            }
            let Some(stack) = self.slots.get_mut(slot).and_then(|s| s.as_mut()) else {
                continue;
            };
            if !stack.has_ingredient(tag) {
                continue;
            }
            let taken = stack.count.min(remaining);
            stack.count -= taken;
            remaining -= taken;
            if stack.count == 0 {
                self.slots[slot] = None;
            }
        }
        true
    }
}
