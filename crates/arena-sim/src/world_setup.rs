//! Entity spawn factories for the combat world.

use glam::Vec3;
use hecs::{Entity, World};

use arena_core::components::{DroppedItem, Transform};
use arena_core::types::ItemId;

use crate::capabilities::LootSpawner;
use crate::combatant::Combatant;

/// Spawn a combatant at `position`.
pub fn spawn_combatant(world: &mut World, combatant: Combatant, position: Vec3) -> Entity {
    world.spawn((combatant, Transform { position }))
}

/// Spawn a dropped item lying in the world.
pub fn spawn_dropped_item(world: &mut World, item: ItemId, position: Vec3, tick: u64) -> Entity {
    world.spawn((DroppedItem {
        item,
        position,
        dropped_at_tick: tick,
    },))
}

/// Loot spawner that buffers drops until the world is free to spawn them.
///
/// The death transition runs while the dying combatant is borrowed from the
/// world, so drops are collected here and flushed right after.
#[derive(Debug, Default)]
pub struct PendingDrops {
    drops: Vec<(ItemId, Vec3)>,
}

impl PendingDrops {
    pub fn flush_into(&mut self, world: &mut World, tick: u64) {
        for (item, position) in self.drops.drain(..) {
            spawn_dropped_item(world, item, position, tick);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }
}

impl LootSpawner for PendingDrops {
    fn spawn_loot(&mut self, item: &ItemId, position: Vec3) {
        self.drops.push((item.clone(), position));
    }
}
