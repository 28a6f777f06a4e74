//! Removal system: despawns combatants whose post-death delay has elapsed.

use hecs::{Entity, World};
use tracing::debug;

use arena_core::events::CombatCue;

use crate::scheduler::RemovalScheduler;

/// Drain every due removal and despawn it.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    removals: &mut RemovalScheduler,
    tick: u64,
    despawn_buffer: &mut Vec<Entity>,
    cues: &mut Vec<CombatCue>,
) {
    despawn_buffer.clear();
    removals.drain_due(tick, despawn_buffer);

    for entity in despawn_buffer.drain(..) {
        // Already gone if removed early; nothing to report then.
        if world.despawn(entity).is_ok() {
            debug!(entity = entity.to_bits().get(), tick, "entity removed");
            cues.push(CombatCue::Removed {
                entity_id: entity.to_bits().get(),
            });
        }
    }
}
