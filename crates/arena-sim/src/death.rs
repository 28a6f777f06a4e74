//! Death sequencer: the one-time Alive → Dying → Dead transition.
//!
//! The step order is fixed. Each step that needs an optional collaborator is
//! skipped when the collaborator is missing; nothing aborts later steps.

use glam::Vec3;
use tracing::info;

use arena_core::components::Transform;
use arena_core::constants::{DEATH_PIN_OFFSET, LOOT_DROP_HEIGHT};
use arena_core::events::CombatCue;

use crate::combatant::{CombatContext, Combatant};
use crate::loot::LootDropPolicy;

/// Run the death transition. Returns false if it had already run.
pub fn run(combatant: &mut Combatant, transform: &mut Transform, ctx: &mut CombatContext<'_>) -> bool {
    // 1. Guard: re-entrant calls stop here.
    if !combatant.health.begin_dying() {
        return false;
    }
    let entity_id = ctx.entity_id();
    info!(entity = entity_id, "combatant died");

    // 2. Kill bonus
    if let Some(ledger) = ctx.ledger.as_deref_mut() {
        ledger.add_enemy_kill_bonus(combatant.kill_bonus);
    }
    ctx.cues.push(CombatCue::Death { entity_id });

    // 3. Behaviour and locomotion
    if let Some(behavior) = combatant.collaborators.behavior.as_mut() {
        behavior.disable_behavior();
        behavior.disable_locomotion();
    }

    // 4. Collision
    if let Some(collision) = combatant.collaborators.collision.as_mut() {
        collision.disable_collision();
    }

    // 5. Physics freeze and vertical pin
    if let Some(physics) = combatant.collaborators.physics.as_mut() {
        physics.freeze();
    }
    transform.position.y += DEATH_PIN_OFFSET;

    // 6. Health indicator
    combatant.set_indicator_visible(false);

    // 7. Loot
    let drop = LootDropPolicy::decide(
        &combatant.loot.drop_table,
        combatant.loot.drop_chance,
        &mut *ctx.rng,
    );
    if let Some(item) = drop {
        let position = transform.position + Vec3::Y * LOOT_DROP_HEIGHT;
        ctx.loot_spawner.spawn_loot(item, position);
        info!(entity = entity_id, %item, "loot dropped");
        ctx.cues.push(CombatCue::LootDropped {
            entity_id,
            item: item.clone(),
        });
    }

    // 8. Deferred removal
    ctx.removals
        .schedule_removal(ctx.entity, combatant.destroy_delay_secs, ctx.now);

    combatant.health.finish_dying();
    true
}
