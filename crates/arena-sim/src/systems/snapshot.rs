//! Snapshot system: queries the ECS world and builds a CombatSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use arena_core::components::{DroppedItem, Transform};
use arena_core::enums::SessionPhase;
use arena_core::events::{CombatCue, ScoreEvent};
use arena_core::state::*;
use arena_core::types::SimTime;

use crate::combatant::Combatant;

/// Build a complete CombatSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    score: ScoreView,
    score_events: Vec<ScoreEvent>,
    cues: Vec<CombatCue>,
) -> CombatSnapshot {
    CombatSnapshot {
        time: *time,
        phase,
        combatants: build_combatants(world),
        dropped_items: build_dropped_items(world),
        score,
        score_events,
        cues,
    }
}

/// Combatants sorted by entity id so output is stable across runs.
fn build_combatants(world: &World) -> Vec<CombatantView> {
    let mut combatants: Vec<CombatantView> = world
        .query::<(&Combatant, &Transform)>()
        .iter()
        .map(|(entity, (combatant, transform))| CombatantView {
            entity_id: entity.to_bits().get(),
            position: transform.position,
            current_health: combatant.health.current_health(),
            max_health: combatant.health.max_health(),
            health_fraction: combatant.health_percentage(),
            life: combatant.health.life_state(),
            indicator_visible: combatant.indicator_visible(),
        })
        .collect();
    combatants.sort_by_key(|c| c.entity_id);
    combatants
}

fn build_dropped_items(world: &World) -> Vec<DroppedItemView> {
    let mut items: Vec<(u64, DroppedItemView)> = world
        .query::<&DroppedItem>()
        .iter()
        .map(|(entity, dropped)| {
            (
                entity.to_bits().get(),
                DroppedItemView {
                    item: dropped.item.clone(),
                    position: dropped.position,
                },
            )
        })
        .collect();
    items.sort_by_key(|(id, _)| *id);
    items.into_iter().map(|(_, view)| view).collect()
}
