//! Combat snapshot: the visible state handed to the game layer each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{CombatCue, ScoreEvent};
use crate::types::{ItemId, SimTime};

/// Complete combat state after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub combatants: Vec<CombatantView>,
    pub dropped_items: Vec<DroppedItemView>,
    pub score: ScoreView,
    /// Ledger mutations since the previous snapshot.
    pub score_events: Vec<ScoreEvent>,
    /// Audio/animation triggers since the previous snapshot.
    pub cues: Vec<CombatCue>,
}

/// A combatant as seen by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantView {
    pub entity_id: u64,
    pub position: Vec3,
    pub current_health: f32,
    pub max_health: f32,
    /// current / max, in [0, 1].
    pub health_fraction: f32,
    pub life: LifeState,
    pub indicator_visible: bool,
}

/// A loot item lying in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroppedItemView {
    pub item: ItemId,
    pub position: Vec3,
}

/// Every ledger query, bundled for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub current_level: u32,
    pub total_levels: usize,
    pub current_level_score: i32,
    pub level_scores: Vec<i32>,
    pub total_score: i32,
    pub enemies_killed: u32,
    pub total_damage_dealt: u32,
    pub total_damage_taken: u32,
    pub is_last_level: bool,
}
