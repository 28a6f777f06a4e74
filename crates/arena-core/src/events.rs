//! Events emitted by the simulation for audio, animation and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::PopupKind;
use crate::types::ItemId;

/// A single score ledger mutation, as shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEvent {
    /// Current level score after the mutation.
    pub score: i32,
    /// Magnitude of the change (always reported as a positive amount).
    pub amount: i32,
    pub kind: PopupKind,
    /// Optional popup text (e.g. "KILL!").
    pub label: Option<String>,
}

/// Audio and animation triggers for the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatCue {
    /// Damage landed on a combatant (hit sound).
    Hit { entity_id: u64, damage: f32 },
    /// Combatant survived a hit (hit reaction animation).
    HitReaction { entity_id: u64 },
    /// Combatant died (death sound and animation).
    Death { entity_id: u64 },
    /// A dying combatant released an item.
    LootDropped { entity_id: u64, item: ItemId },
    /// A combatant was removed from the world.
    Removed { entity_id: u64 },
}
