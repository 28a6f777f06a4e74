//! Commands sent from the game layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// All possible external requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatCommand {
    // --- Combatants ---
    /// Spawn a combatant with the configured defaults and no collaborators.
    SpawnCombatant { position: Vec3 },
    /// Apply damage to a combatant.
    ApplyDamage {
        entity_id: u64,
        damage: f32,
        hit_point: Vec3,
        hit_direction: Vec3,
    },

    // --- Scoring ---
    /// The player took damage (score penalty).
    PlayerDamaged { damage: f32 },
    /// Store the current level score into the history.
    CompleteLevel,
    /// Complete the current level and advance to the next one.
    NextLevel,
    /// Zero the current level score.
    RestartLevel,
    /// Reinitialize the whole ledger.
    ResetGame,

    // --- Simulation control ---
    /// Stop advancing time (removal timers freeze too).
    Pause,
    /// Resume advancing time.
    Resume,
}
