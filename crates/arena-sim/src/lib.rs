//! Combat resolution and scoring for the arena simulation.
//!
//! Owns the hecs ECS world, applies damage, sequences deaths, decides loot,
//! and keeps the session-wide score ledger.

pub mod capabilities;
pub mod combatant;
pub mod death;
pub mod engine;
pub mod health;
pub mod ledger;
pub mod loot;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use engine::{CombatEngine, EngineConfig};
