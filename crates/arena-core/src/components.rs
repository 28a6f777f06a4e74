//! Plain-data ECS components for hecs entities.
//!
//! Components are plain data structs with no behaviour.
//! Combat logic lives in the simulation crate.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// World placement of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
}

/// Candidate items released on death.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LootTable {
    pub drop_table: Vec<ItemId>,
    /// Probability in [0, 1] that any item drops.
    pub drop_chance: f64,
}

/// An item lying in the world after a drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedItem {
    pub item: ItemId,
    pub position: Vec3,
    /// Tick at which the item was materialized.
    pub dropped_at_tick: u64,
}
