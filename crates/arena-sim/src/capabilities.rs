//! Collaborator capabilities the combat core drives but does not implement.
//!
//! Every capability is optional. A combatant holds the ones it was wired with
//! at spawn time; call sites skip the effect when a capability is absent.

use glam::Vec3;
use hecs::Entity;

use arena_core::types::{ItemId, SimTime};

/// Enemy awareness. Alerted once on first damage.
pub trait AlertCapability: Send + Sync {
    fn is_alerted(&self) -> bool;
    fn alert(&mut self, hit_point: Vec3);
}

/// World-space health bar.
pub trait HealthIndicator: Send + Sync {
    fn set_fill(&mut self, ratio: f32);
    fn set_visible(&mut self, visible: bool);
}

/// Autonomous behaviour and navigation.
pub trait BehaviorControl: Send + Sync {
    fn disable_behavior(&mut self);
    fn disable_locomotion(&mut self);
}

/// Colliders attached to the combatant.
pub trait CollisionControl: Send + Sync {
    fn disable_collision(&mut self);
}

/// Rigid-body simulation attached to the combatant.
pub trait PhysicsControl: Send + Sync {
    /// Stop gravity and further impulses.
    fn freeze(&mut self);
}

/// Creates a dropped item in the world.
pub trait LootSpawner: Send {
    fn spawn_loot(&mut self, item: &ItemId, position: Vec3);
}

/// Removes an entity from the world once a delay elapses.
pub trait RemovalScheduling {
    fn schedule_removal(&mut self, entity: Entity, delay_secs: f64, now: SimTime);
}

/// Score display. Notified of every ledger mutation.
pub trait ScoreEventSink: Send {
    fn update_score(&mut self, value: i32);
    fn show_score_popup(&mut self, amount: i32, is_positive: bool, label: Option<&str>);
}

/// The per-combatant capability set, fixed at spawn time.
#[derive(Default)]
pub struct Collaborators {
    pub alert: Option<Box<dyn AlertCapability>>,
    pub indicator: Option<Box<dyn HealthIndicator>>,
    pub behavior: Option<Box<dyn BehaviorControl>>,
    pub collision: Option<Box<dyn CollisionControl>>,
    pub physics: Option<Box<dyn PhysicsControl>>,
}

impl Collaborators {
    pub fn with_alert(mut self, alert: impl AlertCapability + 'static) -> Self {
        self.alert = Some(Box::new(alert));
        self
    }

    pub fn with_indicator(mut self, indicator: impl HealthIndicator + 'static) -> Self {
        self.indicator = Some(Box::new(indicator));
        self
    }

    pub fn with_behavior(mut self, behavior: impl BehaviorControl + 'static) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    pub fn with_collision(mut self, collision: impl CollisionControl + 'static) -> Self {
        self.collision = Some(Box::new(collision));
        self
    }

    pub fn with_physics(mut self, physics: impl PhysicsControl + 'static) -> Self {
        self.physics = Some(Box::new(physics));
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("alert", &self.alert.is_some())
            .field("indicator", &self.indicator.is_some())
            .field("behavior", &self.behavior.is_some())
            .field("collision", &self.collision.is_some())
            .field("physics", &self.physics.is_some())
            .finish()
    }
}
