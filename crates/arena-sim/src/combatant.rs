//! Combatant: the health pool plus everything a hit or a death touches.
//!
//! Stored as a single hecs component next to a `Transform`. Collaborators are
//! wired in at spawn time and never looked up afterwards.

use glam::Vec3;
use hecs::Entity;
use rand::RngCore;
use tracing::{debug, warn};

use arena_core::components::{LootTable, Transform};
use arena_core::config::CombatConfig;
use arena_core::error::Result;
use arena_core::events::CombatCue;
use arena_core::types::SimTime;

use crate::capabilities::{Collaborators, LootSpawner, RemovalScheduling};
use crate::death;
use crate::health::{DamageOutcome, HealthState};
use crate::ledger::ScoreLedger;

/// A single incoming hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub damage: f32,
    pub hit_point: Vec3,
    pub hit_direction: Vec3,
}

impl Hit {
    pub fn new(damage: f32, hit_point: Vec3, hit_direction: Vec3) -> Self {
        Self {
            damage,
            hit_point,
            hit_direction,
        }
    }
}

/// Shared services a hit may reach, borrowed for the duration of one call.
pub struct CombatContext<'a> {
    pub entity: Entity,
    pub now: SimTime,
    /// Absent when the combatant should not report score.
    pub ledger: Option<&'a mut ScoreLedger>,
    pub removals: &'a mut dyn RemovalScheduling,
    pub loot_spawner: &'a mut dyn LootSpawner,
    pub rng: &'a mut dyn RngCore,
    pub cues: &'a mut Vec<CombatCue>,
}

impl CombatContext<'_> {
    pub fn entity_id(&self) -> u64 {
        self.entity.to_bits().get()
    }
}

#[derive(Debug)]
pub struct Combatant {
    pub health: HealthState,
    pub loot: LootTable,
    pub kill_bonus: i32,
    pub destroy_delay_secs: f64,
    pub hide_indicator_when_full: bool,
    pub indicator_hide_delay_secs: f64,
    pub collaborators: Collaborators,
    indicator_visible: bool,
}

impl Combatant {
    /// Build a combatant from a config, validating it first.
    pub fn from_config(config: &CombatConfig, collaborators: Collaborators) -> Result<Self> {
        config.validate()?;
        Ok(Self::configured(config, collaborators))
    }

    /// Caller guarantees `config` was validated.
    pub(crate) fn configured(config: &CombatConfig, collaborators: Collaborators) -> Self {
        let mut combatant = Self {
            health: HealthState::full(config.health.max_health),
            loot: LootTable {
                drop_table: config.loot.drop_table.clone(),
                drop_chance: config.loot.drop_chance,
            },
            kill_bonus: config.death.kill_bonus,
            destroy_delay_secs: config.death.destroy_delay_secs,
            hide_indicator_when_full: config.health.hide_indicator_when_full,
            indicator_hide_delay_secs: config.health.indicator_hide_delay_secs,
            collaborators,
            indicator_visible: true,
        };
        if combatant.hide_indicator_when_full {
            combatant.set_indicator_visible(false);
        }
        combatant
    }

    /// Apply one hit.
    ///
    /// Order: health update, damage score, indicator and cues, alert, then the
    /// death transition if health reached zero. A dead combatant ignores the
    /// hit entirely.
    pub fn take_damage(
        &mut self,
        transform: &mut Transform,
        hit: &Hit,
        ctx: &mut CombatContext<'_>,
    ) -> DamageOutcome {
        if self.health.is_dead() {
            debug!(entity = ctx.entity_id(), "already dead, ignoring damage");
            return DamageOutcome::Ignored;
        }
        if !hit.damage.is_finite() {
            warn!(entity = ctx.entity_id(), damage = hit.damage, "non-finite damage discarded");
            return DamageOutcome::Ignored;
        }

        let outcome = self.health.apply_damage(hit.damage, ctx.now.elapsed_secs);
        debug!(
            entity = ctx.entity_id(),
            damage = hit.damage,
            health = self.health.current_health(),
            direction = ?hit.hit_direction,
            "damage applied"
        );

        if let Some(ledger) = ctx.ledger.as_deref_mut() {
            ledger.add_damage_score(hit.damage);
        }

        self.set_indicator_visible(true);
        let fill = self.health.health_percentage();
        if let Some(indicator) = self.collaborators.indicator.as_mut() {
            indicator.set_fill(fill);
        }

        ctx.cues.push(CombatCue::Hit {
            entity_id: ctx.entity_id(),
            damage: hit.damage,
        });
        if outcome == DamageOutcome::Wounded {
            ctx.cues.push(CombatCue::HitReaction {
                entity_id: ctx.entity_id(),
            });
        }

        if let Some(alert) = self.collaborators.alert.as_mut() {
            if !alert.is_alerted() {
                alert.alert(hit.hit_point);
            }
        }

        if outcome == DamageOutcome::Lethal {
            death::run(self, transform, ctx);
        }

        outcome
    }

    /// Hide a full-health indicator once the hide delay has passed.
    pub fn update_indicator(&mut self, now_secs: f64) {
        if !self.hide_indicator_when_full || !self.indicator_visible || self.health.is_dead() {
            return;
        }
        if self.health.is_full()
            && now_secs - self.health.last_hit_secs() > self.indicator_hide_delay_secs
        {
            self.set_indicator_visible(false);
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    pub fn health_percentage(&self) -> f32 {
        self.health.health_percentage()
    }

    pub fn indicator_visible(&self) -> bool {
        self.indicator_visible
    }

    pub(crate) fn set_indicator_visible(&mut self, visible: bool) {
        self.indicator_visible = visible;
        if let Some(indicator) = self.collaborators.indicator.as_mut() {
            indicator.set_visible(visible);
        }
    }
}
