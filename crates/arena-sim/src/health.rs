//! Per-combatant health pool.
//!
//! Health only changes through [`HealthState::apply_damage`] and always stays
//! within `[0, max_health]`. The life state is monotonic: once the death
//! transition begins it never returns to `Alive`.

use arena_core::config::validate_max_health;
use arena_core::enums::LifeState;
use arena_core::error::Result;

/// Result of a single damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Combatant was already dead or the input was rejected; nothing changed.
    Ignored,
    /// Damage applied, combatant still standing.
    Wounded,
    /// Damage applied and health reached zero.
    Lethal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthState {
    max_health: f32,
    current_health: f32,
    life: LifeState,
    /// Sim time (seconds) of the last applied damage. UI timing only.
    last_hit_secs: f64,
}

impl HealthState {
    /// Full health pool. `max_health` must be positive and finite.
    pub fn new(max_health: f32) -> Result<Self> {
        validate_max_health(max_health)?;
        Ok(Self::full(max_health))
    }

    /// Caller guarantees `max_health` was validated.
    pub(crate) fn full(max_health: f32) -> Self {
        Self {
            max_health,
            current_health: max_health,
            life: LifeState::Alive,
            last_hit_secs: 0.0,
        }
    }

    /// Subtract `damage`, clamp into `[0, max_health]` and stamp the hit time.
    ///
    /// Dead combatants and non-finite damage are ignored without mutation.
    /// A `Lethal` result leaves the life state untouched; the caller runs the
    /// death transition, which is why this stays inside the crate.
    pub(crate) fn apply_damage(&mut self, damage: f32, now_secs: f64) -> DamageOutcome {
        if self.life.is_dead() || !damage.is_finite() {
            return DamageOutcome::Ignored;
        }

        self.current_health = (self.current_health - damage).clamp(0.0, self.max_health);
        self.last_hit_secs = now_secs;

        if self.current_health <= 0.0 {
            DamageOutcome::Lethal
        } else {
            DamageOutcome::Wounded
        }
    }

    /// Enter `Dying`. Returns false if the transition already happened.
    pub(crate) fn begin_dying(&mut self) -> bool {
        if self.life.is_dead() {
            return false;
        }
        self.life = LifeState::Dying;
        true
    }

    pub(crate) fn finish_dying(&mut self) {
        self.life = LifeState::Dead;
    }

    /// current / max, always in [0, 1].
    pub fn health_percentage(&self) -> f32 {
        self.current_health / self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.life.is_dead()
    }

    pub fn life_state(&self) -> LifeState {
        self.life
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn is_full(&self) -> bool {
        self.current_health >= self.max_health
    }

    pub fn last_hit_secs(&self) -> f64 {
        self.last_hit_secs
    }
}
