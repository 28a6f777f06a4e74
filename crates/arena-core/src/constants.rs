//! Simulation constants and tuning defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Health ---

/// Starting and ceiling health for a combatant.
pub const DEFAULT_MAX_HEALTH: f32 = 50.0;

/// Seconds a full-health indicator lingers after the last hit.
pub const DEFAULT_INDICATOR_HIDE_DELAY_SECS: f64 = 2.0;

// --- Death ---

/// Score awarded once when a combatant dies.
pub const DEFAULT_KILL_BONUS: i32 = 50;

/// Seconds between death and removal from the world.
pub const DEFAULT_DESTROY_DELAY_SECS: f64 = 5.0;

/// Vertical offset applied to a corpse so it neither sinks nor floats.
pub const DEATH_PIN_OFFSET: f32 = 0.05;

// --- Loot ---

/// Probability that a dying combatant releases an item.
pub const DEFAULT_DROP_CHANCE: f64 = 0.5;

/// Height above the corpse at which dropped loot appears.
pub const LOOT_DROP_HEIGHT: f32 = 1.0;

// --- Scoring ---

/// Points per unit of damage dealt.
pub const DEFAULT_DAMAGE_SCORE_MULTIPLIER: f32 = 1.0;

/// Points lost per unit of damage taken.
pub const DEFAULT_DAMAGE_PENALTY_MULTIPLIER: f32 = 0.5;

/// Floor for the current level score.
pub const DEFAULT_MINIMUM_SCORE: i32 = 0;

/// Number of levels tracked by the score history.
pub const DEFAULT_TOTAL_LEVELS: usize = 3;

/// Popup label attached to kill bonuses.
pub const KILL_POPUP_LABEL: &str = "KILL!";
