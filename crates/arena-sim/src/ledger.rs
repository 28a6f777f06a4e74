//! Score ledger: the session-wide record of points earned per level.
//!
//! One instance is created when the session starts and lives for the whole
//! run. Level transitions mutate it in place; only `reset_game` clears it.
//! All operations are synchronous and perform a single mutation each.

use tracing::{debug, info};

use arena_core::config::ScoringConfig;
use arena_core::error::Result;
use arena_core::constants::{DEFAULT_KILL_BONUS, KILL_POPUP_LABEL};
use arena_core::enums::PopupKind;
use arena_core::events::ScoreEvent;
use arena_core::state::ScoreView;

use crate::capabilities::ScoreEventSink;

pub struct ScoreLedger {
    damage_score_multiplier: f32,
    damage_penalty_multiplier: f32,
    minimum_score: i32,
    total_levels: usize,

    current_level_score: i32,
    /// Index i holds the finalized score of level i + 1.
    level_scores: Vec<i32>,
    /// 1-based.
    current_level: u32,
    total_damage_dealt: u32,
    total_damage_taken: u32,
    enemies_killed: u32,

    /// Popups since the last `drain_events`. Only filled while recording.
    events: Vec<ScoreEvent>,
    record_events: bool,
    sink: Option<Box<dyn ScoreEventSink>>,
}

impl ScoreLedger {
    /// Fails if the config is out of range, e.g. a positive `minimum_score`
    /// that level resets to zero would undercut.
    pub fn new(config: &ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            damage_score_multiplier: config.damage_score_multiplier,
            damage_penalty_multiplier: config.damage_penalty_multiplier,
            minimum_score: config.minimum_score,
            total_levels: config.total_levels,
            current_level_score: 0,
            level_scores: vec![0; config.total_levels],
            current_level: 1,
            total_damage_dealt: 0,
            total_damage_taken: 0,
            enemies_killed: 0,
            events: Vec::new(),
            record_events: false,
            sink: None,
        })
    }

    /// Keep popup events for `drain_events`. Off by default; whoever turns it
    /// on must drain regularly. Turning it off discards anything pending.
    pub fn set_event_recording(&mut self, enabled: bool) {
        self.record_events = enabled;
        if !enabled {
            self.events.clear();
        }
    }

    /// Install the display sink. Replaces any previous sink.
    pub fn set_sink(&mut self, sink: Box<dyn ScoreEventSink>) {
        self.sink = Some(sink);
    }

    pub fn clear_sink(&mut self) {
        self.sink = None;
    }

    // --- Mutations ---

    /// Award points for damage dealt to an enemy.
    pub fn add_damage_score(&mut self, damage: f32) {
        let damage = sanitize_damage(damage);
        let points = round_points(damage * self.damage_score_multiplier);
        self.current_level_score = self.current_level_score.saturating_add(points);
        self.total_damage_dealt = self
            .total_damage_dealt
            .saturating_add(round_points(damage).unsigned_abs());

        debug!(
            points,
            score = self.current_level_score,
            "damage dealt scored"
        );
        self.notify(PopupKind::Gain, points, None);
    }

    /// Deduct points for damage taken, never below the configured floor.
    pub fn subtract_damage_score(&mut self, damage: f32) {
        let damage = sanitize_damage(damage);
        let points = round_points(damage * self.damage_penalty_multiplier);
        self.current_level_score = self
            .current_level_score
            .saturating_sub(points)
            .max(self.minimum_score);
        self.total_damage_taken = self
            .total_damage_taken
            .saturating_add(round_points(damage).unsigned_abs());

        debug!(
            points,
            score = self.current_level_score,
            "damage taken penalized"
        );
        self.notify(PopupKind::Penalty, points, None);
    }

    /// Award a kill bonus and count the kill.
    pub fn add_enemy_kill_bonus(&mut self, bonus: i32) {
        self.current_level_score = self
            .current_level_score
            .saturating_add(bonus)
            .max(self.minimum_score);
        self.enemies_killed = self.enemies_killed.saturating_add(1);

        debug!(bonus, score = self.current_level_score, "kill bonus");
        self.notify(PopupKind::Kill, bonus, Some(KILL_POPUP_LABEL));
    }

    /// Kill bonus with the default amount (50).
    pub fn add_default_kill_bonus(&mut self) {
        self.add_enemy_kill_bonus(DEFAULT_KILL_BONUS);
    }

    /// Store the current level score into the history.
    ///
    /// Calling it again for the same level overwrites the stored value.
    /// `next_level` already does this, so callers advancing a level must not
    /// call both.
    pub fn complete_level(&mut self) {
        if self.current_level as usize > self.total_levels {
            debug!(level = self.current_level, "level beyond history, not stored");
            return;
        }
        if let Some(slot) = self.level_scores.get_mut(self.current_level as usize - 1) {
            *slot = self.current_level_score;
            info!(
                level = self.current_level,
                score = self.current_level_score,
                "level completed"
            );
        }
    }

    /// Complete the current level and start the next one from zero.
    pub fn next_level(&mut self) {
        self.complete_level();
        self.current_level = self.current_level.saturating_add(1);
        self.current_level_score = 0;
        info!(level = self.current_level, "advancing to next level");
        self.refresh_display();
    }

    /// Zero the current level score. Level index and history are untouched.
    pub fn restart_level(&mut self) {
        self.current_level_score = 0;
        info!(level = self.current_level, "level restarted");
        self.refresh_display();
    }

    /// Return every field to its initial state.
    pub fn reset_game(&mut self) {
        self.current_level = 1;
        self.current_level_score = 0;
        self.level_scores = vec![0; self.total_levels];
        self.total_damage_dealt = 0;
        self.total_damage_taken = 0;
        self.enemies_killed = 0;
        info!("score ledger reset");
        self.refresh_display();
    }

    // --- Queries ---

    pub fn current_level_score(&self) -> i32 {
        self.current_level_score
    }

    /// Finalized score of a 1-based level, or 0 outside [1, total_levels].
    pub fn level_score(&self, level: i32) -> i32 {
        if level < 1 || level as usize > self.total_levels {
            return 0;
        }
        self.level_scores
            .get(level as usize - 1)
            .copied()
            .unwrap_or(0)
    }

    /// Current level score plus every stored level score.
    pub fn total_score(&self) -> i32 {
        self.level_scores
            .iter()
            .fold(self.current_level_score, |acc, s| acc.saturating_add(*s))
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn total_levels(&self) -> usize {
        self.total_levels
    }

    pub fn enemies_killed(&self) -> u32 {
        self.enemies_killed
    }

    pub fn total_damage_dealt(&self) -> u32 {
        self.total_damage_dealt
    }

    pub fn total_damage_taken(&self) -> u32 {
        self.total_damage_taken
    }

    pub fn all_level_scores(&self) -> &[i32] {
        &self.level_scores
    }

    pub fn minimum_score(&self) -> i32 {
        self.minimum_score
    }

    pub fn is_last_level(&self) -> bool {
        self.current_level as usize >= self.total_levels
    }

    /// Every query bundled for display.
    pub fn view(&self) -> ScoreView {
        ScoreView {
            current_level: self.current_level,
            total_levels: self.total_levels,
            current_level_score: self.current_level_score,
            level_scores: self.level_scores.clone(),
            total_score: self.total_score(),
            enemies_killed: self.enemies_killed,
            total_damage_dealt: self.total_damage_dealt,
            total_damage_taken: self.total_damage_taken,
            is_last_level: self.is_last_level(),
        }
    }

    /// Take the popups recorded since the last call. Always empty unless
    /// recording was enabled with `set_event_recording`.
    pub fn drain_events(&mut self) -> Vec<ScoreEvent> {
        std::mem::take(&mut self.events)
    }

    fn notify(&mut self, kind: PopupKind, amount: i32, label: Option<&str>) {
        if self.record_events {
            self.events.push(ScoreEvent {
                score: self.current_level_score,
                amount,
                kind,
                label: label.map(str::to_owned),
            });
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.update_score(self.current_level_score);
            sink.show_score_popup(amount, kind.is_positive(), label);
        }
    }

    fn refresh_display(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.update_score(self.current_level_score);
        }
    }
}

impl std::fmt::Debug for ScoreLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreLedger")
            .field("current_level", &self.current_level)
            .field("current_level_score", &self.current_level_score)
            .field("level_scores", &self.level_scores)
            .field("enemies_killed", &self.enemies_killed)
            .finish_non_exhaustive()
    }
}

fn sanitize_damage(damage: f32) -> f32 {
    if damage.is_finite() && damage > 0.0 {
        damage
    } else {
        0.0
    }
}

/// Round half to even, saturating at the i32 range.
fn round_points(value: f32) -> i32 {
    if value.is_finite() {
        value.round_ties_even() as i32
    } else {
        0
    }
}
