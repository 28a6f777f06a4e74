//! Console stand-ins for the score display and the enemy body.

use tracing::{debug, info};

use arena_sim::capabilities::{BehaviorControl, CollisionControl, PhysicsControl, ScoreEventSink};

/// Score display that writes to the log.
#[derive(Debug, Default)]
pub struct ConsoleHud {
    displayed_score: i32,
}

impl ConsoleHud {
    pub fn displayed_score(&self) -> i32 {
        self.displayed_score
    }
}

impl ScoreEventSink for ConsoleHud {
    fn update_score(&mut self, value: i32) {
        self.displayed_score = value;
        debug!(score = value, "score display updated");
    }

    fn show_score_popup(&mut self, amount: i32, is_positive: bool, label: Option<&str>) {
        let sign = if is_positive { '+' } else { '-' };
        match label {
            Some(label) => info!("{label} {sign}{amount} (score {})", self.displayed_score),
            None => info!("{sign}{amount} (score {})", self.displayed_score),
        }
    }
}

/// Enemy body that logs every shutdown step.
#[derive(Debug, Clone)]
pub struct LoggedBody {
    pub name: String,
}

impl LoggedBody {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl BehaviorControl for LoggedBody {
    fn disable_behavior(&mut self) {
        debug!(enemy = %self.name, "behaviour disabled");
    }

    fn disable_locomotion(&mut self) {
        debug!(enemy = %self.name, "navigation stopped");
    }
}

impl CollisionControl for LoggedBody {
    fn disable_collision(&mut self) {
        debug!(enemy = %self.name, "colliders disabled");
    }
}

impl PhysicsControl for LoggedBody {
    fn freeze(&mut self) {
        debug!(enemy = %self.name, "body frozen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_tracks_latest_score() {
        let mut hud = ConsoleHud::default();
        hud.update_score(40);
        hud.show_score_popup(40, true, None);
        hud.update_score(90);
        hud.show_score_popup(50, true, Some("KILL!"));
        assert_eq!(hud.displayed_score(), 90);
    }
}
