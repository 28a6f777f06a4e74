//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Life cycle of a combatant.
///
/// `Dying` only exists while the death transition is running; outside of it
/// a combatant is either `Alive` or `Dead`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Alive,
    Dying,
    Dead,
}

impl LifeState {
    /// True once the death transition has started. Never reverts.
    pub fn is_dead(self) -> bool {
        !matches!(self, LifeState::Alive)
    }
}

/// Flavour of a score popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupKind {
    /// Points gained from damage dealt.
    Gain,
    /// Points lost from damage taken.
    Penalty,
    /// Kill bonus.
    Kill,
}

impl PopupKind {
    pub fn is_positive(self) -> bool {
        !matches!(self, PopupKind::Penalty)
    }
}

/// Whether simulation time is advancing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Running,
    Paused,
}
