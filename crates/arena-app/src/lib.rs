//! Headless arena runner.
//!
//! Wires the combat engine to a background game loop and console stand-ins
//! for the score display and enemy bodies.

pub mod game_loop;
pub mod hud;
pub mod state;

pub use arena_core as core;
