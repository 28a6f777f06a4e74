//! ECS systems that operate on the combat world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components and the engine.

pub mod indicator;
pub mod removal;
pub mod snapshot;
