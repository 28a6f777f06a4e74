//! Game loop thread: runs the combat engine at 30Hz.
//!
//! The engine is moved into the thread and handed back through the join
//! handle on shutdown. Commands arrive via `mpsc` channel. The latest snapshot
//! is stored in shared state for synchronous polling.

use std::io;
use std::sync::{mpsc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use arena_core::constants::TICK_RATE;
use arena_core::state::CombatSnapshot;
use arena_sim::CombatEngine;

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle that yields the engine back.
pub fn spawn_game_loop(
    engine: CombatEngine,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<CombatEngine>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: CombatEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<CombatSnapshot>>,
) -> CombatEngine {
    info!("game loop started");
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        let mut stop = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Command(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    stop = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick. Commands queued before a shutdown still apply.
        let snapshot = engine.tick();
        if !snapshot.cues.is_empty() {
            debug!(tick = snapshot.time.tick, cues = snapshot.cues.len(), "combat cues");
        }

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if stop {
            info!(tick = engine.time().tick, "game loop stopped");
            return engine;
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
