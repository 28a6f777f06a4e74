//! State shared between the runner and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use arena_core::commands::CombatCommand;
use arena_core::state::CombatSnapshot;
use arena_sim::CombatEngine;

/// Commands sent from the runner to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A combat command to forward to the engine.
    Command(CombatCommand),
    /// Finish the current tick and stop, handing the engine back.
    Shutdown,
}

/// Latest snapshot, written by the loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<CombatSnapshot>>>;

/// Handle to a running game loop.
///
/// `mpsc::Sender` is Send but not Sync, so it sits behind a `Mutex` like
/// the rest of the shared state.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: SharedSnapshot,
    loop_handle: Mutex<Option<JoinHandle<CombatEngine>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly spawned loop.
    pub fn attach(&self, tx: mpsc::Sender<GameLoopCommand>, handle: JoinHandle<CombatEngine>) {
        if let Ok(mut slot) = self.command_tx.lock() {
            *slot = Some(tx);
        }
        if let Ok(mut slot) = self.loop_handle.lock() {
            *slot = Some(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Forward a command. Returns false if no loop is listening.
    pub fn send(&self, command: CombatCommand) -> bool {
        let Ok(tx) = self.command_tx.lock() else {
            return false;
        };
        match tx.as_ref() {
            Some(tx) => tx.send(GameLoopCommand::Command(command)).is_ok(),
            None => false,
        }
    }

    pub fn latest(&self) -> Option<CombatSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|snap| snap.clone())
    }

    /// Stop the loop and take the engine back. `None` if no loop was attached
    /// or the loop thread panicked.
    pub fn shutdown(&self) -> Option<CombatEngine> {
        let tx = self.command_tx.lock().ok()?.take()?;
        let _ = tx.send(GameLoopCommand::Shutdown);
        let handle = self.loop_handle.lock().ok()?.take()?;
        handle.join().ok()
    }
}
