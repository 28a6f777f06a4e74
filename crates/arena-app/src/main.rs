//! Headless arena session.
//!
//! Usage: `arena [config.toml] [seed]`
//!
//! Spawns a small encounter, scripts a fight across three levels through the
//! game loop, waits out the corpse removal delay and prints the final score
//! summary as JSON.

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use glam::Vec3;
use tracing::{error, info, warn};

use arena_app::hud::{ConsoleHud, LoggedBody};
use arena_app::state::AppState;
use arena_app::game_loop;
use arena_core::commands::CombatCommand;
use arena_core::config::CombatConfig;
use arena_sim::capabilities::Collaborators;
use arena_sim::{CombatEngine, EngineConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let combat = match args.next() {
        Some(path) => {
            info!(%path, "loading combat config");
            CombatConfig::load(Path::new(&path))?
        }
        None => CombatConfig::default(),
    };
    let seed = match args.next() {
        Some(raw) => raw.parse()?,
        None => EngineConfig::default().seed,
    };

    let destroy_delay = combat.death.destroy_delay_secs;
    let mut engine = CombatEngine::new(EngineConfig { seed, combat })?;
    engine.set_score_sink(Box::new(ConsoleHud::default()));

    let enemies: Vec<u64> = ["grunt", "brute", "sentry"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let body = LoggedBody::new(*name);
            let collaborators = Collaborators::default()
                .with_behavior(body.clone())
                .with_collision(body.clone())
                .with_physics(body);
            let position = Vec3::new(i as f32 * 4.0, 0.0, 10.0);
            engine.spawn_combatant(position, collaborators).to_bits().get()
        })
        .collect();
    info!(seed, enemies = enemies.len(), "encounter ready");

    let state = AppState::new();
    let (tx, handle) = game_loop::spawn_game_loop(engine, state.latest_snapshot.clone())?;
    state.attach(tx, handle);

    for (level, &enemy) in enemies.iter().enumerate() {
        let hits = [
            CombatCommand::ApplyDamage {
                entity_id: enemy,
                damage: 20.0,
                hit_point: Vec3::new(0.0, 1.2, 0.0),
                hit_direction: Vec3::NEG_Z,
            },
            CombatCommand::PlayerDamaged { damage: 6.0 },
            CombatCommand::ApplyDamage {
                entity_id: enemy,
                damage: 40.0,
                hit_point: Vec3::new(0.0, 1.6, 0.0),
                hit_direction: Vec3::NEG_Z,
            },
        ];
        for command in hits {
            if !state.send(command) {
                warn!("game loop is not accepting commands");
            }
            std::thread::sleep(game_loop::TICK_DURATION * 3);
        }
        if level + 1 < enemies.len() {
            state.send(CombatCommand::NextLevel);
        } else {
            state.send(CombatCommand::CompleteLevel);
        }
    }

    // Let the corpses be cleaned up.
    std::thread::sleep(Duration::from_secs_f64(destroy_delay) + Duration::from_millis(500));

    if let Some(snapshot) = state.latest() {
        info!(
            tick = snapshot.time.tick,
            remaining = snapshot.combatants.len(),
            dropped = snapshot.dropped_items.len(),
            "final snapshot"
        );
    }

    let engine = state.shutdown().ok_or("game loop did not shut down cleanly")?;
    println!("{}", serde_json::to_string_pretty(&engine.ledger().view())?);
    Ok(())
}
