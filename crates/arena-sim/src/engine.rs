//! Combat engine, the host for the combat core.
//!
//! `CombatEngine` owns the hecs ECS world, the session's single score ledger,
//! the removal scheduler and the seeded RNG. It processes queued commands,
//! runs all systems once per tick, and produces `CombatSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use arena_core::commands::CombatCommand;
use arena_core::components::Transform;
use arena_core::config::CombatConfig;
use arena_core::enums::SessionPhase;
use arena_core::error::Result;
use arena_core::events::CombatCue;
use arena_core::state::CombatSnapshot;
use arena_core::types::SimTime;

use crate::capabilities::{Collaborators, LootSpawner, ScoreEventSink};
use crate::combatant::{CombatContext, Combatant, Hit};
use crate::health::{DamageOutcome, HealthState};
use crate::ledger::ScoreLedger;
use crate::scheduler::RemovalScheduler;
use crate::systems;
use crate::world_setup::{self, PendingDrops};

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same loot rolls.
    pub seed: u64,
    pub combat: CombatConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            combat: CombatConfig::default(),
        }
    }
}

/// The combat engine. Owns the ECS world and all session state.
pub struct CombatEngine {
    world: World,
    time: SimTime,
    phase: SessionPhase,
    config: CombatConfig,
    rng: ChaCha8Rng,
    ledger: ScoreLedger,
    removals: RemovalScheduler,
    command_queue: VecDeque<CombatCommand>,
    despawn_buffer: Vec<Entity>,
    pending_drops: PendingDrops,
    loot_spawner: Option<Box<dyn LootSpawner>>,
    cues: Vec<CombatCue>,
}

impl CombatEngine {
    /// Create a new engine. Fails only if the combat config is invalid.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.combat.validate()?;
        let mut ledger = ScoreLedger::new(&config.combat.scoring)?;
        // Drained into every snapshot by `tick`.
        ledger.set_event_recording(true);
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SessionPhase::default(),
            ledger,
            config: config.combat,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            removals: RemovalScheduler::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            pending_drops: PendingDrops::default(),
            loot_spawner: None,
            cues: Vec::new(),
        })
    }

    /// Route score popups to a display.
    pub fn set_score_sink(&mut self, sink: Box<dyn ScoreEventSink>) {
        self.ledger.set_sink(sink);
    }

    /// Hand dropped loot to an external spawner instead of the ECS world.
    pub fn set_loot_spawner(&mut self, spawner: Box<dyn LootSpawner>) {
        self.loot_spawner = Some(spawner);
    }

    /// Spawn a combatant with the configured defaults.
    pub fn spawn_combatant(&mut self, position: Vec3, collaborators: Collaborators) -> Entity {
        let combatant = Combatant::configured(&self.config, collaborators);
        self.spawn(combatant, position)
    }

    /// Spawn a pre-built combatant.
    pub fn spawn(&mut self, combatant: Combatant, position: Vec3) -> Entity {
        let entity = world_setup::spawn_combatant(&mut self.world, combatant, position);
        debug!(entity = entity.to_bits().get(), ?position, "combatant spawned");
        entity
    }

    /// Apply damage to a combatant immediately.
    ///
    /// Unknown or already removed entities are ignored.
    pub fn apply_damage(
        &mut self,
        entity: Entity,
        damage: f32,
        hit_point: Vec3,
        hit_direction: Vec3,
    ) -> DamageOutcome {
        let Ok((combatant, transform)) = self
            .world
            .query_one_mut::<(&mut Combatant, &mut Transform)>(entity)
        else {
            warn!(entity = entity.to_bits().get(), "damage for unknown entity ignored");
            return DamageOutcome::Ignored;
        };

        let loot_spawner: &mut dyn LootSpawner = match self.loot_spawner.as_deref_mut() {
            Some(spawner) => spawner,
            None => &mut self.pending_drops,
        };
        let mut ctx = CombatContext {
            entity,
            now: self.time,
            ledger: Some(&mut self.ledger),
            removals: &mut self.removals,
            loot_spawner,
            rng: &mut self.rng,
            cues: &mut self.cues,
        };
        let outcome = combatant.take_damage(
            transform,
            &Hit::new(damage, hit_point, hit_direction),
            &mut ctx,
        );

        self.pending_drops.flush_into(&mut self.world, self.time.tick);
        outcome
    }

    /// Remove an entity before its scheduled removal. Cancels the schedule.
    pub fn remove_entity(&mut self, entity: Entity) -> bool {
        self.removals.cancel(entity);
        let removed = self.world.despawn(entity).is_ok();
        if removed {
            self.cues.push(CombatCue::Removed {
                entity_id: entity.to_bits().get(),
            });
        }
        removed
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: CombatCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = CombatCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> CombatSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let cues = std::mem::take(&mut self.cues);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.ledger.view(),
            self.ledger.drain_events(),
            cues,
        )
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The session ledger. Never recreated by level changes.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut ScoreLedger {
        &mut self.ledger
    }

    /// Copy of a combatant's health, if the entity still exists.
    pub fn health(&self, entity: Entity) -> Option<HealthState> {
        self.world
            .get::<&Combatant>(entity)
            .ok()
            .map(|combatant| combatant.health)
    }

    pub fn position(&self, entity: Entity) -> Option<Vec3> {
        self.world
            .get::<&Transform>(entity)
            .ok()
            .map(|transform| transform.position)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn is_removal_scheduled(&self, entity: Entity) -> bool {
        self.removals.is_scheduled(entity)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: CombatCommand) {
        match command {
            CombatCommand::SpawnCombatant { position } => {
                self.spawn_combatant(position, Collaborators::default());
            }
            CombatCommand::ApplyDamage {
                entity_id,
                damage,
                hit_point,
                hit_direction,
            } => match Entity::from_bits(entity_id) {
                Some(entity) => {
                    self.apply_damage(entity, damage, hit_point, hit_direction);
                }
                None => warn!(entity_id, "malformed entity id ignored"),
            },
            CombatCommand::PlayerDamaged { damage } => {
                self.ledger.subtract_damage_score(damage);
            }
            CombatCommand::CompleteLevel => self.ledger.complete_level(),
            CombatCommand::NextLevel => self.ledger.next_level(),
            CombatCommand::RestartLevel => self.ledger.restart_level(),
            CombatCommand::ResetGame => self.ledger.reset_game(),
            CombatCommand::Pause => {
                if self.phase == SessionPhase::Running {
                    self.phase = SessionPhase::Paused;
                }
            }
            CombatCommand::Resume => {
                if self.phase == SessionPhase::Paused {
                    self.phase = SessionPhase::Running;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Deferred removals
        systems::removal::run(
            &mut self.world,
            &mut self.removals,
            self.time.tick,
            &mut self.despawn_buffer,
            &mut self.cues,
        );
        // 2. Health indicator auto-hide
        systems::indicator::run(&mut self.world, self.time.elapsed_secs);
    }
}
