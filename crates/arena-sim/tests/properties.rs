//! Property-based tests using proptest
//!
//! Invariants that must hold for any input:
//! - Health: stays within [0, max] under any damage sequence
//! - Death: the kill bonus and removal happen exactly once
//! - Ledger: score never drops below the floor, total equals the sum
//! - Engine: same seed and inputs give identical snapshots

use glam::Vec3;
use proptest::prelude::*;

use arena_sim::capabilities::Collaborators;
use arena_sim::core::config::{CombatConfig, ScoringConfig};
use arena_sim::core::types::ItemId;
use arena_sim::health::DamageOutcome;
use arena_sim::ledger::ScoreLedger;
use arena_sim::{CombatEngine, EngineConfig};

#[derive(Debug, Clone)]
enum LedgerOp {
    Dealt(f32),
    Taken(f32),
    Kill(i32),
    Complete,
    Next,
    Restart,
}

fn ledger_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        4 => (0.0f32..500.0).prop_map(LedgerOp::Dealt),
        4 => (0.0f32..500.0).prop_map(LedgerOp::Taken),
        2 => (0i32..200).prop_map(LedgerOp::Kill),
        1 => Just(LedgerOp::Complete),
        1 => Just(LedgerOp::Next),
        1 => Just(LedgerOp::Restart),
    ]
}

fn engine_with_max_health(max_health: f32) -> CombatEngine {
    let mut combat = CombatConfig::default();
    combat.health.max_health = max_health;
    CombatEngine::new(EngineConfig { seed: 1, combat }).unwrap()
}

fn apply(ledger: &mut ScoreLedger, op: &LedgerOp) {
    match op {
        LedgerOp::Dealt(d) => ledger.add_damage_score(*d),
        LedgerOp::Taken(d) => ledger.subtract_damage_score(*d),
        LedgerOp::Kill(b) => ledger.add_enemy_kill_bonus(*b),
        LedgerOp::Complete => ledger.complete_level(),
        LedgerOp::Next => ledger.next_level(),
        LedgerOp::Restart => ledger.restart_level(),
    }
}

// ============================================================
// Health Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_health_stays_in_bounds(
        max in 1.0f32..1000.0,
        hits in prop::collection::vec(-200.0f32..400.0, 0..40),
    ) {
        let mut engine = engine_with_max_health(max);
        let enemy = engine.spawn_combatant(Vec3::ZERO, Collaborators::default());
        for damage in &hits {
            engine.apply_damage(enemy, *damage, Vec3::ZERO, Vec3::X);
            let health = engine.health(enemy).unwrap();
            prop_assert!(health.current_health() >= 0.0);
            prop_assert!(health.current_health() <= max);
            let pct = health.health_percentage();
            prop_assert!((0.0..=1.0).contains(&pct), "percentage {pct} out of range");
        }
    }

    #[test]
    fn prop_lethal_only_at_zero_and_dead(
        max in 1.0f32..200.0,
        hits in prop::collection::vec(0.0f32..100.0, 1..20),
    ) {
        let mut engine = engine_with_max_health(max);
        let enemy = engine.spawn_combatant(Vec3::ZERO, Collaborators::default());
        for damage in hits {
            let outcome = engine.apply_damage(enemy, damage, Vec3::ZERO, Vec3::X);
            let health = engine.health(enemy).unwrap();
            match outcome {
                DamageOutcome::Lethal => {
                    prop_assert_eq!(health.current_health(), 0.0);
                    prop_assert!(health.is_dead());
                }
                DamageOutcome::Wounded => {
                    prop_assert!(health.current_health() > 0.0);
                    prop_assert!(!health.is_dead());
                }
                DamageOutcome::Ignored => prop_assert!(health.is_dead()),
            }
        }
    }
}

// ============================================================
// Death Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_death_runs_exactly_once(
        seed in any::<u64>(),
        hits in prop::collection::vec(0.0f32..80.0, 1..30),
    ) {
        let mut engine = CombatEngine::new(EngineConfig { seed, combat: CombatConfig::default() }).unwrap();
        let enemy = engine.spawn_combatant(Vec3::ZERO, Collaborators::default());

        let mut lethal = 0u32;
        for damage in &hits {
            if engine.apply_damage(enemy, *damage, Vec3::ZERO, Vec3::X) == DamageOutcome::Lethal {
                lethal += 1;
            }
        }

        prop_assert!(lethal <= 1);
        let dead = engine.health(enemy).unwrap().is_dead();
        prop_assert_eq!(dead, lethal == 1);
        prop_assert_eq!(engine.ledger().enemies_killed(), lethal);
        prop_assert_eq!(engine.is_removal_scheduled(enemy), dead);
    }
}

// ============================================================
// Ledger Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_score_never_below_floor(
        floor in -100i32..=0,
        ops in prop::collection::vec(ledger_op(), 0..60),
    ) {
        let mut ledger = ScoreLedger::new(&ScoringConfig { minimum_score: floor, ..Default::default() }).unwrap();
        for op in &ops {
            apply(&mut ledger, op);
            prop_assert!(
                ledger.current_level_score() >= floor,
                "score {} below floor {} after {:?}",
                ledger.current_level_score(), floor, op
            );
        }
    }

    #[test]
    fn prop_total_is_current_plus_history(ops in prop::collection::vec(ledger_op(), 0..60)) {
        let mut ledger = ScoreLedger::new(&ScoringConfig::default()).unwrap();
        for op in &ops {
            apply(&mut ledger, op);
        }
        let history: i32 = ledger.all_level_scores().iter().sum();
        prop_assert_eq!(ledger.total_score(), ledger.current_level_score() + history);
        prop_assert_eq!(ledger.all_level_scores().len(), ledger.total_levels());
    }

    #[test]
    fn prop_levels_only_advance(ops in prop::collection::vec(ledger_op(), 0..60)) {
        let mut ledger = ScoreLedger::new(&ScoringConfig::default()).unwrap();
        let mut level = ledger.current_level();
        for op in &ops {
            apply(&mut ledger, op);
            prop_assert!(ledger.current_level() >= level);
            level = ledger.current_level();
        }
    }

    #[test]
    fn prop_reset_returns_to_initial(ops in prop::collection::vec(ledger_op(), 0..60)) {
        let config = ScoringConfig::default();
        let mut ledger = ScoreLedger::new(&config).unwrap();
        for op in &ops {
            apply(&mut ledger, op);
        }
        ledger.reset_game();
        prop_assert_eq!(ledger.view(), ScoreLedger::new(&config).unwrap().view());
    }
}

// ============================================================
// Engine Properties
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn prop_engine_is_deterministic(
        seed in any::<u64>(),
        hits in prop::collection::vec((0usize..4, 0.0f32..60.0), 1..40),
    ) {
        let run = || {
            let mut combat = CombatConfig::default();
            combat.loot.drop_table = vec![ItemId::new("ammo"), ItemId::new("medkit")];
            let mut engine = CombatEngine::new(EngineConfig { seed, combat }).unwrap();
            let enemies: Vec<_> = (0..4)
                .map(|i| engine.spawn_combatant(Vec3::new(i as f32, 0.0, 0.0), Collaborators::default()))
                .collect();
            let mut out = Vec::new();
            for (target, damage) in &hits {
                engine.apply_damage(enemies[*target], *damage, Vec3::ZERO, Vec3::X);
                out.push(serde_json::to_string(&engine.tick()).unwrap());
            }
            out
        };
        prop_assert_eq!(run(), run());
    }
}
