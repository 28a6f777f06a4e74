//! Deferred one-shot removals, drained once per tick.
//!
//! Entries are kept in a min-heap ordered by fire tick, then by insertion
//! order. Cancelling or rescheduling leaves the old heap entry in place; it is
//! discarded when popped because its sequence number no longer matches.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use hecs::Entity;

use arena_core::types::SimTime;

use crate::capabilities::RemovalScheduling;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRemoval {
    fire_tick: u64,
    seq: u64,
    entity: Entity,
}

impl Ord for PendingRemoval {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the earliest entry first.
        other
            .fire_tick
            .cmp(&self.fire_tick)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PendingRemoval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct RemovalScheduler {
    heap: BinaryHeap<PendingRemoval>,
    /// Live sequence number per scheduled entity.
    live: HashMap<Entity, u64>,
    next_seq: u64,
}

impl RemovalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `entity` for removal at `fire_tick`, replacing any earlier entry.
    pub fn schedule_at(&mut self, entity: Entity, fire_tick: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(entity, seq);
        self.heap.push(PendingRemoval {
            fire_tick,
            seq,
            entity,
        });
    }

    /// Drop a pending removal. Returns true if one was pending.
    pub fn cancel(&mut self, entity: Entity) -> bool {
        self.live.remove(&entity).is_some()
    }

    pub fn is_scheduled(&self, entity: Entity) -> bool {
        self.live.contains_key(&entity)
    }

    /// Number of live (not cancelled) removals.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
    }

    /// Move every removal due at or before `tick` into `due`, earliest first.
    pub fn drain_due(&mut self, tick: u64, due: &mut Vec<Entity>) {
        while let Some(next) = self.heap.peek() {
            if next.fire_tick > tick {
                break;
            }
            let Some(entry) = self.heap.pop() else {
                break;
            };
            if self.live.get(&entry.entity) == Some(&entry.seq) {
                self.live.remove(&entry.entity);
                due.push(entry.entity);
            }
        }
    }
}

impl RemovalScheduling for RemovalScheduler {
    fn schedule_removal(&mut self, entity: Entity, delay_secs: f64, now: SimTime) {
        self.schedule_at(entity, now.tick + SimTime::ticks_for(delay_secs));
    }
}
