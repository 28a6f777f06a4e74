//! Loot drop policy: which item, if any, a dying combatant releases.

use rand::Rng;

/// Stateless drop decision. Randomness comes only from the caller's source.
pub struct LootDropPolicy;

impl LootDropPolicy {
    /// Pick the item to drop.
    ///
    /// Nothing drops from an empty table. Otherwise one uniform roll in
    /// `[0, 1)` is drawn; unless it is strictly below `drop_chance` nothing
    /// drops (so a NaN chance never drops). Otherwise one table entry is
    /// chosen uniformly.
    pub fn decide<'a, T, R>(drop_table: &'a [T], drop_chance: f64, rng: &mut R) -> Option<&'a T>
    where
        R: Rng + ?Sized,
    {
        if drop_table.is_empty() {
            return None;
        }
        let roll: f64 = rng.gen();
        // Also rejects a NaN chance.
        if !(roll < drop_chance) {
            return None;
        }
        drop_table.get(rng.gen_range(0..drop_table.len()))
    }
}
