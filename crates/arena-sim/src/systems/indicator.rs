//! Indicator system: hides full-health bars after the hide delay.

use hecs::World;

use crate::combatant::Combatant;

pub fn run(world: &mut World, now_secs: f64) {
    for (_entity, combatant) in world.query_mut::<&mut Combatant>() {
        combatant.update_indicator(now_secs);
    }
}
