//! Bounty sweep — pays each slain enemy's reward exactly once.

use hecs::World;

use palisade_core::components::{Enemy, EnemyState, Health};
use palisade_core::enums::EnemyPhase;

/// Credit rewards for enemies slain this frame, or any earlier frame that
/// has not been swept yet. The `rewarded` flag guarantees a single payout no
/// matter how many frames observe the corpse.
pub fn run(world: &mut World, gold: &mut u32) {
    for (_entity, (_enemy, state, health)) in
        world.query_mut::<(&Enemy, &mut EnemyState, &Health)>()
    {
        if state.phase == EnemyPhase::Slain && health.hp <= 0.0 && !state.rewarded {
            state.rewarded = true;
            *gold += state.reward;
        }
    }
}
