//! Cleanup system: removes terminal enemies and spent shots.

use hecs::{Entity, World};

use palisade_core::components::{Enemy, EnemyState, Projectile, ShotState};
use palisade_core::enums::EnemyPhase;

/// Despawn every enemy in a terminal phase and every spent shot.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_enemy, state)) in world.query_mut::<(&Enemy, &EnemyState)>() {
        if state.phase != EnemyPhase::Marching {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_shot, state)) in world.query_mut::<(&Projectile, &ShotState)>() {
        if state.spent {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
