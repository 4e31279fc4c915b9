//! Fire control system — tower cooldowns, target selection, firing.

use glam::DVec2;
use hecs::World;

use palisade_core::components::{Enemy, EnemyState, Tower, TowerState};
use palisade_core::config::tower_stats;
use palisade_core::enums::{EnemyPhase, TowerKind};
use palisade_core::events::AudioEvent;
use palisade_core::types::Position;

/// One pending shot, collected during the tower pass and spawned after it.
struct FireOrder {
    from: DVec2,
    heading: DVec2,
    kind: TowerKind,
    level: u8,
    target_id: u32,
}

/// Tick every tower: cool down, pick the nearest marching enemy in range,
/// fire. The cooldown only resets on an actual shot, so an idle tower fires
/// the instant a target enters range.
pub fn run(world: &mut World, dt: f64, audio_events: &mut Vec<AudioEvent>) {
    // Snapshot eligible targets once; the scan is O(towers × enemies),
    // which is fine at tens of entities.
    let targets: Vec<(u32, DVec2)> = {
        let mut query = world.query::<(&Enemy, &EnemyState, &Position)>();
        query
            .iter()
            .filter(|(_, (_, state, _))| state.phase == EnemyPhase::Marching)
            .map(|(_, (_, state, pos))| (state.id, pos.0))
            .collect()
    };

    let mut orders: Vec<FireOrder> = Vec::new();
    for (_entity, (_tower, state, pos)) in
        world.query_mut::<(&Tower, &mut TowerState, &Position)>()
    {
        state.cooldown_secs -= dt;
        if state.cooldown_secs > 0.0 {
            continue;
        }
        let stats = tower_stats(state.kind, state.level);

        // Nearest target wins; the strict comparison keeps the choice stable
        // under iteration order.
        let mut closest: Option<(u32, DVec2)> = None;
        let mut closest_dist = f64::INFINITY;
        for &(id, target_pos) in &targets {
            let dist = pos.0.distance(target_pos);
            if dist <= stats.range && dist < closest_dist {
                closest = Some((id, target_pos));
                closest_dist = dist;
            }
        }

        if let Some((target_id, target_pos)) = closest {
            orders.push(FireOrder {
                from: pos.0,
                heading: (target_pos - pos.0).normalize_or_zero(),
                kind: state.kind,
                level: state.level,
                target_id,
            });
            state.cooldown_secs = 1.0 / stats.fire_rate;
        }
    }

    for order in orders {
        let _ = crate::world_setup::spawn_shot(
            world,
            order.from,
            order.heading,
            order.kind,
            order.level,
            order.target_id,
        );
        audio_events.push(AudioEvent::Shoot { tower: order.kind });
    }
}
