//! Projectile system — homing flight, collision, and hit resolution.

use glam::DVec2;
use hecs::{Entity, World};

use palisade_core::components::{
    Enemy, EnemyState, Health, Projectile, ShotState, SlowEffect, SlowParams,
};
use palisade_core::config::{enemy_profile, MapConfig};
use palisade_core::enums::{EnemyPhase, TowerKind};
use palisade_core::events::AudioEvent;
use palisade_core::types::{Heading, Position};

use crate::fx::EffectObserver;

/// Advance every live shot by one frame: re-aim at the tracked enemy, move,
/// then resolve collision or leave the map. Shots are processed one at a
/// time so a kill is visible to every shot after it in the same frame.
pub fn run(
    world: &mut World,
    map: &MapConfig,
    dt: f64,
    fx: &mut dyn EffectObserver,
    audio_events: &mut Vec<AudioEvent>,
) {
    let shot_entities: Vec<Entity> = {
        let mut query = world.query::<(&Projectile, &ShotState)>();
        query
            .iter()
            .filter(|(_, (_, shot))| !shot.spent)
            .map(|(entity, _)| entity)
            .collect()
    };

    for entity in shot_entities {
        step_shot(world, map, dt, entity, fx, audio_events);
    }
}

/// Resolve the entity of a live enemy by its stable id.
fn find_enemy(world: &World, id: u32) -> Option<Entity> {
    let mut query = world.query::<(&Enemy, &EnemyState)>();
    query
        .iter()
        .find(|(_, (_, state))| state.id == id)
        .map(|(entity, _)| entity)
}

/// One frame of a single shot: homing, movement, collision, bounds check.
fn step_shot(
    world: &mut World,
    map: &MapConfig,
    dt: f64,
    entity: Entity,
    fx: &mut dyn EffectObserver,
    audio_events: &mut Vec<AudioEvent>,
) {
    let (kind, size, speed, damage, target_id, aoe_radius, slow) = {
        let shot = match world.get::<&ShotState>(entity) {
            Ok(s) => s,
            Err(_) => return,
        };
        (
            shot.kind,
            shot.size,
            shot.speed,
            shot.damage,
            shot.target_id,
            shot.aoe_radius,
            shot.slow,
        )
    };

    // The tracked target, as long as it is still on the field and marching.
    // A dead or despawned target leaves the shot on its cached heading.
    let target = find_enemy(world, target_id).and_then(|e| {
        let (phase, target_kind) = {
            let state = world.get::<&EnemyState>(e).ok()?;
            (state.phase, state.kind)
        };
        if phase != EnemyPhase::Marching {
            return None;
        }
        let target_pos = world.get::<&Position>(e).ok()?.0;
        Some((e, target_pos, enemy_profile(target_kind).size))
    });

    let cached_heading = world
        .get::<&Heading>(entity)
        .map(|h| h.0)
        .unwrap_or(DVec2::ZERO);
    let heading = match target {
        Some((_, target_pos, _)) => {
            let shot_pos = match world.get::<&Position>(entity) {
                Ok(p) => p.0,
                Err(_) => return,
            };
            let dir = (target_pos - shot_pos).normalize_or_zero();
            if dir != DVec2::ZERO {
                dir
            } else {
                cached_heading
            }
        }
        None => cached_heading,
    };

    // Move and persist the refreshed heading.
    let new_pos = {
        let mut pos = match world.get::<&mut Position>(entity) {
            Ok(p) => p,
            Err(_) => return,
        };
        pos.0 += heading * speed * dt;
        pos.0
    };
    if let Ok(mut h) = world.get::<&mut Heading>(entity) {
        h.0 = heading;
    }

    fx.trail(new_pos, kind, size);

    // Collision with the tracked target; bounds check runs regardless.
    let mut resolved = false;
    if let Some((target_entity, target_pos, target_size)) = target {
        if new_pos.distance(target_pos) < size + target_size / 2.0 {
            resolve_impact(
                world,
                target_entity,
                new_pos,
                kind,
                damage,
                aoe_radius,
                slow,
                fx,
                audio_events,
            );
            resolved = true;
        }
    }
    if new_pos.x < 0.0 || new_pos.x > map.width || new_pos.y < 0.0 || new_pos.y > map.height {
        resolved = true;
    }

    if resolved {
        if let Ok(mut shot) = world.get::<&mut ShotState>(entity) {
            shot.spent = true;
        }
    }
}

/// Apply a resolved hit according to the originating tower kind.
#[allow(clippy::too_many_arguments)]
fn resolve_impact(
    world: &mut World,
    target_entity: Entity,
    impact: DVec2,
    kind: TowerKind,
    damage: f64,
    aoe_radius: Option<f64>,
    slow: Option<SlowParams>,
    fx: &mut dyn EffectObserver,
    audio_events: &mut Vec<AudioEvent>,
) {
    match kind {
        TowerKind::Cannon => {
            // Area broadcast: every marching enemy near the impact point,
            // the tracked target included. Dead enemies are skipped.
            let radius = aoe_radius.unwrap_or(0.0);
            let victims: Vec<Entity> = {
                let mut query = world.query::<(&Enemy, &EnemyState, &Position)>();
                query
                    .iter()
                    .filter(|(_, (_, state, pos))| {
                        state.phase == EnemyPhase::Marching && pos.0.distance(impact) <= radius
                    })
                    .map(|(entity, _)| entity)
                    .collect()
            };
            for victim in victims {
                apply_damage(world, victim, damage, audio_events);
            }
            audio_events.push(AudioEvent::Explosion);
            fx.impact(impact, damage, true);
        }
        TowerKind::Slow => {
            apply_damage(world, target_entity, damage, audio_events);
            if let Some(params) = slow {
                apply_slow(world, target_entity, params);
            }
            audio_events.push(AudioEvent::Hit);
            fx.impact(impact, damage, false);
        }
        TowerKind::Archer => {
            apply_damage(world, target_entity, damage, audio_events);
            audio_events.push(AudioEvent::Hit);
            fx.impact(impact, damage, false);
        }
    }
}

/// Subtract hit points; dropping to zero slays the enemy the same frame.
fn apply_damage(world: &mut World, entity: Entity, amount: f64, audio_events: &mut Vec<AudioEvent>) {
    let mut slain = false;
    if let Ok((health, state)) = world.query_one_mut::<(&mut Health, &mut EnemyState)>(entity) {
        health.hp = (health.hp - amount).max(0.0);
        if health.hp <= 0.0 && state.phase == EnemyPhase::Marching {
            state.phase = EnemyPhase::Slain;
            slain = true;
        }
    }
    if slain {
        audio_events.push(AudioEvent::EnemyDie);
    }
}

/// Strongest-wins slow stacking: a weaker reapplication never reduces the
/// magnitude but always restarts the countdown.
pub(crate) fn apply_slow(world: &mut World, entity: Entity, params: SlowParams) {
    if let Ok(slow) = world.query_one_mut::<&mut SlowEffect>(entity) {
        if params.factor > slow.factor {
            slow.factor = params.factor;
        }
        slow.remaining_secs = params.duration_secs;
    }
}
