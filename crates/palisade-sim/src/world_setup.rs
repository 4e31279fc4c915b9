//! Entity spawn factories for populating the simulation world.
//!
//! Creates enemies, towers, and projectiles with their component bundles.

use glam::DVec2;
use hecs::World;

use palisade_core::components::*;
use palisade_core::config::{enemy_profile, shot_profile, tower_stats, WaveConfig};
use palisade_core::enums::{EnemyKind, EnemyPhase, TowerKind};
use palisade_core::path::PathRoute;
use palisade_core::types::{Heading, Position};

/// Spawn one enemy of `kind` at the route entry, scaled by the wave baseline.
pub fn spawn_enemy(
    world: &mut World,
    route: &PathRoute,
    wave: &WaveConfig,
    kind: EnemyKind,
    id: u32,
) -> hecs::Entity {
    let profile = enemy_profile(kind);
    let hp = wave.base_hp * profile.hp_mult;
    let speed = wave.base_speed * profile.speed_mult;
    let reward = (wave.base_reward as f64 * profile.reward_mult).round() as u32;
    spawn_enemy_raw(world, route, kind, hp, speed, reward, id)
}

/// Spawn an enemy with explicit stats (tests and the wave spawner).
pub fn spawn_enemy_raw(
    world: &mut World,
    route: &PathRoute,
    kind: EnemyKind,
    hp: f64,
    speed: f64,
    reward: u32,
    id: u32,
) -> hecs::Entity {
    world.spawn((
        Enemy,
        Position(route.start()),
        EnemyState {
            id,
            kind,
            base_speed: speed,
            reward,
            phase: EnemyPhase::default(),
            rewarded: false,
        },
        Health { hp, max_hp: hp },
        SlowEffect::default(),
        PathCursor::default(),
    ))
}

/// Spawn a tower at `at`. `invested` is the base cost already debited.
pub fn spawn_tower(
    world: &mut World,
    at: DVec2,
    kind: TowerKind,
    id: u32,
    invested: u32,
) -> hecs::Entity {
    world.spawn((
        Tower,
        Position(at),
        TowerState {
            id,
            kind,
            level: 1,
            invested,
            cooldown_secs: 0.0,
        },
    ))
}

/// Spawn a projectile at `from` aimed at the enemy `target_id`, carrying the
/// firing tower's current (kind, level) payload.
pub fn spawn_shot(
    world: &mut World,
    from: DVec2,
    heading: DVec2,
    kind: TowerKind,
    level: u8,
    target_id: u32,
) -> hecs::Entity {
    let stats = tower_stats(kind, level);
    let profile = shot_profile(kind);
    world.spawn((
        Projectile,
        Position(from),
        Heading(heading),
        ShotState {
            kind,
            damage: stats.damage,
            speed: profile.speed,
            size: profile.size,
            target_id,
            aoe_radius: stats.aoe_radius,
            slow: stats.slow,
            spent: false,
        },
    ))
}
