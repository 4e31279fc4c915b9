//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use palisade_core::components::*;
use palisade_core::config::{enemy_profile, sell_value, tower_stats, tower_upgrade_cost};
use palisade_core::enums::{EnemyPhase, GamePhase};
use palisade_core::events::AudioEvent;
use palisade_core::state::*;
use palisade_core::types::{Position, SimClock};

/// Build a complete snapshot of the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    clock: &SimClock,
    phase: GamePhase,
    gold: u32,
    lives: u32,
    wave_index: u32,
    wave_total: u32,
    remaining_to_spawn: u32,
    selected_tower: Option<u32>,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let enemies = build_enemies(world);
    GameStateSnapshot {
        clock: *clock,
        phase,
        wave: WaveView {
            index: wave_index,
            total: wave_total,
            remaining_to_spawn,
            alive: enemies.len() as u32,
        },
        gold,
        lives,
        selected_tower,
        towers: build_towers(world),
        enemies,
        shots: build_shots(world),
        audio_events,
    }
}

/// Build TowerView list with stats derived from the (kind, level) table.
fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &TowerState, &Position)>()
        .iter()
        .map(|(_, (_, state, pos))| {
            let stats = tower_stats(state.kind, state.level);
            TowerView {
                id: state.id,
                kind: state.kind,
                level: state.level,
                x: pos.0.x,
                y: pos.0.y,
                damage: stats.damage,
                range: stats.range,
                fire_rate: stats.fire_rate,
                invested: state.invested,
                sell_value: sell_value(state.invested),
                upgrade_cost: tower_upgrade_cost(state.kind, state.level + 1),
            }
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

/// Build EnemyView list for marching enemies, sorted by id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &EnemyState, &Health, &SlowEffect, &Position)>()
        .iter()
        .filter(|(_, (_, state, ..))| state.phase == EnemyPhase::Marching)
        .map(|(_, (_, state, health, slow, pos))| EnemyView {
            id: state.id,
            kind: state.kind,
            x: pos.0.x,
            y: pos.0.y,
            hp: health.hp,
            max_hp: health.max_hp,
            speed: state.base_speed * (1.0 - slow.factor),
            slowed: slow.factor > 0.0,
            size: enemy_profile(state.kind).size,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Build ShotView list for shots still in flight.
fn build_shots(world: &World) -> Vec<ShotView> {
    world
        .query::<(&Projectile, &ShotState, &Position)>()
        .iter()
        .filter(|(_, (_, state, _))| !state.spent)
        .map(|(_, (_, state, pos))| ShotView {
            kind: state.kind,
            x: pos.0.x,
            y: pos.0.y,
            size: state.size,
        })
        .collect()
}
