//! Static configuration tables and tuning constants.
//!
//! Everything here is consumed read-only by the simulation. Stat lookups are
//! exhaustive matches on the closed kind enums, so adding a variant fails to
//! compile until every table covers it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::components::SlowParams;
use crate::enums::{EnemyKind, TowerKind};

/// Starting gold.
pub const INITIAL_GOLD: u32 = 100;

/// Starting lives.
pub const INITIAL_LIVES: u32 = 10;

/// Fraction of a tower's total investment returned on sale.
pub const SELL_REFUND_RATE: f64 = 0.5;

/// Highest tower level reachable by upgrades.
pub const MAX_TOWER_LEVEL: u8 = 3;

/// Tower footprint (width of the square base). Placement keeps towers at
/// least this far apart and half of it clear of the path edge.
pub const TOWER_FOOTPRINT: f64 = 30.0;

/// Combat stats for one (kind, level) table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerStats {
    pub damage: f64,
    pub range: f64,
    /// Shots per second.
    pub fire_rate: f64,
    /// Splash radius (cannon only).
    pub aoe_radius: Option<f64>,
    /// Slow payload (slow tower only).
    pub slow: Option<SlowParams>,
}

/// Look up the stat entry for a tower kind at a given level.
/// Levels outside 1..=MAX_TOWER_LEVEL clamp to the nearest entry.
pub fn tower_stats(kind: TowerKind, level: u8) -> TowerStats {
    let level = level.clamp(1, MAX_TOWER_LEVEL);
    let (damage, range, fire_rate) = match (kind, level) {
        (TowerKind::Archer, 1) => (15.0, 120.0, 1.5),
        (TowerKind::Archer, 2) => (25.0, 140.0, 1.8),
        (TowerKind::Archer, _) => (40.0, 160.0, 2.2),
        (TowerKind::Cannon, 1) => (40.0, 80.0, 0.5),
        (TowerKind::Cannon, 2) => (65.0, 95.0, 0.6),
        (TowerKind::Cannon, _) => (100.0, 110.0, 0.7),
        (TowerKind::Slow, 1) => (5.0, 100.0, 1.0),
        (TowerKind::Slow, 2) => (8.0, 115.0, 1.1),
        (TowerKind::Slow, _) => (12.0, 130.0, 1.2),
    };
    let aoe_radius = match (kind, level) {
        (TowerKind::Cannon, 1) => Some(50.0),
        (TowerKind::Cannon, 2) => Some(60.0),
        (TowerKind::Cannon, _) => Some(75.0),
        _ => None,
    };
    let slow = match (kind, level) {
        (TowerKind::Slow, 1) => Some(SlowParams {
            factor: 0.5,
            duration_secs: 2.0,
        }),
        (TowerKind::Slow, 2) => Some(SlowParams {
            factor: 0.6,
            duration_secs: 2.5,
        }),
        (TowerKind::Slow, _) => Some(SlowParams {
            factor: 0.7,
            duration_secs: 3.0,
        }),
        _ => None,
    };
    TowerStats {
        damage,
        range,
        fire_rate,
        aoe_radius,
        slow,
    }
}

/// Gold required to place a tower of the given kind.
pub fn tower_base_cost(kind: TowerKind) -> u32 {
    match kind {
        TowerKind::Archer => 30,
        TowerKind::Cannon => 80,
        TowerKind::Slow => 50,
    }
}

/// Cost to raise a tower *to* `to_level`. `None` beyond the level cap or for
/// the base level.
pub fn tower_upgrade_cost(kind: TowerKind, to_level: u8) -> Option<u32> {
    match (kind, to_level) {
        (TowerKind::Archer, 2) => Some(40),
        (TowerKind::Archer, 3) => Some(70),
        (TowerKind::Cannon, 2) => Some(100),
        (TowerKind::Cannon, 3) => Some(160),
        (TowerKind::Slow, 2) => Some(60),
        (TowerKind::Slow, 3) => Some(100),
        _ => None,
    }
}

/// Gold returned when a tower is liquidated: the floor of its cumulative
/// investment times the refund rate.
pub fn sell_value(invested: u32) -> u32 {
    (invested as f64 * SELL_REFUND_RATE).floor() as u32
}

/// Flight parameters of the projectile a tower kind fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotProfile {
    /// Flight speed (units/sec).
    pub speed: f64,
    /// Collision radius.
    pub size: f64,
}

pub fn shot_profile(kind: TowerKind) -> ShotProfile {
    match kind {
        TowerKind::Archer => ShotProfile {
            speed: 300.0,
            size: 5.0,
        },
        TowerKind::Cannon => ShotProfile {
            speed: 220.0,
            size: 6.0,
        },
        TowerKind::Slow => ShotProfile {
            speed: 280.0,
            size: 4.0,
        },
    }
}

/// Per-kind multipliers applied to a wave's baseline, plus body size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub hp_mult: f64,
    pub speed_mult: f64,
    pub reward_mult: f64,
    /// Body width; collision uses half of it.
    pub size: f64,
}

pub fn enemy_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Normal => EnemyProfile {
            hp_mult: 1.0,
            speed_mult: 1.0,
            reward_mult: 1.0,
            size: 20.0,
        },
        EnemyKind::Swift => EnemyProfile {
            hp_mult: 0.5,
            speed_mult: 1.8,
            reward_mult: 1.2,
            size: 16.0,
        },
        EnemyKind::Tank => EnemyProfile {
            hp_mult: 3.0,
            speed_mult: 0.5,
            reward_mult: 2.0,
            size: 28.0,
        },
    }
}

/// One spawn group within a wave. `count` doubles as the remaining counter
/// while the wave drains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveGroup {
    pub kind: EnemyKind,
    pub count: u32,
}

/// One wave: ordered spawn groups plus the scaling baseline they share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    pub groups: Vec<WaveGroup>,
    pub base_hp: f64,
    pub base_speed: f64,
    /// Seconds between spawns.
    pub spawn_interval_secs: f64,
    pub base_reward: u32,
}

/// Map geometry: rectangular bounds plus the enemy path polyline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub width: f64,
    pub height: f64,
    /// Path waypoints from map entry to map exit.
    pub path: Vec<DVec2>,
    pub path_width: f64,
}

/// Complete session configuration, consumed read-only by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub map: MapConfig,
    pub waves: Vec<WaveConfig>,
    pub initial_gold: u32,
    pub initial_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameConfig {
    /// The standard five-wave campaign on the S-shaped map.
    pub fn standard() -> Self {
        Self {
            map: MapConfig {
                width: 800.0,
                height: 600.0,
                path: vec![
                    DVec2::new(0.0, 300.0),
                    DVec2::new(200.0, 300.0),
                    DVec2::new(200.0, 150.0),
                    DVec2::new(500.0, 150.0),
                    DVec2::new(500.0, 450.0),
                    DVec2::new(800.0, 450.0),
                ],
                path_width: 40.0,
            },
            waves: vec![
                WaveConfig {
                    groups: vec![WaveGroup {
                        kind: EnemyKind::Normal,
                        count: 5,
                    }],
                    base_hp: 30.0,
                    base_speed: 50.0,
                    spawn_interval_secs: 2.0,
                    base_reward: 10,
                },
                WaveConfig {
                    groups: vec![
                        WaveGroup {
                            kind: EnemyKind::Normal,
                            count: 5,
                        },
                        WaveGroup {
                            kind: EnemyKind::Swift,
                            count: 3,
                        },
                    ],
                    base_hp: 35.0,
                    base_speed: 52.0,
                    spawn_interval_secs: 1.8,
                    base_reward: 12,
                },
                WaveConfig {
                    groups: vec![
                        WaveGroup {
                            kind: EnemyKind::Normal,
                            count: 5,
                        },
                        WaveGroup {
                            kind: EnemyKind::Swift,
                            count: 3,
                        },
                        WaveGroup {
                            kind: EnemyKind::Tank,
                            count: 2,
                        },
                    ],
                    base_hp: 40.0,
                    base_speed: 55.0,
                    spawn_interval_secs: 1.6,
                    base_reward: 15,
                },
                WaveConfig {
                    groups: vec![
                        WaveGroup {
                            kind: EnemyKind::Normal,
                            count: 6,
                        },
                        WaveGroup {
                            kind: EnemyKind::Swift,
                            count: 5,
                        },
                        WaveGroup {
                            kind: EnemyKind::Tank,
                            count: 3,
                        },
                    ],
                    base_hp: 50.0,
                    base_speed: 58.0,
                    spawn_interval_secs: 1.4,
                    base_reward: 18,
                },
                WaveConfig {
                    groups: vec![
                        WaveGroup {
                            kind: EnemyKind::Normal,
                            count: 8,
                        },
                        WaveGroup {
                            kind: EnemyKind::Swift,
                            count: 6,
                        },
                        WaveGroup {
                            kind: EnemyKind::Tank,
                            count: 5,
                        },
                    ],
                    base_hp: 60.0,
                    base_speed: 60.0,
                    spawn_interval_secs: 1.2,
                    base_reward: 22,
                },
            ],
            initial_gold: INITIAL_GOLD,
            initial_lives: INITIAL_LIVES,
        }
    }
}
