//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// Audio events for the frontend sound system, drained into each snapshot.
/// Fire-and-forget: the simulation never reads anything back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A tower fired. The kind selects the shot sound.
    Shoot { tower: TowerKind },
    /// A projectile struck its target.
    Hit,
    /// A cannon shell detonated.
    Explosion,
    EnemyDie,
    /// An enemy reached the end of the path.
    EnemyReach,
    TowerPlace,
    TowerUpgrade,
    TowerSell,
    /// 1-based wave number.
    WaveStart { wave: u32 },
    WaveComplete { wave: u32 },
    GameOver,
    Victory,
}
