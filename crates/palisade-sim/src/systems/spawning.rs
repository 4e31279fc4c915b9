//! Wave spawn sequencing — drains ordered enemy groups on a shared timer.

use hecs::World;

use palisade_core::config::{WaveConfig, WaveGroup};
use palisade_core::path::PathRoute;

/// The spawn queue for the wave in progress: a cursor over ordered groups,
/// each with a remaining count, plus the shared spawn timer.
#[derive(Debug, Clone, Default)]
pub struct SpawnQueue {
    groups: Vec<WaveGroup>,
    cursor: usize,
    timer_secs: f64,
    interval_secs: f64,
}

impl SpawnQueue {
    /// Build the queue for a wave. The timer starts at zero, so the first
    /// enemy appears one full interval after the wave starts.
    pub fn from_wave(wave: &WaveConfig) -> Self {
        Self {
            groups: wave.groups.clone(),
            cursor: 0,
            timer_secs: 0.0,
            interval_secs: wave.spawn_interval_secs,
        }
    }

    /// Enemies not yet spawned, across all groups.
    pub fn remaining_total(&self) -> u32 {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// True once every group has been fully spawned.
    pub fn is_drained(&self) -> bool {
        self.remaining_total() == 0
    }
}

/// Advance the spawn timer and release the next enemy when due. The cursor
/// skips exhausted groups within the same frame, so a due timer always
/// spawns as long as any group has enemies left.
pub fn run(
    world: &mut World,
    queue: &mut SpawnQueue,
    route: &PathRoute,
    wave: &WaveConfig,
    next_enemy_id: &mut u32,
    dt: f64,
) {
    if queue.is_drained() {
        return;
    }
    queue.timer_secs += dt;
    if queue.timer_secs < queue.interval_secs {
        return;
    }
    while queue.cursor < queue.groups.len() && queue.groups[queue.cursor].count == 0 {
        queue.cursor += 1;
    }
    if let Some(group) = queue.groups.get_mut(queue.cursor) {
        let kind = group.kind;
        group.count -= 1;
        let id = *next_enemy_id;
        *next_enemy_id += 1;
        let _ = crate::world_setup::spawn_enemy(world, route, wave, kind, id);
        queue.timer_secs = 0.0;
    }
}
