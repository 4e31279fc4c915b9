//! Enemy movement system: slow decay, path following, goal handling.

use hecs::World;

use palisade_core::components::{Enemy, EnemyState, PathCursor, SlowEffect};
use palisade_core::enums::EnemyPhase;
use palisade_core::events::AudioEvent;
use palisade_core::path::PathRoute;
use palisade_core::types::Position;

/// Advance every marching enemy along the route by one frame.
///
/// Per enemy, in order: tick the slow timer (clearing the factor once it
/// elapses), recompute the current speed, walk the path cursor. An enemy
/// that exhausts the path escapes: terminal phase, one life lost, reach
/// event. Returns `true` the moment lives hit zero, leaving the remaining
/// enemies untouched for this frame — the caller ends the update pass.
pub fn run(
    world: &mut World,
    route: &PathRoute,
    dt: f64,
    lives: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    for (_entity, (_enemy, state, slow, cursor, pos)) in world.query_mut::<(
        &Enemy,
        &mut EnemyState,
        &mut SlowEffect,
        &mut PathCursor,
        &mut Position,
    )>() {
        if state.phase != EnemyPhase::Marching {
            continue;
        }

        if slow.remaining_secs > 0.0 {
            slow.remaining_secs -= dt;
            if slow.remaining_secs <= 0.0 {
                slow.factor = 0.0;
                slow.remaining_secs = 0.0;
            }
        }
        let speed = state.base_speed * (1.0 - slow.factor);

        route.advance(cursor, speed * dt);
        pos.0 = route.position_at(cursor);

        if cursor.reached_goal {
            state.phase = EnemyPhase::Escaped;
            *lives = lives.saturating_sub(1);
            audio_events.push(AudioEvent::EnemyReach);
            if *lives == 0 {
                return true;
            }
        }
    }
    false
}
