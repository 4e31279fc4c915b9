//! Observer interface for presentation side effects.
//!
//! The simulation reports impacts, projectile trails, and wave intros to an
//! injected observer, and polls it for the one piece of state it feeds back:
//! whether an intro animation is currently blocking gameplay. Every method
//! has a no-op default, so running without an observer is fully functional.

use glam::DVec2;

use palisade_core::enums::TowerKind;

/// Presentation callbacks invoked synchronously during the update pass.
pub trait EffectObserver: Send {
    /// A projectile resolved at `at` for `damage` points. `aoe` marks area
    /// detonations.
    fn impact(&mut self, at: DVec2, damage: f64, aoe: bool) {
        let _ = (at, damage, aoe);
    }

    /// Periodic trail marker for a shot in flight. The kind selects the
    /// trail color.
    fn trail(&mut self, at: DVec2, kind: TowerKind, size: f64) {
        let _ = (at, kind, size);
    }

    /// A wave intro should be announced (1-based wave number).
    fn wave_intro(&mut self, wave: u32) {
        let _ = wave;
    }

    /// Whether an intro animation is currently blocking gameplay. Polled
    /// once per tick; a `true` frame skips the whole update pass.
    fn intro_blocking(&self) -> bool {
        false
    }
}

/// The default observer: ignores every callback and never blocks.
#[derive(Debug, Default)]
pub struct NullEffects;

impl EffectObserver for NullEffects {}
