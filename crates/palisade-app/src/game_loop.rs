//! Game loop thread — ticks the engine on a wall clock, publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in a shared slot for synchronous polling. Each tick receives the
//! measured frame delta, so movement and timer math follow real time rather
//! than a fixed step.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use palisade_core::events::AudioEvent;
use palisade_sim::engine::{GameEngine, SimConfig};

use crate::state::{GameLoopCommand, SnapshotSlot};

/// Nominal frame rate of the loop thread.
const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the shell to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: SnapshotSlot,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("palisade-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SnapshotSlot,
) {
    let mut engine = GameEngine::new(config);
    let mut last_frame = Instant::now();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame with the measured wall-clock delta
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f64();
        last_frame = now;
        let snapshot = engine.tick(dt);

        // 3. Log simulation milestones
        for event in &snapshot.audio_events {
            log_event(event);
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

fn log_event(event: &AudioEvent) {
    match event {
        AudioEvent::WaveStart { wave } => info!(wave, "wave started"),
        AudioEvent::WaveComplete { wave } => info!(wave, "wave complete"),
        AudioEvent::GameOver => info!("game over"),
        AudioEvent::Victory => info!("victory"),
        other => debug!(?other, "audio event"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palisade_core::commands::PlayerCommand;
    use palisade_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartWave))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartWave)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_variable_delta_drives_the_clock() {
        let mut engine = GameEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartWave);

        engine.tick(0.016);
        engine.tick(0.033);
        let snap = engine.tick(0.008);

        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.clock.frame, 3);
        assert!((snap.clock.elapsed_secs - 0.057).abs() < 1e-9);
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_thread_publishes_snapshots_and_shuts_down() {
        let slot: SnapshotSlot = std::sync::Arc::new(std::sync::Mutex::new(None));
        let tx = spawn_game_loop(SimConfig::default(), std::sync::Arc::clone(&slot));

        // Give the loop a few frames to publish something.
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if slot.lock().unwrap().is_some() {
                break;
            }
            assert!(Instant::now() < deadline, "No snapshot published in 2s");
            std::thread::sleep(Duration::from_millis(5));
        }

        let snapshot = slot.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Waiting);

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
