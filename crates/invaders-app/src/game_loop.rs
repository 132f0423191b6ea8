//! Game loop thread: runs the simulation engine at a fixed rate and presents
//! snapshots.
//!
//! The engine is created inside the loop because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel and are drained at each tick boundary.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use invaders_core::commands::InputEvent;
use invaders_sim::clock::{ClockSource, FixedClock, WallClock};
use invaders_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::surface::{RenderSurface, SurfaceError};

/// Commands sent from the input side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// An input event to forward to the simulation engine.
    Input(InputEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Nominal duration of one tick at `tick_rate` Hz.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input side, and a handle yielding the
/// number of ticks run.
pub fn spawn_game_loop<S>(
    config: AppConfig,
    surface: S,
) -> (
    mpsc::Sender<GameLoopCommand>,
    JoinHandle<Result<u64, SurfaceError>>,
)
where
    S: RenderSurface + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || {
            let mut surface = surface;
            run_game_loop(&config, &cmd_rx, &mut surface)
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown, `max_ticks`, or (without a tick limit)
/// channel disconnect. Returns the number of ticks run.
pub fn run_game_loop(
    config: &AppConfig,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    surface: &mut impl RenderSurface,
) -> Result<u64, SurfaceError> {
    let mut engine = SimulationEngine::new(config.sim.clone());
    let mut clock: Box<dyn ClockSource> = if config.wall_clock {
        Box::new(WallClock::new())
    } else {
        Box::new(FixedClock::from_rate(config.tick_rate))
    };
    let tick_duration = tick_duration(config.tick_rate);
    let mut input_open = true;
    let mut final_tick = false;
    let mut ticks = 0u64;
    let mut next_tick_time = Instant::now();

    log::info!(
        "game loop started at {} Hz, {} targets",
        config.tick_rate,
        engine.state().store.target_count()
    );

    loop {
        // 1. Drain all pending commands
        while input_open {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(event)) => engine.queue_command(event),
                Ok(GameLoopCommand::Shutdown) => return Ok(ticks),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    input_open = false;
                    if config.max_ticks.is_none() {
                        // Input drained with the disconnect still gets simulated.
                        if !engine.has_pending_commands() {
                            return Ok(ticks);
                        }
                        final_tick = true;
                    }
                }
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(clock.delta());
        ticks += 1;

        // 3. Present
        surface.present(&snapshot)?;

        if config.max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("tick limit reached, score {}", snapshot.score);
            return Ok(ticks);
        }
        if final_tick {
            log::info!("input closed, score {}", snapshot.score);
            return Ok(ticks);
        }

        // 4. Sleep until next tick
        if config.paced {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind, skip ahead instead of catching up
                next_tick_time = now;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::enums::RoundPhase;
    use invaders_core::state::GameStateSnapshot;
    use invaders_core::types::TargetId;

    #[derive(Default)]
    struct RecordingSurface {
        snapshots: Vec<GameStateSnapshot>,
    }

    impl RenderSurface for RecordingSurface {
        fn present(&mut self, snapshot: &GameStateSnapshot) -> Result<(), SurfaceError> {
            self.snapshots.push(snapshot.clone());
            Ok(())
        }
    }

    fn unpaced(max_ticks: Option<u64>) -> AppConfig {
        AppConfig {
            max_ticks,
            paced: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputEvent::Fire)).unwrap();
        tx.send(GameLoopCommand::Input(InputEvent::LeftDown)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Input(InputEvent::Fire)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Input(InputEvent::LeftDown)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_runs_to_tick_limit_after_input_closes() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Input(InputEvent::Fire)).unwrap();
        tx.send(GameLoopCommand::Input(InputEvent::PointerHit {
            target: TargetId::new(2, 1),
        }))
        .unwrap();
        drop(tx);

        let mut surface = RecordingSurface::default();
        let ticks = run_game_loop(&unpaced(Some(10)), &rx, &mut surface).unwrap();

        assert_eq!(ticks, 10);
        assert_eq!(surface.snapshots.len(), 10);
        let first = &surface.snapshots[0];
        assert_eq!(first.projectiles.len(), 1);
        assert_eq!(first.score, 100);
        assert_eq!(first.targets.len(), 14);
        assert_eq!(surface.snapshots[9].time.tick, 10);
    }

    #[test]
    fn test_disconnect_without_limit_stops() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        drop(tx);

        let mut surface = RecordingSurface::default();
        let ticks = run_game_loop(&unpaced(None), &rx, &mut surface).unwrap();
        assert_eq!(ticks, 0);
        assert!(surface.snapshots.is_empty());
    }

    #[test]
    fn test_input_queued_before_disconnect_is_simulated() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Input(InputEvent::Fire)).unwrap();
        tx.send(GameLoopCommand::Input(InputEvent::PointerHit {
            target: TargetId::new(2, 1),
        }))
        .unwrap();
        drop(tx);

        let mut surface = RecordingSurface::default();
        let ticks = run_game_loop(&unpaced(None), &rx, &mut surface).unwrap();

        assert_eq!(ticks, 1);
        assert_eq!(surface.snapshots.len(), 1);
        let last = &surface.snapshots[0];
        assert_eq!(last.projectiles.len(), 1);
        assert_eq!(last.score, 100);
        assert_eq!(last.targets.len(), 14);
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut surface = RecordingSurface::default();
        let ticks = run_game_loop(&unpaced(Some(100)), &rx, &mut surface).unwrap();
        assert_eq!(ticks, 0);
    }

    #[test]
    fn test_spawned_loop_stops_at_limit() {
        let (tx, handle) = spawn_game_loop(unpaced(Some(3)), RecordingSurface::default());
        for column in 0..5 {
            for row in 0..3 {
                tx.send(GameLoopCommand::Input(InputEvent::PointerHit {
                    target: TargetId::new(column, row),
                }))
                .unwrap_or(());
            }
        }
        let ticks = handle.join().unwrap().unwrap();
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_round_over_reported_through_loop() {
        let (tx, rx) = mpsc::channel();
        for column in 0..5 {
            for row in 0..3 {
                tx.send(GameLoopCommand::Input(InputEvent::PointerHit {
                    target: TargetId::new(column, row),
                }))
                .unwrap();
            }
        }
        drop(tx);

        let mut surface = RecordingSurface::default();
        run_game_loop(&unpaced(Some(2)), &rx, &mut surface).unwrap();
        let last = surface.snapshots.last().unwrap();
        assert_eq!(last.phase, RoundPhase::RoundOver);
        assert!(last.terminal);
        assert_eq!(last.score, 1500);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(tick_duration(60).as_nanos(), expected_nanos as u128);
        assert_eq!(tick_duration(0), Duration::from_secs(1));
    }
}
