//! Simulation engine: the core of the game.
//!
//! `GameState` is the complete owned state of a session. `tick` is a pure
//! step from one state to the next given the tick's input and delta.
//! `SimulationEngine` wraps it with a command queue the way a host drives it,
//! and produces a `GameStateSnapshot` after every tick. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use invaders_core::commands::InputEvent;
use invaders_core::components::PlayerShip;
use invaders_core::enums::RoundPhase;
use invaders_core::events::GameEvent;
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::{ProjectileId, Ray, SimTime};

use crate::config::SimConfig;
use crate::round::{spawn_player, HeldKeys, ScoreState};
use crate::store::EntityStore;
use crate::systems;
use crate::systems::collision::PointerInput;
use crate::world_setup;

/// Everything one session owns.
pub struct GameState {
    pub store: EntityStore,
    pub player: PlayerShip,
    pub held: HeldKeys,
    pub phase: RoundPhase,
    pub score: ScoreState,
    pub time: SimTime,
    next_projectile_id: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session: player at its start, full target grid, score 0.
    pub fn new(config: &SimConfig) -> Self {
        let mut store = EntityStore::new();
        world_setup::spawn_target_grid(&mut store, config);
        Self {
            store,
            player: spawn_player(config),
            held: HeldKeys::default(),
            phase: RoundPhase::Playing,
            score: ScoreState::default(),
            time: SimTime::default(),
            next_projectile_id: 0,
            events: Vec::new(),
        }
    }

    /// Events raised by the most recent tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// True once every target is destroyed, until the next reset.
    pub fn is_terminal(&self) -> bool {
        self.phase == RoundPhase::RoundOver
    }

    /// Apply one input edge. Pointer clicks are deferred to the collision pass.
    fn apply_input(
        &mut self,
        event: &InputEvent,
        pointer: &mut Vec<PointerInput>,
        config: &SimConfig,
    ) {
        match *event {
            InputEvent::LeftDown => self.held.left = true,
            InputEvent::LeftUp => self.held.left = false,
            InputEvent::RightDown => self.held.right = true,
            InputEvent::RightUp => self.held.right = false,
            InputEvent::Fire => {
                if self.phase == RoundPhase::Playing {
                    self.fire(config);
                } else {
                    log::debug!("fire ignored, round is over");
                }
            }
            InputEvent::PointerHit { target } => {
                if self.phase == RoundPhase::Playing {
                    pointer.push(PointerInput::Hit(target));
                }
            }
            InputEvent::PointerRay { origin, direction } => {
                if self.phase == RoundPhase::Playing {
                    pointer.push(PointerInput::Ray(Ray::new(origin, direction)));
                }
            }
            InputEvent::Reset => {
                if self.phase == RoundPhase::RoundOver {
                    self.reset_round(config);
                } else {
                    log::debug!("reset ignored while playing");
                }
            }
        }
    }

    /// Spawn one projectile above the player's current position.
    fn fire(&mut self, config: &SimConfig) {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;

        let mut position = self.player.position;
        position.y += config.projectile_spawn_offset_y;

        if self.store.add_projectile(id, position) {
            self.score.projectiles_fired += 1;
            self.events.push(GameEvent::ProjectileFired { id, position });
        }
    }

    /// Re-spawn the grid, clear score and projectiles. The player keeps its
    /// position and the clock keeps running.
    fn reset_round(&mut self, config: &SimConfig) {
        self.store.clear();
        world_setup::spawn_target_grid(&mut self.store, config);
        self.score = ScoreState::default();
        self.phase = RoundPhase::Playing;
        self.events.push(GameEvent::RoundReset);
        log::info!("round reset, {} targets", self.store.target_count());
    }

    /// Advance in place. A tick that starts with the round over only handles
    /// input, so the tick that applies a reset presents the grid untouched.
    fn step(&mut self, input: &[InputEvent], dt: f32, config: &SimConfig) {
        let dt = systems::motion::sanitize_dt(dt);
        self.events.clear();

        let simulate = self.phase == RoundPhase::Playing;
        let mut pointer = Vec::new();
        for event in input {
            self.apply_input(event, &mut pointer, config);
        }

        if simulate {
            self.run_systems(&pointer, dt, config);
        }
        self.time.advance(dt);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, pointer: &[PointerInput], dt: f32, config: &SimConfig) {
        // 1. Player
        self.player.position =
            systems::motion::move_player(self.player.position, self.held.direction(), dt, config);
        // 2. Projectiles
        systems::motion::run_projectiles(&mut self.store, dt, config);
        // 3. Collisions (bounds, projectile overlaps, pointer hits)
        systems::collision::run(
            &mut self.store,
            pointer,
            &mut self.score,
            &mut self.events,
            config,
        );
        // 4. Target wobble and spin, phased by elapsed time at the end of this tick
        let elapsed = self.time.elapsed_secs + f64::from(dt);
        systems::motion::run_targets(&mut self.store, elapsed, dt, config);
        // 5. Round end
        if self.store.target_count() == 0 {
            self.phase = RoundPhase::RoundOver;
            self.events.push(GameEvent::RoundOver {
                score: self.score.score,
            });
            log::info!("round over, score {}", self.score.score);
        }
    }
}

/// Pure step: consume a state and return its successor after `dt` seconds
/// with `input` applied at the tick boundary.
pub fn tick(mut state: GameState, input: &[InputEvent], dt: f32, config: &SimConfig) -> GameState {
    state.step(input, dt, config);
    state
}

/// The simulation engine. Owns the session state, its config, and the input
/// queue.
pub struct SimulationEngine {
    state: GameState,
    config: SimConfig,
    command_queue: VecDeque<InputEvent>,
}

impl SimulationEngine {
    /// Create a new engine with a fresh round.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: GameState::new(&config),
            config,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue an input event for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: InputEvent) {
        self.command_queue.push_back(command);
    }

    /// True while queued input is waiting for the next tick.
    pub fn has_pending_commands(&self) -> bool {
        !self.command_queue.is_empty()
    }

    /// Queue multiple events.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = InputEvent>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        let input: Vec<InputEvent> = self.command_queue.drain(..).collect();
        self.state.step(&input, dt, &self.config);
        systems::snapshot::build_snapshot(&self.state)
    }

    /// Current snapshot without advancing.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.state)
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn time(&self) -> SimTime {
        self.state.time
    }

    pub fn score(&self) -> &ScoreState {
        &self.state.score
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only access to the session state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Place a projectile directly (for tests needing specific positions).
    #[cfg(test)]
    pub fn spawn_test_projectile(&mut self, position: invaders_core::types::Position) -> ProjectileId {
        let id = ProjectileId(self.state.next_projectile_id);
        self.state.next_projectile_id += 1;
        self.state.store.add_projectile(id, position);
        id
    }
}
