//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands, runs all
//! systems in a fixed order, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;

use palisade_core::commands::PlayerCommand;
use palisade_core::components::{Enemy, Tower, TowerState};
use palisade_core::config::{
    sell_value, tower_base_cost, tower_upgrade_cost, GameConfig, MAX_TOWER_LEVEL, TOWER_FOOTPRINT,
};
use palisade_core::enums::{GamePhase, TowerKind};
use palisade_core::events::AudioEvent;
use palisade_core::path::PathRoute;
use palisade_core::state::GameStateSnapshot;
use palisade_core::types::{Position, SimClock};

use crate::fx::{EffectObserver, NullEffects};
use crate::systems;
use crate::systems::spawning::SpawnQueue;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Static game data: map, waves, economy.
    pub game: GameConfig,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    clock: SimClock,
    phase: GamePhase,
    config: GameConfig,
    route: PathRoute,
    gold: u32,
    lives: u32,
    wave_index: usize,
    spawn_queue: SpawnQueue,
    selected_tower: Option<hecs::Entity>,
    next_enemy_id: u32,
    next_tower_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    fx: Box<dyn EffectObserver>,
}

impl GameEngine {
    /// Create a new engine with the default (null) observer.
    pub fn new(config: SimConfig) -> Self {
        Self::with_observer(config, Box::new(NullEffects))
    }

    /// Create a new engine with an injected effect observer.
    pub fn with_observer(config: SimConfig, fx: Box<dyn EffectObserver>) -> Self {
        let route = PathRoute::new(config.game.map.path.clone(), config.game.map.path_width);
        let gold = config.game.initial_gold;
        let lives = config.game.initial_lives;
        Self {
            world: World::new(),
            clock: SimClock::default(),
            phase: GamePhase::default(),
            config: config.game,
            route,
            gold,
            lives,
            wave_index: 0,
            spawn_queue: SpawnQueue::default(),
            selected_tower: None,
            next_enemy_id: 0,
            next_tower_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            fx,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot. `dt` is the measured frame delta; every movement,
    /// cooldown, and timer scales by it directly.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing && !self.fx.intro_blocking() {
            self.run_systems(dt);
            self.clock.advance(dt);
        }

        let selected_tower = self
            .selected_tower
            .and_then(|e| self.world.get::<&TowerState>(e).ok().map(|t| t.id));
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.clock,
            self.phase,
            self.gold,
            self.lives,
            self.wave_index as u32,
            self.config.waves.len() as u32,
            self.spawn_queue.remaining_total(),
            selected_tower,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation clock.
    pub fn clock(&self) -> SimClock {
        self.clock
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Zero-based index of the current wave.
    pub fn wave_index(&self) -> usize {
        self.wave_index
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the route enemies march along.
    pub fn route(&self) -> &PathRoute {
        &self.route
    }

    /// Attempt to place a tower of `kind` at `at`. Returns whether the
    /// placement happened; every rejection (path buffer, gold, crowding)
    /// leaves the world and the economy untouched.
    pub fn try_place_tower(&mut self, at: DVec2, kind: TowerKind) -> bool {
        if self.route.blocks_building_at(at, TOWER_FOOTPRINT) {
            return false;
        }
        let cost = tower_base_cost(kind);
        if self.gold < cost {
            return false;
        }
        let crowded = {
            let mut query = self.world.query::<(&Tower, &Position)>();
            query
                .iter()
                .any(|(_, (_, pos))| pos.0.distance(at) < TOWER_FOOTPRINT)
        };
        if crowded {
            return false;
        }
        self.gold -= cost;
        let id = self.next_tower_id;
        self.next_tower_id += 1;
        let _ = world_setup::spawn_tower(&mut self.world, at, kind, id, cost);
        self.audio_events.push(AudioEvent::TowerPlace);
        true
    }

    /// Upgrade the selected tower one level. Fails (returning `false`)
    /// without a selection, at max level, or with insufficient gold.
    pub fn try_upgrade_selected(&mut self) -> bool {
        let entity = match self.selected_tower {
            Some(e) => e,
            None => return false,
        };
        let (kind, level) = match self.world.get::<&TowerState>(entity) {
            Ok(t) => (t.kind, t.level),
            Err(_) => return false,
        };
        if level >= MAX_TOWER_LEVEL {
            return false;
        }
        let cost = match tower_upgrade_cost(kind, level + 1) {
            Some(c) => c,
            None => return false,
        };
        if self.gold < cost {
            return false;
        }
        self.gold -= cost;
        if let Ok(mut tower) = self.world.get::<&mut TowerState>(entity) {
            tower.level += 1;
            tower.invested += cost;
        }
        self.audio_events.push(AudioEvent::TowerUpgrade);
        true
    }

    /// Sell the selected tower, crediting its refund value.
    pub fn try_sell_selected(&mut self) -> bool {
        let entity = match self.selected_tower.take() {
            Some(e) => e,
            None => return false,
        };
        let invested = match self.world.get::<&TowerState>(entity) {
            Ok(t) => t.invested,
            Err(_) => return false,
        };
        self.gold += sell_value(invested);
        let _ = self.world.despawn(entity);
        self.audio_events.push(AudioEvent::TowerSell);
        true
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { x, y, kind } => {
                if matches!(self.phase, GamePhase::Waiting | GamePhase::Playing) {
                    let _ = self.try_place_tower(DVec2::new(x, y), kind);
                }
            }
            PlayerCommand::SelectTower { x, y } => {
                if !matches!(self.phase, GamePhase::GameOver | GamePhase::Victory) {
                    self.selected_tower = self.tower_at(DVec2::new(x, y));
                }
            }
            PlayerCommand::Deselect => {
                self.selected_tower = None;
            }
            PlayerCommand::UpgradeTower => {
                if !matches!(self.phase, GamePhase::GameOver | GamePhase::Victory) {
                    let _ = self.try_upgrade_selected();
                }
            }
            PlayerCommand::SellTower => {
                if !matches!(self.phase, GamePhase::GameOver | GamePhase::Victory) {
                    let _ = self.try_sell_selected();
                }
            }
            PlayerCommand::StartWave => {
                self.start_wave();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Restart => {
                if matches!(self.phase, GamePhase::GameOver | GamePhase::Victory) {
                    self.restart();
                }
            }
        }
    }

    /// The tower whose base contains `point`, if any.
    fn tower_at(&self, point: DVec2) -> Option<hecs::Entity> {
        let mut query = self.world.query::<(&Tower, &Position)>();
        query
            .iter()
            .find(|(_, (_, pos))| pos.0.distance(point) <= TOWER_FOOTPRINT / 2.0)
            .map(|(entity, _)| entity)
    }

    /// Begin the current wave: build its spawn queue and enter Playing.
    fn start_wave(&mut self) {
        if self.phase != GamePhase::Waiting {
            return;
        }
        let wave = match self.config.waves.get(self.wave_index) {
            Some(w) => w,
            None => return,
        };
        self.spawn_queue = SpawnQueue::from_wave(wave);
        self.phase = GamePhase::Playing;
        let number = self.wave_index as u32 + 1;
        self.audio_events.push(AudioEvent::WaveStart { wave: number });
        self.fx.wave_intro(number);
    }

    /// Reset all mutable state back to a fresh session.
    fn restart(&mut self) {
        self.world.clear();
        self.clock = SimClock::default();
        self.phase = GamePhase::Waiting;
        self.gold = self.config.initial_gold;
        self.lives = self.config.initial_lives;
        self.wave_index = 0;
        self.spawn_queue = SpawnQueue::default();
        self.selected_tower = None;
        self.next_enemy_id = 0;
        self.next_tower_id = 0;
        self.despawn_buffer.clear();
    }

    /// Run all systems in order. The frame ends early if the enemy pass
    /// drains the last life.
    fn run_systems(&mut self, dt: f64) {
        // 1. Wave spawn sequencing
        if let Some(wave) = self.config.waves.get(self.wave_index) {
            systems::spawning::run(
                &mut self.world,
                &mut self.spawn_queue,
                &self.route,
                wave,
                &mut self.next_enemy_id,
                dt,
            );
        }

        // 2. Enemy movement and goal handling
        let lives_exhausted = systems::movement::run(
            &mut self.world,
            &self.route,
            dt,
            &mut self.lives,
            &mut self.audio_events,
        );
        if lives_exhausted {
            self.phase = GamePhase::GameOver;
            self.audio_events.push(AudioEvent::GameOver);
            return;
        }

        // 3. Tower fire control (may enqueue projectiles)
        systems::fire_control::run(&mut self.world, dt, &mut self.audio_events);

        // 4. Projectile flight and collision
        systems::shots::run(
            &mut self.world,
            &self.config.map,
            dt,
            self.fx.as_mut(),
            &mut self.audio_events,
        );

        // 5. Bounty sweep (exactly-once rewards)
        systems::bounty::run(&mut self.world, &mut self.gold);

        // 6. Compaction
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 7. Wave completion
        self.check_wave_complete();
    }

    /// A wave is complete exactly when the spawn queue is drained and no
    /// enemy entity remains. Advances to the next wave or ends the session.
    fn check_wave_complete(&mut self) {
        if !self.spawn_queue.is_drained() {
            return;
        }
        let enemies_left = {
            let mut query = self.world.query::<&Enemy>();
            query.iter().count()
        };
        if enemies_left > 0 {
            return;
        }
        let finished = self.wave_index as u32 + 1;
        self.audio_events
            .push(AudioEvent::WaveComplete { wave: finished });
        if self.wave_index + 1 >= self.config.waves.len() {
            self.phase = GamePhase::Victory;
            self.audio_events.push(AudioEvent::Victory);
        } else {
            self.wave_index += 1;
            self.phase = GamePhase::Waiting;
        }
    }

    /// Spawn an enemy directly, bypassing the spawn queue (tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: palisade_core::enums::EnemyKind,
        hp: f64,
        speed: f64,
        reward: u32,
    ) -> hecs::Entity {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        world_setup::spawn_enemy_raw(&mut self.world, &self.route, kind, hp, speed, reward, id)
    }

    /// Force the game phase (tests drive scenarios from arbitrary states).
    #[cfg(test)]
    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    /// Get a mutable reference to the ECS world (tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
