//! One play-through: phase state machine and fixed-step orchestration
//!
//! Phase transitions:
//! - Idle -> Running on start (or the first flap)
//! - Running <-> Paused on toggle pause; resuming re-baselines the clock
//! - Running -> Burning when the actor reaches the lava line
//! - Burning -> GameOver once burn progress reaches 1
//! - Running -> GameOver when an obstacle hit takes the last life
//! - any -> Idle on reset

use super::actor::Actor;
use super::clock::FixedClock;
use super::collectibles::{Collectibles, Heart};
use super::obstacles::{Obstacle, ObstacleField};
use super::state::{GamePhase, SessionStats, Snapshot};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::hooks::{EventSink, GameEvent};
use crate::persistence::ScoreStore;

/// Player commands, already translated from raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Flap,
    TogglePause,
    ResetAndStart,
}

/// External collaborators injected into a session; all optional
#[derive(Default)]
pub struct Collaborators {
    pub store: Option<Box<dyn ScoreStore>>,
    pub sinks: Vec<Box<dyn EventSink>>,
}

impl Collaborators {
    pub fn with_store(mut self, store: impl ScoreStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }
}

pub struct Session {
    config: GameConfig,
    seed: u64,
    /// Number of resets so far; mixed into the obstacle seed
    run: u64,
    phase: GamePhase,
    actor: Actor,
    obstacles: ObstacleField,
    hearts: Collectibles,
    stats: SessionStats,
    burn_progress: f32,
    clock: FixedClock,
    final_score: Option<u32>,
    collaborators: Collaborators,
}

fn run_seed(seed: u64, run: u64) -> u64 {
    seed ^ run.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl Session {
    /// Session with no collaborators and a best score of 0
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_collaborators(config, seed, Collaborators::default())
    }

    pub fn with_collaborators(
        config: GameConfig,
        seed: u64,
        collaborators: Collaborators,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let best = match &collaborators.store {
            Some(store) => store.load_best().unwrap_or_else(|e| {
                log::warn!("Could not load best score, using 0: {e}");
                0
            }),
            None => 0,
        };

        let run = 0;
        Ok(Self {
            actor: Self::fresh_actor(&config),
            obstacles: Self::fresh_obstacles(&config, run_seed(seed, run)),
            hearts: Collectibles::new(config.hearts, config.field.width, config.field.height),
            stats: SessionStats::new(config.starting_lives, best),
            clock: FixedClock::new(config.timing.step),
            phase: GamePhase::Idle,
            burn_progress: 0.0,
            final_score: None,
            config,
            seed,
            run,
            collaborators,
        })
    }

    fn fresh_actor(config: &GameConfig) -> Actor {
        Actor::new(
            config.actor.x,
            config.mid_height(),
            config.actor.radius,
            config.physics,
            config.field.height,
        )
    }

    fn fresh_obstacles(config: &GameConfig, seed: u64) -> ObstacleField {
        ObstacleField::new(
            config.obstacles,
            config.field.width,
            config.field.height,
            config.actor.x,
            seed,
        )
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.obstacles.obstacles()
    }

    pub fn hearts(&self) -> &[Heart] {
        self.hearts.hearts()
    }

    /// Burn animation progress, only while burning
    pub fn burn_progress(&self) -> Option<f32> {
        (self.phase == GamePhase::Burning).then_some(self.burn_progress)
    }

    /// Score frozen at game over
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            actor: &self.actor,
            obstacles: self.obstacles.obstacles(),
            hearts: self.hearts.hearts(),
            stats: self.stats,
            burn_progress: self.burn_progress(),
            gap: self.obstacles.difficulty().gap,
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for sink in &mut self.collaborators.sinks {
            sink.on_event(&event);
        }
    }

    /// Apply a player command at wall-clock time `now` (seconds)
    pub fn apply(&mut self, command: Command, now: f64) {
        match command {
            Command::Flap => self.flap(now),
            Command::TogglePause => self.toggle_pause(now),
            Command::ResetAndStart => self.reset_and_start(now),
        }
    }

    /// Idle -> Running; ignored in every other phase
    pub fn start(&mut self, now: f64) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.phase = GamePhase::Running;
        self.clock.rebaseline(now);
        log::info!("Run {} started (best {})", self.run, self.stats.best);
        self.emit(GameEvent::Started);
    }

    /// Flap while running; the first flap also starts an idle session
    pub fn flap(&mut self, now: f64) {
        match self.phase {
            GamePhase::Idle => {
                self.start(now);
                self.apply_flap();
            }
            GamePhase::Running => self.apply_flap(),
            GamePhase::Paused | GamePhase::Burning | GamePhase::GameOver => {}
        }
    }

    fn apply_flap(&mut self) {
        self.actor.flap();
        self.emit(GameEvent::Flap);
    }

    pub fn toggle_pause(&mut self, now: f64) {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                log::info!("Paused");
                self.emit(GameEvent::Paused);
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.clock.rebaseline(now);
                log::info!("Resumed");
                self.emit(GameEvent::Resumed);
            }
            _ => {}
        }
    }

    /// Discard everything and return to Idle; the best score survives
    pub fn reset(&mut self) {
        self.run += 1;
        let seed = run_seed(self.seed, self.run);
        self.actor = Self::fresh_actor(&self.config);
        self.obstacles = Self::fresh_obstacles(&self.config, seed);
        self.hearts = Collectibles::new(
            self.config.hearts,
            self.config.field.width,
            self.config.field.height,
        );
        self.stats = SessionStats::new(self.config.starting_lives, self.stats.best);
        self.clock = FixedClock::new(self.config.timing.step);
        self.burn_progress = 0.0;
        self.final_score = None;
        self.phase = GamePhase::Idle;
        log::debug!("Session reset (run {})", self.run);
        self.emit(GameEvent::Reset);
    }

    pub fn reset_and_start(&mut self, now: f64) {
        self.reset();
        self.start(now);
    }

    /// Feed a frame timestamp and run the fixed steps it pays for
    ///
    /// Returns the number of steps executed. Steps left over when the run
    /// ends mid-frame are dropped.
    pub fn advance(&mut self, now: f64) -> u32 {
        if !self.phase.is_ticking() {
            return 0;
        }
        let steps = self.clock.advance(now);
        let dt = self.clock.step();
        let mut executed = 0;
        for _ in 0..steps {
            if !self.phase.is_ticking() {
                break;
            }
            self.step(dt);
            executed += 1;
        }
        executed
    }

    /// Run exactly one fixed step of the current phase
    pub fn step(&mut self, dt: f32) {
        match self.phase {
            GamePhase::Running => self.step_running(dt),
            GamePhase::Burning => self.step_burning(dt),
            GamePhase::Idle | GamePhase::Paused | GamePhase::GameOver => {}
        }
    }

    fn step_running(&mut self, dt: f32) {
        let speed = self.config.obstacles.speed;

        self.actor.update(dt);

        for id in self.obstacles.update(dt, speed) {
            self.stats.score += 1;
            let score = self.stats.score;
            log::debug!("Passed obstacle {id}, score {score}");
            self.emit(GameEvent::ObstaclePassed { id, score });
            if self.hearts.spawn_on_milestone(score) {
                self.emit(GameEvent::HeartSpawned);
            }
        }

        let collected = self.hearts.update(dt, speed, &self.actor.bounding_box());
        for _ in 0..collected {
            self.stats.lives += 1;
            self.stats.hearts_collected += 1;
            let lives = self.stats.lives;
            self.emit(GameEvent::HeartCollected { lives });
        }

        if self.actor.pos.y >= self.config.floor_line() {
            self.phase = GamePhase::Burning;
            self.burn_progress = 0.0;
            log::info!("Touched the lava at score {}", self.stats.score);
            self.emit(GameEvent::BurnStarted);
        }

        // Same instant as the floor check; a last-life hit overrides the burn
        if self.obstacles.collides(&self.actor.bounding_box()) {
            self.stats.lives = self.stats.lives.saturating_sub(1);
            let lives = self.stats.lives;
            self.emit(GameEvent::ObstacleCollision { lives });
            if lives == 0 {
                self.game_over();
            } else if self.phase == GamePhase::Running {
                self.actor.respawn(self.config.mid_height());
            }
        }
    }

    fn step_burning(&mut self, dt: f32) {
        self.burn_progress += self.config.timing.burn_rate * dt;
        if self.burn_progress >= 1.0 {
            self.burn_progress = 1.0;
            self.game_over();
        }
    }

    /// Finalize the score, persist a new best, then notify sinks
    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        let score = self.stats.score;
        self.final_score = Some(score);

        let new_best = score > self.stats.best;
        if new_best {
            self.stats.best = score;
            if let Some(store) = &mut self.collaborators.store {
                if let Err(e) = store.save_best(score) {
                    log::warn!("Could not save best score {score}: {e}");
                }
            }
        }

        log::info!("Game over - score {score}, best {}", self.stats.best);
        self.emit(GameEvent::GameOver {
            score,
            best: self.stats.best,
            new_best,
        });
    }
}
