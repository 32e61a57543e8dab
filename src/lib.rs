//! Flappy Haunt - a side-scrolling haunted arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, physics, obstacles, session state machine)
//! - `config`: Data-driven game balance with validation
//! - `hooks`: Event notifications for audio/UI/remote collaborators
//! - `persistence`: Best-score storage backends
//! - `input`: Raw key/pointer translation into session commands
//! - `platform`: Browser/native logging setup

pub mod config;
pub mod error;
pub mod hooks;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, StoreError};
pub use hooks::{EventLog, EventSink, GameEvent, LogSink};
pub use persistence::{MemoryScoreStore, ScoreStore};
pub use sim::{Collaborators, Command, GamePhase, Session, Snapshot};

/// Game configuration defaults
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 360.0;
    pub const FIELD_HEIGHT: f32 = 640.0;
    /// Height of the lava band along the bottom edge
    pub const LAVA_HEIGHT: f32 = 30.0;

    /// Actor physics (pixels, seconds)
    pub const GRAVITY: f32 = 650.0;
    pub const JUMP_IMPULSE: f32 = -320.0;
    pub const MAX_FALL: f32 = 550.0;
    pub const ACTOR_X: f32 = 80.0;
    pub const ACTOR_RADIUS: f32 = 18.0;

    /// Obstacle stream
    pub const SCROLL_SPEED: f32 = 140.0;
    pub const INITIAL_GAP: f32 = 160.0;
    pub const MIN_GAP: f32 = 130.0;
    /// Multiplicative gap shrink applied once per spawn
    pub const DIFFICULTY_STEP: f32 = 0.995;
    /// Seconds between spawns
    pub const SPAWN_INTERVAL: f32 = 1.7;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Obstacles appear this far beyond the right edge
    pub const OBSTACLE_SPAWN_MARGIN: f32 = 10.0;
    /// Shortest top segment
    pub const TOP_MIN: f32 = 50.0;
    /// Space kept free below the tallest top segment
    pub const BOTTOM_RESERVE: f32 = 200.0;

    /// Hearts
    pub const HEART_EVERY: u32 = 7;
    pub const HEART_SIZE: f32 = 30.0;
    pub const HEART_SPAWN_MARGIN: f32 = 50.0;

    pub const STARTING_LIVES: u32 = 1;

    /// Burn animation rate (progress per second, finishes at 1.0)
    pub const BURN_RATE: f32 = 2.0;
}
