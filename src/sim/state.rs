//! Session phase, statistics and the read-only frame snapshot

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collectibles::Heart;
use super::obstacles::Obstacle;

/// Current phase of a play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input
    Idle,
    /// Active gameplay
    Running,
    /// Frozen by the player
    Paused,
    /// Touched the lava; burn animation counts down to game over
    Burning,
    /// Run ended; only reset leaves this phase
    GameOver,
}

impl GamePhase {
    /// Phases in which the clock drives fixed steps
    pub fn is_ticking(self) -> bool {
        matches!(self, GamePhase::Running | GamePhase::Burning)
    }
}

/// Score and lives bookkeeping for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Obstacles passed
    pub score: u32,
    pub lives: u32,
    /// Best score across sessions (as loaded, raised on game over)
    pub best: u32,
    pub hearts_collected: u32,
}

impl SessionStats {
    pub fn new(lives: u32, best: u32) -> Self {
        Self {
            score: 0,
            lives,
            best,
            hearts_collected: 0,
        }
    }
}

/// Everything a renderer or HUD needs for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub actor: &'a Actor,
    pub obstacles: &'a [Obstacle],
    pub hearts: &'a [Heart],
    pub stats: SessionStats,
    /// Present only while burning, in [0, 1]
    pub burn_progress: Option<f32>,
    /// Current gap the next obstacle will spawn with
    pub gap: f32,
}
