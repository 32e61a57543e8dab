//! Game balance configuration
//!
//! Every group falls back to the built-in defaults for fields a JSON file
//! leaves out, so `{"obstacles": {"speed": 180}}` is a complete config.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Playfield geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    /// Lava band along the bottom; touching it starts the burn
    pub lava_height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            lava_height: LAVA_HEIGHT,
        }
    }
}

/// Vertical physics of the actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward)
    pub jump_impulse: f32,
    /// Terminal fall speed
    pub max_fall: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            max_fall: MAX_FALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    pub x: f32,
    pub radius: f32,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            x: ACTOR_X,
            radius: ACTOR_RADIUS,
        }
    }
}

/// Obstacle stream and difficulty progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Scroll speed (pixels per second)
    pub speed: f32,
    /// Gap at the start of a run
    pub gap: f32,
    pub min_gap: f32,
    pub difficulty_step: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    pub width: f32,
    pub spawn_margin: f32,
    /// Distance behind the actor's x where obstacles count as passed
    pub pass_offset: f32,
    pub top_min: f32,
    pub bottom_reserve: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            speed: SCROLL_SPEED,
            gap: INITIAL_GAP,
            min_gap: MIN_GAP,
            difficulty_step: DIFFICULTY_STEP,
            spawn_interval: SPAWN_INTERVAL,
            width: OBSTACLE_WIDTH,
            spawn_margin: OBSTACLE_SPAWN_MARGIN,
            pass_offset: 0.0,
            top_min: TOP_MIN,
            bottom_reserve: BOTTOM_RESERVE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartConfig {
    /// A heart spawns every `every` obstacles passed
    pub every: u32,
    pub size: f32,
    pub spawn_margin: f32,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            every: HEART_EVERY,
            size: HEART_SIZE,
            spawn_margin: HEART_SPAWN_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fixed simulation step in seconds
    pub step: f32,
    /// Burn progress gained per second
    pub burn_rate: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            step: SIM_DT,
            burn_rate: BURN_RATE,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub physics: PhysicsConfig,
    pub actor: ActorConfig,
    pub obstacles: ObstacleConfig,
    pub hearts: HeartConfig,
    pub timing: TimingConfig,
    pub starting_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            physics: PhysicsConfig::default(),
            actor: ActorConfig::default(),
            obstacles: ObstacleConfig::default(),
            hearts: HeartConfig::default(),
            timing: TimingConfig::default(),
            starting_lives: STARTING_LIVES,
        }
    }
}

fn positive(value: f32, field: &'static str) -> Result<(), ConfigError> {
    // Written as a negated comparison so NaN is rejected too
    if !(value > 0.0) {
        return Err(ConfigError::invalid(field, "must be positive"));
    }
    Ok(())
}

impl GameConfig {
    /// Parse a JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations that would produce a degenerate game
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive(self.field.width, "field.width")?;
        positive(self.field.height, "field.height")?;
        if !(self.field.lava_height >= 0.0) {
            return Err(ConfigError::invalid("field.lava_height", "must not be negative"));
        }

        positive(self.physics.gravity, "physics.gravity")?;
        positive(self.physics.max_fall, "physics.max_fall")?;
        if !(self.physics.jump_impulse < 0.0) {
            return Err(ConfigError::invalid(
                "physics.jump_impulse",
                "must be negative (upward)",
            ));
        }

        positive(self.actor.radius, "actor.radius")?;
        if self.floor_line() <= self.actor.radius {
            return Err(ConfigError::invalid(
                "field.height",
                "too short to hold the actor above the lava",
            ));
        }

        let obstacles = &self.obstacles;
        positive(obstacles.speed, "obstacles.speed")?;
        positive(obstacles.spawn_interval, "obstacles.spawn_interval")?;
        positive(obstacles.width, "obstacles.width")?;
        positive(obstacles.min_gap, "obstacles.min_gap")?;
        if !(obstacles.min_gap < obstacles.gap) {
            return Err(ConfigError::invalid(
                "obstacles.min_gap",
                "must be smaller than obstacles.gap",
            ));
        }
        if !(obstacles.difficulty_step > 0.0 && obstacles.difficulty_step <= 1.0) {
            return Err(ConfigError::invalid(
                "obstacles.difficulty_step",
                "must be in (0, 1]",
            ));
        }
        if !(obstacles.top_min >= 0.0) {
            return Err(ConfigError::invalid("obstacles.top_min", "must not be negative"));
        }

        if self.hearts.every == 0 {
            return Err(ConfigError::invalid("hearts.every", "must be at least 1"));
        }
        positive(self.hearts.size, "hearts.size")?;

        positive(self.timing.step, "timing.step")?;
        positive(self.timing.burn_rate, "timing.burn_rate")?;

        if self.starting_lives == 0 {
            return Err(ConfigError::invalid("starting_lives", "must be at least 1"));
        }
        Ok(())
    }

    /// Actor y at which the lava is touched
    pub fn floor_line(&self) -> f32 {
        self.field.height - self.field.lava_height - self.actor.radius
    }

    /// Where the actor starts and respawns
    pub fn mid_height(&self) -> f32 {
        self.field.height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.floor_line(), 640.0 - 30.0 - 18.0);
        assert_eq!(config.mid_height(), 320.0);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config =
            GameConfig::from_json_str(r#"{"obstacles": {"speed": 180.0}, "starting_lives": 3}"#)
                .unwrap();
        assert_eq!(config.obstacles.speed, 180.0);
        assert_eq!(config.obstacles.gap, INITIAL_GAP);
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.physics, PhysicsConfig::default());
    }

    #[test]
    fn test_rejects_min_gap_not_below_gap() {
        let mut config = GameConfig::default();
        config.obstacles.min_gap = config.obstacles.gap;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "obstacles.min_gap",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_positive_spawn_interval() {
        let mut config = GameConfig::default();
        config.obstacles.spawn_interval = 0.0;
        assert!(config.validate().is_err());
        config.obstacles.spawn_interval = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let cases: [fn(&mut GameConfig); 6] = [
            |c| c.physics.jump_impulse = 10.0,
            |c| c.obstacles.difficulty_step = 1.5,
            |c| c.hearts.every = 0,
            |c| c.starting_lives = 0,
            |c| c.timing.step = -1.0,
            |c| c.field.height = 40.0,
        ];
        for mutate in cases {
            let mut config = GameConfig::default();
            mutate(&mut config);
            assert!(config.validate().is_err(), "accepted {config:?}");
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
