//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or storage dependencies (those are injected)

pub mod actor;
pub mod autopilot;
pub mod clock;
pub mod collectibles;
pub mod collision;
pub mod obstacles;
pub mod session;
pub mod state;

pub use actor::Actor;
pub use clock::FixedClock;
pub use collectibles::{Collectibles, Heart};
pub use collision::{Aabb, intersects};
pub use obstacles::{DifficultyState, Obstacle, ObstacleField, Segment};
pub use session::{Collaborators, Command, Session};
pub use state::{GamePhase, SessionStats, Snapshot};
