//! Event notifications for collaborators outside the simulation
//!
//! Audio, HUD and remote score submission subscribe by implementing
//! [`EventSink`]. The session never waits on a sink and works with none.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Something observable happened during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Idle -> Running
    Started,
    /// A flap was applied
    Flap,
    /// An obstacle was cleared; `score` is the new total
    ObstaclePassed { id: u32, score: u32 },
    HeartSpawned,
    HeartCollected { lives: u32 },
    /// Hit an obstacle; `lives` remaining after the hit
    ObstacleCollision { lives: u32 },
    /// Touched the lava
    BurnStarted,
    Paused,
    Resumed,
    Reset,
    /// Emitted exactly once per completed session, after the best score is stored
    GameOver { score: u32, best: u32, new_best: bool },
}

/// Receiver of session events
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// Closures work as sinks
impl<F: FnMut(&GameEvent)> EventSink for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Shared in-memory event recorder
///
/// Clones share one buffer, so keep a clone to inspect what the session emitted.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&self) -> Vec<GameEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(*e)).count()
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(*event);
    }
}

/// Writes every event to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameOver { .. } | GameEvent::BurnStarted => log::info!("{event:?}"),
            GameEvent::Flap => log::trace!("{event:?}"),
            _ => log::debug!("{event:?}"),
        }
    }
}
