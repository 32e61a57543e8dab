//! Obstacle spawning, scrolling and difficulty progression
//!
//! Obstacles are tombstone pairs: a top segment hanging from the ceiling and
//! a bottom segment rising from the floor, with a gap between them.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::ObstacleConfig;

/// One solid vertical segment of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub y: f32,
    pub height: f32,
}

/// A top/bottom obstacle pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub top: Segment,
    pub bottom: Segment,
    /// Gap this obstacle was spawned with (`top.height + gap == bottom.y`)
    pub gap: f32,
    /// Counts as passed once the right edge is left of this line
    pub pass_x: f32,
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top_box(&self) -> Aabb {
        Aabb::new(self.x, self.top.y, self.width, self.top.height)
    }

    pub fn bottom_box(&self) -> Aabb {
        Aabb::new(self.x, self.bottom.y, self.width, self.bottom.height)
    }

    /// Vertical centre of the gap
    pub fn gap_center(&self) -> f32 {
        self.top.height + self.gap / 2.0
    }
}

/// Current gap size; only ever shrinks, never below `min_gap`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyState {
    pub gap: f32,
    pub min_gap: f32,
    pub step: f32,
}

impl DifficultyState {
    pub fn new(config: &ObstacleConfig) -> Self {
        Self {
            gap: config.gap.max(config.min_gap),
            min_gap: config.min_gap,
            step: config.difficulty_step,
        }
    }

    /// Apply one multiplicative shrink
    pub fn shrink(&mut self) {
        self.gap = (self.gap * self.step).max(self.min_gap);
    }
}

/// Spawns, scrolls and retires obstacles
#[derive(Debug, Clone)]
pub struct ObstacleField {
    config: ObstacleConfig,
    field_width: f32,
    field_height: f32,
    /// Line near the actor that obstacles must clear to count as passed
    pass_x: f32,
    /// Oldest (leftmost) first
    items: Vec<Obstacle>,
    /// Seconds since the last spawn
    spawn_timer: f32,
    difficulty: DifficultyState,
    rng: Pcg32,
    next_id: u32,
}

impl ObstacleField {
    pub fn new(
        config: ObstacleConfig,
        field_width: f32,
        field_height: f32,
        actor_x: f32,
        seed: u64,
    ) -> Self {
        Self {
            difficulty: DifficultyState::new(&config),
            pass_x: actor_x - config.pass_offset,
            config,
            field_width,
            field_height,
            items: Vec::new(),
            spawn_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.items
    }

    pub fn difficulty(&self) -> &DifficultyState {
        &self.difficulty
    }

    /// Advance the field by one step
    ///
    /// Returns the ids of obstacles that became passed during this step,
    /// oldest first. Each id is reported exactly once.
    pub fn update(&mut self, dt: f32, scroll_speed: f32) -> Vec<u32> {
        self.spawn_timer += dt;
        if self.spawn_timer >= self.config.spawn_interval {
            self.spawn_timer = 0.0;
            self.spawn();
            self.difficulty.shrink();
        }

        let mut newly_passed = Vec::new();
        for obstacle in &mut self.items {
            obstacle.x -= scroll_speed * dt;
            if !obstacle.passed && obstacle.right() < obstacle.pass_x {
                obstacle.passed = true;
                newly_passed.push(obstacle.id);
            }
        }

        self.items.retain(|o| o.right() >= 0.0);
        newly_passed
    }

    /// Spawn one obstacle just beyond the right edge using the current gap
    pub fn spawn(&mut self) -> u32 {
        let gap = self.difficulty.gap;
        let lo = self.config.top_min;
        let hi = self.field_height - self.config.bottom_reserve;
        let top_height = if hi > lo {
            self.rng.random_range(lo..hi)
        } else {
            lo
        };
        let bottom_y = top_height + gap;

        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Obstacle {
            id,
            x: self.field_width + self.config.spawn_margin,
            width: self.config.width,
            top: Segment {
                y: 0.0,
                height: top_height,
            },
            bottom: Segment {
                y: bottom_y,
                height: (self.field_height - bottom_y).max(0.0),
            },
            gap,
            pass_x: self.pass_x,
            passed: false,
        });
        log::debug!("Spawned obstacle {id}: top={top_height:.1} gap={gap:.1}");
        id
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.items
    }

    /// True if `bounds` overlaps either segment of any obstacle
    pub fn collides(&self, bounds: &Aabb) -> bool {
        self.items
            .iter()
            .any(|o| bounds.intersects(&o.top_box()) || bounds.intersects(&o.bottom_box()))
    }
}
