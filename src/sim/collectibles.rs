//! Bonus hearts that grant an extra life

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::HeartConfig;

/// A heart pickup; `pos` is the top-left corner of its box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heart {
    pub pos: Vec2,
    pub size: f32,
}

impl Heart {
    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

#[derive(Debug, Clone)]
pub struct Collectibles {
    config: HeartConfig,
    spawn_pos: Vec2,
    hearts: Vec<Heart>,
}

impl Collectibles {
    pub fn new(config: HeartConfig, field_width: f32, field_height: f32) -> Self {
        Self {
            spawn_pos: Vec2::new(field_width + config.spawn_margin, field_height / 2.0),
            config,
            hearts: Vec::new(),
        }
    }

    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// Spawn a heart if `obstacles_passed` is a positive multiple of the milestone
    ///
    /// Call once per pass with the new running total.
    pub fn spawn_on_milestone(&mut self, obstacles_passed: u32) -> bool {
        if obstacles_passed == 0 || !obstacles_passed.is_multiple_of(self.config.every) {
            return false;
        }
        self.hearts.push(Heart {
            pos: self.spawn_pos,
            size: self.config.size,
        });
        log::debug!("Heart spawned at milestone {obstacles_passed}");
        true
    }

    /// Scroll hearts left, collect those touching `actor`, drop those off-screen
    ///
    /// Returns how many hearts were collected.
    pub fn update(&mut self, dt: f32, scroll_speed: f32, actor: &Aabb) -> u32 {
        let mut collected = 0;
        self.hearts.retain_mut(|heart| {
            heart.pos.x -= scroll_speed * dt;
            if heart.bounding_box().intersects(actor) {
                collected += 1;
                return false;
            }
            heart.pos.x + heart.size >= 0.0
        });
        collected
    }
}
