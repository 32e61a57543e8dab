//! The controlled actor's vertical physics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::PhysicsConfig;

/// The player's jack o' lantern
///
/// x never changes; y falls under gravity and is kicked upward by flaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub vel_y: f32,
    pub radius: f32,
    pub physics: PhysicsConfig,
    /// Height of the surface the actor is confined to
    pub surface_height: f32,
}

impl Actor {
    pub fn new(x: f32, y: f32, radius: f32, physics: PhysicsConfig, surface_height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel_y: 0.0,
            radius,
            physics,
            surface_height,
        }
    }

    /// Replace any current velocity with the jump impulse
    pub fn flap(&mut self) {
        self.vel_y = self.physics.jump_impulse;
    }

    /// Integrate one step, then clamp into [radius, surface_height - radius]
    ///
    /// Speed is capped at `max_fall` in both directions.
    pub fn update(&mut self, dt: f32) {
        let max = self.physics.max_fall;
        self.vel_y = (self.vel_y + self.physics.gravity * dt).clamp(-max, max);
        self.pos.y += self.vel_y * dt;

        let ceiling = self.radius;
        let floor = self.surface_height - self.radius;
        if self.pos.y < ceiling {
            self.pos.y = ceiling;
            self.vel_y = 0.0;
        }
        if self.pos.y > floor {
            self.pos.y = floor;
            self.vel_y = 0.0;
        }
    }

    /// Put the actor back at `y` at rest
    pub fn respawn(&mut self, y: f32) {
        self.pos.y = y;
        self.vel_y = 0.0;
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::centered(self.pos, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn actor() -> Actor {
        Actor::new(80.0, 320.0, 18.0, PhysicsConfig::default(), 640.0)
    }

    #[test]
    fn test_flap_overrides_fall_speed() {
        let mut a = actor();
        a.vel_y = 500.0;
        a.flap();
        assert_eq!(a.vel_y, -320.0);
    }

    #[test]
    fn test_flap_golden_trajectory() {
        // gravity 650, impulse -320, from rest at y=320, ten 1/60 s steps
        let mut a = actor();
        a.flap();
        for _ in 0..10 {
            a.update(DT);
        }
        // Direct integration: vy_n = -320 + n*g*dt, y_n = y0 + dt * sum(vy_k)
        let g = 650.0f64;
        let dt = 1.0f64 / 60.0;
        let n = 10.0f64;
        let vy = -320.0 + n * g * dt;
        let y = 320.0 + dt * (-320.0 * n + g * dt * n * (n + 1.0) / 2.0);
        assert!((a.vel_y as f64 - vy).abs() < 1e-3, "vy={}", a.vel_y);
        assert!((a.pos.y as f64 - y).abs() < 1e-3, "y={}", a.pos.y);
        assert!((a.vel_y - -211.666_67).abs() < 1e-3);
        assert!((a.pos.y - 276.597_2).abs() < 1e-3);
    }

    #[test]
    fn test_terminal_velocity() {
        let mut a = actor();
        a.surface_height = 1.0e6;
        for _ in 0..600 {
            a.update(DT);
        }
        assert_eq!(a.vel_y, 550.0);
    }

    #[test]
    fn test_strong_flap_capped_at_terminal_speed() {
        let mut a = actor();
        a.physics.jump_impulse = -700.0;
        a.flap();
        a.update(DT);
        assert_eq!(a.vel_y, -550.0);
        assert!((a.pos.y - (320.0 - 550.0 * DT)).abs() < 1e-3);
    }

    #[test]
    fn test_ceiling_clamp_zeroes_velocity() {
        let mut a = actor();
        a.pos.y = 20.0;
        a.flap();
        a.update(DT);
        assert_eq!(a.pos.y, 18.0);
        assert_eq!(a.vel_y, 0.0);
    }

    #[test]
    fn test_floor_clamp_zeroes_velocity() {
        let mut a = actor();
        a.pos.y = 620.0;
        a.vel_y = 500.0;
        a.update(DT);
        assert_eq!(a.pos.y, 622.0);
        assert_eq!(a.vel_y, 0.0);
    }

    #[test]
    fn test_bounding_box() {
        let a = actor();
        let b = a.bounding_box();
        assert_eq!(b, Aabb::new(62.0, 302.0, 36.0, 36.0));
    }

    proptest! {
        #[test]
        fn prop_actor_stays_in_bounds(
            flaps in prop::collection::vec(any::<bool>(), 1..500),
            jump in -1500.0f32..-1.0,
        ) {
            let mut a = actor();
            a.physics.jump_impulse = jump;
            for flap in flaps {
                if flap {
                    a.flap();
                }
                a.update(DT);
                prop_assert!(a.pos.y >= a.radius);
                prop_assert!(a.pos.y <= a.surface_height - a.radius);
                prop_assert!(a.vel_y <= a.physics.max_fall);
                prop_assert!(a.vel_y.abs() <= a.physics.max_fall);
            }
        }
    }
}
