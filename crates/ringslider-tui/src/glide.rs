//! Glide: flick inertia for the tick strip.
//!
//! A native scroll view decelerates released drags on its own; a terminal
//! does not, so this synthesizes the motion. Velocity decays with a fixed
//! half-life, and the displacement returned per update is the exact
//! integral of that decay over the elapsed interval, so the glide covers
//! the same distance whatever the frame rate.

use std::time::{Duration, Instant};

/// Velocity below which motion snaps to rest, in px/s.
const REST_VELOCITY: f64 = 4.0;

#[derive(Debug, Clone)]
pub struct Glide {
    /// Current velocity in px/s. Zero when at rest.
    velocity: f64,
    last_update: Instant,
    half_life: Duration,
}

impl Glide {
    pub fn new(half_life: Duration) -> Self {
        Self {
            velocity: 0.0,
            last_update: Instant::now(),
            half_life: half_life.max(Duration::from_millis(1)),
        }
    }

    /// Add a velocity impulse in px/s. Repeated flings stack.
    pub fn fling(&mut self, velocity: f64) {
        // Settle accrued motion first so the impulse starts fresh.
        let _ = self.update();
        self.velocity += velocity;
    }

    /// Displacement in px since the previous update, decaying velocity
    /// as it goes. Call once per frame; returns 0.0 at rest.
    pub fn update(&mut self) -> f64 {
        self.update_at(Instant::now())
    }

    /// Update against an explicit clock.
    pub fn update_at(&mut self, now: Instant) -> f64 {
        let dt = now.saturating_duration_since(self.last_update);
        self.last_update = now;

        if self.velocity == 0.0 {
            return 0.0;
        }

        let half_life = self.half_life.as_secs_f64();
        let decay = (0.5_f64).powf(dt.as_secs_f64() / half_life);

        // Integral of v0 * 0.5^(t/hl) over the interval.
        let displacement = self.velocity * half_life / std::f64::consts::LN_2 * (1.0 - decay);
        self.velocity *= decay;

        if self.velocity.abs() < REST_VELOCITY {
            self.velocity = 0.0;
        }
        displacement
    }

    /// Stop dead, discarding any remaining velocity.
    pub fn stop(&mut self) {
        self.velocity = 0.0;
    }

    #[inline]
    pub fn is_gliding(&self) -> bool {
        self.velocity != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rest_by_default() {
        let mut glide = Glide::new(Duration::from_millis(150));
        assert!(!glide.is_gliding());
        assert_eq!(glide.update(), 0.0);
    }

    #[test]
    fn test_velocity_halves_per_half_life() {
        let mut glide = Glide::new(Duration::from_millis(100));
        glide.fling(800.0);
        let start = glide.last_update;
        glide.update_at(start + Duration::from_millis(100));
        assert!((glide.velocity - 400.0).abs() < 1.0);
        glide.update_at(start + Duration::from_millis(200));
        assert!((glide.velocity - 200.0).abs() < 1.0);
    }

    #[test]
    fn test_displacement_shrinks_each_interval() {
        let mut glide = Glide::new(Duration::from_millis(100));
        glide.fling(800.0);
        let start = glide.last_update;
        let first = glide.update_at(start + Duration::from_millis(50));
        let second = glide.update_at(start + Duration::from_millis(100));
        let third = glide.update_at(start + Duration::from_millis(150));
        assert!(first > second && second > third);
        assert!(third > 0.0);
    }

    #[test]
    fn test_comes_to_rest() {
        let mut glide = Glide::new(Duration::from_millis(50));
        glide.fling(100.0);
        let start = glide.last_update;
        // Ten half-lives shrink 100 px/s well under the rest floor.
        glide.update_at(start + Duration::from_millis(500));
        assert!(!glide.is_gliding());
        assert_eq!(glide.update_at(start + Duration::from_millis(600)), 0.0);
    }

    #[test]
    fn test_negative_fling_moves_backwards() {
        let mut glide = Glide::new(Duration::from_millis(100));
        glide.fling(-800.0);
        let start = glide.last_update;
        assert!(glide.update_at(start + Duration::from_millis(50)) < 0.0);
    }

    #[test]
    fn test_stop_discards_velocity() {
        let mut glide = Glide::new(Duration::from_millis(100));
        glide.fling(800.0);
        glide.stop();
        assert!(!glide.is_gliding());
    }
}
