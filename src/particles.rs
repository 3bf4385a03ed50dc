//! Falling-line particle field drawn behind the hero section.

use rand::prelude::*;

use crate::constants::{RAIN_MIN_SPEED, RAIN_SPEED_SPAN};

/// One falling line. `x` and `speed` are fixed at seed time; only `y`
/// advances, wrapping modulo the surface height.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

/// Fixed-cardinality particle set over a surface sized once at startup.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Seed `count` particles across a `width` x `height` surface:
    /// x in [0, width), y in [0, height), speed in [0.5, 2.5).
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen::<f32>() * width,
                y: rng.gen::<f32>() * height,
                speed: RAIN_MIN_SPEED + rng.gen::<f32>() * RAIN_SPEED_SPAN,
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Advance every particle by one frame: `y <- (y + speed) mod height`.
    /// Columns re-enter at the top; x and speed never change.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.y = (p.y + p.speed) % self.height;
        }
    }
}
