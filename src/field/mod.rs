mod debounce;

pub use debounce::{RESIZE_QUIET_PERIOD, ResizeDebouncer};

use rand::Rng;

pub const MIN_COUNT: usize = 50;
pub const AREA_PER_PARTICLE: f32 = 10_000.0;
pub const MIN_RADIUS: f32 = 0.6;
pub const MAX_RADIUS: f32 = 2.2;
pub const MAX_SPEED: f32 = 0.25;
pub const MIN_ALPHA: f32 = 0.25;
pub const MAX_ALPHA: f32 = 0.9;
pub const LINK_DISTANCE: f32 = 140.0;
pub const LINK_ALPHA_SCALE: f32 = 0.12;
pub const DOT_ALPHA_SCALE: f32 = 0.25;
pub const WRAP_MARGIN: f32 = 10.0;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub alpha: f32,
}

pub struct Field {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

pub fn particle_count(width: f32, height: f32) -> usize {
    MIN_COUNT.max(((width * height) / AREA_PER_PARTICLE).floor() as usize)
}

pub fn link_alpha(distance: f32) -> Option<f32> {
    if distance < LINK_DISTANCE {
        Some((1.0 - (distance / LINK_DISTANCE)) * LINK_ALPHA_SCALE)
    } else {
        None
    }
}

impl Field {
    pub fn new(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);

        let count = particle_count(width, height);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                vx: rng.random_range(-MAX_SPEED..MAX_SPEED),
                vy: rng.random_range(-MAX_SPEED..MAX_SPEED),
                radius: rng.random_range(MIN_RADIUS..MAX_RADIUS),
                alpha: rng.random_range(MIN_ALPHA..MAX_ALPHA),
            });
        }

        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn count(&self) -> usize {
        self.particles.len()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;

            if particle.x < -WRAP_MARGIN {
                particle.x = self.width + WRAP_MARGIN;
            } else if particle.x > self.width + WRAP_MARGIN {
                particle.x = -WRAP_MARGIN;
            }

            if particle.y < -WRAP_MARGIN {
                particle.y = self.height + WRAP_MARGIN;
            } else if particle.y > self.height + WRAP_MARGIN {
                particle.y = -WRAP_MARGIN;
            }
        }
    }
}
