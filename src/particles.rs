/// Decorative explosions: bursts of shrinking, slowing particles.

use rand::Rng;

use crate::config::FRICTION;
use crate::entities::Tint;
use crate::population::{reap_one, Expiring};
use crate::vector::Vector2;

/// Largest initial particle radius.
const MAX_PARTICLE_RADIUS: f64 = 4.0;
/// Scale of the per-axis velocity burst.
const BURST_SPEED: f64 = 6.0;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f64,
    pub tint: Tint,
    /// Radius lost per frame.
    pub fade: f64,
    pub done: bool,
}

impl Particle {
    pub fn new(position: Vector2, velocity: Vector2, radius: f64, tint: Tint, fade: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
            tint,
            fade,
            done: false,
        }
    }

    pub fn update(&mut self) {
        self.velocity = self.velocity * FRICTION;
        if self.radius > 0.0 {
            self.radius -= self.fade;
        }
        if self.radius <= 0.0 {
            self.done = true;
        }
        if !self.done {
            self.position += self.velocity;
        }
    }
}

impl Expiring for Particle {
    fn is_done(&self) -> bool {
        self.done
    }
}

#[derive(Clone, Debug)]
pub struct Explosion {
    pub position: Vector2,
    pub particles: Vec<Particle>,
    pub done: bool,
}

impl Explosion {
    /// Burst of `2 * count` particles centred on `position`.
    ///
    /// Each velocity axis is `(r1 - 0.5) * r2 * 6`: mostly slow particles
    /// with the occasional fast one.
    pub fn new(position: Vector2, count: u32, tint: Tint, fade: f64, rng: &mut impl Rng) -> Self {
        let particles = (0..count * 2)
            .map(|_| {
                let radius = rng.gen::<f64>() * MAX_PARTICLE_RADIUS;
                let vx = (rng.gen::<f64>() - 0.5) * rng.gen::<f64>() * BURST_SPEED;
                let vy = (rng.gen::<f64>() - 0.5) * rng.gen::<f64>() * BURST_SPEED;
                Particle::new(position, Vector2::new(vx, vy), radius, tint, fade)
            })
            .collect();
        Self {
            position,
            particles,
            done: false,
        }
    }

    pub fn update(&mut self) {
        for particle in self.particles.iter_mut().filter(|p| !p.done) {
            particle.update();
        }
        reap_one(&mut self.particles);
        if self.particles.is_empty() {
            self.done = true;
        }
    }
}

impl Expiring for Explosion {
    fn is_done(&self) -> bool {
        self.done
    }
}
