/// Background stars drifting down the screen. They never collide or die.

use rand::Rng;

use crate::config::{NUM_STARS, SCREEN_HEIGHT, SCREEN_WIDTH, STAR_SPEED};
use crate::vector::Vector2;

#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vector2,
    pub velocity: Vector2,
    /// 1 ..= 3
    pub radius: u32,
}

impl Star {
    pub fn new(position: Vector2, radius: u32) -> Self {
        Self {
            position,
            velocity: Vector2::new(0.0, STAR_SPEED),
            radius,
        }
    }

    pub fn update(&mut self, rng: &mut impl Rng) {
        self.position += self.velocity;
        if self.position.y > SCREEN_HEIGHT {
            self.position.y = 0.0;
            self.position.x = random_column(rng);
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StarField {
    pub stars: Vec<Star>,
}

impl StarField {
    pub fn new(rng: &mut impl Rng) -> Self {
        let stars = (0..NUM_STARS)
            .map(|_| {
                let position = Vector2::new(
                    random_column(rng),
                    rng.gen_range(0..SCREEN_HEIGHT as u32) as f64,
                );
                Star::new(position, rng.gen_range(1..=3))
            })
            .collect();
        Self { stars }
    }

    pub fn update(&mut self, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.update(rng);
        }
    }
}

fn random_column(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0..SCREEN_WIDTH as u32) as f64
}
