use crate::collision::{Bounds, Collider};
use crate::config::{
    MISSILE_NOSE_STEPS, MISSILE_SPEED, OFFSCREEN_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::entities::Size;
use crate::population::Expiring;
use crate::vector::Vector2;

#[derive(Clone, Debug)]
pub struct Missile {
    pub position: Vector2,
    pub movement: Vector2,
    /// Heading at launch; missiles never turn.
    pub angle: f64,
    pub size: Size,
    pub done: bool,
}

impl Missile {
    /// Launch from a ship at `origin` facing `angle`. The missile starts a
    /// few steps ahead so it appears at the nose rather than the centre.
    pub fn launch(origin: Vector2, angle: f64, size: Size) -> Self {
        let movement = Vector2::from_heading(angle).normalize() * MISSILE_SPEED;
        Self {
            position: origin + movement * MISSILE_NOSE_STEPS,
            movement,
            angle,
            size,
            done: false,
        }
    }

    pub fn update(&mut self) {
        if self.done {
            return;
        }
        self.position += self.movement;
        self.done = is_offscreen(self.position);
    }
}

/// Outside the screen by more than [`OFFSCREEN_MARGIN`] on either axis.
pub fn is_offscreen(p: Vector2) -> bool {
    p.x < -OFFSCREEN_MARGIN
        || p.x > SCREEN_WIDTH + OFFSCREEN_MARGIN
        || p.y < -OFFSCREEN_MARGIN
        || p.y > SCREEN_HEIGHT + OFFSCREEN_MARGIN
}

impl Collider for Missile {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size.width as f64, self.size.height as f64)
    }
}

impl Expiring for Missile {
    fn is_done(&self) -> bool {
        self.done
    }
}
