/// Overlap tests between positioned, sized entities.

use crate::config::COLLISION_MARGIN;
use crate::vector::Vector2;

/// Where an entity sits on screen: `center` plus its visual bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub center: Vector2,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(center: Vector2, width: f64, height: f64) -> Self {
        Self { center, width, height }
    }

    /// Circular test used by every gameplay collision. Half the width acts
    /// as the radius, and the sum of radii is shrunk by [`COLLISION_MARGIN`]
    /// so sprites may touch slightly before a hit registers.
    pub fn collides(&self, other: &Bounds) -> bool {
        let distance = self.center.distance(other.center);
        distance < self.width / 2.0 + other.width / 2.0 - COLLISION_MARGIN
    }

    /// Axis-aligned box overlap.
    pub fn intersects(&self, other: &Bounds) -> bool {
        (self.center.x - other.center.x).abs() < self.width / 2.0 + other.width / 2.0
            && (self.center.y - other.center.y).abs() < self.height / 2.0 + other.height / 2.0
    }
}

/// Anything that can take part in a collision pass.
pub trait Collider {
    fn bounds(&self) -> Bounds;
}

pub fn collides(a: &impl Collider, b: &impl Collider) -> bool {
    a.bounds().collides(&b.bounds())
}
