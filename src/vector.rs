use std::ops::{Add, AddAssign, Mul, Sub};

/// 2D point or velocity in screen pixels (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector for a heading. Angle 0 points up, angles grow clockwise.
    pub fn from_heading(angle: f64) -> Self {
        Self::new(angle.sin(), -angle.cos())
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Vector2) -> f64 {
        (other - self).length()
    }

    /// Unit-length copy; the zero vector stays zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::ZERO
        } else {
            Self::new(self.x / len, self.y / len)
        }
    }

    /// Heading that points from `self` at `target`, in the
    /// [`from_heading`](Self::from_heading) convention.
    pub fn point_towards(self, target: Vector2) -> f64 {
        let d = target - self;
        d.x.atan2(-d.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: f64) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }
}
