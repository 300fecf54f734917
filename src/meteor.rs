/// Asteroids ("meteors"): one-shot aimed drift, spin, and tiered splitting.

use rand::Rng;

use crate::collision::{Bounds, Collider};
use crate::config::{
    EDGE_OFFSET, METEOR_MAX_SPIN, METEOR_MIN_SPEED, METEOR_SPEED_RANGE, SCREEN_HEIGHT,
    SCREEN_WIDTH, TIER_SCORES,
};
use crate::entities::{Size, SpriteSizes, MAX_TIER, METEOR_EXPLOSION_TINT};
use crate::missile::is_offscreen;
use crate::particles::Explosion;
use crate::population::Expiring;
use crate::vector::Vector2;

/// Particle basis of the burst left by a destroyed tier-0 asteroid.
const FINAL_EXPLOSION_COUNT: u32 = 20;
const FINAL_EXPLOSION_FADE: f64 = 0.075;

#[derive(Clone, Debug)]
pub struct Meteor {
    pub position: Vector2,
    pub movement: Vector2,
    /// Visual spin only; does not affect the trajectory.
    pub rotation_speed: f64,
    pub angle: f64,
    /// 0 (tiny) ..= 3 (large)
    pub tier: u8,
    pub size: Size,
    pub done: bool,
}

/// Side effects of a hit, for the caller to apply to its populations.
#[derive(Debug, Default)]
pub struct HitOutcome {
    pub score: u32,
    pub fragment: Option<Meteor>,
    pub explosion: Option<Explosion>,
}

impl Meteor {
    /// Fresh asteroid entering from a random screen edge, aimed at `target`
    /// (the player's position at spawn time).
    pub fn spawn(target: Vector2, sizes: &SpriteSizes, rng: &mut impl Rng) -> Self {
        let tier = rng.gen_range(0..=MAX_TIER);
        let position = random_edge_point(rng);
        Self::aimed(tier, position, target, sizes, rng)
    }

    /// Split-off piece heading for a random point on screen.
    pub fn fragment(tier: u8, position: Vector2, sizes: &SpriteSizes, rng: &mut impl Rng) -> Self {
        let target = Vector2::new(
            rng.gen_range(0..SCREEN_WIDTH as u32) as f64,
            rng.gen_range(0..SCREEN_HEIGHT as u32) as f64,
        );
        Self::aimed(tier.min(MAX_TIER), position, target, sizes, rng)
    }

    fn aimed(
        tier: u8,
        position: Vector2,
        target: Vector2,
        sizes: &SpriteSizes,
        rng: &mut impl Rng,
    ) -> Self {
        let speed = METEOR_MIN_SPEED + rng.gen::<f64>() * METEOR_SPEED_RANGE;
        let movement = (target - position).normalize() * speed;
        let rotation_speed = -METEOR_MAX_SPIN + rng.gen::<f64>() * METEOR_MAX_SPIN * 2.0;
        Self {
            position,
            movement,
            rotation_speed,
            angle: 0.0,
            tier,
            size: sizes.meteor(tier),
            done: false,
        }
    }

    pub fn update(&mut self) {
        if self.done {
            return;
        }
        self.position += self.movement;
        self.angle += self.rotation_speed;
        self.done = is_offscreen(self.position);
    }

    /// Score the hit and drop one tier.
    ///
    /// A tier-0 asteroid is destroyed. Anything larger survives one tier
    /// smaller and sheds a fragment of that same new tier. `explode` adds
    /// the debris burst; player collisions pass `false`.
    pub fn hit(&mut self, explode: bool, sizes: &SpriteSizes, rng: &mut impl Rng) -> HitOutcome {
        if self.done {
            return HitOutcome::default();
        }
        let score = TIER_SCORES[usize::from(self.tier)];

        let Some(tier) = self.tier.checked_sub(1) else {
            self.done = true;
            let explosion = explode.then(|| {
                Explosion::new(
                    self.position,
                    FINAL_EXPLOSION_COUNT,
                    METEOR_EXPLOSION_TINT,
                    FINAL_EXPLOSION_FADE,
                    rng,
                )
            });
            return HitOutcome {
                score,
                fragment: None,
                explosion,
            };
        };

        self.tier = tier;
        self.size = sizes.meteor(tier);
        let fragment = Meteor::fragment(tier, self.position, sizes, rng);
        // Smaller tiers burst with fewer, faster-fading particles.
        let explosion = explode.then(|| {
            Explosion::new(
                self.position,
                20 * (u32::from(tier) + 1),
                METEOR_EXPLOSION_TINT,
                0.060 - 0.020 * f64::from(tier),
                rng,
            )
        });
        HitOutcome {
            score,
            fragment: Some(fragment),
            explosion,
        }
    }
}

/// A point just outside one of the four screen edges.
fn random_edge_point(rng: &mut impl Rng) -> Vector2 {
    let along_x = rng.gen_range(0..SCREEN_WIDTH as u32) as f64;
    let along_y = rng.gen_range(0..SCREEN_HEIGHT as u32) as f64;
    match rng.gen_range(0..4) {
        0 => Vector2::new(-EDGE_OFFSET, along_y),
        1 => Vector2::new(SCREEN_WIDTH + EDGE_OFFSET, along_y),
        2 => Vector2::new(along_x, -EDGE_OFFSET),
        _ => Vector2::new(along_x, SCREEN_HEIGHT + EDGE_OFFSET),
    }
}

impl Collider for Meteor {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size.width as f64, self.size.height as f64)
    }
}

impl Expiring for Meteor {
    fn is_done(&self) -> bool {
        self.done
    }
}
