/// The player's ship: thrust, rotation, firing, hyperjump and death.

use std::f64::consts::PI;

use rand::Rng;

use crate::collision::{Bounds, Collider};
use crate::config::{
    GAP_FRAMES, HYPERJUMP_INSET, MAX_THRUST, PLAYER_HIT_PAUSE_SECONDS, RELOAD_FRAMES, ROTATION_STEP,
    SCREEN_HEIGHT, SCREEN_WIDTH, THRUST_DIVISOR,
};
use crate::entities::{Size, SpriteSizes, PLAYER_EXPLOSION_TINT};
use crate::input::InputActions;
use crate::missile::Missile;
use crate::particles::Explosion;
use crate::timer::Timer;
use crate::vector::Vector2;

const DEATH_EXPLOSION_COUNT: u32 = 75;
const DEATH_EXPLOSION_FADE: f64 = 0.025;

#[derive(Clone, Debug, PartialEq)]
pub enum PlayerState {
    Flying,
    /// Blown up; waiting out the hit pause before the next life.
    Destroyed { respawn: Timer },
}

/// Frame countdowns gating repeated actions. Zero means available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cooldowns {
    pub reload: u32,
    pub hyperjump: u32,
    pub reverse: u32,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub position: Vector2,
    /// Unit vector captured at the last thrust.
    pub movement: Vector2,
    pub angle: f64,
    /// Remaining impulse; counts down by one each frame.
    pub thrust: f64,
    pub loaded: bool,
    pub cooldowns: Cooldowns,
    pub state: PlayerState,
    pub size: Size,
}

impl Player {
    pub fn new(size: Size) -> Self {
        Self {
            position: screen_center(),
            movement: Vector2::ZERO,
            angle: 0.0,
            thrust: 0.0,
            loaded: true,
            cooldowns: Cooldowns::default(),
            state: PlayerState::Flying,
            size,
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.state, PlayerState::Flying)
    }

    pub fn is_thrusting(&self) -> bool {
        self.thrust > 0.0
    }

    /// Advance one frame of flight. Returns the missile fired, if any.
    ///
    /// Cooldowns count down before the frame's input is read, so holding
    /// fire launches exactly once every [`RELOAD_FRAMES`] frames.
    pub fn update(
        &mut self,
        input: &InputActions,
        sizes: &SpriteSizes,
        rng: &mut impl Rng,
    ) -> Option<Missile> {
        if !self.is_alive() {
            return None;
        }

        if self.is_thrusting() {
            self.position += self.movement * (self.thrust / THRUST_DIVISOR);
            self.thrust -= 1.0;
            self.position = wrap(self.position);
        }

        self.tick_cooldowns();

        if input.rotate_left {
            self.angle -= ROTATION_STEP;
        }
        if input.rotate_right {
            self.angle += ROTATION_STEP;
        }
        if input.reverse && self.cooldowns.reverse == 0 {
            self.angle += PI;
            self.cooldowns.reverse = GAP_FRAMES;
        }

        let mut fired = None;
        if input.fire && self.loaded {
            fired = Some(self.launch_missile(sizes));
        }
        if let Some(pointer) = input.fire_at {
            if self.loaded {
                self.angle = self.position.point_towards(pointer);
                fired = Some(self.launch_missile(sizes));
            }
        }

        if input.thrust {
            self.thrust = MAX_THRUST;
            self.movement = Vector2::from_heading(self.angle);
        }

        if input.hyperjump && self.cooldowns.hyperjump == 0 {
            self.cooldowns.hyperjump = GAP_FRAMES;
            self.position = random_jump_point(rng);
        }

        fired
    }

    fn tick_cooldowns(&mut self) {
        let c = &mut self.cooldowns;
        c.hyperjump = c.hyperjump.saturating_sub(1);
        c.reverse = c.reverse.saturating_sub(1);
        if c.reload > 0 {
            c.reload -= 1;
            if c.reload == 0 {
                self.loaded = true;
            }
        }
    }

    fn launch_missile(&mut self, sizes: &SpriteSizes) -> Missile {
        self.loaded = false;
        self.cooldowns.reload = RELOAD_FRAMES;
        Missile::launch(self.position, self.angle, sizes.missile)
    }

    /// Hold fire for a full reload, as at the start of a game.
    pub fn unload(&mut self) {
        self.loaded = false;
        self.cooldowns.reload = RELOAD_FRAMES;
    }

    /// Blow up the ship and start the respawn pause.
    pub fn hit(&mut self, rng: &mut impl Rng) -> Explosion {
        self.state = PlayerState::Destroyed {
            respawn: Timer::new(PLAYER_HIT_PAUSE_SECONDS, false),
        };
        Explosion::new(
            self.position,
            DEATH_EXPLOSION_COUNT,
            PLAYER_EXPLOSION_TINT,
            DEATH_EXPLOSION_FADE,
            rng,
        )
    }

    /// Advance the respawn pause. `true` on the frame it expires.
    pub fn respawn_ready(&mut self) -> bool {
        match &mut self.state {
            PlayerState::Destroyed { respawn } => {
                respawn.tick();
                respawn.is_ready()
            }
            PlayerState::Flying => false,
        }
    }

    /// Back to the centre, facing up, loaded and flying. Hyperjump and
    /// reverse cooldowns carry over.
    pub fn reset(&mut self) {
        self.position = screen_center();
        self.angle = 0.0;
        self.thrust = 0.0;
        self.loaded = true;
        self.state = PlayerState::Flying;
    }
}

impl Collider for Player {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size.width as f64, self.size.height as f64)
    }
}

fn screen_center() -> Vector2 {
    Vector2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// Toroidal wrap: leaving one edge re-enters at the opposite one.
fn wrap(mut p: Vector2) -> Vector2 {
    if p.x > SCREEN_WIDTH {
        p.x = 0.0;
    } else if p.x < 0.0 {
        p.x = SCREEN_WIDTH;
    }
    if p.y > SCREEN_HEIGHT {
        p.y = 0.0;
    } else if p.y < 0.0 {
        p.y = SCREEN_HEIGHT;
    }
    p
}

fn random_jump_point(rng: &mut impl Rng) -> Vector2 {
    let inset = HYPERJUMP_INSET as u32;
    Vector2::new(
        (rng.gen_range(0..SCREEN_WIDTH as u32 - 2 * inset) + inset) as f64,
        (rng.gen_range(0..SCREEN_HEIGHT as u32 - 2 * inset) + inset) as f64,
    )
}
