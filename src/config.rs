/// Gameplay constants and runtime settings.
///
/// The constants are fixed for the single built-in difficulty ramp.
/// `Settings` is only read by the binary; the simulation core never
/// touches the environment.

use std::f64::consts::PI;
use std::path::PathBuf;

// ── Screen & clock ────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f64 = 1000.0;
pub const SCREEN_HEIGHT: f64 = 800.0;

/// Logical update rate. All second-based durations convert through this.
pub const TICKS_PER_SECOND: u32 = 60;

// ── Spawn ramp ───────────────────────────────────────────────────────────────

/// Spawn intervals are tracked in tenths of a second so the floor is exact.
pub const START_SPAWN_TENTHS: u32 = 30;
pub const SPAWN_STEP_TENTHS: u32 = 1;
pub const MIN_SPAWN_TENTHS: u32 = 20;
/// Seconds of play between two spawn-interval reductions.
pub const SPAWN_RAMP_SECONDS: f64 = 120.0;

// ── Lives & pauses ───────────────────────────────────────────────────────────

pub const STARTING_LIVES: i32 = 3;
pub const PLAYER_HIT_PAUSE_SECONDS: f64 = 3.0;

// ── Player ───────────────────────────────────────────────────────────────────

pub const MAX_THRUST: f64 = 30.0;
/// Thrust is divided by this before scaling the movement vector.
pub const THRUST_DIVISOR: f64 = 5.0;
/// Cooldown (frames) for hyperjump and reverse.
pub const GAP_FRAMES: u32 = 30;
pub const RELOAD_FRAMES: u32 = 15;
pub const HYPERJUMP_INSET: f64 = 40.0;

/// Heading change per frame while a rotate action is held: half a turn per second.
pub const ROTATION_STEP: f64 = PI / TICKS_PER_SECOND as f64;

// ── Projectiles & asteroids ──────────────────────────────────────────────────

pub const MISSILE_SPEED: f64 = 5.0;
/// A fresh missile is pushed this many movement steps ahead of the ship.
pub const MISSILE_NOSE_STEPS: f64 = 4.0;

/// Entities are culled once they are this far outside any screen edge.
pub const OFFSCREEN_MARGIN: f64 = 50.0;
/// How far outside the screen a fresh asteroid appears.
pub const EDGE_OFFSET: f64 = 10.0;

pub const METEOR_MIN_SPEED: f64 = 0.25;
pub const METEOR_SPEED_RANGE: f64 = 1.5;
pub const METEOR_MAX_SPIN: f64 = 0.02;

/// Score per tier; smaller asteroids are worth more.
pub const TIER_SCORES: [u32; 4] = [100, 75, 50, 25];

// ── Decoration ───────────────────────────────────────────────────────────────

pub const NUM_STARS: usize = 50;
pub const STAR_SPEED: f64 = 0.25;
pub const FRICTION: f64 = 0.99;

/// Pixels of visual overlap tolerated before two entities collide.
pub const COLLISION_MARGIN: f64 = 2.0;

// ── Runtime settings ─────────────────────────────────────────────────────────

const SCORE_FILE_ENV: &str = "ASTEROIDS_SCORE_FILE";
const LOG_FILE_ENV: &str = "ASTEROIDS_LOG_FILE";

#[derive(Clone, Debug)]
pub struct Settings {
    pub score_file: PathBuf,
    pub log_file: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            score_file: read_env_path(SCORE_FILE_ENV).unwrap_or_else(default_score_file),
            log_file: read_env_path(LOG_FILE_ENV)
                .unwrap_or_else(|| std::env::temp_dir().join("asteroids.log")),
        }
    }
}

fn read_env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn default_score_file() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".asteroids_score")
}
