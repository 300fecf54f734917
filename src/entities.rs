/// Shared game data types: plain values, no behaviour beyond lookups.

// ── Modes ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen shown at launch; waits for the start action.
    #[default]
    Instructions,
    InPlay,
    /// Final score screen; the start action begins a fresh game.
    GameOver,
}

// ── Asset bounds ──────────────────────────────────────────────────────────────

/// Pixel dimensions of one visual asset. Only used for collision radii.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Largest asteroid tier; tiers run 0 (tiny) ..= 3 (large).
pub const MAX_TIER: u8 = 3;

/// Bounding dimensions for every sprite the simulation cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteSizes {
    pub player: Size,
    pub missile: Size,
    /// Indexed by tier.
    pub meteors: [Size; 4],
}

impl SpriteSizes {
    pub fn meteor(&self, tier: u8) -> Size {
        self.meteors[usize::from(tier.min(MAX_TIER))]
    }
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            player: Size::new(56, 42),
            missile: Size::new(10, 10),
            meteors: [
                Size::new(18, 18),
                Size::new(28, 28),
                Size::new(43, 43),
                Size::new(101, 84),
            ],
        }
    }
}

// ── Colours ───────────────────────────────────────────────────────────────────

/// RGBA tint for particles and stars; the renderer maps it to its palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

pub const METEOR_EXPLOSION_TINT: Tint = Tint::rgba(255, 125, 125, 100);
pub const PLAYER_EXPLOSION_TINT: Tint = Tint::rgba(255, 0, 0, 100);
pub const STAR_TINT: Tint = Tint::rgba(125, 125, 125, 75);
