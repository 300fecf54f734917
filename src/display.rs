/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game.  No game logic is performed; this module only translates the
/// 1000×800 world into terminal cells.

use std::f64::consts::FRAC_PI_4;
use std::io::Write;

use asteroids::compute::Game;
use asteroids::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use asteroids::entities::{GameMode, Tint, STAR_TINT};
use asteroids::meteor::Meteor;
use asteroids::missile::Missile;
use asteroids::population::live_count;
use asteroids::vector::Vector2;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HIGH: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_THRUST: Color = Color::DarkYellow;
const C_METEOR: Color = Color::Grey;
const C_MISSILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::Yellow;

const HINT: &str = "← → Rotate  ↑ Thrust  ↓ Reverse  SPACE Fire  H Jump  Mouse: L fire R thrust M jump  Q Quit";

/// Ship glyph per 45° heading sector, clockwise from "up".
const SHIP_GLYPHS: [&str; 8] = ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];
/// Asteroid glyph per tier.
const METEOR_GLYPHS: [&str; 4] = ["∘", "o", "O", "@"];

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world pixels onto the play area inside the border
/// (columns 1..width-1, rows 2..height-2).
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn current() -> std::io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self { width, height })
    }

    fn cols(&self) -> f64 {
        f64::from(self.width.saturating_sub(2).max(1))
    }

    fn rows(&self) -> f64 {
        f64::from(self.height.saturating_sub(4).max(1))
    }

    /// Terminal cell for a world point, or `None` if it is off screen.
    /// Both edges are on screen: a wrapped ship can sit exactly on the
    /// right or bottom one.
    pub fn to_cell(&self, p: Vector2) -> Option<(u16, u16)> {
        if p.x < 0.0 || p.y < 0.0 || p.x > SCREEN_WIDTH || p.y > SCREEN_HEIGHT {
            return None;
        }
        let col = (p.x / SCREEN_WIDTH * self.cols()).floor().min(self.cols() - 1.0);
        let row = (p.y / SCREEN_HEIGHT * self.rows()).floor().min(self.rows() - 1.0);
        Some((1 + col as u16, 2 + row as u16))
    }

    /// World point at the centre of a terminal cell (used for the mouse).
    pub fn to_world(&self, col: u16, row: u16) -> Vector2 {
        let cx = (f64::from(col) - 1.0 + 0.5).max(0.0);
        let cy = (f64::from(row) - 2.0 + 0.5).max(0.0);
        Vector2::new(
            (cx / self.cols() * SCREEN_WIDTH).min(SCREEN_WIDTH),
            (cy / self.rows() * SCREEN_HEIGHT).min(SCREEN_HEIGHT),
        )
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_stars(out, game, view)?;

    match game.mode {
        GameMode::Instructions => draw_instructions(out, game, view)?,
        GameMode::InPlay => {
            draw_border(out, view)?;
            for meteor in game.meteors.iter().filter(|m| !m.done) {
                draw_meteor(out, meteor, view)?;
            }
            for missile in game.missiles.iter().filter(|m| !m.done) {
                draw_missile(out, missile, view)?;
            }
            draw_explosions(out, game, view)?;
            draw_player(out, game, view)?;
            draw_hud(out, game, view)?;
            draw_controls_hint(out, view)?;
        }
        GameMode::GameOver => draw_game_over(out, game, view)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn put<W: Write>(out: &mut W, cell: (u16, u16), color: Color, glyph: &str) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(cell.0, cell.1))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn tint_color(tint: Tint) -> Color {
    Color::Rgb {
        r: tint.r,
        g: tint.g,
        b: tint.b,
    }
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    let board = &game.scoreboard;

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:06}", board.score)))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    out.queue(Print(format!("   High Score: {:06}", board.high_score)))?;
    out.queue(style::SetForegroundColor(C_METEOR))?;
    out.queue(Print(format!("   Asteroids: {}", live_count(&game.meteors))))?;

    let hearts = "♥".repeat(board.lives.max(0) as usize);
    let lives_text = format!("Lives: {}", hearts);
    let rx = view
        .width
        .saturating_sub(lives_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_text))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_stars<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    for star in &game.stars.stars {
        if let Some(cell) = view.to_cell(star.position) {
            let glyph = match star.radius {
                1 => ".",
                2 => "+",
                _ => "*",
            };
            put(out, cell, tint_color(STAR_TINT), glyph)?;
        }
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    let p = &game.player;
    if !p.is_alive() {
        return Ok(());
    }
    if p.is_thrusting() {
        // Exhaust one step behind the ship.
        let behind = p.position + Vector2::from_heading(p.angle) * -(SCREEN_WIDTH / view.cols());
        if let Some(cell) = view.to_cell(behind) {
            put(out, cell, C_THRUST, "*")?;
        }
    }
    if let Some(cell) = view.to_cell(p.position) {
        let sector = (p.angle / FRAC_PI_4).round().rem_euclid(8.0) as usize;
        put(out, cell, C_PLAYER, SHIP_GLYPHS[sector])?;
    }
    Ok(())
}

fn draw_meteor<W: Write>(out: &mut W, meteor: &Meteor, view: Viewport) -> std::io::Result<()> {
    if let Some(cell) = view.to_cell(meteor.position) {
        put(out, cell, C_METEOR, METEOR_GLYPHS[usize::from(meteor.tier.min(3))])?;
    }
    Ok(())
}

fn draw_missile<W: Write>(out: &mut W, missile: &Missile, view: Viewport) -> std::io::Result<()> {
    if let Some(cell) = view.to_cell(missile.position) {
        put(out, cell, C_MISSILE, "•")?;
    }
    Ok(())
}

fn draw_explosions<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    let particles = game
        .explosions
        .iter()
        .flat_map(|e| e.particles.iter())
        .filter(|p| !p.done);
    for particle in particles {
        if let Some(cell) = view.to_cell(particle.position) {
            let glyph = if particle.radius >= 2.0 { "*" } else { "·" };
            put(out, cell, tint_color(particle.tint), glyph)?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}

// ── Title & game-over screens ─────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: Viewport,
    row: u16,
    color: Color,
    text: &str,
) -> std::io::Result<()> {
    let col = (view.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_instructions<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    let lines: &[&str] = &[
        "Destroy the asteroids before they hit you.",
        "A new asteroid appears every 3 seconds, more often as the game goes on.",
        "You have 3 lives.",
        "",
        "Mouse: left button fires at the pointer, right moves, middle hyperjumps.",
        "Keys:  ← → rotate   ↓ reverse   ↑ move   H hyperjump   SPACE fire",
        "",
        "Score per asteroid:  Large 25   Medium 50   Small 75   Tiny 100",
    ];

    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2 + 3);
    draw_centered(out, view, start_row, C_TITLE, "★  ASTEROIDS  ★")?;
    if game.scoreboard.high_score > 0 {
        let best = format!("High Score: {:06}", game.scoreboard.high_score);
        draw_centered(out, view, start_row + 1, C_HUD_HIGH, &best)?;
    }
    for (i, line) in lines.iter().enumerate() {
        draw_centered(out, view, start_row + 3 + i as u16, Color::White, line)?;
    }
    let prompt_row = start_row + 4 + lines.len() as u16;
    draw_centered(out, view, prompt_row, Color::Cyan, "Press SPACE to play   Q to quit")?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    let board = &game.scoreboard;
    let score_line = format!("Your Score: {:06}", board.score);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];

    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2 + 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        draw_centered(out, view, start_row + i as u16, *color, msg)?;
    }

    let score_row = start_row + lines.len() as u16;
    draw_centered(out, view, score_row, Color::Yellow, &score_line)?;

    if board.is_new_high_score() {
        let banner = "★ Congratulations, a new high score ★";
        draw_centered(out, view, score_row + 1, Color::Green, banner)?;
    } else {
        let best = format!("High Score: {:06}", board.high_score);
        draw_centered(out, view, score_row + 1, Color::DarkGrey, &best)?;
    }

    draw_centered(out, view, score_row + 3, Color::White, "SPACE - Play Again  Q - Quit")?;
    Ok(())
}
