mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use asteroids::compute::Game;
use asteroids::config::{Settings, TICKS_PER_SECOND};
use asteroids::entities::SpriteSizes;
use asteroids::input::InputActions;
use asteroids::score::FileScoreStore;

use display::Viewport;

const FRAME: Duration = Duration::from_micros(1_000_000 / TICKS_PER_SECOND as u64);

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file; the terminal itself is busy drawing the game. If the file
/// cannot be created the game runs without logs.
fn init_logging(path: &Path) {
    let Ok(file) = File::create(path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Raw device state accumulated from terminal events.
#[derive(Default)]
struct InputState {
    /// Maps each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    /// Mouse buttons currently down and the cell they were last seen at.
    buttons: HashMap<MouseButton, (u16, u16)>,
}

impl InputState {
    fn held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| is_held(&self.key_frame, k, frame))
    }

    /// This frame's logical actions. Space both starts a game and fires.
    fn actions(&self, frame: u64, view: Viewport) -> InputActions {
        let space = self.held(&[KeyCode::Char(' ')], frame);
        InputActions {
            rotate_left: self.held(&[KeyCode::Left], frame),
            rotate_right: self.held(&[KeyCode::Right], frame),
            reverse: self.held(&[KeyCode::Down], frame),
            thrust: self.held(&[KeyCode::Up], frame)
                || self.buttons.contains_key(&MouseButton::Right),
            fire: space,
            fire_at: self
                .buttons
                .get(&MouseButton::Left)
                .map(|&(col, row)| view.to_world(col, row)),
            hyperjump: self.held(&[KeyCode::Char('h'), KeyCode::Char('H')], frame)
                || self.buttons.contains_key(&MouseButton::Middle),
            start: space,
        }
    }

    fn on_mouse(&mut self, ev: MouseEvent) {
        match ev.kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => {
                self.buttons.insert(button, (ev.column, ev.row));
            }
            MouseEventKind::Up(button) => {
                self.buttons.remove(&button);
            }
            _ => {}
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: instead of acting on each key event individually, we keep
/// the frame of the last press/repeat for every key and treat fresh keys as
/// held.  That lets Space + arrows work together, both on terminals that
/// report key releases and on those that only repeat presses.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
) -> std::io::Result<()> {
    let mut store = FileScoreStore::new(&settings.score_file);
    let mut rng = thread_rng();
    let mut game = Game::new(SpriteSizes::default(), &store, &mut rng);
    let mut input = InputState::default();
    let mut frame: u64 = 0;

    tracing::info!(score_file = %store.path().display(), "asteroids started");

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            _ => {}
                        }
                        input.key_frame.insert(code, frame);
                    }
                    KeyEventKind::Repeat => {
                        input.key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        input.key_frame.remove(&code);
                    }
                },
                Event::Mouse(mouse) => input.on_mouse(mouse),
                _ => {}
            }
        }

        let view = Viewport::current()?;
        game.step(&input.actions(frame, view), &mut rng, &mut store);
        display::render(out, &game, view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let settings = Settings::from_env();
    init_logging(&settings.log_file);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &settings);
    if let Err(err) = &result {
        tracing::error!(%err, "game loop failed");
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
