/// Per-frame game logic.
///
/// `Game` owns every entity population and the scoreboard. The binary calls
/// [`Game::step`] once per tick with that frame's input; all randomness
/// comes through the injected RNG so tests can seed it.

use rand::Rng;

use crate::collision::collides;
use crate::config::{
    MIN_SPAWN_TENTHS, SPAWN_RAMP_SECONDS, SPAWN_STEP_TENTHS, START_SPAWN_TENTHS,
};
use crate::entities::{GameMode, SpriteSizes};
use crate::input::InputActions;
use crate::meteor::{HitOutcome, Meteor};
use crate::missile::Missile;
use crate::particles::Explosion;
use crate::player::Player;
use crate::population::reap_one;
use crate::score::{HighScoreStore, ScoreBoard};
use crate::starfield::StarField;
use crate::timer::Timer;

fn tenths_to_seconds(tenths: u32) -> f64 {
    f64::from(tenths) / 10.0
}

#[derive(Clone, Debug)]
pub struct Game {
    pub mode: GameMode,
    pub player: Player,
    pub meteors: Vec<Meteor>,
    pub missiles: Vec<Missile>,
    pub explosions: Vec<Explosion>,
    pub stars: StarField,
    pub scoreboard: ScoreBoard,
    pub sizes: SpriteSizes,
    spawn_tenths: u32,
    spawn_timer: Timer,
    ramp_timer: Timer,
}

impl Game {
    /// Title-screen state with the stored high score loaded.
    pub fn new(sizes: SpriteSizes, store: &impl HighScoreStore, rng: &mut impl Rng) -> Self {
        Self {
            mode: GameMode::Instructions,
            player: Player::new(sizes.player),
            meteors: Vec::new(),
            missiles: Vec::new(),
            explosions: Vec::new(),
            stars: StarField::new(rng),
            scoreboard: ScoreBoard::new(store),
            sizes,
            spawn_tenths: START_SPAWN_TENTHS,
            spawn_timer: Timer::new(tenths_to_seconds(START_SPAWN_TENTHS), true),
            ramp_timer: Timer::new(SPAWN_RAMP_SECONDS, true),
        }
    }

    /// Current gap between asteroid spawns, in seconds.
    pub fn spawn_interval(&self) -> f64 {
        tenths_to_seconds(self.spawn_tenths)
    }

    pub fn spawn_timer(&self) -> &Timer {
        &self.spawn_timer
    }

    pub fn ramp_timer(&self) -> &Timer {
        &self.ramp_timer
    }

    /// Advance the whole game by one frame.
    pub fn step(
        &mut self,
        input: &InputActions,
        rng: &mut impl Rng,
        store: &mut impl HighScoreStore,
    ) {
        self.stars.update(rng);
        match self.mode {
            GameMode::InPlay => self.play_frame(input, rng, store),
            GameMode::Instructions | GameMode::GameOver => {
                if input.start {
                    self.start(rng, store);
                }
            }
        }
    }

    // ── Mode transitions ──────────────────────────────────────────────────────

    /// Fresh game: clears the field, restores lives and the spawn rate.
    pub fn start(&mut self, rng: &mut impl Rng, store: &impl HighScoreStore) {
        self.player.reset();
        self.player.unload();
        self.clear_populations();
        self.scoreboard.reset();
        self.scoreboard.load_high_score(store);
        self.spawn_tenths = START_SPAWN_TENTHS;
        self.spawn_timer
            .retarget(tenths_to_seconds(START_SPAWN_TENTHS), true);
        self.ramp_timer.reset();
        self.spawn_meteor(rng);
        self.mode = GameMode::InPlay;
        tracing::info!(
            score = self.scoreboard.score,
            lives = self.scoreboard.lives,
            high_score = self.scoreboard.high_score,
            "game started"
        );
    }

    fn game_over(&mut self, store: &mut impl HighScoreStore) {
        self.mode = GameMode::GameOver;
        self.spawn_timer.stop();
        self.ramp_timer.stop();
        self.scoreboard.save_high_score(store);
        tracing::info!(
            score = self.scoreboard.score,
            lives = self.scoreboard.lives,
            "game over"
        );
    }

    fn respawn(&mut self, rng: &mut impl Rng) {
        self.player.reset();
        self.clear_populations();
        self.spawn_timer.reset();
        self.spawn_meteor(rng);
        tracing::debug!(lives = self.scoreboard.lives, "player respawned");
    }

    fn clear_populations(&mut self) {
        self.meteors.clear();
        self.missiles.clear();
        self.explosions.clear();
    }

    // ── In play ───────────────────────────────────────────────────────────────

    fn play_frame(
        &mut self,
        input: &InputActions,
        rng: &mut impl Rng,
        store: &mut impl HighScoreStore,
    ) {
        self.spawn_timer.tick();
        self.ramp_timer.tick();

        reap_one(&mut self.explosions);
        reap_one(&mut self.meteors);
        reap_one(&mut self.missiles);

        if self.spawn_timer.is_ready() {
            self.spawn_meteor(rng);
        }
        if self.ramp_timer.is_ready() {
            self.ramp_spawn_rate();
        }

        if let Some(missile) = self.player.update(input, &self.sizes, rng) {
            self.missiles.push(missile);
        }
        for meteor in &mut self.meteors {
            meteor.update();
        }
        for missile in &mut self.missiles {
            missile.update();
        }

        self.resolve_missile_hits(rng);
        if self.player.is_alive() {
            self.resolve_player_hit(rng);
        } else if self.player.respawn_ready() {
            if self.scoreboard.lives == 0 {
                self.game_over(store);
            } else {
                self.respawn(rng);
            }
        }

        for explosion in &mut self.explosions {
            explosion.update();
        }
    }

    fn spawn_meteor(&mut self, rng: &mut impl Rng) {
        let meteor = Meteor::spawn(self.player.position, &self.sizes, rng);
        tracing::debug!(
            tier = meteor.tier,
            x = meteor.position.x,
            y = meteor.position.y,
            "asteroid spawned"
        );
        self.meteors.push(meteor);
    }

    /// Shorten the spawn gap by one step, never below the floor.
    fn ramp_spawn_rate(&mut self) {
        if self.spawn_tenths > MIN_SPAWN_TENTHS {
            self.spawn_tenths = self
                .spawn_tenths
                .saturating_sub(SPAWN_STEP_TENTHS)
                .max(MIN_SPAWN_TENTHS);
            self.spawn_timer.retarget(self.spawn_interval(), true);
            tracing::debug!(interval = self.spawn_interval(), "spawn rate increased");
        }
    }

    /// Each live missile hits at most one asteroid per frame.
    fn resolve_missile_hits(&mut self, rng: &mut impl Rng) {
        let mut outcomes = Vec::new();
        for missile in self.missiles.iter_mut().filter(|m| !m.done) {
            let target = self
                .meteors
                .iter_mut()
                .find(|meteor| !meteor.done && collides(&*missile, &**meteor));
            if let Some(meteor) = target {
                missile.done = true;
                outcomes.push(meteor.hit(true, &self.sizes, rng));
            }
        }
        for outcome in outcomes {
            self.scoreboard.score += outcome.score;
            self.apply_hit(outcome);
        }
    }

    /// First asteroid touching the ship destroys it and costs a life.
    fn resolve_player_hit(&mut self, rng: &mut impl Rng) {
        let player = &self.player;
        let Some(meteor) = self
            .meteors
            .iter_mut()
            .find(|meteor| !meteor.done && collides(player, &**meteor))
        else {
            return;
        };
        // No score and no asteroid debris when it is the ship that hit.
        let outcome = meteor.hit(false, &self.sizes, rng);
        let explosion = self.player.hit(rng);
        self.explosions.push(explosion);
        self.scoreboard.lives -= 1;
        self.spawn_timer.stop();
        self.apply_hit(outcome);
        tracing::debug!(lives = self.scoreboard.lives, "player hit");
    }

    fn apply_hit(&mut self, outcome: HitOutcome) {
        self.meteors.extend(outcome.fragment);
        self.explosions.extend(outcome.explosion);
    }
}
