use crate::config::TICKS_PER_SECOND;

/// Frame-tick countdown used for every cooldown and scheduler in the game.
///
/// The timer only advances when [`tick`](Timer::tick) is called, once per
/// frame. [`is_ready`](Timer::is_ready) both reports expiry and consumes
/// it, so a caller must not query it unless it is going to act on `true`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    elapsed: u32,
    target: u32,
    active: bool,
    repeating: bool,
}

/// Whole frames in `seconds`, rounded to the nearest tick.
pub fn seconds_to_ticks(seconds: f64) -> u32 {
    (seconds.max(0.0) * TICKS_PER_SECOND as f64).round() as u32
}

impl Timer {
    /// New timer, active immediately.
    pub fn new(seconds: f64, repeating: bool) -> Self {
        Self {
            elapsed: 0,
            target: seconds_to_ticks(seconds),
            active: true,
            repeating,
        }
    }

    /// Advance one frame. Saturates at the target.
    pub fn tick(&mut self) {
        if self.active && self.elapsed < self.target {
            self.elapsed += 1;
        }
    }

    /// `true` once the target is reached; the expiry is consumed on read.
    pub fn is_ready(&mut self) -> bool {
        let expired = self.active && self.elapsed >= self.target;
        if expired {
            self.reset();
        }
        expired
    }

    /// Back to zero; a one-shot timer also goes inactive.
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.active = self.repeating;
    }

    /// Change the duration. Restarts from zero and re-activates.
    pub fn retarget(&mut self, seconds: f64, repeating: bool) {
        self.elapsed = 0;
        self.target = seconds_to_ticks(seconds);
        self.active = true;
        self.repeating = repeating;
    }

    /// Freeze without losing the target; `reset` or `retarget` resumes it.
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed
    }

    pub fn target_ticks(&self) -> u32 {
        self.target
    }
}
