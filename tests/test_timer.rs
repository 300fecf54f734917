use asteroids::timer::{seconds_to_ticks, Timer};

// ── Conversion ────────────────────────────────────────────────────────────────

#[test]
fn seconds_round_to_ticks_at_sixty_hz() {
    assert_eq!(seconds_to_ticks(0.0), 0);
    assert_eq!(seconds_to_ticks(1.0), 60);
    assert_eq!(seconds_to_ticks(3.0), 180);
    assert_eq!(seconds_to_ticks(2.9), 174);
    assert_eq!(seconds_to_ticks(120.0), 7200);
}

// ── One-shot ──────────────────────────────────────────────────────────────────

#[test]
fn one_shot_fires_after_exact_tick_count() {
    let mut t = Timer::new(1.0, false);
    for _ in 0..59 {
        t.tick();
        assert!(!t.is_ready());
    }
    t.tick();
    assert!(t.is_ready());
}

#[test]
fn one_shot_never_fires_again() {
    let mut t = Timer::new(0.5, false);
    for _ in 0..30 {
        t.tick();
    }
    assert!(t.is_ready());
    assert!(!t.is_active());
    for _ in 0..500 {
        t.tick();
        assert!(!t.is_ready());
    }
}

#[test]
fn ready_check_consumes_expiry() {
    let mut t = Timer::new(0.5, true);
    for _ in 0..30 {
        t.tick();
    }
    assert!(t.is_ready());
    // The second query in the same frame sees a freshly reset timer
    assert!(!t.is_ready());
    assert_eq!(t.elapsed_ticks(), 0);
}

#[test]
fn tick_saturates_at_target() {
    let mut t = Timer::new(0.1, false); // 6 ticks
    for _ in 0..50 {
        t.tick();
    }
    assert_eq!(t.elapsed_ticks(), 6);
    assert!(t.is_ready());
}

#[test]
fn zero_duration_is_ready_after_one_tick() {
    let mut t = Timer::new(0.0, false);
    t.tick();
    assert!(t.is_ready());
    assert!(!t.is_ready());
}

// ── Repeating ─────────────────────────────────────────────────────────────────

#[test]
fn repeating_fires_every_period() {
    let mut t = Timer::new(0.5, true);
    let mut fired_at = Vec::new();
    for frame in 1..=150u32 {
        t.tick();
        if t.is_ready() {
            fired_at.push(frame);
        }
    }
    assert_eq!(fired_at, vec![30, 60, 90, 120, 150]);
}

// ── Retarget / stop ───────────────────────────────────────────────────────────

#[test]
fn retarget_restarts_from_zero_with_new_period() {
    let mut t = Timer::new(3.0, true);
    for _ in 0..100 {
        t.tick();
    }
    t.retarget(2.9, true);
    assert_eq!(t.elapsed_ticks(), 0);
    assert_eq!(t.target_ticks(), 174);
    for _ in 0..173 {
        t.tick();
        assert!(!t.is_ready());
    }
    t.tick();
    assert!(t.is_ready());
}

#[test]
fn retarget_reactivates_a_stopped_timer() {
    let mut t = Timer::new(1.0, true);
    t.stop();
    t.retarget(1.0, true);
    assert!(t.is_active());
}

#[test]
fn stopped_timer_neither_advances_nor_fires() {
    let mut t = Timer::new(0.5, true);
    for _ in 0..10 {
        t.tick();
    }
    t.stop();
    for _ in 0..100 {
        t.tick();
    }
    assert_eq!(t.elapsed_ticks(), 10);
    assert!(!t.is_ready());
}

#[test]
fn reset_resumes_repeating_but_not_one_shot() {
    let mut repeating = Timer::new(1.0, true);
    repeating.stop();
    repeating.reset();
    assert!(repeating.is_active());

    let mut one_shot = Timer::new(1.0, false);
    one_shot.reset();
    assert!(!one_shot.is_active());
}
