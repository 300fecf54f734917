use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use asteroids::config::{EDGE_OFFSET, SCREEN_HEIGHT, SCREEN_WIDTH};
use asteroids::entities::SpriteSizes;
use asteroids::meteor::Meteor;
use asteroids::vector::Vector2;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn parked_meteor(tier: u8, sizes: &SpriteSizes) -> Meteor {
    Meteor {
        position: Vector2::new(300.0, 300.0),
        movement: Vector2::ZERO,
        rotation_speed: 0.0,
        angle: 0.0,
        tier,
        size: sizes.meteor(tier),
        done: false,
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[test]
fn spawn_enters_from_an_edge_aimed_at_target() {
    let sizes = SpriteSizes::default();
    let mut rng = seeded_rng();
    let target = Vector2::new(500.0, 400.0);
    let mut tiers_seen = [false; 4];

    for _ in 0..500 {
        let m = Meteor::spawn(target, &sizes, &mut rng);
        let p = m.position;
        let on_edge = p.x == -EDGE_OFFSET
            || p.x == SCREEN_WIDTH + EDGE_OFFSET
            || p.y == -EDGE_OFFSET
            || p.y == SCREEN_HEIGHT + EDGE_OFFSET;
        assert!(on_edge, "spawned inside the screen at {:?}", p);

        let speed = m.movement.length();
        assert!((0.25..=1.75).contains(&speed), "speed {}", speed);
        assert!(m.rotation_speed.abs() <= 0.02);

        let aim = (target - p).normalize();
        let dir = m.movement.normalize();
        assert_abs_diff_eq!(aim.x, dir.x, epsilon = 1e-9);
        assert_abs_diff_eq!(aim.y, dir.y, epsilon = 1e-9);

        assert!(m.tier <= 3);
        assert_eq!(m.size, sizes.meteor(m.tier));
        tiers_seen[usize::from(m.tier)] = true;
    }
    assert!(tiers_seen.iter().all(|&seen| seen));
}

#[test]
fn fragment_starts_at_given_position_and_caps_tier() {
    let sizes = SpriteSizes::default();
    let mut rng = seeded_rng();
    let at = Vector2::new(123.0, 456.0);
    let m = Meteor::fragment(9, at, &sizes, &mut rng);
    assert_eq!(m.position, at);
    assert_eq!(m.tier, 3);
    assert_eq!(m.size, sizes.meteor(3));
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn update_moves_and_spins() {
    let sizes = SpriteSizes::default();
    let mut m = parked_meteor(2, &sizes);
    m.movement = Vector2::new(1.0, -0.5);
    m.rotation_speed = 0.01;
    m.update();
    m.update();
    assert_eq!(m.position, Vector2::new(302.0, 299.0));
    assert_abs_diff_eq!(m.angle, 0.02, epsilon = 1e-12);
}

#[test]
fn update_culls_outside_margin() {
    let sizes = SpriteSizes::default();
    let mut m = parked_meteor(1, &sizes);
    m.position = Vector2::new(400.0, -49.0);
    m.movement = Vector2::new(0.0, -1.5);
    m.update();
    assert!(m.done);
}

// ── Hits ──────────────────────────────────────────────────────────────────────

#[test]
fn large_hit_scores_25_and_splits() {
    let sizes = SpriteSizes::default();
    let mut rng = seeded_rng();
    let mut m = parked_meteor(3, &sizes);

    let outcome = m.hit(true, &sizes, &mut rng);

    assert_eq!(outcome.score, 25);
    assert!(!m.done);
    assert_eq!(m.tier, 2);
    assert_eq!(m.size, sizes.meteor(2));

    let fragment = outcome.fragment.expect("tier 3 should split");
    assert_eq!(fragment.tier, 2);
    assert_eq!(fragment.position, m.position);

    let explosion = outcome.explosion.expect("missile hits explode");
    assert_eq!(explosion.particles.len(), 2 * 20 * 3);
    assert_abs_diff_eq!(explosion.particles[0].fade, 0.02, epsilon = 1e-12);
}

#[test]
fn smaller_tiers_are_worth_more() {
    let sizes = SpriteSizes::default();
    let mut rng = seeded_rng();
    let scores: Vec<u32> = (0..=3u8)
        .map(|tier| parked_meteor(tier, &sizes).hit(false, &sizes, &mut rng).score)
        .collect();
    assert_eq!(scores, vec![100, 75, 50, 25]);
}

#[test]
fn lineage_is_exhausted_after_four_hits() {
    let sizes = SpriteSizes::default();
    let mut rng = seeded_rng();
    let mut m = parked_meteor(3, &sizes);
    let mut total = 0;
    let mut fragment_tiers = Vec::new();

    for _ in 0..4 {
        let outcome = m.hit(true, &sizes, &mut rng);
        total += outcome.score;
        if let Some(f) = outcome.fragment {
            fragment_tiers.push(f.tier);
        }
    }

    assert_eq!(total, 25 + 50 + 75 + 100);
    assert_eq!(fragment_tiers, vec![2, 1, 0]);
    assert!(m.done);
}

#[test]
fn tiny_hit_destroys_without_fragment() {
    let sizes = SpriteSizes::default();
    let mut rng = seeded_rng();
    let mut m = parked_meteor(0, &sizes);

    let outcome = m.hit(true, &sizes, &mut rng);

    assert_eq!(outcome.score, 100);
    assert!(m.done);
    assert!(outcome.fragment.is_none());
    let explosion = outcome.explosion.expect("tiny asteroids still burst");
    assert_eq!(explosion.particles.len(), 40);
    assert_abs_diff_eq!(explosion.particles[0].fade, 0.075, epsilon = 1e-12);
}

#[test]
fn player_collision_splits_without_debris() {
    let sizes = SpriteSizes::default();
    let mut rng = seeded_rng();
    let mut m = parked_meteor(2, &sizes);

    let outcome = m.hit(false, &sizes, &mut rng);

    assert_eq!(m.tier, 1);
    assert!(outcome.fragment.is_some());
    assert!(outcome.explosion.is_none());
}

#[test]
fn hitting_a_done_meteor_does_nothing() {
    let sizes = SpriteSizes::default();
    let mut rng = seeded_rng();
    let mut m = parked_meteor(0, &sizes);
    m.hit(true, &sizes, &mut rng);

    let again = m.hit(true, &sizes, &mut rng);
    assert_eq!(again.score, 0);
    assert!(again.fragment.is_none());
    assert!(again.explosion.is_none());
}
