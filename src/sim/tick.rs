//! Fixed step simulation
//!
//! One call to [`tick`] moves the target by exactly one velocity step. There is
//! no delta-time: the render loop runs at a fixed cadence and the speed is
//! expressed in units per tick.

use glam::Vec2;
use rand::Rng;

use super::state::{EnginePhase, SimulationState};
use super::vector::Vector2D;

/// One-time setup once the container size is known.
///
/// Centres the target and picks a launch direction from two independent
/// uniform samples in `[0, 1)`. That keeps the classic feel of the game but
/// is not uniform on the circle: the target always starts moving down and to
/// the right, and diagonals are more likely than the axes.
///
/// Returns `false` (and changes nothing) when already initialized or when
/// either dimension is zero.
pub fn launch(
    state: &mut SimulationState,
    width: u32,
    height: u32,
    speed: f32,
    epsilon: f32,
    rng: &mut impl Rng,
) -> bool {
    if state.initialized || width == 0 || height == 0 {
        return false;
    }

    state.pos = Vec2::new((width / 2) as f32, (height / 2) as f32);
    state.bounds = Vec2::new(width as f32, height as f32);

    let mut velocity = Vector2D::new(rng.random::<f32>(), rng.random::<f32>());
    velocity.normalize();
    velocity.scale(speed);
    state.velocity = velocity;
    state.initialized = true;

    // Hitbox must be valid before the first frame is drawn
    tick(state, epsilon);
    true
}

/// Advance one step, reflecting off the container edges
pub fn tick(state: &mut SimulationState, epsilon: f32) {
    if !state.initialized {
        return;
    }

    let max = state.travel_max(epsilon);

    let (x, vx) = advance_axis(state.pos.x, state.velocity.x(), max.x, epsilon);
    let (y, vy) = advance_axis(state.pos.y, state.velocity.y(), max.y, epsilon);

    state.pos = Vec2::new(x, y);
    state.velocity.set_x(vx);
    state.velocity.set_y(vy);
    state.hitbox.offset_to(state.pos);
}

/// Move along one axis. Leaving `[epsilon, max]` flips the velocity component
/// and pins the position to the edge it would have crossed (no energy loss).
#[inline]
fn advance_axis(pos: f32, vel: f32, max: f32, epsilon: f32) -> (f32, f32) {
    let next = pos + vel;
    if next < epsilon {
        (epsilon, -vel)
    } else if next > max {
        (max, -vel)
    } else {
        (next, vel)
    }
}

/// Resolve a tap. A hit speeds the target up by `boost` and uses up one tap.
///
/// Returns the remaining tap count after this tap, hit or miss. Taps before
/// the first container size or after the last hit change nothing.
pub fn apply_tap(state: &mut SimulationState, point: Vec2, boost: f32) -> u32 {
    if state.phase() != EnginePhase::Running {
        return state.hits_remaining;
    }

    if state.hitbox.contains(point) {
        state.velocity.scale(boost);
        state.hits_remaining -= 1;
    }
    state.hits_remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::RngState;
    use proptest::prelude::*;

    fn running_state(bounds: Vec2, pos: Vec2, vel: Vec2) -> SimulationState {
        let mut state = SimulationState::new(Vec2::from_array(TARGET_SIZE), HITS_TO_WIN);
        state.initialized = true;
        state.bounds = bounds;
        state.pos = pos;
        state.velocity = vel.into();
        state.hitbox.offset_to(pos);
        state
    }

    #[test]
    fn test_launch_centres_and_sets_speed() {
        let mut state = SimulationState::new(Vec2::new(96.0, 96.0), 3);
        let mut rng = RngState::new(12345).to_rng();
        assert!(launch(&mut state, 300, 500, 10.0, EDGE_EPSILON, &mut rng));

        assert_eq!(state.bounds, Vec2::new(300.0, 500.0));
        assert!((state.velocity.length() - 10.0).abs() < 1e-4);
        // One step away from the centre, hitbox follows
        let moved = state.pos - Vec2::new(150.0, 250.0);
        assert!((moved.length() - 10.0).abs() < 1e-3);
        assert_eq!(state.hitbox.min, state.pos);
    }

    #[test]
    fn test_launch_direction_is_first_quadrant() {
        for seed in 0..64 {
            let mut state = SimulationState::new(Vec2::new(96.0, 96.0), 3);
            let mut rng = RngState::new(seed).to_rng();
            launch(&mut state, 1000, 1000, 10.0, EDGE_EPSILON, &mut rng);
            assert!(state.velocity.x() >= 0.0 && state.velocity.y() >= 0.0);
        }
    }

    #[test]
    fn test_launch_is_one_shot() {
        let mut state = SimulationState::new(Vec2::new(96.0, 96.0), 3);
        let mut rng = RngState::new(1).to_rng();
        assert!(launch(&mut state, 300, 500, 10.0, EDGE_EPSILON, &mut rng));
        assert!(!launch(&mut state, 800, 900, 10.0, EDGE_EPSILON, &mut rng));
        assert_eq!(state.bounds, Vec2::new(300.0, 500.0));
    }

    #[test]
    fn test_launch_ignores_degenerate_size() {
        let mut state = SimulationState::new(Vec2::new(96.0, 96.0), 3);
        let mut rng = RngState::new(1).to_rng();
        assert!(!launch(&mut state, 0, 500, 10.0, EDGE_EPSILON, &mut rng));
        assert!(!state.initialized);
        assert!(launch(&mut state, 300, 500, 10.0, EDGE_EPSILON, &mut rng));
    }

    #[test]
    fn test_tick_before_launch_is_noop() {
        let mut state = SimulationState::new(Vec2::new(96.0, 96.0), 3);
        state.velocity = Vector2D::new(5.0, 5.0);
        tick(&mut state, EDGE_EPSILON);
        assert_eq!(state.pos, Vec2::ZERO);
    }

    #[test]
    fn test_reflect_off_left_wall() {
        let mut state = running_state(
            Vec2::new(300.0, 500.0),
            Vec2::new(3.0, 100.0),
            Vec2::new(-10.0, 0.0),
        );
        tick(&mut state, EDGE_EPSILON);
        assert_eq!(state.pos.x, EDGE_EPSILON);
        assert_eq!(state.velocity.x(), 10.0);
        assert_eq!(state.pos.y, 100.0);
    }

    #[test]
    fn test_reflect_off_bottom_wall() {
        let max_y = 500.0 - TARGET_SIZE[1] - EDGE_EPSILON;
        let mut state = running_state(
            Vec2::new(300.0, 500.0),
            Vec2::new(100.0, max_y - 2.0),
            Vec2::new(4.0, 10.0),
        );
        tick(&mut state, EDGE_EPSILON);
        assert_eq!(state.pos.y, max_y);
        assert_eq!(state.velocity.y(), -10.0);
        assert_eq!(state.pos.x, 104.0);
        assert_eq!(state.hitbox.min, state.pos);
    }

    #[test]
    fn test_tap_hit_and_miss() {
        let mut state = running_state(
            Vec2::new(300.0, 500.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(6.0, 8.0),
        );

        assert_eq!(apply_tap(&mut state, Vec2::new(10.0, 10.0), TAP_BOOST), 3);
        assert_eq!(state.velocity.length(), 10.0);

        assert_eq!(apply_tap(&mut state, Vec2::new(60.0, 60.0), TAP_BOOST), 2);
        assert!((state.velocity.length() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_tap_after_clear_is_ignored() {
        let mut state = running_state(
            Vec2::new(300.0, 500.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(6.0, 8.0),
        );
        let inside = state.hitbox.center();
        for expected in [2, 1, 0, 0, 0] {
            assert_eq!(apply_tap(&mut state, inside, TAP_BOOST), expected);
        }
        assert_eq!(state.phase(), EnginePhase::Cleared);
    }

    #[test]
    fn test_speed_growth_is_unbounded_and_stable() {
        let mut state = running_state(
            Vec2::new(300.0, 500.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(6.0, 8.0),
        );
        state.hits_remaining = 90;
        let inside = state.hitbox.center();
        for n in 1..=90u32 {
            apply_tap(&mut state, inside, TAP_BOOST);
            let expected = 10.0_f64 * 1.5_f64.powi(n as i32);
            let got = state.velocity.length() as f64;
            assert!(
                ((got - expected) / expected).abs() < 1e-4,
                "n={n}: got {got}, expected {expected}"
            );
        }
        assert!(state.velocity.length().is_finite());
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_travel_range(
            w in 120u32..2000,
            h in 120u32..2000,
            fx in 0.0f32..=1.0,
            fy in 0.0f32..=1.0,
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            steps in 1usize..400,
        ) {
            prop_assume!(vx != 0.0 || vy != 0.0);
            let bounds = Vec2::new(w as f32, h as f32);
            let max = bounds - Vec2::from_array(TARGET_SIZE) - Vec2::splat(EDGE_EPSILON);
            let lo = Vec2::splat(EDGE_EPSILON);
            let start = lo + (max - lo) * Vec2::new(fx, fy);
            let mut state = running_state(bounds, start, Vec2::new(vx, vy));

            for _ in 0..steps {
                tick(&mut state, EDGE_EPSILON);
                prop_assert!(state.pos.x >= EDGE_EPSILON && state.pos.x <= max.x);
                prop_assert!(state.pos.y >= EDGE_EPSILON && state.pos.y <= max.y);
                prop_assert_eq!(state.hitbox.min, state.pos);
            }
        }

        #[test]
        fn prop_reflection_preserves_speed(
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
            steps in 1usize..200,
        ) {
            let mut state = running_state(
                Vec2::new(400.0, 600.0),
                Vec2::new(150.0, 250.0),
                Vec2::new(vx, vy),
            );
            let speed = state.velocity.length();
            for _ in 0..steps {
                tick(&mut state, EDGE_EPSILON);
            }
            prop_assert_eq!(state.velocity.length(), speed);
        }

        #[test]
        fn prop_miss_changes_nothing(px in -100.0f32..500.0, py in -100.0f32..700.0) {
            let mut state = running_state(
                Vec2::new(300.0, 500.0),
                Vec2::new(100.0, 200.0),
                Vec2::new(6.0, 8.0),
            );
            prop_assume!(!state.hitbox.contains(Vec2::new(px, py)));
            let before = state.clone();
            let remaining = apply_tap(&mut state, Vec2::new(px, py), TAP_BOOST);
            prop_assert_eq!(remaining, before.hits_remaining);
            prop_assert_eq!(state.velocity, before.velocity);
        }

        #[test]
        fn prop_hits_count_down_to_zero(extra in 0usize..10) {
            let mut state = running_state(
                Vec2::new(300.0, 500.0),
                Vec2::new(100.0, 200.0),
                Vec2::new(6.0, 8.0),
            );
            let inside = state.hitbox.center();
            let mut previous = state.hits_remaining;
            let mut zero_seen = 0;
            for _ in 0..(HITS_TO_WIN as usize + extra) {
                let remaining = apply_tap(&mut state, inside, TAP_BOOST);
                if previous > 0 {
                    prop_assert_eq!(remaining, previous - 1);
                    if remaining == 0 {
                        zero_seen += 1;
                    }
                } else {
                    prop_assert_eq!(remaining, 0);
                }
                previous = remaining;
            }
            prop_assert_eq!(zero_seen, 1);
        }
    }
}
