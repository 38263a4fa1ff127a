//! Physics engine
//!
//! Owns the [`SimulationState`] of one session and exposes the four calls the
//! rest of the game needs: size the container, step, draw and tap.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::collision::Hitbox;
use super::state::{EnginePhase, RngState, SimulationState};
use super::tick::{apply_tap, launch, tick};
use super::vector::Vector2D;
use crate::renderer::{Canvas, IndicatorStyle, SpriteSet, draw_scene};
use crate::settings::Settings;

pub struct PhysicsEngine {
    state: SimulationState,
    sprites: SpriteSet,
    style: IndicatorStyle,
    rng_state: RngState,
    rng: Pcg32,
    speed: f32,
    boost: f32,
    epsilon: f32,
}

impl PhysicsEngine {
    pub fn new(settings: &Settings) -> Self {
        let rng_state = settings
            .seed
            .map(RngState::new)
            .unwrap_or_else(RngState::random);
        let sprites = SpriteSet::from_settings(settings);
        Self {
            state: SimulationState::new(sprites.target.size, settings.hits_to_win),
            sprites,
            style: IndicatorStyle::from_settings(settings),
            rng: rng_state.to_rng(),
            rng_state,
            speed: settings.initial_speed,
            boost: settings.tap_boost,
            epsilon: settings.edge_epsilon,
        }
    }

    /// Size the container. Only the first call with non-zero dimensions counts.
    ///
    /// Returns whether this call initialized the engine.
    pub fn set_dimensions(&mut self, width: u32, height: u32) -> bool {
        let launched = launch(
            &mut self.state,
            width,
            height,
            self.speed,
            self.epsilon,
            &mut self.rng,
        );
        if launched {
            log::debug!(
                "Engine initialized: bounds {}x{}, velocity ({:.3}, {:.3}), seed {}",
                width,
                height,
                self.state.velocity.x(),
                self.state.velocity.y(),
                self.rng_state.seed
            );
        }
        launched
    }

    /// Advance one tick
    pub fn update(&mut self) {
        tick(&mut self.state, self.epsilon);
    }

    /// Render the current state
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        draw_scene(&self.state, &self.sprites, &self.style, canvas);
    }

    /// Hit-test a tap and return how many taps are still needed
    pub fn touch(&mut self, point: Vec2) -> u32 {
        let before = self.state.hits_remaining;
        let remaining = apply_tap(&mut self.state, point, self.boost);
        if remaining < before {
            log::debug!(
                "Hit at ({:.1}, {:.1}), {} left, speed {:.2}",
                point.x,
                point.y,
                remaining,
                self.state.velocity.length()
            );
        }
        remaining
    }

    /// Put the target at `pos` without stepping (replays and tests)
    pub fn place_at(&mut self, pos: Vec2) {
        self.state.pos = pos;
        self.state.hitbox.offset_to(pos);
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> EnginePhase {
        self.state.phase()
    }

    pub fn hits_remaining(&self) -> u32 {
        self.state.hits_remaining
    }

    pub fn hitbox(&self) -> Hitbox {
        self.state.hitbox
    }

    pub fn velocity(&self) -> Vector2D {
        self.state.velocity
    }

    pub fn bounds(&self) -> Vec2 {
        self.state.bounds
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameBuffer;

    fn seeded() -> PhysicsEngine {
        PhysicsEngine::new(&Settings {
            seed: Some(2024),
            ..Default::default()
        })
    }

    #[test]
    fn test_set_dimensions_only_once() {
        let mut engine = seeded();
        assert_eq!(engine.phase(), EnginePhase::Uninitialized);
        assert!(engine.set_dimensions(300, 500));
        let velocity = engine.velocity();

        assert!(!engine.set_dimensions(640, 480));
        assert_eq!(engine.bounds(), Vec2::new(300.0, 500.0));
        assert_eq!(engine.velocity(), velocity);
        assert_eq!(engine.phase(), EnginePhase::Running);
    }

    #[test]
    fn test_same_seed_same_launch() {
        let mut a = seeded();
        let mut b = seeded();
        a.set_dimensions(300, 500);
        b.set_dimensions(300, 500);
        assert_eq!(a.velocity(), b.velocity());
        assert_eq!(a.state().pos, b.state().pos);
        assert_eq!(a.seed(), 2024);
    }

    #[test]
    fn test_three_hits_at_injected_position() {
        let mut engine = seeded();
        engine.set_dimensions(300, 500);
        engine.place_at(Vec2::new(100.0, 200.0));

        let tap = Vec2::new(140.0, 240.0);
        assert_eq!(engine.touch(tap), 2);
        assert_eq!(engine.touch(tap), 1);
        assert_eq!(engine.touch(tap), 0);
        assert_eq!(engine.phase(), EnginePhase::Cleared);
        assert!((engine.velocity().length() - 10.0 * 1.5f32.powi(3)).abs() < 1e-3);
    }

    #[test]
    fn test_touch_on_far_corner_misses() {
        let mut engine = seeded();
        engine.set_dimensions(300, 500);
        engine.place_at(Vec2::new(100.0, 200.0));

        assert_eq!(engine.touch(Vec2::new(196.0, 296.0)), 3);
        assert_eq!(engine.touch(Vec2::new(196.0, 250.0)), 3);
        assert_eq!(engine.touch(Vec2::new(100.0, 200.0)), 2);
    }

    #[test]
    fn test_touch_before_layout_is_ignored() {
        let mut engine = seeded();
        assert_eq!(engine.touch(Vec2::new(1.0, 1.0)), 3);
        assert_eq!(engine.velocity(), Vector2D::ZERO);
    }

    #[test]
    fn test_update_moves_hitbox() {
        let mut engine = seeded();
        engine.set_dimensions(300, 500);
        let before = engine.hitbox();
        engine.update();
        assert_ne!(engine.hitbox().min, before.min);
        assert_eq!(engine.hitbox().min, engine.state().pos);
    }

    #[test]
    fn test_draw_reflects_remaining_taps() {
        let mut engine = seeded();
        engine.set_dimensions(300, 500);
        engine.place_at(Vec2::new(10.0, 10.0));

        let mut frame = FrameBuffer::new(300, 500);
        engine.draw(&mut frame);
        assert_eq!(frame.quad_count(), 5);

        engine.touch(Vec2::new(20.0, 20.0));
        frame.clear();
        engine.draw(&mut frame);
        assert_eq!(frame.quad_count(), 4);
    }
}
