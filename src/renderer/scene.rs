//! Draws one frame of the simulation

use glam::Vec2;

use super::vertex::colors;
use super::{Canvas, SpriteSet};
use crate::settings::Settings;
use crate::sim::SimulationState;

/// Layout of the "taps left" markers trailing the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    /// Opacity of marker `i` is `fade^i`
    pub fade: f32,
    /// Scale applied after each marker
    pub scale: f32,
    /// Translation applied after each marker (in the already scaled space)
    pub offset: Vec2,
}

impl IndicatorStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            fade: settings.indicator_fade,
            scale: settings.indicator_scale,
            offset: settings.indicator_offset,
        }
    }
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Background, target, then one fading marker per remaining tap.
///
/// The canvas transform is restored before returning.
pub fn draw_scene(
    state: &SimulationState,
    sprites: &SpriteSet,
    style: &IndicatorStyle,
    canvas: &mut dyn Canvas,
) {
    canvas.fill_rect(Vec2::ZERO, state.bounds, colors::BACKGROUND);
    if !state.initialized {
        return;
    }

    canvas.save();
    canvas.translate(state.pos);
    canvas.draw_sprite(&sprites.target, 1.0);
    canvas.translate(Vec2::new(sprites.target.size.x, 0.0));
    for i in 0..state.hits_remaining {
        canvas.draw_sprite(&sprites.indicator, style.fade.powi(i as i32));
        canvas.scale(Vec2::splat(style.scale));
        canvas.translate(style.offset);
    }
    canvas.restore();
}
