//! Rendering hooks
//!
//! The simulation owns no rendering state. Each frame it hands every live
//! entity to a [`Renderer`] as a [`Sprite`]; backends decide how to draw it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::sim::{Entity, FloatingText, Kind};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

/// Which artwork a sprite uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Image {
    /// Targets and draggables of the same kind share one image
    Kind(Kind),
}

/// One entity, ready to draw centered on `pos`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    /// Drawn width/height before `scale` (`unit * size_mod`)
    pub size: f32,
    pub image: Image,
}

impl Sprite {
    pub fn from_entity(entity: &Entity, unit: f32) -> Self {
        Self {
            pos: entity.pos,
            rotation: entity.rotation,
            scale: entity.scale,
            size: entity.size(unit),
            image: Image::Kind(entity.kind),
        }
    }
}

/// Draw target for the simulation's per-frame render pass
pub trait Renderer {
    fn render_entity(&mut self, sprite: &Sprite);

    fn render_text(&mut self, _text: &FloatingText) {}
}

/// Discards everything (headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_entity(&mut self, _sprite: &Sprite) {}
}

/// Keeps the last frame's draw calls, for tests and headless diagnostics
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub sprites: Vec<Sprite>,
    pub texts: Vec<String>,
}

impl RecordingRenderer {
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.texts.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn render_entity(&mut self, sprite: &Sprite) {
        self.sprites.push(*sprite);
    }

    fn render_text(&mut self, text: &FloatingText) {
        self.texts.push(text.text.clone());
    }
}

/// Colors for game elements
pub mod colors {
    use crate::sim::Kind;

    pub const BACKGROUND: [f32; 4] = [0.08, 0.09, 0.14, 1.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const LIFE: [f32; 4] = [0.95, 0.3, 0.4, 1.0];

    const KINDS: [[f32; 4]; 3] = [
        [0.95, 0.35, 0.3, 1.0],
        [0.3, 0.8, 0.45, 1.0],
        [0.3, 0.55, 1.0, 1.0],
    ];

    /// Fill color for an entity kind
    pub fn kind(kind: Kind) -> [f32; 4] {
        KINDS[kind.index() % KINDS.len()]
    }

    /// CSS `rgba()` string for canvas fill styles
    pub fn css(color: [f32; 4]) -> String {
        let [r, g, b, a] = color;
        format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        )
    }
}
