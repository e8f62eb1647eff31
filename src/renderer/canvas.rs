//! Canvas 2D backend (wasm32 only)
//!
//! Kind artwork is stood in for by colored discs until image assets are
//! wired up; the HUD draws the score and one pip per remaining life.

use web_sys::CanvasRenderingContext2d;

use super::{Image, Renderer, Sprite, colors};
use crate::session::Session;
use crate::sim::FloatingText;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn clear(&self) {
        self.ctx.set_fill_style_str(&colors::css(colors::BACKGROUND));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    /// Score in the top right, lives along the top left
    pub fn draw_hud(&self, session: &Session, unit: f32) {
        let unit = unit as f64;

        self.ctx.set_fill_style_str(&colors::css(colors::SCORE));
        self.ctx.set_font(&format!("{}px sans-serif", (unit * 2.0).round()));
        self.ctx.set_text_align("right");
        self.ctx.set_text_baseline("top");
        let _ = self
            .ctx
            .fill_text(&session.score.to_string(), self.width - unit / 2.0, unit / 3.0);

        self.ctx.set_fill_style_str(&colors::css(colors::LIFE));
        for i in 0..session.lives {
            let x = unit + unit * i as f64;
            self.ctx.begin_path();
            let _ = self.ctx.arc(x, unit, unit * 0.4, 0.0, std::f64::consts::TAU);
            self.ctx.fill();
        }
    }
}

impl Renderer for CanvasRenderer {
    fn render_entity(&mut self, sprite: &Sprite) {
        let Image::Kind(kind) = sprite.image;
        let ctx = &self.ctx;

        ctx.save();
        let _ = ctx.translate(sprite.pos.x as f64, sprite.pos.y as f64);
        let _ = ctx.rotate(sprite.rotation as f64);
        let _ = ctx.scale(sprite.scale.x as f64, sprite.scale.y as f64);
        ctx.set_fill_style_str(&colors::css(colors::kind(kind)));
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, sprite.size as f64 / 2.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
        ctx.restore();
    }

    fn render_text(&mut self, text: &FloatingText) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&colors::css(text.color));
        ctx.set_font(&format!("{}px sans-serif", text.size.round()));
        ctx.set_text_align("center");
        ctx.set_text_baseline("bottom");
        let _ = ctx.fill_text(&text.text, text.pos.x as f64, text.pos.y as f64);
    }
}
