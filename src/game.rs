//! Game controller
//!
//! Owns the simulation and the session, routes pointer input into the drag
//! state machine while a round is running, and exposes the score/life hooks
//! the surrounding game flow uses.

use glam::Vec2;

use crate::consts::MAX_DT;
use crate::highscores::HighScore;
use crate::renderer::{Renderer, colors};
use crate::session::{GamePhase, Session};
use crate::settings::Settings;
use crate::sim::{self, FloatingText, PointerEvent, PressOutcome, SimulationState, TickReport};

pub struct Game {
    pub sim: SimulationState,
    pub session: Session,
    settings: Settings,
}

impl Game {
    /// Build a game for a `width` x `height` screen. Starts on the title phase.
    pub fn new(settings: Settings, width: f32, height: f32, seed: u64, high_score: HighScore) -> Self {
        let geometry = settings.geometry(width, height);
        let seed = settings.seed.unwrap_or(seed);
        log::info!(
            "Game created: {}x{} play area, unit {}, seed {}",
            width,
            height,
            geometry.unit,
            seed
        );

        Self {
            sim: SimulationState::new(geometry, seed),
            session: Session::new(settings.starting_lives, high_score),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Recompute geometry after the screen changes size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.sim.set_geometry(self.settings.geometry(width, height));
    }

    /// Reset score and lives and lay out a fresh round
    pub fn start_round(&mut self) {
        self.session.begin_round();
        self.sim.reset_round();
    }

    /// Feed one pointer event. Ignored outside a round, except that a
    /// pointer-up always clears any hold.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<PressOutcome> {
        if !self.session.is_playing() {
            if event == PointerEvent::Up {
                sim::pointer_up(&mut self.sim);
            }
            return None;
        }
        sim::handle_pointer(&mut self.sim, event)
    }

    /// Run one frame of `dt` seconds and draw it. Nothing advances outside
    /// a round.
    pub fn frame<R: Renderer + ?Sized>(&mut self, dt: f32, renderer: &mut R) -> TickReport {
        if !self.session.is_playing() {
            sim::render(&self.sim, renderer);
            return TickReport::default();
        }
        sim::frame(&mut self.sim, dt.clamp(0.0, MAX_DT), renderer)
    }

    /// Award points, with a popup at `at` when given
    pub fn add_score(&mut self, points: u64, at: Option<Vec2>) {
        if !self.session.is_playing() {
            return;
        }
        self.session.add_score(points);
        if let Some(pos) = at {
            let size = self.sim.geometry.unit;
            self.sim.spawn_floating_text(FloatingText::new(
                pos,
                format!("+{}", points),
                colors::SCORE,
                size,
            ));
        }
    }

    /// Take a life; ends the round (and releases any hold) on the last one.
    /// Returns true if the game is now over.
    pub fn lose_life(&mut self) -> bool {
        let over = self.session.lose_life();
        if over {
            sim::release_held(&mut self.sim);
            self.sim.pointer.down = false;
        }
        over
    }
}
