//! Drag Merge - A casual drag-and-merge canvas game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, smoothing, collisions, input)
//! - `session`: Game flow (score, lives, phases)
//! - `renderer`: Render hook trait and the browser canvas backend
//! - `settings`: Data-driven configuration
//! - `highscores`: Persisted best score

pub mod clock;
pub mod error;
pub mod game;
pub mod highscores;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use error::Error;
pub use game::Game;
pub use highscores::HighScore;
pub use session::{GamePhase, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Number of distinct entity kinds (one per target)
    pub const KIND_COUNT: u8 = 3;

    /// Smoothing rate while a collided draggable shrinks away
    pub const SHRINK_RATE: f32 = 2.0;
    /// Smoothing rate for idle size settling
    pub const SIZE_RATE: f32 = 4.0;
    /// Smoothing rate for velocity and drag-follow
    pub const FOLLOW_RATE: f32 = 8.0;
    /// Smoothing rate for floating text growth
    pub const TEXT_GROW_RATE: f32 = 2.0;

    /// Target anchors are drawn three units wide
    pub const TARGET_SIZE: f32 = 3.0;
    /// Resting size of a draggable
    pub const DRAGGABLE_DEFAULT_SIZE: f32 = 2.0;
    /// Size a fresh draggable grows from
    pub const DRAGGABLE_SPAWN_SIZE: f32 = 0.1;
    /// Goal size multiplier applied while held
    pub const HELD_SIZE_BOOST: f32 = 1.5;
    /// Goal size after a collision
    pub const COLLIDED_GOAL_SIZE: f32 = 0.01;
    /// A collided draggable is removable once it shrinks below this
    pub const REMOVE_SIZE: f32 = 0.1;

    /// Per-axis bound on random wander velocity (pixels per frame)
    pub const MOVE_SPEED: f32 = 2.0;
    /// Seconds between wander velocity resamples
    pub const WANDER_INTERVAL: f32 = 2.0;
    /// Off-screen margin, in base units, before a draggable is dropped
    pub const EDGE_MARGIN_UNITS: f32 = 5.0;

    /// Lifetime of a floating text popup (seconds)
    pub const FLOATING_TEXT_TTL: f32 = 1.0;

    /// Fallback frame duration before the clock has samples
    pub const DEFAULT_DT: f32 = 1.0 / 60.0;
    /// Longest frame the simulation will accept (tab switches, stalls)
    pub const MAX_DT: f32 = 0.1;
}
