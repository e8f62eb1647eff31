//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit `dt` threaded through every update
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond the render hook

pub mod collision;
pub mod entity;
pub mod input;
pub mod smooth;
pub mod state;
pub mod tick;

pub use collision::collision_pass;
pub use entity::{Draggable, Entity, EntityId, Geometry, Kind, Variant};
pub use input::{PointerEvent, PressOutcome, handle_pointer, pointer_down, pointer_up, release_held};
pub use smooth::{smooth, smooth_vec2};
pub use state::{FloatingText, Pointer, SimulationState};
pub use tick::{TickReport, frame, render, tick};
