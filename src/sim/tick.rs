//! Per-frame simulation driver
//!
//! One call to [`frame`] is one simulation + render step:
//! update every draggable, run the collision pass, draw, then compact.
//! Removal is deferred to [`SimulationState::cleanup`] so no pass ever sees
//! a collection shrink underneath it.

use super::collision::collision_pass;
use super::state::SimulationState;
use crate::renderer::{Renderer, Sprite};

/// Summary of one tick, mostly for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Colliding pairs found this frame
    pub collisions: usize,
    /// Draggables removed by cleanup
    pub removed: usize,
}

/// Advance entities and resolve collisions. Does not remove anything.
pub fn tick(state: &mut SimulationState, dt: f32) -> usize {
    state.frame += 1;

    let follow_id = if state.pointer.down { state.held } else { None };
    let pointer = state.pointer.pos;
    let geometry = state.geometry;

    for entity in &mut state.draggables {
        let follow = (Some(entity.id) == follow_id).then_some(pointer);
        entity.update(dt, &geometry, follow, &mut state.rng);
    }

    for text in &mut state.floating_texts {
        text.update(dt);
    }

    collision_pass(&mut state.draggables, state.held, geometry.unit)
}

/// Hand every live entity to the renderer: draggables, then targets on top,
/// then floating text.
pub fn render<R: Renderer + ?Sized>(state: &SimulationState, renderer: &mut R) {
    let unit = state.geometry.unit;
    for entity in &state.draggables {
        renderer.render_entity(&Sprite::from_entity(entity, unit));
    }
    for entity in &state.targets {
        renderer.render_entity(&Sprite::from_entity(entity, unit));
    }
    for text in &state.floating_texts {
        renderer.render_text(text);
    }
}

/// Full frame: tick, render, cleanup
pub fn frame<R: Renderer + ?Sized>(
    state: &mut SimulationState,
    dt: f32,
    renderer: &mut R,
) -> TickReport {
    let collisions = tick(state, dt);
    render(state, renderer);
    let removed = state.cleanup();

    if collisions > 0 || removed > 0 {
        log::debug!(
            "frame {}: {} collisions, {} removed, {} live",
            state.frame,
            collisions,
            removed,
            state.draggables.len()
        );
    }

    TickReport {
        collisions,
        removed,
    }
}
