//! Pointer-driven drag state machine
//!
//! Idle until the pointer goes down. Pressing a target spawns a fresh
//! draggable of its kind under the pointer and holds it; pressing a draggable
//! picks up the topmost (most recently spawned) one under the pointer.
//! Releasing restores the held entity's resting size.

use glam::Vec2;

use super::entity::EntityId;
use super::state::SimulationState;

/// Pointer events the simulation understands, in play-area coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

/// What a pointer-down ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// A target was pressed and a new draggable spawned under the pointer
    Spawned(EntityId),
    /// An existing draggable was picked up
    PickedUp(EntityId),
    /// Nothing under the pointer
    Missed,
}

/// Apply one pointer event to the simulation
pub fn handle_pointer(state: &mut SimulationState, event: PointerEvent) -> Option<PressOutcome> {
    match event {
        PointerEvent::Down { x, y } => Some(pointer_down(state, Vec2::new(x, y))),
        PointerEvent::Move { x, y } => {
            state.pointer.pos = Vec2::new(x, y);
            None
        }
        PointerEvent::Up => {
            pointer_up(state);
            None
        }
    }
}

pub fn pointer_down(state: &mut SimulationState, pos: Vec2) -> PressOutcome {
    state.pointer.pos = pos;
    state.pointer.down = true;

    let unit = state.geometry.unit;
    let pressed_target = state
        .targets
        .iter()
        .find(|t| t.contains_point(pos, unit))
        .map(|t| t.kind);

    if let Some(kind) = pressed_target {
        release_held(state);
        let id = state.spawn_draggable(kind, pos);
        state.held = Some(id);
        return PressOutcome::Spawned(id);
    }

    // Newest first: the last spawned draggable is drawn on top
    if let Some(entity) = state
        .draggables
        .iter_mut()
        .rev()
        .find(|e| e.contains_point(pos, unit))
    {
        entity.pick_up();
        let id = entity.id;
        if state.held.is_some_and(|held| held != id) {
            release_held(state);
        }
        state.held = Some(id);
        return PressOutcome::PickedUp(id);
    }

    PressOutcome::Missed
}

pub fn pointer_up(state: &mut SimulationState) {
    release_held(state);
    state.pointer.down = false;
}

/// Restore the held entity's resting size and clear the reference.
///
/// A reference to an entity that is no longer live is simply dropped.
pub fn release_held(state: &mut SimulationState) {
    let Some(id) = state.held.take() else {
        return;
    };
    match state.draggable_mut(id) {
        Some(entity) => entity.release(),
        None => log::debug!("Released draggable {} that was already removed", id),
    }
}
