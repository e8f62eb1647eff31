//! Simulation state
//!
//! All live entities are owned here; nothing in the simulation is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, Geometry, Kind};
use super::smooth::smooth;
use crate::consts::*;

/// A short-lived popup ("+1", "Nice!") that grows and then expires
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    /// RGBA, 0-1
    pub color: [f32; 4],
    pub size: f32,
    pub max_size: f32,
    /// Seconds remaining
    pub timer: f32,
    pub removable: bool,
}

impl FloatingText {
    pub fn new(pos: Vec2, text: impl Into<String>, color: [f32; 4], max_size: f32) -> Self {
        Self {
            pos,
            text: text.into(),
            color,
            size: 1.0,
            max_size,
            timer: FLOATING_TEXT_TTL,
            removable: false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.size < self.max_size {
            self.size = smooth(self.size, self.max_size, TEXT_GROW_RATE, dt);
        }
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.removable = true;
        }
    }
}

/// Pointer tracking for the drag state machine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub pos: Vec2,
    /// Between pointer-down and pointer-up
    pub down: bool,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub geometry: Geometry,
    /// Static anchors, in spawn order
    pub targets: Vec<Entity>,
    /// Live draggables, oldest first
    pub draggables: Vec<Entity>,
    pub floating_texts: Vec<FloatingText>,
    /// Draggable currently following the pointer
    pub held: Option<EntityId>,
    pub pointer: Pointer,
    /// Frames simulated since the round began
    pub frame: u64,
    pub(super) rng: Pcg32,
    next_id: EntityId,
}

impl SimulationState {
    /// Empty state; call [`SimulationState::reset_round`] to populate it
    pub fn new(geometry: Geometry, seed: u64) -> Self {
        Self {
            geometry,
            targets: Vec::new(),
            draggables: Vec::new(),
            floating_texts: Vec::new(),
            held: None,
            pointer: Pointer::default(),
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    /// Clear everything and lay out a fresh round: one target per kind down
    /// the left edge and two seed draggables either side of center.
    pub fn reset_round(&mut self) {
        self.targets.clear();
        self.draggables.clear();
        self.floating_texts.clear();
        self.held = None;
        self.pointer = Pointer::default();
        self.frame = 0;

        let u = self.geometry.unit;
        for (i, kind) in Kind::all().enumerate() {
            let y = u * 4.0 * (i as f32 + 1.0);
            self.spawn_target(kind, Vec2::new(u * 4.0, y));
        }

        let (cx, cy) = (self.geometry.width / 2.0, self.geometry.height / 2.0);
        self.spawn_draggable(Kind::SEED, Vec2::new(cx - u * 10.0, cy));
        self.spawn_draggable(Kind::SEED, Vec2::new(cx + u * 10.0, cy));
    }

    pub fn spawn_target(&mut self, kind: Kind, pos: Vec2) -> EntityId {
        let id = self.next_entity_id();
        self.targets.push(Entity::target(id, kind, pos));
        id
    }

    pub fn spawn_draggable(&mut self, kind: Kind, pos: Vec2) -> EntityId {
        let id = self.next_entity_id();
        self.draggables.push(Entity::draggable(id, kind, pos));
        log::debug!("Spawned draggable {} (kind {}) at {:?}", id, kind.index(), pos);
        id
    }

    pub fn spawn_floating_text(&mut self, text: FloatingText) {
        self.floating_texts.push(text);
    }

    pub fn draggable(&self, id: EntityId) -> Option<&Entity> {
        self.draggables.iter().find(|e| e.id == id)
    }

    pub fn draggable_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.draggables.iter_mut().find(|e| e.id == id)
    }

    /// The held draggable, if it is still live
    pub fn held_entity(&self) -> Option<&Entity> {
        self.held.and_then(|id| self.draggable(id))
    }

    /// Drop every removable entity and repair the held reference if its
    /// entity is gone. Returns the number of draggables removed.
    pub fn cleanup(&mut self) -> usize {
        let before = self.draggables.len();
        self.draggables.retain(|e| {
            if e.removable {
                log::debug!("Removed draggable {}", e.id);
            }
            !e.removable
        });
        self.floating_texts.retain(|t| !t.removable);

        if let Some(id) = self.held {
            if self.draggable(id).is_none() {
                log::warn!("Held draggable {} removed mid-drag, releasing", id);
                self.held = None;
            }
        }

        before - self.draggables.len()
    }
}
