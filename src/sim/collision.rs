//! Pairwise draggable collision pass
//!
//! Any two overlapping draggables merge and vanish together, whatever their
//! kinds. The held entity is exempt so the player can carry it through others.
//! O(n²) over the live draggables, which stay few.

use super::entity::{Entity, EntityId};

/// Mark every colliding unordered pair as collided.
///
/// Only flags are touched; nothing is removed here, so indices stay valid for
/// the whole scan. Returns the number of colliding pairs found.
pub fn collision_pass(draggables: &mut [Entity], held: Option<EntityId>, unit: f32) -> usize {
    let mut pairs = 0;
    let n = draggables.len();

    for i in 0..n {
        if Some(draggables[i].id) == held {
            continue;
        }
        for j in (i + 1)..n {
            if Some(draggables[j].id) == held {
                continue;
            }
            if draggables[i].collides_with(&draggables[j], unit) {
                draggables[i].mark_collided();
                draggables[j].mark_collided();
                pairs += 1;
            }
        }
    }

    pairs
}
