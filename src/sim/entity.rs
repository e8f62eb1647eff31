//! Entities: static targets and mobile draggables
//!
//! Both share one representation. Variant-specific data lives in [`Variant`];
//! geometry (position, size, hit tests) is common to every entity.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::smooth::{smooth, smooth_vec2};
use crate::Error;
use crate::consts::*;

/// Stable handle to an entity, never reused within a state
pub type EntityId = u32;

/// Visual identity shared by a target and the draggables it spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Kind(u8);

impl Kind {
    /// Kind of the draggables every round opens with
    pub const SEED: Kind = Kind(0);

    /// Validate a raw kind index
    pub fn new(raw: u8) -> Result<Self, Error> {
        if raw < KIND_COUNT {
            Ok(Self(raw))
        } else {
            Err(Error::InvalidKind(raw))
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Every valid kind, in index order
    pub fn all() -> impl Iterator<Item = Kind> {
        (0..KIND_COUNT).map(Kind)
    }
}

impl TryFrom<u8> for Kind {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Kind::new(raw)
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> u8 {
        kind.0
    }
}

/// Read-only play area description, derived from the screen size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Base unit size every size multiplier is scaled by
    pub unit: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn new(unit: f32, width: f32, height: f32) -> Self {
        Self {
            unit: unit.max(0.0),
            width,
            height,
        }
    }

    /// Derive the base unit from screen size: the play area is `game_size`
    /// tiles along its short side, shrunk to 75% on landscape screens.
    pub fn from_screen(width: f32, height: f32, game_size: u32) -> Self {
        let tiles = game_size.max(1) as f32;
        let modifier = if height > width { 1.0 } else { 0.75 };
        let tile = (width / tiles).floor().min((height / tiles).floor());
        Self::new((tile * modifier).floor(), width, height)
    }

    /// True once `pos` has left the play area plus the off-screen margin
    pub fn is_outside(&self, pos: Vec2) -> bool {
        let margin = self.unit * EDGE_MARGIN_UNITS;
        pos.x > self.width + margin
            || pos.x < -margin
            || pos.y > self.height + margin
            || pos.y < -margin
    }
}

/// Motion and lifecycle state of a draggable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draggable {
    pub default_size: f32,
    pub goal_size: f32,
    pub vel: Vec2,
    pub goal_vel: Vec2,
    pub move_speed: f32,
    /// Seconds until the next wander resample
    pub move_timer: f32,
    /// Terminal: shrinking toward removal, never cleared
    pub collided: bool,
}

impl Default for Draggable {
    fn default() -> Self {
        Self {
            default_size: DRAGGABLE_DEFAULT_SIZE,
            goal_size: DRAGGABLE_DEFAULT_SIZE,
            vel: Vec2::ZERO,
            goal_vel: Vec2::ZERO,
            move_speed: MOVE_SPEED,
            move_timer: WANDER_INTERVAL,
            collided: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Variant {
    /// Fixed anchor, clicked to spawn draggables of its kind
    Target,
    Draggable(Draggable),
}

/// A drawable, hit-testable game object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: Kind,
    pub pos: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    /// Multiplier on the base unit size
    pub size_mod: f32,
    /// Lazy deletion marker, consumed by the cleanup pass
    pub removable: bool,
    pub variant: Variant,
}

impl Entity {
    pub fn target(id: EntityId, kind: Kind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            rotation: 0.0,
            scale: Vec2::ONE,
            size_mod: TARGET_SIZE,
            removable: false,
            variant: Variant::Target,
        }
    }

    pub fn draggable(id: EntityId, kind: Kind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            rotation: 0.0,
            scale: Vec2::ONE,
            size_mod: DRAGGABLE_SPAWN_SIZE,
            removable: false,
            variant: Variant::Draggable(Draggable::default()),
        }
    }

    /// Effective render/collision extent (`unit * size_mod`, never negative)
    #[inline]
    pub fn size(&self, unit: f32) -> f32 {
        (unit * self.size_mod).max(0.0)
    }

    /// Sum-of-sizes circle test, halved: distance < (a + b) / 2
    pub fn collides_with(&self, other: &Entity, unit: f32) -> bool {
        let threshold = (self.size(unit) + other.size(unit)) / 2.0;
        self.pos.distance(other.pos) < threshold
    }

    /// Axis-aligned square hit test with half-extent equal to [`Entity::size`]
    pub fn contains_point(&self, point: Vec2, unit: f32) -> bool {
        let half = self.size(unit);
        point.x > self.pos.x - half
            && point.x < self.pos.x + half
            && point.y > self.pos.y - half
            && point.y < self.pos.y + half
    }

    pub fn is_target(&self) -> bool {
        matches!(self.variant, Variant::Target)
    }

    pub fn as_draggable(&self) -> Option<&Draggable> {
        match &self.variant {
            Variant::Draggable(d) => Some(d),
            Variant::Target => None,
        }
    }

    pub fn as_draggable_mut(&mut self) -> Option<&mut Draggable> {
        match &mut self.variant {
            Variant::Draggable(d) => Some(d),
            Variant::Target => None,
        }
    }

    pub fn is_collided(&self) -> bool {
        self.as_draggable().is_some_and(|d| d.collided)
    }

    /// Enter the terminal shrink-and-remove sequence
    pub fn mark_collided(&mut self) {
        if let Some(d) = self.as_draggable_mut() {
            d.collided = true;
            d.goal_size = COLLIDED_GOAL_SIZE;
        }
    }

    /// Boost the goal size while held (no-op once collided)
    pub fn pick_up(&mut self) {
        if let Some(d) = self.as_draggable_mut() {
            if !d.collided {
                d.goal_size = d.default_size * HELD_SIZE_BOOST;
            }
        }
    }

    /// Restore the resting goal size (no-op once collided)
    pub fn release(&mut self) {
        if let Some(d) = self.as_draggable_mut() {
            if !d.collided {
                d.goal_size = d.default_size;
            }
        }
    }

    /// Advance a draggable by one frame. Targets never move.
    ///
    /// `follow` is the pointer position while this entity is held; it
    /// replaces velocity integration for the frame.
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        geometry: &Geometry,
        follow: Option<Vec2>,
        rng: &mut R,
    ) {
        let Variant::Draggable(d) = &mut self.variant else {
            return;
        };

        if d.collided {
            self.size_mod = smooth(self.size_mod, d.goal_size, SHRINK_RATE, dt);
            if self.size_mod < REMOVE_SIZE {
                self.removable = true;
            }
        } else {
            self.size_mod = smooth(self.size_mod, d.goal_size, SIZE_RATE, dt);
        }

        d.move_timer -= dt;
        if d.move_timer <= 0.0 {
            let s = d.move_speed.abs();
            d.goal_vel = Vec2::new(rng.random_range(-s..=s), rng.random_range(-s..=s));
            d.move_timer = WANDER_INTERVAL;
        }

        d.vel = smooth_vec2(d.vel, d.goal_vel, FOLLOW_RATE, dt);

        match follow {
            Some(target) => self.pos = smooth_vec2(self.pos, target, FOLLOW_RATE, dt),
            // Velocity is in pixels per frame
            None => self.pos += d.vel,
        }

        if geometry.is_outside(self.pos) {
            self.removable = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;

    fn kind(raw: u8) -> Kind {
        Kind::new(raw).unwrap()
    }

    fn geometry() -> Geometry {
        Geometry::new(10.0, 800.0, 600.0)
    }

    #[test]
    fn test_kind_range() {
        assert!(Kind::new(0).is_ok());
        assert!(Kind::new(2).is_ok());
        assert!(matches!(Kind::new(3), Err(Error::InvalidKind(3))));
        assert_eq!(Kind::all().count(), KIND_COUNT as usize);
    }

    #[test]
    fn test_kind_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Kind>("1").is_ok());
        assert!(serde_json::from_str::<Kind>("7").is_err());
    }

    #[test]
    fn test_geometry_from_screen() {
        // Landscape: min(1800/18, 900/18) = 50, * 0.75 = 37.5 -> 37
        let g = Geometry::from_screen(1800.0, 900.0, 18);
        assert_eq!(g.unit, 37.0);
        // Portrait keeps the full tile size
        let g = Geometry::from_screen(900.0, 1800.0, 18);
        assert_eq!(g.unit, 50.0);
    }

    #[test]
    fn test_geometry_margin() {
        let g = geometry();
        assert!(!g.is_outside(Vec2::new(-49.0, 300.0)));
        assert!(g.is_outside(Vec2::new(-51.0, 300.0)));
        assert!(g.is_outside(Vec2::new(851.0, 300.0)));
        assert!(g.is_outside(Vec2::new(400.0, 651.0)));
        assert!(g.is_outside(Vec2::new(400.0, -51.0)));
    }

    #[test]
    fn test_collision_at_distance_zero() {
        let mut a = Entity::draggable(1, kind(0), Vec2::new(50.0, 50.0));
        let mut b = Entity::draggable(2, kind(1), Vec2::new(50.0, 50.0));
        a.size_mod = 1.0;
        b.size_mod = 1.0;
        assert!(a.collides_with(&b, 10.0));
    }

    #[test]
    fn test_collision_threshold_is_halved_sum() {
        let mut a = Entity::draggable(1, kind(0), Vec2::ZERO);
        let mut b = Entity::draggable(2, kind(0), Vec2::new(9.9, 0.0));
        a.size_mod = 1.0;
        b.size_mod = 1.0;
        assert!(a.collides_with(&b, 10.0));
        b.pos.x = 10.0;
        assert!(!a.collides_with(&b, 10.0));
    }

    #[test]
    fn test_contains_point_is_square() {
        let mut e = Entity::draggable(1, kind(0), Vec2::new(100.0, 100.0));
        e.size_mod = 1.0;
        // Corner of the square, outside the inscribed circle
        assert!(e.contains_point(Vec2::new(109.0, 109.0), 10.0));
        assert!(!e.contains_point(Vec2::new(111.0, 100.0), 10.0));
        assert!(!e.contains_point(Vec2::new(100.0, 90.0), 10.0));
    }

    #[test]
    fn test_target_update_is_noop() {
        let mut t = Entity::target(1, kind(2), Vec2::new(40.0, 40.0));
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..600 {
            t.update(DT, &geometry(), None, &mut rng);
        }
        assert_eq!(t.pos, Vec2::new(40.0, 40.0));
        assert_eq!(t.size_mod, TARGET_SIZE);
        assert!(!t.removable);
    }

    #[test]
    fn test_draggable_grows_toward_default() {
        let mut e = Entity::draggable(1, kind(0), Vec2::new(400.0, 300.0));
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..120 {
            e.update(DT, &geometry(), Some(Vec2::new(400.0, 300.0)), &mut rng);
        }
        assert!((e.size_mod - DRAGGABLE_DEFAULT_SIZE).abs() < 0.01);
    }

    #[test]
    fn test_wander_resample_within_bounds() {
        let mut e = Entity::draggable(1, kind(0), Vec2::new(400.0, 300.0));
        let mut rng = Pcg32::seed_from_u64(7);
        // Timer starts at two seconds; one big step trips it
        e.update(2.0, &geometry(), None, &mut rng);
        let d = e.as_draggable().unwrap();
        assert_eq!(d.move_timer, WANDER_INTERVAL);
        assert!(d.goal_vel.x.abs() <= MOVE_SPEED && d.goal_vel.y.abs() <= MOVE_SPEED);
    }

    #[test]
    fn test_position_integrates_velocity_per_frame() {
        let mut e = Entity::draggable(1, kind(0), Vec2::new(400.0, 300.0));
        if let Some(d) = e.as_draggable_mut() {
            d.vel = Vec2::new(1.0, 0.0);
            d.goal_vel = Vec2::new(1.0, 0.0);
        }
        let mut rng = Pcg32::seed_from_u64(1);
        e.update(DT, &geometry(), None, &mut rng);
        assert!((e.pos.x - 401.0).abs() < 1e-4);
    }

    #[test]
    fn test_follow_overrides_integration() {
        let mut e = Entity::draggable(1, kind(0), Vec2::new(400.0, 300.0));
        if let Some(d) = e.as_draggable_mut() {
            d.vel = Vec2::new(50.0, 0.0);
            d.goal_vel = Vec2::new(50.0, 0.0);
        }
        let mut rng = Pcg32::seed_from_u64(1);
        e.update(DT, &geometry(), Some(Vec2::new(400.0, 300.0)), &mut rng);
        assert_eq!(e.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_offscreen_becomes_removable_in_one_frame() {
        let mut e = Entity::draggable(1, kind(0), Vec2::new(851.0, 300.0));
        let mut rng = Pcg32::seed_from_u64(1);
        e.update(DT, &geometry(), None, &mut rng);
        assert!(e.removable);
    }

    #[test]
    fn test_collided_shrinks_to_removal() {
        let mut e = Entity::draggable(1, kind(0), Vec2::new(400.0, 300.0));
        e.size_mod = 0.15;
        e.mark_collided();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut frames = 0;
        while !e.removable {
            let before = e.size_mod;
            e.update(DT, &geometry(), Some(e.pos), &mut rng);
            frames += 1;
            assert!(e.size_mod < before);
            assert!(frames < 600, "never became removable");
        }
        assert!(e.size_mod < REMOVE_SIZE);
        assert!(frames > 1);
    }

    #[test]
    fn test_collided_is_terminal() {
        let mut e = Entity::draggable(1, kind(0), Vec2::new(400.0, 300.0));
        e.mark_collided();
        e.pick_up();
        e.release();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..30 {
            e.update(DT, &geometry(), None, &mut rng);
        }
        let d = e.as_draggable().unwrap();
        assert!(d.collided);
        assert_eq!(d.goal_size, COLLIDED_GOAL_SIZE);
    }

    #[test]
    fn test_pick_up_and_release() {
        let mut e = Entity::draggable(1, kind(1), Vec2::new(100.0, 100.0));
        e.pick_up();
        assert_eq!(e.as_draggable().unwrap().goal_size, DRAGGABLE_DEFAULT_SIZE * 1.5);
        e.release();
        assert_eq!(e.as_draggable().unwrap().goal_size, DRAGGABLE_DEFAULT_SIZE);
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            sa in 0.0f32..4.0, sb in 0.0f32..4.0,
            unit in 1.0f32..60.0,
        ) {
            let mut a = Entity::draggable(1, Kind(0), Vec2::new(ax, ay));
            let mut b = Entity::draggable(2, Kind(1), Vec2::new(bx, by));
            a.size_mod = sa;
            b.size_mod = sb;
            prop_assert_eq!(a.collides_with(&b, unit), b.collides_with(&a, unit));
        }
    }
}
