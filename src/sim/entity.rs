//! Player and spawned entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kind::{Classification, EntityKind};
use crate::consts::*;

/// Axis-aligned bounding box (top-left anchor, +y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }

    /// True if this box lies fully inside `[0, bounds]`
    pub fn contained_in(&self, bounds: Vec2) -> bool {
        let max = self.max();
        self.min.x >= 0.0 && self.min.y >= 0.0 && max.x <= bounds.x && max.y <= bounds.y
    }
}

/// A spawned object scrolling through the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Side length of the square collision box
    pub size: f32,
    /// Leftward speed in units per nominal frame
    pub speed: f32,
    /// Animation phase offset (ms)
    pub phase_offset: f64,
    /// Current rotation (radians)
    pub angle: f32,
}

impl Entity {
    pub fn new(
        id: u32,
        kind: EntityKind,
        pos: Vec2,
        size: f32,
        speed: f32,
        phase_offset: f64,
    ) -> Self {
        Self {
            id,
            kind,
            pos,
            size,
            speed,
            phase_offset,
            angle: 0.0,
        }
    }

    #[inline]
    pub fn classification(&self) -> Classification {
        self.kind.classification()
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb {
            min: self.pos,
            size: Vec2::splat(self.size),
        }
    }

    /// Scrolled past the left edge
    #[inline]
    pub fn is_out_of_arena(&self) -> bool {
        self.pos.x + self.size < 0.0
    }
}

/// The player's submarine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Speed in units per nominal frame
    pub speed: f32,
    /// Axis unit steps derived from held input (each component -1, 0 or 1)
    pub vel: Vec2,
    /// Tilt (radians): negative climbing, positive diving
    pub angle: f32,
}

impl Player {
    /// Player at the start position for an arena of the given height
    pub fn spawn(arena_height: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, arena_height / 2.0 - PLAYER_START_LIFT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed,
            vel: Vec2::ZERO,
            angle: 0.0,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb {
            min: self.pos,
            size: self.size,
        }
    }

    /// Clamp the bounding box inside `[0, arena]`
    pub fn clamp_to(&mut self, arena: Vec2) {
        let max = (arena - self.size).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_exactness() {
        let a = Aabb::new(0.0, 0.0, 50.0, 50.0);
        assert!(a.overlaps(&Aabb::new(40.0, 40.0, 50.0, 50.0)));
        assert!(!a.overlaps(&Aabb::new(60.0, 0.0, 50.0, 50.0)));
        // Shared edge is not an overlap
        assert!(!a.overlaps(&Aabb::new(50.0, 0.0, 50.0, 50.0)));
        // Symmetric
        assert!(Aabb::new(40.0, 40.0, 50.0, 50.0).overlaps(&a));
    }

    #[test]
    fn test_player_spawn_position() {
        let player = Player::spawn(ARENA_HEIGHT, PLAYER_SPEED);
        assert_eq!(player.pos, Vec2::new(60.0, 286.0));
        assert!(player.bounds().contained_in(Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)));
    }

    #[test]
    fn test_player_clamp() {
        let arena = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT);
        let mut player = Player::spawn(ARENA_HEIGHT, PLAYER_SPEED);
        player.pos = Vec2::new(-30.0, 1000.0);
        player.clamp_to(arena);
        assert_eq!(player.pos, Vec2::new(0.0, ARENA_HEIGHT - PLAYER_HEIGHT));
        assert!(player.bounds().contained_in(arena));
    }

    #[test]
    fn test_out_of_arena() {
        let mut e = Entity::new(1, EntityKind::Can, Vec2::new(-29.0, 10.0), 30.0, 3.0, 0.0);
        assert!(!e.is_out_of_arena());
        e.pos.x = -30.5;
        assert!(e.is_out_of_arena());
    }
}
