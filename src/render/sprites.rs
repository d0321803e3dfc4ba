//! Per-frame sprite instances

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::atlas::{Atlas, DrawableHandle};
use crate::sim::{Classification, Entity, GameState, Player};

/// Sprite slot value meaning "no image, draw the shape"
pub const NO_SPRITE: u32 = u32::MAX;

/// How an instance is drawn
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Textured quad using the sprite handle
    Sprite = 0,
    /// Filled circle placeholder
    Circle = 1,
    /// Filled ellipse placeholder for the submarine
    Hull = 2,
}

/// One drawable, rotated around its center
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 2],
    pub size: [f32; 2],
    pub angle: f32,
    pub alpha: f32,
    /// Host drawable handle or [`NO_SPRITE`]
    pub sprite: u32,
    /// [`Shape`] discriminant
    pub shape: u32,
    /// Fill color for placeholder shapes
    pub color: [f32; 4],
}

/// Colors for placeholder shapes
pub mod colors {
    pub const DEBRIS: [f32; 4] = [0.67, 0.67, 0.67, 1.0];
    pub const REFILL: [f32; 4] = [0.13, 0.83, 0.93, 1.0];
    pub const CREATURE: [f32; 4] = [0.97, 0.44, 0.44, 1.0];
    pub const SUBMARINE: [f32; 4] = [0.98, 0.75, 0.14, 1.0];
}

impl SpriteInstance {
    pub fn shape(&self) -> Shape {
        match self.shape {
            0 => Shape::Sprite,
            2 => Shape::Hull,
            _ => Shape::Circle,
        }
    }

    fn new(
        top_left: Vec2,
        size: Vec2,
        angle: f32,
        handle: Option<DrawableHandle>,
        fallback: Shape,
        color: [f32; 4],
    ) -> Self {
        let (sprite, shape) = match handle {
            Some(DrawableHandle(id)) => (id, Shape::Sprite),
            None => (NO_SPRITE, fallback),
        };
        Self {
            center: (top_left + size / 2.0).to_array(),
            size: size.to_array(),
            angle,
            alpha: 1.0,
            sprite,
            shape: shape as u32,
            color,
        }
    }
}

/// Refill items blink so they stand out
fn refill_alpha(entity: &Entity, t: f64) -> f32 {
    (0.7 + 0.3 * (t * 0.008 + entity.phase_offset).sin().abs()) as f32
}

fn entity_instance(entity: &Entity, atlas: &Atlas, t: f64) -> SpriteInstance {
    let class = entity.classification();
    let color = match class {
        Classification::Collectible => colors::DEBRIS,
        Classification::Refill => colors::REFILL,
        Classification::Hazard => colors::CREATURE,
    };
    let mut instance = SpriteInstance::new(
        entity.pos,
        Vec2::splat(entity.size),
        entity.angle,
        atlas.get(entity.kind),
        Shape::Circle,
        color,
    );
    if class == Classification::Refill {
        instance.alpha = refill_alpha(entity, t);
    }
    instance
}

fn player_instance(player: &Player, atlas: &Atlas) -> SpriteInstance {
    SpriteInstance::new(
        player.pos,
        player.size,
        player.angle,
        atlas.player(),
        Shape::Hull,
        colors::SUBMARINE,
    )
}

/// Instances for the current frame: entities first, the player on top
pub fn build_frame(state: &GameState, atlas: &Atlas, t: f64) -> Vec<SpriteInstance> {
    let mut instances = Vec::with_capacity(state.entities().len() + 1);
    instances.extend(state.entities().iter().map(|e| entity_instance(e, atlas, t)));
    instances.push(player_instance(state.player(), atlas));
    instances
}

/// Raw bytes for a GPU instance buffer
pub fn as_bytes(instances: &[SpriteInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
