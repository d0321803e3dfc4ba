//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `tick(dt, t)`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod driver;
pub mod entity;
pub mod input;
pub mod kind;
pub mod movement;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionEffect, resolve};
pub use driver::TickDriver;
pub use entity::{Aabb, Entity, Player};
pub use input::{Controls, Direction, HeldDirections};
pub use kind::{AnimationProfile, Classification, EntityKind, KindProfile};
pub use spawner::{SpawnPool, Spawner};
pub use state::{
    GameEvent, GameOverCause, GamePhase, GameState, ImpactReport, Milestone, Session,
};
pub use tick::{clamp_dt, tick};
