//! Renderer boundary
//!
//! The simulation never reads drawing state back. This module only turns a
//! [`GameState`](crate::sim::GameState) into plain instance data a GPU or
//! canvas renderer can consume, with primitive fallbacks for missing art.

pub mod atlas;
pub mod sprites;

pub use atlas::{AssetManifest, Atlas, DrawableHandle};
pub use sprites::{Shape, SpriteInstance, as_bytes, build_frame};

use crate::sim::{GamePhase, GameState};

/// Energy level (percent) at or below which the HUD gauge turns to the warning color
pub const LOW_ENERGY_THRESHOLD: u32 = 30;

/// Values shown on the heads-up display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub score: u32,
    /// Whole percent, floored
    pub energy_percent: u32,
    pub lives: u8,
    pub low_energy: bool,
    pub game_over: bool,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let energy_percent = state.session.resource.max(0.0).floor() as u32;
        Self {
            score: state.session.score,
            energy_percent,
            lives: state.session.lives,
            low_energy: energy_percent <= LOW_ENERGY_THRESHOLD,
            game_over: matches!(state.phase, GamePhase::GameOver(_)),
        }
    }
}
