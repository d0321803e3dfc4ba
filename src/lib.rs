//! Deep Clean - A side-scrolling ocean clean-up arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, session state)
//! - `render`: Read-only draw list handed to an external renderer
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal frame length in ms; speeds are expressed in units per nominal frame
    pub const NOMINAL_FRAME_MS: f32 = 16.0;
    /// Largest elapsed time a single tick may consume (ms)
    pub const MAX_TICK_DT_MS: f32 = 50.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player submarine defaults
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 56.0;
    pub const PLAYER_SPEED: f32 = 4.2;
    pub const PLAYER_START_X: f32 = 60.0;
    /// Vertical start offset above the arena midline
    pub const PLAYER_START_LIFT: f32 = 14.0;
    /// Tilt applied while climbing/diving (radians)
    pub const PLAYER_TILT: f32 = 0.28;

    /// Session resources
    pub const MAX_RESOURCE: f64 = 100.0;
    pub const MAX_LIVES: u8 = 3;
    /// Resource drained per ms of play
    pub const RESOURCE_DECAY_PER_MS: f64 = 0.004;

    /// Spawning
    pub const MAX_ENTITIES: usize = 30;
    pub const SPAWN_INTERVAL_MS: f64 = 1300.0;
    pub const REFILL_SPAWN_INTERVAL_MS: f64 = 15_000.0;
    pub const SPAWN_SPEED_MIN: f32 = 2.0;
    pub const SPAWN_SPEED_MAX: f32 = 4.0;
    /// Upper bound (exclusive) of the random animation phase offset
    pub const PHASE_OFFSET_RANGE: f64 = 1000.0;

    /// Score at which the impact interstitial is shown (once per session)
    pub const MILESTONE_SCORE: u32 = 30;
    /// Estimated pieces of debris floating in the world's oceans
    pub const GLOBAL_OCEAN_WASTE_ESTIMATE: f64 = 150_000_000.0;
}

/// Fraction of a nominal frame covered by `dt_ms`
#[inline]
pub fn frame_scale(dt_ms: f32) -> f32 {
    dt_ms / consts::NOMINAL_FRAME_MS
}
