//! Data-driven game balance
//!
//! Every knob defaults to the value in [`crate::consts`]. A tuning file is a
//! JSON object; missing fields keep their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Balance parameters consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Player speed in units per nominal frame
    pub player_speed: f32,
    pub resource_decay_per_ms: f64,
    pub max_tick_dt_ms: f32,
    /// Population cap for regular spawns
    pub max_entities: usize,
    pub spawn_interval_ms: f64,
    pub refill_spawn_interval_ms: f64,
    pub spawn_speed_min: f32,
    pub spawn_speed_max: f32,
    pub milestone_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_speed: PLAYER_SPEED,
            resource_decay_per_ms: RESOURCE_DECAY_PER_MS,
            max_tick_dt_ms: MAX_TICK_DT_MS,
            max_entities: MAX_ENTITIES,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            refill_spawn_interval_ms: REFILL_SPAWN_INTERVAL_MS,
            spawn_speed_min: SPAWN_SPEED_MIN,
            spawn_speed_max: SPAWN_SPEED_MAX,
            milestone_score: MILESTONE_SCORE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load a tuning file, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!("{err}; using default tuning");
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        // The player box must fit inside the arena for clamping to be well defined
        if self.arena_width.is_nan() || self.arena_width < PLAYER_WIDTH {
            return Err(invalid("arena_width", format!("must be at least {PLAYER_WIDTH}")));
        }
        if self.arena_height.is_nan() || self.arena_height < PLAYER_HEIGHT {
            return Err(invalid("arena_height", format!("must be at least {PLAYER_HEIGHT}")));
        }
        if self.player_speed.is_nan() || self.player_speed < 0.0 {
            return Err(invalid("player_speed", "must be non-negative".into()));
        }
        if self.resource_decay_per_ms.is_nan() || self.resource_decay_per_ms < 0.0 {
            return Err(invalid("resource_decay_per_ms", "must be non-negative".into()));
        }
        if self.max_tick_dt_ms.is_nan() || self.max_tick_dt_ms <= 0.0 {
            return Err(invalid("max_tick_dt_ms", "must be positive".into()));
        }
        if self.spawn_interval_ms.is_nan() || self.spawn_interval_ms <= 0.0 {
            return Err(invalid("spawn_interval_ms", "must be positive".into()));
        }
        if self.refill_spawn_interval_ms.is_nan() || self.refill_spawn_interval_ms <= 0.0 {
            return Err(invalid("refill_spawn_interval_ms", "must be positive".into()));
        }
        let speeds_ok = self.spawn_speed_min > 0.0 && self.spawn_speed_min <= self.spawn_speed_max;
        if !speeds_ok {
            return Err(invalid(
                "spawn_speed_min",
                "must be positive and not exceed spawn_speed_max".into(),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> TuningError {
    TuningError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_entities": 12, "milestone_score": 5 }"#).unwrap();
        assert_eq!(tuning.max_entities, 12);
        assert_eq!(tuning.milestone_score, 5);
        assert_eq!(tuning.arena_width, ARENA_WIDTH);
        assert_eq!(tuning.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Tuning::from_json(r#"{ "spawn_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "spawn_interval_ms",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "arena_height": 10 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "arena_height", .. }));

        let err = Tuning::from_json(r#"{ "spawn_speed_min": 5, "spawn_speed_max": 4 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "spawn_speed_min", .. }));
    }

    #[test]
    fn test_nan_values_rejected() {
        let cases = [
            (
                Tuning {
                    arena_width: f32::NAN,
                    ..Tuning::default()
                },
                "arena_width",
            ),
            (
                Tuning {
                    resource_decay_per_ms: f64::NAN,
                    ..Tuning::default()
                },
                "resource_decay_per_ms",
            ),
            (
                Tuning {
                    max_tick_dt_ms: f32::NAN,
                    ..Tuning::default()
                },
                "max_tick_dt_ms",
            ),
            (
                Tuning {
                    spawn_speed_min: f32::NAN,
                    ..Tuning::default()
                },
                "spawn_speed_min",
            ),
        ];
        for (tuning, expected) in cases {
            match tuning.validate() {
                Err(TuningError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected {expected} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/definitely/not/here/tuning.json");
        assert!(matches!(Tuning::load(path), Err(TuningError::Io { .. })));
        assert_eq!(Tuning::load_or_default(path), Tuning::default());
    }
}
