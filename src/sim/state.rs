//! Game state and the session state machine
//!
//! Phases: `NotStarted -> Playing -> {Interstitial <-> Playing} -> GameOver -> Playing`.
//! The tick pipeline only runs while `Playing`; every other phase is frozen.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Player};
use super::kind::EntityKind;
use super::spawner::Spawner;
use crate::consts::*;
use crate::tuning::Tuning;

/// Residual energy treated as zero, absorbs rounding from per-tick decay
pub const RESOURCE_EPSILON: f64 = 1e-6;

/// Score, resource and lives for the current session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    /// Energy in `[0, MAX_RESOURCE]`
    pub resource: f64,
    /// Lives in `[0, MAX_LIVES]`
    pub lives: u8,
}

impl Session {
    pub fn fresh() -> Self {
        Self {
            score: 0,
            resource: MAX_RESOURCE,
            lives: MAX_LIVES,
        }
    }

    pub fn refill(&mut self, amount: f64) {
        self.resource = (self.resource + amount).min(MAX_RESOURCE);
    }

    /// Drain energy; anything left below [`RESOURCE_EPSILON`] counts as empty
    pub fn drain(&mut self, amount: f64) {
        let left = self.resource - amount;
        self.resource = if left < RESOURCE_EPSILON { 0.0 } else { left };
    }

    /// Out of energy or out of lives
    pub fn end_cause(&self) -> Option<GameOverCause> {
        if self.lives == 0 {
            Some(GameOverCause::OutOfLives)
        } else if self.resource <= 0.0 {
            Some(GameOverCause::OutOfEnergy)
        } else {
            None
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    OutOfEnergy,
    OutOfLives,
}

/// Share of the world's ocean debris cleaned up by a score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub score: u32,
    /// Percentage of [`GLOBAL_OCEAN_WASTE_ESTIMATE`]
    pub percent: f64,
}

impl ImpactReport {
    pub fn for_score(score: u32) -> Self {
        Self {
            score,
            percent: f64::from(score) / GLOBAL_OCEAN_WASTE_ESTIMATE * 100.0,
        }
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start action
    NotStarted,
    /// Active gameplay
    Playing,
    /// Milestone overlay, pipeline frozen until acknowledged
    Interstitial(ImpactReport),
    /// Run ended
    GameOver(GameOverCause),
}

/// Progress of the once-per-session milestone overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Milestone {
    /// Threshold not crossed yet
    Unreached,
    /// Crossed on the tick the run ended; shown when the game-over screen is left
    Deferred,
    /// Already displayed this session
    Shown,
}

/// Signals for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Started,
    /// Play resumed after an interstitial or a continue
    Resumed,
    ScoreChanged(u32),
    /// Emitted when the whole-percent energy gauge moves
    ResourceChanged(f64),
    LivesChanged(u8),
    ItemCollected(EntityKind),
    Refilled { kind: EntityKind, amount: f32 },
    LifeLost { kind: EntityKind, remaining: u8 },
    MilestoneReached(ImpactReport),
    GameOver(GameOverCause),
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub session: Session,
    pub milestone: Milestone,
    pub player: Player,
    /// Live spawned entities
    pub entities: Vec<Entity>,
    pub spawner: Spawner,
    /// Ticks run while playing
    pub time_ticks: u64,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player = Player::spawn(tuning.arena_height, tuning.player_speed);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::NotStarted,
            session: Session::fresh(),
            milestone: Milestone::Unreached,
            player,
            entities: Vec::new(),
            spawner: Spawner::new(),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    #[inline]
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.tuning.arena_width, self.tuning.arena_height)
    }

    /// Live entities, read-only
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn emit_all(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        self.events.extend(events);
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Clear the arena and refill energy/lives; score is left alone
    fn soft_reset(&mut self) {
        self.session.resource = MAX_RESOURCE;
        self.session.lives = MAX_LIVES;
        self.entities.clear();
        self.spawner.reset();
        self.player = Player::spawn(self.tuning.arena_height, self.tuning.player_speed);
        self.emit(GameEvent::ResourceChanged(self.session.resource));
        self.emit(GameEvent::LivesChanged(self.session.lives));
    }

    /// Everything back to a fresh session
    fn hard_reset(&mut self) {
        self.soft_reset();
        self.session.score = 0;
        self.milestone = Milestone::Unreached;
        self.emit(GameEvent::ScoreChanged(0));
    }

    /// Start the first session. Only valid before anything has been played;
    /// use [`restart`](Self::restart) afterwards.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            return false;
        }
        self.begin_session();
        true
    }

    /// Hard restart from any phase. A milestone deferred by the previous
    /// run's game over is displayed before play resumes.
    pub fn restart(&mut self) {
        let deferred = (self.milestone == Milestone::Deferred)
            .then(|| ImpactReport::for_score(self.session.score));
        self.begin_session();
        if let Some(report) = deferred {
            self.show_interstitial(report);
        }
    }

    fn begin_session(&mut self) {
        self.hard_reset();
        self.phase = GamePhase::Playing;
        log::info!("Session started (seed {})", self.seed);
        self.emit(GameEvent::Started);
    }

    /// Soft reset out of game over: energy, lives and entities reset, score kept
    pub fn continue_run(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::GameOver(_)) {
            return false;
        }
        self.soft_reset();
        log::info!("Continuing with score {}", self.session.score);
        if self.milestone == Milestone::Deferred {
            self.milestone = Milestone::Shown;
            self.show_interstitial(ImpactReport::for_score(self.session.score));
        } else {
            self.phase = GamePhase::Playing;
            self.emit(GameEvent::Resumed);
        }
        true
    }

    /// Dismiss the interstitial and resume play
    pub fn acknowledge(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Interstitial(_)) {
            return false;
        }
        self.phase = GamePhase::Playing;
        self.emit(GameEvent::Resumed);
        true
    }

    fn show_interstitial(&mut self, report: ImpactReport) {
        log::info!(
            "Milestone: {} items, {:.8}% of ocean debris",
            report.score,
            report.percent
        );
        self.phase = GamePhase::Interstitial(report);
        self.emit(GameEvent::MilestoneReached(report));
    }

    /// Phase transition at the end of a playing tick
    pub(crate) fn evaluate_transitions(&mut self) {
        let crossed = self.milestone == Milestone::Unreached
            && self.session.score >= self.tuning.milestone_score;

        if let Some(cause) = self.session.end_cause() {
            if crossed {
                self.milestone = Milestone::Deferred;
            }
            self.phase = GamePhase::GameOver(cause);
            log::info!(
                "Game over ({cause:?}) with score {} after {} ticks",
                self.session.score,
                self.time_ticks
            );
            self.emit(GameEvent::GameOver(cause));
        } else if crossed {
            self.milestone = Milestone::Shown;
            self.show_interstitial(ImpactReport::for_score(self.session.score));
        }
    }
}
