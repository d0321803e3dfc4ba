//! Variable timestep simulation tick
//!
//! One call is one display frame: movement, spawning, collision, resource
//! decay, then phase transitions. Nothing outside this function mutates the
//! simulation while playing.

use super::collision;
use super::input::HeldDirections;
use super::movement::{advance_entity, advance_player};
use super::spawner::spawn_entity;
use super::state::{GameEvent, GameState};

/// Clamp a frame's elapsed time to `[0, max_dt]`; NaN counts as no time
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() { 0.0 } else { dt.clamp(0.0, max_dt) }
}

/// Whole-percent energy reading changed, or the tank just ran dry
fn gauge_moved(before: f64, after: f64) -> bool {
    before.floor() != after.floor() || (before <= 0.0) != (after <= 0.0)
}

/// Advance the game state by `dt` ms of frame time at absolute time `t` ms
pub fn tick(state: &mut GameState, held: HeldDirections, dt: f32, t: f64) {
    // Frozen outside of play
    if !state.is_playing() {
        return;
    }

    let dt = clamp_dt(dt, state.tuning.max_tick_dt_ms);
    state.time_ticks += 1;
    let arena = state.arena();

    // Movement
    advance_player(&mut state.player, held, dt, arena);
    for entity in &mut state.entities {
        advance_entity(entity, dt, t, &mut state.rng);
    }

    // Spawning
    for pool in state.spawner.due(t, state.entities.len(), &state.tuning) {
        let id = state.next_entity_id();
        if let Some(entity) = spawn_entity(pool, id, &state.tuning, &mut state.rng) {
            state.entities.push(entity);
        }
    }

    // Collisions and decay work on a copy of the counters, committed once
    let before = state.session;
    let mut session = before;
    let mut events = Vec::new();
    let player_box = state.player.bounds();
    collision::resolve(&player_box, &mut state.entities, &mut session, &mut events);
    session.drain(state.tuning.resource_decay_per_ms * f64::from(dt));
    state.session = session;

    state.emit_all(events);
    if session.score != before.score {
        state.emit(GameEvent::ScoreChanged(session.score));
    }
    if session.lives != before.lives {
        state.emit(GameEvent::LivesChanged(session.lives));
    }
    if gauge_moved(before.resource, session.resource) {
        state.emit(GameEvent::ResourceChanged(session.resource));
    }

    state.evaluate_transitions();
}
