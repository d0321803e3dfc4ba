//! Player/entity collision resolution
//!
//! One filtering pass builds the next live set: overlapping entities are
//! consumed and apply their effect, entities that scrolled off the left edge
//! are dropped without effect. Collision takes precedence over exiting.

use super::entity::{Aabb, Entity};
use super::kind::Classification;
use super::state::{GameEvent, Session};

/// Effect of a single consumed entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionEffect {
    Collected,
    Refilled { amount: f32 },
    Hit,
}

/// Apply the effect of touching `entity` to the session counters
pub fn apply_effect(
    entity: &Entity,
    session: &mut Session,
    events: &mut Vec<GameEvent>,
) -> CollisionEffect {
    match entity.classification() {
        Classification::Refill => {
            let amount = entity.kind.profile().refill_amount;
            session.refill(f64::from(amount));
            events.push(GameEvent::Refilled {
                kind: entity.kind,
                amount,
            });
            CollisionEffect::Refilled { amount }
        }
        Classification::Collectible => {
            session.score = session.score.saturating_add(1);
            events.push(GameEvent::ItemCollected(entity.kind));
            CollisionEffect::Collected
        }
        Classification::Hazard => {
            session.lives = session.lives.saturating_sub(1);
            events.push(GameEvent::LifeLost {
                kind: entity.kind,
                remaining: session.lives,
            });
            CollisionEffect::Hit
        }
    }
}

/// Resolve every overlap against the player and cull exited entities.
/// Returns the number of entities consumed by collision.
pub fn resolve(
    player: &Aabb,
    entities: &mut Vec<Entity>,
    session: &mut Session,
    events: &mut Vec<GameEvent>,
) -> usize {
    let mut consumed = 0;
    entities.retain(|entity| {
        if player.overlaps(&entity.bounds()) {
            apply_effect(entity, session, events);
            consumed += 1;
            return false;
        }
        !entity.is_out_of_arena()
    });
    consumed
}
