//! Timed entity spawning
//!
//! Timers run on tick time (ms), never on frame counts. Two schedules:
//! - regular spawns every `spawn_interval_ms` while under the population cap
//! - a forced refill every `refill_spawn_interval_ms`, allowed to exceed the
//!   cap by one so refills are never starved

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::entity::Entity;
use super::kind::{Classification, EntityKind};
use crate::consts::PHASE_OFFSET_RANGE;
use crate::tuning::Tuning;

/// Which kinds a spawn draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnPool {
    /// Weighted draw over every kind
    Any,
    /// Weighted draw over refill kinds only
    Refill,
}

/// Spawn timers for one session
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    last_spawn_ms: Option<f64>,
    last_refill_ms: Option<f64>,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget both timers; the next tick spawns immediately and re-arms the refill clock
    pub fn reset(&mut self) {
        self.last_spawn_ms = None;
        self.last_refill_ms = None;
    }

    /// Decide which spawns are due at time `t` and advance the timers
    pub fn due(&mut self, t: f64, population: usize, tuning: &Tuning) -> Vec<SpawnPool> {
        let mut due = Vec::new();
        let mut population = population;

        let interval_elapsed = self
            .last_spawn_ms
            .is_none_or(|last| t - last > tuning.spawn_interval_ms);
        if interval_elapsed && population < tuning.max_entities {
            due.push(SpawnPool::Any);
            self.last_spawn_ms = Some(t);
            population += 1;
        }

        match self.last_refill_ms {
            None => self.last_refill_ms = Some(t),
            Some(last) => {
                // Stays pending while over cap + 1 so the refill lands as soon as there is room
                if t - last >= tuning.refill_spawn_interval_ms && population <= tuning.max_entities {
                    due.push(SpawnPool::Refill);
                    self.last_refill_ms = Some(t);
                }
            }
        }

        due
    }
}

/// Draw a kind from the pool's weighted distribution
pub fn pick_kind(pool: SpawnPool, rng: &mut impl Rng) -> Option<EntityKind> {
    let weight = |kind: &EntityKind| kind.profile().spawn_weight;
    let picked = match pool {
        SpawnPool::Any => EntityKind::ALL.choose_weighted(rng, weight).copied(),
        SpawnPool::Refill => {
            let refills: Vec<EntityKind> =
                EntityKind::with_classification(Classification::Refill).collect();
            refills.choose_weighted(rng, weight).copied()
        }
    };
    match picked {
        Ok(kind) => Some(kind),
        Err(err) => {
            log::warn!("Spawn kind draw failed: {err}");
            None
        }
    }
}

/// Create an entity at the right edge of the arena
pub fn spawn_entity(pool: SpawnPool, id: u32, tuning: &Tuning, rng: &mut impl Rng) -> Option<Entity> {
    let kind = pick_kind(pool, rng)?;
    let profile = kind.profile();

    let size = rng.random_range(profile.size_min..=profile.size_max);
    let max_y = tuning.arena_height - size;
    let y = if max_y > 0.0 {
        rng.random_range(0.0..=max_y)
    } else {
        0.0
    };
    let speed = rng.random_range(tuning.spawn_speed_min..=tuning.spawn_speed_max);
    let phase_offset = rng.random_range(0.0..PHASE_OFFSET_RANGE);

    log::debug!("Spawned {kind:?} #{id} size {size:.1} speed {speed:.2}");
    Some(Entity::new(
        id,
        kind,
        Vec2::new(tuning.arena_width, y),
        size,
        speed,
        phase_offset,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_tick_spawns_and_arms_refill() {
        let tuning = Tuning::default();
        let mut spawner = Spawner::new();
        assert_eq!(spawner.due(5000.0, 0, &tuning), vec![SpawnPool::Any]);
        // Interval is strict
        assert!(spawner.due(6300.0, 1, &tuning).is_empty());
        assert_eq!(spawner.due(6300.5, 1, &tuning), vec![SpawnPool::Any]);
    }

    #[test]
    fn test_cap_blocks_regular_spawns() {
        let tuning = Tuning::default();
        let mut spawner = Spawner::new();
        assert!(spawner.due(0.0, 30, &tuning).is_empty());
        assert!(spawner.due(10_000.0, 30, &tuning).is_empty());
        assert_eq!(spawner.due(10_000.0, 29, &tuning), vec![SpawnPool::Any]);
    }

    #[test]
    fn test_forced_refill_ignores_cap() {
        let tuning = Tuning::default();
        let mut spawner = Spawner::new();
        spawner.due(0.0, 30, &tuning);
        assert_eq!(spawner.due(15_000.0, 30, &tuning), vec![SpawnPool::Refill]);
        // Not again until the next interval
        assert!(spawner.due(16_000.0, 31, &tuning).is_empty());
    }

    #[test]
    fn test_forced_refill_waits_when_over_cap() {
        let tuning = Tuning::default();
        let mut spawner = Spawner::new();
        spawner.due(0.0, 31, &tuning);
        assert!(spawner.due(15_000.0, 31, &tuning).is_empty());
        assert_eq!(spawner.due(15_100.0, 30, &tuning), vec![SpawnPool::Refill]);
    }

    #[test]
    fn test_regular_and_refill_same_tick_respect_cap() {
        let tuning = Tuning::default();
        let mut spawner = Spawner::new();
        spawner.due(0.0, 0, &tuning);
        let due = spawner.due(15_000.0, 29, &tuning);
        assert_eq!(due, vec![SpawnPool::Any, SpawnPool::Refill]);
    }

    #[test]
    fn test_spawn_entity_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..500 {
            let e = spawn_entity(SpawnPool::Any, id, &tuning, &mut rng).unwrap();
            let p = e.kind.profile();
            assert_eq!(e.pos.x, tuning.arena_width);
            assert!(e.pos.y >= 0.0 && e.pos.y + e.size <= tuning.arena_height);
            assert!(e.size >= p.size_min && e.size <= p.size_max);
            assert!((2.0..=4.0).contains(&e.speed));
            assert!((0.0..1000.0).contains(&e.phase_offset));
        }
    }

    #[test]
    fn test_refill_pool_only_refills() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let kind = pick_kind(SpawnPool::Refill, &mut rng).unwrap();
            assert_eq!(kind.classification(), Classification::Refill);
        }
    }

    #[test]
    fn test_weighted_draw_favors_refills() {
        let mut rng = Pcg32::seed_from_u64(99);
        let draws = 20_000;
        let refills = (0..draws)
            .filter(|_| {
                pick_kind(SpawnPool::Any, &mut rng).map(EntityKind::classification)
                    == Some(Classification::Refill)
            })
            .count();
        // 12 of 48 weight units
        let share = refills as f64 / draws as f64;
        assert!((share - 0.25).abs() < 0.02, "refill share {share}");
    }

    #[test]
    fn test_seeded_spawns_deterministic() {
        let tuning = Tuning::default();
        let mut a = Pcg32::seed_from_u64(5);
        let mut b = Pcg32::seed_from_u64(5);
        for id in 0..20 {
            let ea = spawn_entity(SpawnPool::Any, id, &tuning, &mut a).unwrap();
            let eb = spawn_entity(SpawnPool::Any, id, &tuning, &mut b).unwrap();
            assert_eq!(ea.kind, eb.kind);
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.size, eb.size);
        }
    }
}
