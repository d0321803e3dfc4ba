//! Per-tick movement and secondary animation
//!
//! Speeds are in units per nominal 16 ms frame and scaled by `dt / 16`, so
//! motion does not depend on the display refresh rate.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, Player};
use super::input::HeldDirections;
use super::kind::{AnimationProfile, SpeedJitter};
use crate::consts::PLAYER_TILT;
use crate::frame_scale;

/// Advance a spawned entity by `dt` ms at absolute time `t` ms
pub fn advance_entity(entity: &mut Entity, dt: f32, t: f64, rng: &mut impl Rng) {
    let scale = frame_scale(dt);
    entity.pos.x -= entity.speed * scale;

    let phase = t + entity.phase_offset;
    match entity.kind.profile().animation {
        AnimationProfile::Drift {
            osc_speed,
            osc_amp,
            rot_speed,
            rot_amp,
            jitter,
        } => {
            if let Some(jitter) = jitter {
                apply_jitter(entity, &jitter, rng);
            }
            let osc_speed = f64::from(osc_speed);
            entity.pos.y += (phase * osc_speed).sin() as f32 * osc_amp * scale;
            entity.pos.x += (phase * osc_speed * 0.5).cos() as f32 * 0.4 * scale;
            entity.angle = (phase * f64::from(rot_speed)).sin() as f32 * rot_amp;
        }
        AnimationProfile::Tumble { rot_speed, rot_amp } => {
            entity.angle = (phase * f64::from(rot_speed)).sin() as f32 * rot_amp;
        }
    }
}

fn apply_jitter(entity: &mut Entity, jitter: &SpeedJitter, rng: &mut impl Rng) {
    if rng.random_bool(jitter.chance) {
        let delta = (rng.random::<f32>() - 0.5) * jitter.spread;
        entity.speed = (entity.speed + delta).clamp(jitter.min_speed, jitter.max_speed);
    }
}

/// Steer the player from held input and keep it inside the arena
pub fn advance_player(player: &mut Player, held: HeldDirections, dt: f32, arena: Vec2) {
    player.vel = held.axis();
    player.pos += player.vel * player.speed * frame_scale(dt);
    player.clamp_to(arena);

    player.angle = if player.vel.y < 0.0 {
        -PLAYER_TILT
    } else if player.vel.y > 0.0 {
        PLAYER_TILT
    } else {
        0.0
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::kind::EntityKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn arena() -> Vec2 {
        Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)
    }

    #[test]
    fn test_tumble_scrolls_left_frame_rate_independent() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut a = Entity::new(1, EntityKind::Bottle, Vec2::new(500.0, 100.0), 30.0, 3.0, 0.0);
        let mut b = a.clone();

        advance_entity(&mut a, 32.0, 0.0, &mut rng);
        advance_entity(&mut b, 16.0, 0.0, &mut rng);
        advance_entity(&mut b, 16.0, 16.0, &mut rng);

        assert!((a.pos.x - 494.0).abs() < 1e-4);
        assert!((a.pos.x - b.pos.x).abs() < 1e-4);
        // Debris never bobs vertically
        assert_eq!(a.pos.y, 100.0);
        assert!(a.angle.abs() <= 0.12);
    }

    #[test]
    fn test_drift_stays_within_amplitude() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut whale = Entity::new(1, EntityKind::Whale, Vec2::new(800.0, 300.0), 100.0, 2.0, 250.0);
        let mut t = 0.0;
        for _ in 0..100 {
            let before_y = whale.pos.y;
            advance_entity(&mut whale, 16.0, t, &mut rng);
            assert!((whale.pos.y - before_y).abs() <= 0.7 + 1e-4);
            assert!(whale.angle.abs() <= 0.18 + 1e-6);
            t += 16.0;
        }
        // Net leftward motion despite the horizontal wobble
        assert!(whale.pos.x < 800.0 - 100.0 * 2.0 + 100.0 * 0.4 + 1e-3);
    }

    #[test]
    fn test_jitter_keeps_speed_in_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut fish = Entity::new(1, EntityKind::RedFish, Vec2::new(800.0, 300.0), 30.0, 4.0, 0.0);
        for i in 0..5000 {
            advance_entity(&mut fish, 16.0, f64::from(i) * 16.0, &mut rng);
            assert!((1.2..=4.5).contains(&fish.speed));
        }
    }

    #[test]
    fn test_player_moves_and_tilts() {
        let mut player = Player::spawn(ARENA_HEIGHT, PLAYER_SPEED);
        let start = player.pos;
        let held = HeldDirections {
            up: true,
            right: true,
            ..Default::default()
        };
        advance_player(&mut player, held, 16.0, arena());
        assert!((player.pos.x - (start.x + 4.2)).abs() < 1e-4);
        assert!((player.pos.y - (start.y - 4.2)).abs() < 1e-4);
        assert_eq!(player.angle, -PLAYER_TILT);

        advance_player(&mut player, HeldDirections::default(), 16.0, arena());
        assert_eq!(player.angle, 0.0);
        assert_eq!(player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_player_clamped_not_wrapped() {
        let mut player = Player::spawn(ARENA_HEIGHT, PLAYER_SPEED);
        let held = HeldDirections {
            left: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..500 {
            advance_player(&mut player, held, 50.0, arena());
            assert!(player.bounds().contained_in(arena()));
        }
        assert_eq!(player.pos, Vec2::new(0.0, ARENA_HEIGHT - PLAYER_HEIGHT));
        assert_eq!(player.angle, PLAYER_TILT);
    }
}
