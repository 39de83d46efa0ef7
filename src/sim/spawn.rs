//! Timed enemy spawner
//!
//! An accelerating cadence: every time the idle timer crosses the current
//! interval one spawn is attempted, the timer resets, and the interval
//! tightens by a fixed step down to a hard floor. Attempts are rejected
//! (timer still resets) when the candidate lands inside the safety radius
//! around the player - that is a silent skip, not a failure.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameState};
use crate::consts::*;

/// Advance the spawn timer and attempt a spawn if it is due
pub fn run(state: &mut GameState, dt_ms: f32) {
    if state.phase.is_terminal() {
        return;
    }

    state.spawn_timer_ms += dt_ms;
    if state.spawn_timer_ms < state.spawn_interval_ms {
        return;
    }
    state.spawn_timer_ms = 0.0;

    let half = SPAWN_REGION_HALF_EXTENT;
    let candidate = Vec2::new(
        state.rng.random_range(-half..half),
        state.rng.random_range(-half..half),
    );
    let speed = state.rng.random_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);
    attempt(state, candidate, speed);

    // Tighten the cadence whether or not the attempt succeeded
    state.spawn_interval_ms =
        (state.spawn_interval_ms - SPAWN_INTERVAL_STEP_MS).max(SPAWN_INTERVAL_FLOOR_MS);
}

/// Try to place an enemy at `ground_pos`; rejected inside the safety radius
pub fn attempt(state: &mut GameState, ground_pos: Vec2, speed: f32) -> bool {
    let player_ground = Vec2::new(state.player.pos.x, state.player.pos.y);
    if ground_pos.distance(player_ground) < SPAWN_SAFETY_RADIUS {
        log::debug!("spawn at {ground_pos} rejected, too close to player");
        return false;
    }

    let id = state.next_entity_id();
    state
        .enemies
        .push(Enemy::new(id, ground_pos, speed, state.elapsed_ms));
    log::debug!("enemy {id} spawned at {ground_pos}, speed {speed}");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;

    #[test]
    fn test_attempt_rejected_inside_safety_radius() {
        let mut state = GameState::new(5);
        // Player is at the origin; 3 units is inside the 5-unit radius
        assert!(!attempt(&mut state, Vec2::new(3.0, 0.0), 0.02));
        assert_eq!(state.enemies.len(), 0);
    }

    #[test]
    fn test_attempt_succeeds_outside_safety_radius() {
        let mut state = GameState::new(5);
        assert!(attempt(&mut state, Vec2::new(10.0, 0.0), 0.02));
        assert_eq!(state.enemies.len(), 1);

        let enemy = &state.enemies[0];
        assert!(enemy.alive);
        assert_eq!(enemy.collider_radius, ENEMY_COLLIDER);
        assert_eq!(enemy.dir, glam::Vec3::ZERO);
        assert_eq!(enemy.last_shot_ms, state.elapsed_ms);
    }

    #[test]
    fn test_timer_resets_and_interval_tightens_on_every_attempt() {
        let mut state = GameState::new(5);
        state.spawn_timer_ms = 2_999.0;
        run(&mut state, 10.0);

        assert_eq!(state.spawn_timer_ms, 0.0);
        assert_eq!(
            state.spawn_interval_ms,
            SPAWN_INTERVAL_START_MS - SPAWN_INTERVAL_STEP_MS
        );
    }

    #[test]
    fn test_interval_floors_after_fifty_attempts() {
        let mut state = GameState::new(5);
        for _ in 0..50 {
            let interval = state.spawn_interval_ms;
            run(&mut state, interval + 1.0);
            assert!(state.spawn_interval_ms <= interval); // non-increasing
        }
        assert_eq!(state.spawn_interval_ms, SPAWN_INTERVAL_FLOOR_MS);

        // Further attempts stay on the floor
        run(&mut state, SPAWN_INTERVAL_FLOOR_MS + 1.0);
        assert_eq!(state.spawn_interval_ms, SPAWN_INTERVAL_FLOOR_MS);
    }

    #[test]
    fn test_no_spawns_once_terminal() {
        let mut state = GameState::new(5);
        state.phase = GamePhase::Won;
        run(&mut state, SPAWN_INTERVAL_START_MS + 1.0);
        assert_eq!(state.spawn_timer_ms, 0.0);
        assert_eq!(state.enemies.len(), 0);
    }
}
