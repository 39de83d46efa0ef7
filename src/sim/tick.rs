//! Per-frame simulation tick
//!
//! One tick runs the fixed pipeline: input -> spawner -> motion & lifecycle
//! -> collision -> combat resolution -> win check. The host event loop owns
//! frame delivery and timing; `dt_ms` is the difference between consecutive
//! samples of its monotonic clock and may be zero (no motion, not an error).
//! Once the run is terminal the whole tick is a no-op.

use glam::Vec3;

use super::collision;
use super::spawn;
use super::state::{GamePhase, GameState, ObjectKind, ProjectileOwner, WorldObject};
use crate::consts::*;

/// Input commands for a single tick
///
/// Decoded by the host from key/pointer events; deltas are already in
/// radians (pointer sensitivity is applied by the host).
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_forward: bool,
    pub move_back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    /// Fire one bullet this tick
    pub fire: bool,
    pub yaw_delta: f32,
    pub pitch_delta: f32,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if state.phase.is_terminal() {
        return;
    }

    state.elapsed_ms += dt_ms;

    apply_input(state, input, dt_ms);
    spawn::run(state, dt_ms);
    clear_collision_flags(state);
    advance_objects(state, dt_ms);
    advance_enemies(state, dt_ms);
    resolve_object_pairs(state);
    resolve_bullet_hits(state);
    resolve_fireball_hits(state);

    if state.elapsed_ms >= WIN_TIME_MS && !state.phase.is_terminal() {
        state.phase = GamePhase::Won;
        log::info!(
            "survived {}ms - you win! score {}",
            state.elapsed_ms,
            state.score
        );
    }
}

fn apply_input(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if input.yaw_delta != 0.0 {
        state.player.yaw(input.yaw_delta);
    }
    if input.pitch_delta != 0.0 {
        state.player.pitch(input.pitch_delta);
    }

    if input.move_forward {
        state.player.advance(1.0, dt_ms);
    }
    if input.move_back {
        state.player.advance(-1.0, dt_ms);
    }
    if input.strafe_left {
        state.player.strafe(1.0, dt_ms);
    }
    if input.strafe_right {
        state.player.strafe(-1.0, dt_ms);
    }

    if input.fire {
        state.fire_bullet();
    }
}

/// Collision flags only suppress rendering for the frame they were set in
fn clear_collision_flags(state: &mut GameState) {
    for object in &mut state.objects {
        object.collided = false;
    }
    for enemy in &mut state.enemies {
        enemy.collided = false;
    }
}

/// Age and move every finite-lifespan world object; expire the overdue
fn advance_objects(state: &mut GameState, dt_ms: f32) {
    for object in &mut state.objects {
        let Some(lifespan) = object.lifespan_ms else {
            continue; // immortal scenery never ages
        };
        if !object.alive {
            continue;
        }

        if object.age_ms >= lifespan {
            object.alive = false;
            continue;
        }

        // Stored heading may be unnormalized; a zero heading means "not
        // moving yet" and must not be normalized.
        let heading = object.dir.normalize_or_zero();
        if heading != Vec3::ZERO {
            object.pos += heading * (object.speed * dt_ms);
        }
        object.age_ms += dt_ms;
    }
}

/// Per-enemy pass: homing movement, melee contact, ranged cooldown
fn advance_enemies(state: &mut GameState, dt_ms: f32) {
    let player_pos = state.player.pos;

    for i in 0..state.enemies.len() {
        if !state.enemies[i].alive {
            continue;
        }

        // Continuous homing: re-aim at the player every tick
        {
            let enemy = &mut state.enemies[i];
            let heading = (player_pos - enemy.pos).normalize_or_zero();
            if heading != Vec3::ZERO {
                enemy.dir = heading;
                enemy.pos += heading * (enemy.speed * dt_ms);
            }
        }

        let (enemy_pos, enemy_radius) = {
            let enemy = &state.enemies[i];
            (enemy.pos, enemy.collider_radius)
        };

        // Melee contact kills the enemy and costs the player health
        if collision::melee_contact(enemy_pos, enemy_radius, player_pos)
            && !state.phase.is_terminal()
            && state.player.health > 0
        {
            let health = state.player.apply_damage(HIT_DAMAGE);
            state.enemies[i].alive = false;
            log::info!("melee hit! health {health}");
            if health == 0 {
                state.phase = GamePhase::Lost;
                log::info!("game over - overrun at {}ms", state.elapsed_ms);
            }
            continue;
        }

        // Ranged attack: each enemy cools down independently
        if state.elapsed_ms - state.enemies[i].last_shot_ms > ENEMY_FIRE_COOLDOWN_MS {
            let aim = (player_pos - enemy_pos).normalize_or_zero();
            if aim != Vec3::ZERO {
                let id = state.next_entity_id();
                state
                    .objects
                    .push(WorldObject::fireball(id, enemy_pos, aim));
                log::debug!("enemy {} fired fireball {id}", state.enemies[i].id);
            }
            state.enemies[i].last_shot_ms = state.elapsed_ms;
        }
    }
}

/// World-object cross pass: flag touching pairs, no other state change
///
/// Obstacle-vs-obstacle pairs are exempt; collisions among static scenery
/// are meaningless.
fn resolve_object_pairs(state: &mut GameState) {
    for i in 0..state.objects.len() {
        for j in (i + 1)..state.objects.len() {
            let hit = {
                let (a, b) = (&state.objects[i], &state.objects[j]);
                a.alive
                    && b.alive
                    && !(a.kind.is_obstacle() && b.kind.is_obstacle())
                    && collision::box_proximity(a.pos, a.collider_radius, b.pos, b.collider_radius)
            };
            if hit {
                state.objects[i].collided = true;
                state.objects[j].collided = true;
            }
        }
    }
}

/// Player bullets vs enemies: both die, score is awarded
///
/// Kill effects are idempotent per pair: a dead enemy fails the `alive` gate
/// on every later evaluation, so the reward cannot double-count.
fn resolve_bullet_hits(state: &mut GameState) {
    for bi in 0..state.objects.len() {
        let is_player_bullet = matches!(
            state.objects[bi].kind,
            ObjectKind::Bullet {
                owner: ProjectileOwner::Player
            }
        );
        if !is_player_bullet {
            continue;
        }

        for ei in 0..state.enemies.len() {
            let hit = {
                let (bullet, enemy) = (&state.objects[bi], &state.enemies[ei]);
                bullet.alive
                    && enemy.alive
                    && collision::box_proximity(
                        bullet.pos,
                        bullet.collider_radius,
                        enemy.pos,
                        enemy.collider_radius,
                    )
            };
            if hit {
                state.objects[bi].alive = false;
                state.objects[bi].collided = true;
                state.enemies[ei].alive = false;
                state.enemies[ei].collided = true;
                state.score += KILL_SCORE;
                log::info!("bullet hit enemy! score {}", state.score);
            }
        }
    }
}

/// Enemy fireballs vs the player (point test, threshold radius/2)
fn resolve_fireball_hits(state: &mut GameState) {
    let player_pos = state.player.pos;

    for fi in 0..state.objects.len() {
        let hit = {
            let fireball = &state.objects[fi];
            fireball.alive
                && matches!(
                    fireball.kind,
                    ObjectKind::Fireball {
                        owner: ProjectileOwner::Enemy
                    }
                )
                && collision::point_proximity(fireball.pos, fireball.collider_radius, player_pos)
        };
        if !hit {
            continue;
        }

        state.objects[fi].alive = false;
        state.objects[fi].collided = true;

        if !state.phase.is_terminal() {
            let health = state.player.apply_damage(HIT_DAMAGE);
            log::info!("fireball hit! health {health}");
            if health == 0 {
                state.phase = GamePhase::Lost;
                log::info!("game over - burned down at {}ms", state.elapsed_ms);
            }
        }
    }
}
