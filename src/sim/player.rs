//! Player camera rig
//!
//! The player is not an entity in either collection: it is the camera. Its
//! basis vectors mirror a classic FPS rig with a world-Z up axis. Yaw spins
//! the whole rig about +Z; pitch tilts only the look direction (and up) about
//! the side vector, and is refused once the look would tip past vertical.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// World up axis (Z-up, ground plane is XY)
pub const UP_AXIS: Vec3 = Vec3::Z;

/// The player: camera pose plus health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Eye position in world space
    pub pos: Vec3,
    /// Horizontal heading (yaw only, movement uses this)
    pub forward: Vec3,
    /// Full view direction including pitch (bullets use this)
    pub looking: Vec3,
    /// Camera up vector
    pub up: Vec3,
    /// Strafe axis, `up x forward`
    pub side: Vec3,
    /// Current health, clamped to [0, PLAYER_MAX_HEALTH]
    pub health: i32,
}

impl Default for Player {
    fn default() -> Self {
        let forward = Vec3::new(1.0, 1.0, 0.0).normalize();
        Self {
            pos: Vec3::new(0.0, 0.0, PLAYER_EYE_HEIGHT),
            forward,
            looking: forward,
            up: UP_AXIS,
            side: UP_AXIS.cross(forward),
            health: PLAYER_MAX_HEALTH,
        }
    }
}

fn rotate_about(v: Vec3, axis: Vec3, radians: f32) -> Vec3 {
    Quat::from_axis_angle(axis, radians) * v
}

impl Player {
    /// Rotate the whole rig about the world up axis
    pub fn yaw(&mut self, radians: f32) {
        self.forward = rotate_about(self.forward, UP_AXIS, radians).normalize();
        self.looking = rotate_about(self.looking, UP_AXIS, radians).normalize();
        self.side = rotate_about(self.side, UP_AXIS, radians).normalize();
        self.up = rotate_about(self.up, UP_AXIS, radians).normalize();
    }

    /// Tilt the look direction about the side vector
    ///
    /// The rotation is discarded if it would carry the view past vertical
    /// (the tilted look must keep a positive component along the heading).
    pub fn pitch(&mut self, radians: f32) {
        let axis = self.side.normalize();
        let tilted = rotate_about(self.looking, axis, radians);
        if tilted.dot(self.forward) > 0.0 {
            self.looking = tilted.normalize();
            self.up = rotate_about(self.up, axis, radians).normalize();
        }
    }

    /// Step along the horizontal heading (`sign` +1 forward, -1 back)
    pub fn advance(&mut self, sign: f32, dt_ms: f32) {
        self.pos += self.forward * (sign * PLAYER_SPEED * dt_ms);
    }

    /// Step along the strafe axis (`sign` +1 left, -1 right)
    pub fn strafe(&mut self, sign: f32, dt_ms: f32) {
        self.pos += self.side * (sign * PLAYER_SPEED * dt_ms);
    }

    /// Apply damage, clamped at zero. Returns the resulting health.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).max(0);
        self.health
    }
}
