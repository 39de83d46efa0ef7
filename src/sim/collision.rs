//! Proximity predicates for combat resolution
//!
//! Colliders are a single half-width scalar per entity (derived from its
//! cube side at creation). The box test is a symmetric per-axis threshold,
//! not a true box overlap: two entities collide iff every axis-wise distance
//! is within the sum of their half-reaches.

use glam::Vec3;

/// Axis-wise proximity between two box colliders
#[inline]
pub fn box_proximity(a_pos: Vec3, a_radius: f32, b_pos: Vec3, b_radius: f32) -> bool {
    let reach = a_radius / 2.0 + b_radius / 2.0;
    (a_pos.x - b_pos.x).abs() <= reach
        && (a_pos.y - b_pos.y).abs() <= reach
        && (a_pos.z - b_pos.z).abs() <= reach
}

/// Axis-wise proximity between a box collider and a point
///
/// Used for enemy fire against the player, who has no collider of their own.
#[inline]
pub fn point_proximity(box_pos: Vec3, box_radius: f32, point: Vec3) -> bool {
    let reach = box_radius / 2.0;
    (box_pos.x - point.x).abs() <= reach
        && (box_pos.y - point.y).abs() <= reach
        && (box_pos.z - point.z).abs() <= reach
}

/// Euclidean contact test for enemy melee against the player
#[inline]
pub fn melee_contact(enemy_pos: Vec3, enemy_radius: f32, player_pos: Vec3) -> bool {
    (player_pos - enemy_pos).length() < enemy_radius / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_proximity_within_reach() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(0.9, 0.0, 0.0);
        // half-reaches 0.5 + 0.5 = 1.0
        assert!(box_proximity(a, 1.0, b, 1.0));
        assert!(!box_proximity(a, 1.0, Vec3::new(1.1, 0.0, 0.0), 1.0));
    }

    #[test]
    fn test_box_proximity_requires_all_axes() {
        let a = Vec3::ZERO;
        // Close on x and y but separated on z
        let b = Vec3::new(0.1, 0.1, 5.0);
        assert!(!box_proximity(a, 1.0, b, 1.0));
    }

    #[test]
    fn test_box_proximity_symmetric() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.4, 2.2, 3.1);
        assert_eq!(box_proximity(a, 0.5, b, 0.9), box_proximity(b, 0.9, a, 0.5));
    }

    #[test]
    fn test_point_proximity_threshold_is_half_radius() {
        let fireball = Vec3::new(0.1, 0.0, 0.0);
        // radius 0.3 -> reach 0.15 per axis
        assert!(point_proximity(fireball, 0.3, Vec3::ZERO));
        assert!(!point_proximity(Vec3::new(0.2, 0.0, 0.0), 0.3, Vec3::ZERO));
    }

    #[test]
    fn test_melee_contact_threshold() {
        // Enemy collider 0.9 -> contact inside 0.45
        let player = Vec3::new(0.0, 0.0, 0.8);
        assert!(melee_contact(player + Vec3::new(0.4, 0.0, 0.0), 0.9, player));
        assert!(!melee_contact(player + Vec3::new(0.5, 0.0, 0.0), 0.9, player));
    }
}
