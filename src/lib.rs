//! Ghostfire - a first-person arena survival demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, combat, game state)
//! - `settings`: User preferences persisted as JSON
//!
//! Rendering, windowing, and raw input decoding are external collaborators:
//! the sim exposes a per-tick entry point (`sim::tick`) and a read-only
//! render snapshot (`sim::view`), and never calls out.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Speeds are in world units per millisecond and times in milliseconds,
/// matching the external monotonic-ms clock that drives the tick.
pub mod consts {
    /// Session length to survive for a win
    pub const WIN_TIME_MS: f32 = 30_000.0;
    /// Starting (and maximum) player health
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Health lost per fireball hit or melee contact
    pub const HIT_DAMAGE: i32 = 10;
    /// Score awarded per enemy kill
    pub const KILL_SCORE: u32 = 20;

    /// Spawn cadence: start interval, hard floor, tightening step
    pub const SPAWN_INTERVAL_START_MS: f32 = 3000.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 500.0;
    pub const SPAWN_INTERVAL_STEP_MS: f32 = 50.0;
    /// Half-extent of the square ground region enemies spawn in
    pub const SPAWN_REGION_HALF_EXTENT: f32 = 20.0;
    /// Candidates closer than this to the player are rejected
    pub const SPAWN_SAFETY_RADIUS: f32 = 5.0;

    /// Enemy defaults
    pub const ENEMY_COLLIDER: f32 = 0.9;
    pub const ENEMY_HEIGHT: f32 = 0.5;
    pub const ENEMY_SPEED_MIN: f32 = 0.010;
    pub const ENEMY_SPEED_MAX: f32 = 0.028;
    /// Per-enemy ranged attack cooldown
    pub const ENEMY_FIRE_COOLDOWN_MS: f32 = 2000.0;

    /// Player bullet defaults
    pub const BULLET_SIDE: f32 = 0.07;
    pub const BULLET_SPEED: f32 = 0.01;
    pub const BULLET_LIFESPAN_MS: f32 = 4000.0;

    /// Enemy fireball defaults
    pub const FIREBALL_SIDE: f32 = 0.3;
    pub const FIREBALL_SPEED: f32 = 0.008;
    pub const FIREBALL_LIFESPAN_MS: f32 = 4000.0;

    /// World obstacles, placed once at init
    pub const NUM_OBSTACLES: usize = 20;
    pub const OBSTACLE_REGION_HALF_EXTENT: f32 = 50.0;
    pub const OBSTACLE_SIDE_MIN: f32 = 0.1;
    pub const OBSTACLE_SIDE_MAX: f32 = 10.0;

    /// Player camera rig
    pub const PLAYER_EYE_HEIGHT: f32 = 0.8;
    /// Travel speed (units per ms; 300 units per second)
    pub const PLAYER_SPEED: f32 = 0.3;
}
