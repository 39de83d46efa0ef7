//! Game state and core simulation types
//!
//! Entities live in two collections: `objects` (obstacles, bullets,
//! fireballs) and `enemies`. Death never removes an entity from storage -
//! `alive` is flipped off and the record stays as an inert tombstone, so
//! indices and iteration order remain stable for the life of the run.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::consts::*;

/// Current phase of the run
///
/// `Won` and `Lost` are terminal: once entered, `tick` is a no-op, so the
/// phase is sticky and the two can never both occur in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// World-object kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Static scenery cube, immortal
    Obstacle,
    /// Small fast cube fired from the camera
    Bullet { owner: ProjectileOwner },
    /// Enemy ranged attack, aimed once at launch
    Fireball { owner: ProjectileOwner },
}

impl ObjectKind {
    #[inline]
    pub fn is_obstacle(&self) -> bool {
        matches!(self, ObjectKind::Obstacle)
    }

    /// Owner tag for projectile kinds
    pub fn owner(&self) -> Option<ProjectileOwner> {
        match self {
            ObjectKind::Obstacle => None,
            ObjectKind::Bullet { owner } | ObjectKind::Fireball { owner } => Some(*owner),
        }
    }
}

/// Texture handle for the renderer collaborator to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureId {
    Ground,
    Crate,
    Ghost,
    Ember,
}

/// A non-enemy entity: obstacle, bullet, or fireball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldObject {
    pub id: u32,
    pub kind: ObjectKind,
    pub pos: Vec3,
    /// Cosmetic only, never read by collision
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Half-width proxy for the cube, fixed at creation from `scale.x`
    pub collider_radius: f32,
    /// Movement heading; renormalized before use
    pub dir: Vec3,
    /// Units per millisecond
    pub speed: f32,
    pub age_ms: f32,
    /// `None` means the object never expires by age
    pub lifespan_ms: Option<f32>,
    pub alive: bool,
    /// Per-frame flag: set by the collision passes, cleared at tick start.
    /// A collided-but-alive object skips rendering that frame only.
    pub collided: bool,
    pub texture: TextureId,
}

impl WorldObject {
    /// Static scenery cube with the given side length
    pub fn obstacle(id: u32, ground_pos: Vec2, side: f32) -> Self {
        Self {
            id,
            kind: ObjectKind::Obstacle,
            pos: Vec3::new(ground_pos.x, ground_pos.y, 0.0),
            rotation: Vec3::ZERO,
            scale: Vec3::splat(side),
            collider_radius: side,
            dir: Vec3::ZERO,
            speed: 0.0,
            age_ms: 0.0,
            lifespan_ms: None,
            alive: true,
            collided: false,
            texture: TextureId::Crate,
        }
    }

    /// Player bullet launched along the camera look direction
    pub fn bullet(id: u32, pos: Vec3, dir: Vec3) -> Self {
        Self {
            id,
            kind: ObjectKind::Bullet {
                owner: ProjectileOwner::Player,
            },
            pos,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(BULLET_SIDE),
            collider_radius: BULLET_SIDE,
            dir,
            speed: BULLET_SPEED,
            age_ms: 0.0,
            lifespan_ms: Some(BULLET_LIFESPAN_MS),
            alive: true,
            collided: false,
            texture: TextureId::Crate,
        }
    }

    /// Enemy fireball aimed at the player at the instant of firing
    pub fn fireball(id: u32, pos: Vec3, dir: Vec3) -> Self {
        Self {
            id,
            kind: ObjectKind::Fireball {
                owner: ProjectileOwner::Enemy,
            },
            pos,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(FIREBALL_SIDE),
            collider_radius: FIREBALL_SIDE,
            dir,
            speed: FIREBALL_SPEED,
            age_ms: 0.0,
            lifespan_ms: Some(FIREBALL_LIFESPAN_MS),
            alive: true,
            collided: false,
            texture: TextureId::Ember,
        }
    }
}

/// A homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub collider_radius: f32,
    /// Recomputed toward the player every tick
    pub dir: Vec3,
    /// Units per millisecond, rolled at spawn
    pub speed: f32,
    pub alive: bool,
    pub collided: bool,
    /// Session-clock stamp of the last fireball launch
    pub last_shot_ms: f32,
    pub texture: TextureId,
}

impl Enemy {
    pub fn new(id: u32, ground_pos: Vec2, speed: f32, now_ms: f32) -> Self {
        Self {
            id,
            pos: Vec3::new(ground_pos.x, ground_pos.y, ENEMY_HEIGHT),
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            collider_radius: ENEMY_COLLIDER,
            dir: Vec3::ZERO,
            speed,
            alive: true,
            collided: false,
            last_shot_ms: now_ms,
            texture: TextureId::Ghost,
        }
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; obstacle layout and spawns draw from this stream only
    pub rng: Pcg32,
    /// Session clock, accumulated from tick deltas
    pub elapsed_ms: f32,
    pub phase: GamePhase,
    pub player: Player,
    /// Monotonic kill-score accumulator
    pub score: u32,
    /// Idle time since the last spawn attempt
    pub spawn_timer_ms: f32,
    /// Current spawn interval; tightens toward the floor after every attempt
    pub spawn_interval_ms: f32,
    /// Obstacles, bullets, and fireballs
    pub objects: Vec<WorldObject>,
    pub enemies: Vec<Enemy>,
    next_id: u32,
}

impl GameState {
    /// Create a run with randomized obstacle scenery
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            elapsed_ms: 0.0,
            phase: GamePhase::Playing,
            player: Player::default(),
            score: 0,
            spawn_timer_ms: 0.0,
            spawn_interval_ms: SPAWN_INTERVAL_START_MS,
            objects: Vec::new(),
            enemies: Vec::new(),
            next_id: 1,
        };

        for _ in 0..NUM_OBSTACLES {
            let half = OBSTACLE_REGION_HALF_EXTENT;
            let x = state.rng.random_range(-half..half);
            let y = state.rng.random_range(-half..half);
            let side = state.rng.random_range(OBSTACLE_SIDE_MIN..OBSTACLE_SIDE_MAX);
            let id = state.next_entity_id();
            state
                .objects
                .push(WorldObject::obstacle(id, Vec2::new(x, y), side));
        }

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The external fire action: the only way a bullet is created
    ///
    /// Spawns at the player's current position along the current look
    /// direction. There is no player-side cooldown.
    pub fn fire_bullet(&mut self) {
        let pos = self.player.pos;
        let dir = self.player.looking;
        let id = self.next_entity_id();
        self.objects.push(WorldObject::bullet(id, pos, dir));
        log::debug!("bullet {id} fired from {pos}");
    }

    pub fn won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    /// Count of enemies still in play
    pub fn live_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }
}
