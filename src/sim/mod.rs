//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only through `tick` with an externally supplied delta
//! - Seeded RNG only
//! - Stable iteration order (insertion order, storage never compacted)
//! - No rendering or platform dependencies

pub mod collision;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{box_proximity, melee_contact, point_proximity};
pub use player::Player;
pub use state::{Enemy, GamePhase, GameState, ObjectKind, ProjectileOwner, TextureId, WorldObject};
pub use tick::{TickInput, tick};
pub use view::{CameraPose, Frame, Hud, RenderInstance};
