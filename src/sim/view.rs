//! Read-only render snapshot
//!
//! The renderer collaborator reads one `Frame` per tick after the pipeline
//! completes; the sim never calls into rendering. A frame lists the alive,
//! non-collided entities plus the camera pose and HUD values.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::{GameState, TextureId};

/// One drawable entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderInstance {
    pub texture: TextureId,
    pub pos: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

/// Camera pose for view-matrix construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraPose {
    pub pos: Vec3,
    pub looking: Vec3,
    pub up: Vec3,
}

/// Overlay values
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub health: i32,
    pub won: bool,
    pub lost: bool,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub camera: CameraPose,
    pub instances: Vec<RenderInstance>,
    pub hud: Hud,
}

impl GameState {
    /// Snapshot the drawable state after a tick
    pub fn render_frame(&self) -> Frame {
        let mut instances = Vec::with_capacity(self.objects.len() + self.enemies.len());

        for object in &self.objects {
            if object.alive && !object.collided {
                instances.push(RenderInstance {
                    texture: object.texture,
                    pos: object.pos,
                    rotation: object.rotation,
                    scale: object.scale,
                });
            }
        }
        for enemy in &self.enemies {
            if enemy.alive && !enemy.collided {
                instances.push(RenderInstance {
                    texture: enemy.texture,
                    pos: enemy.pos,
                    rotation: enemy.rotation,
                    scale: enemy.scale,
                });
            }
        }

        Frame {
            camera: CameraPose {
                pos: self.player.pos,
                looking: self.player.looking,
                up: self.player.up,
            },
            instances,
            hud: Hud {
                score: self.score,
                health: self.player.health,
                won: self.won(),
                lost: self.lost(),
            },
        }
    }
}
