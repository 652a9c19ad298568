use serde::{Deserialize, Serialize};

use crate::types::Revision;

use super::actor_id::ActorId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A discrete animation tag plus its state payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationAction {
    #[serde(rename = "type")]
    pub kind: i32,
    pub state: i32,
}

impl AnimationAction {
    pub const fn new(kind: i32, state: i32) -> Self {
        Self { kind, state }
    }
}

impl Default for AnimationAction {
    fn default() -> Self {
        Self::new(0, -1)
    }
}

pub const DEFAULT_SPEED: f32 = 1.4;

/// Authoritative state of one replicated entity
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub actor_id: ActorId,
    pub revision: Revision,
    pub deleted: bool,
    pub collidable: bool,
    pub movable: bool,
    pub speed: f32,
    pub color: u32,
    pub asset_id: u16,
    pub action: AnimationAction,
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
    pub up: Vector3,
}

impl Actor {
    pub fn new(actor_id: ActorId) -> Self {
        Self {
            actor_id,
            revision: 0,
            deleted: false,
            collidable: true,
            movable: false,
            speed: DEFAULT_SPEED,
            color: 0,
            asset_id: 0,
            action: AnimationAction::default(),
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
            up: Vector3::UP,
        }
    }
}
