use serde::{Deserialize, Serialize};

use crate::types::Revision;

use super::actor::{Actor, AnimationAction, Vector3};

fn is_false(value: &bool) -> bool {
    !*value
}

/// A partial actor: every `Some` field changed to that value, every `None`
/// field is untouched. `deleted: true` is a tombstone and carries nothing but
/// the revision it was accepted at.
///
/// Compound fields (vectors, the animation action) are replaced whole.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<Revision>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collidable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<AnimationAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vector3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vector3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vector3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<Vector3>,
}

/// Copies every present field of `$from` over `$into`
macro_rules! merge_fields {
    ($into:expr, $from:expr, $($field:ident),+) => {
        $(
            if let Some(value) = $from.$field {
                $into.$field = Some(value);
            }
        )+
    };
}

/// Writes every present field of `$from` into the plain field of `$actor`
macro_rules! apply_fields {
    ($actor:expr, $from:expr, $($field:ident),+) => {
        $(
            if let Some(value) = $from.$field {
                $actor.$field = value;
            }
        )+
    };
}

impl Update {
    pub fn new() -> Self {
        Self::default()
    }

    /// The terminal `{deleted: true}` update
    pub fn tombstone() -> Self {
        Self {
            deleted: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    pub fn field_count(&self) -> usize {
        [
            self.revision.is_some(),
            self.deleted,
            self.collidable.is_some(),
            self.movable.is_some(),
            self.speed.is_some(),
            self.color.is_some(),
            self.asset_id.is_some(),
            self.action.is_some(),
            self.position.is_some(),
            self.rotation.is_some(),
            self.scale.is_some(),
            self.up.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Folds `other` into `self`; the most recent value per field wins
    pub fn merge(&mut self, other: &Update) {
        merge_fields!(
            self, other, revision, collidable, movable, speed, color, asset_id, action,
            position, rotation, scale, up
        );
        if other.deleted {
            self.deleted = true;
        }
    }

    /// Field-level replace of every present field onto `actor`.
    /// Identity and the tombstone flag are never touched here.
    pub fn apply_to(&self, actor: &mut Actor) {
        apply_fields!(
            actor, self, revision, collidable, movable, speed, color, asset_id, action,
            position, rotation, scale, up
        );
    }

    // Builders

    pub fn with_revision(mut self, revision: Revision) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn with_collidable(mut self, collidable: bool) -> Self {
        self.collidable = Some(collidable);
        self
    }

    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = Some(movable);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_asset_id(mut self, asset_id: u16) -> Self {
        self.asset_id = Some(asset_id);
        self
    }

    pub fn with_action(mut self, action: AnimationAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_up(mut self, up: Vector3) -> Self {
        self.up = Some(up);
        self
    }
}

/// A fully described actor, used for creations and full syncs
impl From<&Actor> for Update {
    fn from(actor: &Actor) -> Self {
        Self {
            revision: Some(actor.revision),
            deleted: false,
            collidable: Some(actor.collidable),
            movable: Some(actor.movable),
            speed: Some(actor.speed),
            color: Some(actor.color),
            asset_id: Some(actor.asset_id),
            action: Some(actor.action),
            position: Some(actor.position),
            rotation: Some(actor.rotation),
            scale: Some(actor.scale),
            up: Some(actor.up),
        }
    }
}
