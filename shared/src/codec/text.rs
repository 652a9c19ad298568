use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    types::ProtocolVersion,
    world::{actor_id::ActorId, diff::Diff, update::Update},
};

use super::{error::CodecError, DiffCodec};

const ACTOR_ID_FIELD: &str = "actorId";

#[derive(Serialize, Deserialize)]
struct WireDiff {
    version: ProtocolVersion,
    #[serde(default)]
    entries: Vec<Value>,
}

/// Self-describing JSON diff codec:
/// `{"version":1,"entries":[{"actorId":"a1","speed":2.5}]}`
#[derive(Clone, Copy, Debug, Default)]
pub struct TextCodec {
    pretty: bool,
}

impl TextCodec {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented output, for logs and fixtures
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn encode_entry(actor_id: &ActorId, update: &Update) -> Result<Value, CodecError> {
        // JSON has no NaN or infinity; serde_json would write them as null
        if let Some(field) = non_finite_field(update) {
            return Err(CodecError::TextEncode {
                reason: format!("actor {} has a non-finite {}", actor_id, field),
            });
        }
        let value = serde_json::to_value(update).map_err(|error| CodecError::TextEncode {
            reason: error.to_string(),
        })?;
        let mut entry = match value {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        entry.insert(
            ACTOR_ID_FIELD.to_string(),
            Value::String(actor_id.as_str().to_string()),
        );
        Ok(Value::Object(entry))
    }

    fn decode_entry(entry: Value) -> Option<(ActorId, Update)> {
        let Value::Object(mut fields) = entry else {
            warn!("TextCodec: skipping diff entry that is not an object");
            return None;
        };
        let Some(Value::String(actor_id)) = fields.remove(ACTOR_ID_FIELD) else {
            warn!("TextCodec: skipping diff entry without an actor id");
            return None;
        };
        match serde_json::from_value::<Update>(Value::Object(fields)) {
            Ok(update) => Some((ActorId::new(actor_id), update)),
            Err(error) => {
                warn!("TextCodec: skipping malformed entry for actor {}: {}", actor_id, error);
                None
            }
        }
    }
}

fn non_finite_field(update: &Update) -> Option<&'static str> {
    if update.speed.is_some_and(|speed| !speed.is_finite()) {
        return Some("speed");
    }
    [
        ("position", update.position),
        ("rotation", update.rotation),
        ("scale", update.scale),
        ("up", update.up),
    ]
    .into_iter()
    .find(|(_, vector)| {
        vector.is_some_and(|vector| ![vector.x, vector.y, vector.z].iter().all(|c| c.is_finite()))
    })
    .map(|(field, _)| field)
}

impl DiffCodec for TextCodec {
    fn encode(&self, diff: &Diff) -> Result<Vec<u8>, CodecError> {
        let entries = diff
            .updates
            .iter()
            .map(|(actor_id, update)| Self::encode_entry(actor_id, update))
            .collect::<Result<Vec<_>, _>>()?;
        let wire = WireDiff {
            version: diff.version,
            entries,
        };
        let result = if self.pretty {
            serde_json::to_vec_pretty(&wire)
        } else {
            serde_json::to_vec(&wire)
        };
        result.map_err(|error| CodecError::TextEncode {
            reason: error.to_string(),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Diff, CodecError> {
        let wire: WireDiff =
            serde_json::from_slice(bytes).map_err(|error| CodecError::TextDecode {
                reason: error.to_string(),
            })?;
        Ok(Diff::with_updates(
            wire.version,
            wire.entries.into_iter().filter_map(Self::decode_entry),
        ))
    }
}
