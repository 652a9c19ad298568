use log::{trace, warn};

use wireplace_serde::{
    BitCounter, BitReader, BitWrite, BitWriter, Serde, SerdeErr, UnsignedVariableInteger,
};

use crate::{
    types::{ProtocolVersion, Revision},
    world::{
        actor::{AnimationAction, Vector3},
        actor_id::ActorId,
        diff::Diff,
        update::Update,
    },
};

use super::{error::CodecError, DiffCodec};

type ActorIndex = UnsignedVariableInteger<7>;

/// Bit-packed diff codec.
///
/// Layout: `u16` version, then each entry preceded by a `1` bit, then a
/// terminating `0` bit. Every optional field costs one presence bit.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryCodec;

impl BinaryCodec {
    pub fn new() -> Self {
        Self
    }

    fn write_diff(diff: &Diff, writer: &mut dyn BitWrite) {
        diff.version.ser(writer);
        for (actor_id, update) in &diff.updates {
            writer.write_bit(true);
            write_actor_id(Some(actor_id), writer);
            write_update(update, writer);
        }
        writer.write_bit(false);
    }
}

impl DiffCodec for BinaryCodec {
    fn encode(&self, diff: &Diff) -> Result<Vec<u8>, CodecError> {
        let mut counter = BitCounter::new();
        Self::write_diff(diff, &mut counter);

        let mut writer = BitWriter::with_capacity(counter.bytes_needed());
        Self::write_diff(diff, &mut writer);
        trace!(
            "BinaryCodec: encoded {} entries in {} bits",
            diff.len(),
            writer.bits_written()
        );
        Ok(writer.to_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Diff, CodecError> {
        let mut reader = BitReader::new(bytes);
        let version = ProtocolVersion::de(&mut reader)?;
        let mut diff = Diff::new(version);

        while reader.read_bit()? {
            let actor_id = read_actor_id(&mut reader)?;
            let update = read_update(&mut reader)?;
            match actor_id {
                Some(actor_id) => diff.insert(actor_id, update),
                None => warn!("BinaryCodec: skipping diff entry without an actor id"),
            }
        }

        Ok(diff)
    }
}

/// `None` writes an entry with no identity, which decoders skip
pub(crate) fn write_actor_id(actor_id: Option<&ActorId>, writer: &mut dyn BitWrite) {
    let Some(actor_id) = actor_id else {
        writer.write_bit(false);
        return;
    };
    writer.write_bit(true);
    match actor_id.index() {
        Some(index) => {
            writer.write_bit(true);
            ActorIndex::new(index).ser(writer);
        }
        None => {
            writer.write_bit(false);
            actor_id.as_str().to_string().ser(writer);
        }
    }
}

fn read_actor_id(reader: &mut BitReader) -> Result<Option<ActorId>, SerdeErr> {
    if !reader.read_bit()? {
        return Ok(None);
    }
    if reader.read_bit()? {
        Ok(Some(ActorId::from_index(ActorIndex::de(reader)?.get())))
    } else {
        Ok(Some(ActorId::new(String::de(reader)?)))
    }
}

pub(crate) fn write_update(update: &Update, writer: &mut dyn BitWrite) {
    update.revision.ser(writer);
    // presence is the signal; false is never sent
    writer.write_bit(update.deleted);
    update.collidable.ser(writer);
    update.movable.ser(writer);
    update.speed.ser(writer);
    update.color.ser(writer);
    update.asset_id.ser(writer);
    update.action.ser(writer);
    update.position.ser(writer);
    update.rotation.ser(writer);
    update.scale.ser(writer);
    update.up.ser(writer);
}

fn read_update(reader: &mut BitReader) -> Result<Update, SerdeErr> {
    Ok(Update {
        revision: Option::<Revision>::de(reader)?,
        deleted: reader.read_bit()?,
        collidable: Option::<bool>::de(reader)?,
        movable: Option::<bool>::de(reader)?,
        speed: Option::<f32>::de(reader)?,
        color: Option::<u32>::de(reader)?,
        asset_id: Option::<u16>::de(reader)?,
        action: Option::<AnimationAction>::de(reader)?,
        position: Option::<Vector3>::de(reader)?,
        rotation: Option::<Vector3>::de(reader)?,
        scale: Option::<Vector3>::de(reader)?,
        up: Option::<Vector3>::de(reader)?,
    })
}

impl Serde for Vector3 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.x.ser(writer);
        self.y.ser(writer);
        self.z.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            x: f32::de(reader)?,
            y: f32::de(reader)?,
            z: f32::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        96
    }
}

impl Serde for AnimationAction {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.kind.ser(writer);
        self.state.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            kind: i32::de(reader)?,
            state: i32::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        64
    }
}
