/// Per-actor wrapping counter used for last-writer-wins conflict resolution
pub type Revision = u16;
/// Version tag carried by every diff envelope
pub type ProtocolVersion = u16;

/// Protocol version a scene uses unless configured otherwise
pub const PROTOCOL_VERSION: ProtocolVersion = 1;
