use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

const CANONICAL_PREFIX: char = 'a';

/// Opaque, unique identity of a replicated actor.
///
/// Master-allocated ids take the canonical form `"a<index>"`; any other string
/// is still a valid id, it just cannot be packed as an integer on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_index(index: u64) -> Self {
        Self(format!("{}{}", CANONICAL_PREFIX, index))
    }

    /// The allocator index of a canonical id, `None` for any other form.
    /// `"a007"` is not canonical: it would not survive a round trip.
    pub fn index(&self) -> Option<u64> {
        let digits = self.0.strip_prefix(CANONICAL_PREFIX)?;
        if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
            return None;
        }
        if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ActorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ActorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
