use thiserror::Error;

use crate::types::Revision;

/// Revisions live in `[0, MAX_REVISION)`
pub const MAX_REVISION: Revision = 2000;
/// Width of the guard band at either end of the revision range
pub const REVISION_BUFFER: Revision = 200;

/// Errors that can occur when building a revision window
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevisionWindowError {
    /// The guard band does not fit twice inside the range, which would make
    /// every comparison a wraparound
    #[error("RevisionWindow: buffer {buffer} must be less than half of max_revision {max_revision}")]
    BufferTooWide {
        max_revision: Revision,
        buffer: Revision,
    },
}

/// The bounded, wrapping counter space revisions are compared in.
///
/// A revision held at or above `max_revision - buffer` is treated as stale
/// when the incoming revision sits below `buffer`: the sender has wrapped
/// around and started counting from zero again.
///
/// Only valid windows can be built, so comparisons never overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevisionWindow {
    max_revision: Revision,
    buffer: Revision,
}

impl RevisionWindow {
    /// Create a window over `[0, max_revision)`
    ///
    /// # Panics
    /// Panics if `buffer` is not less than half of `max_revision`
    pub fn new(max_revision: Revision, buffer: Revision) -> Self {
        match Self::try_new(max_revision, buffer) {
            Ok(window) => window,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn try_new(max_revision: Revision, buffer: Revision) -> Result<Self, RevisionWindowError> {
        if u32::from(buffer) * 2 >= u32::from(max_revision) {
            return Err(RevisionWindowError::BufferTooWide {
                max_revision,
                buffer,
            });
        }
        Ok(Self {
            max_revision,
            buffer,
        })
    }

    pub fn max_revision(&self) -> Revision {
        self.max_revision
    }

    pub fn buffer(&self) -> Revision {
        self.buffer
    }

    /// Returns whether `new` should replace `current`.
    /// Equal revisions are never newer, so redelivery is a no-op.
    ///
    /// Inside the wraparound band every `new` below `buffer` wins, 0
    /// included. This departs from resetting `current` to 0 and comparing
    /// strictly, which would reject the first revision after a wrap.
    pub fn is_newer(&self, current: Revision, new: Revision) -> bool {
        if self.is_wraparound(current, new) {
            return true;
        }
        new > current
    }

    fn is_wraparound(&self, current: Revision, new: Revision) -> bool {
        current >= self.max_revision - self.buffer && new < self.buffer
    }

    /// The revision a locally originated change is stamped with
    pub fn next(&self, current: Revision) -> Revision {
        ((u32::from(current) + 1) % u32::from(self.max_revision)) as Revision
    }
}

impl Default for RevisionWindow {
    fn default() -> Self {
        Self::new(MAX_REVISION, REVISION_BUFFER)
    }
}

/// Returns whether revision `new` is newer than `current` in the default window
/// is_revision_newer(1, 2) will return true
/// is_revision_newer(1950, 10) will return true
/// is_revision_newer(100, 100) will return false
pub fn is_revision_newer(current: Revision, new: Revision) -> bool {
    RevisionWindow::default().is_newer(current, new)
}
