use std::{fmt, num::NonZeroU32};

/// Clause identifier, or clause index into an external clause arena, starting with one.
/// Note: ids are owned and re-used by the clause database, never by `Var`.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ClauseId {
    /// a sequence number.
    pub ordinal: NonZeroU32,
}

impl From<usize> for ClauseId {
    #[inline]
    fn from(u: usize) -> ClauseId {
        debug_assert!(0 < u && u <= u32::MAX as usize, "invalid clause index {u}");
        ClauseId {
            ordinal: NonZeroU32::new(u as u32).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl From<ClauseId> for usize {
    #[inline]
    fn from(cid: ClauseId) -> usize {
        NonZeroU32::get(cid.ordinal) as usize
    }
}

impl fmt::Debug for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}C", self.ordinal)
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}C", self.ordinal)
    }
}
