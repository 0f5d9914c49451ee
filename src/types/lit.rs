use {
    crate::types::VarId,
    std::{fmt, num::NonZeroU32, ops::Not},
};

/// Literal encoded on `u32` as:
///
/// - the Literal corresponding to a positive occurrence of *variable `n` is `2 * n + 1` and
/// - that for the negative one is `2 * n`.
///
/// # Examples
///
/// ```
/// use cdcl_restart::types::*;
/// assert_eq!(2usize, Lit::from(-1i32).into());
/// assert_eq!(3usize, Lit::from( 1i32).into());
/// assert_eq!(4usize, Lit::from(-2i32).into());
/// assert_eq!(5usize, Lit::from( 2i32).into());
/// assert_eq!( 1i32, Lit::from( 1i32).into());
/// assert_eq!(-2i32, Lit::from(-2i32).into());
/// assert_eq!(Lit::from(1i32), !Lit::from(-1i32));
/// assert_eq!(2, Lit::from((2usize, false)).vi());
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Lit {
    /// literal encoded into folded u32
    ordinal: NonZeroU32,
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}L", i32::from(self))
    }
}

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}L", i32::from(self))
    }
}

/// convert literals to `[i32]` (for debug).
pub fn i32s(v: &[Lit]) -> Vec<i32> {
    v.iter().map(|l| i32::from(*l)).collect::<Vec<_>>()
}

impl From<(VarId, bool)> for Lit {
    /// make a literal from a var and its polarity (`true` for positive).
    #[inline]
    fn from((vi, positive): (VarId, bool)) -> Self {
        debug_assert!(0 < vi, "var 0 is reserved");
        let ordinal = ((vi as u32) << 1) + (positive as u32);
        Lit {
            ordinal: NonZeroU32::new(ordinal).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl From<i32> for Lit {
    #[inline]
    fn from(x: i32) -> Self {
        debug_assert!(x != 0, "0 is not a literal");
        let ordinal = (if x < 0 { -2 * x } else { 2 * x + 1 }) as u32;
        Lit {
            ordinal: NonZeroU32::new(ordinal).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl From<Lit> for bool {
    /// - negative Lit (= even u32) => false
    /// - positive Lit (= odd u32)  => true
    #[inline]
    fn from(l: Lit) -> bool {
        (NonZeroU32::get(l.ordinal) & 1) != 0
    }
}

impl From<Lit> for usize {
    #[inline]
    fn from(l: Lit) -> usize {
        NonZeroU32::get(l.ordinal) as usize
    }
}

impl From<Lit> for i32 {
    #[inline]
    fn from(l: Lit) -> i32 {
        i32::from(&l)
    }
}

impl From<&Lit> for i32 {
    #[inline]
    fn from(l: &Lit) -> i32 {
        if NonZeroU32::get(l.ordinal) % 2 == 0 {
            -((NonZeroU32::get(l.ordinal) >> 1) as i32)
        } else {
            (NonZeroU32::get(l.ordinal) >> 1) as i32
        }
    }
}

impl Not for Lit {
    type Output = Lit;
    #[inline]
    fn not(self) -> Self {
        Lit {
            ordinal: NonZeroU32::new(NonZeroU32::get(self.ordinal) ^ 1).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl Lit {
    /// convert to `VarId`.
    #[inline]
    pub fn vi(self) -> VarId {
        (NonZeroU32::get(self.ordinal) >> 1) as VarId
    }
}
