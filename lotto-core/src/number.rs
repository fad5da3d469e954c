//! Single lotto number in the 6/45 game.

use std::fmt;

use crate::error::LottoError;

/// Smallest drawable number.
pub const MIN_NUMBER: u8 = 1;
/// Largest drawable number.
pub const MAX_NUMBER: u8 = 45;

/// A validated number in `MIN_NUMBER..=MAX_NUMBER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LottoNumber(u8);

impl LottoNumber {
    /// Validate `value` against the game range.
    pub fn of(value: i64) -> Result<Self, LottoError> {
        if (MIN_NUMBER as i64..=MAX_NUMBER as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(LottoError::OutOfRange { value })
        }
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Every number of the game, ascending.
    pub fn all() -> impl Iterator<Item = LottoNumber> {
        (MIN_NUMBER..=MAX_NUMBER).map(LottoNumber)
    }

    /// Bit used for this number in a ticket mask (bit `n` for number `n`).
    #[inline]
    pub(crate) fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// Inverse of [`LottoNumber::bit`] for a bit index known to be in range.
    #[inline]
    pub(crate) fn from_bit_index(idx: u32) -> Self {
        debug_assert!((MIN_NUMBER as u32..=MAX_NUMBER as u32).contains(&idx));
        Self(idx as u8)
    }
}

impl TryFrom<i64> for LottoNumber {
    type Error = LottoError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl fmt::Display for LottoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
