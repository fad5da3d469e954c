//! Six-number lotto ticket stored as a bit set.
//!
//! Bit `n` of the mask is set iff number `n` is on the ticket, so membership is
//! a single AND and the match count between two tickets is a popcount.

use std::fmt;
use std::str::FromStr;

use crate::error::LottoError;
use crate::number::{LottoNumber, MIN_NUMBER};

/// Numbers per ticket.
pub const TICKET_SIZE: usize = 6;

/// Exactly `TICKET_SIZE` distinct numbers. Order is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LottoTicket {
    mask: u64,
}

impl LottoTicket {
    /// Build a ticket from already-validated numbers.
    ///
    /// Size is checked before uniqueness, so `[1, 1, 2, 3, 4, 5, 6]` reports
    /// the wrong size rather than the duplicate.
    pub fn new<I>(numbers: I) -> Result<Self, LottoError>
    where
        I: IntoIterator<Item = LottoNumber>,
    {
        let mut mask = 0u64;
        let mut size = 0usize;
        let mut duplicate = None;
        for n in numbers {
            size += 1;
            if mask & n.bit() != 0 {
                duplicate.get_or_insert(n);
            }
            mask |= n.bit();
        }

        if size != TICKET_SIZE {
            return Err(LottoError::InvalidTicketSize { size });
        }
        if let Some(number) = duplicate {
            return Err(LottoError::DuplicateNumber { number });
        }
        Ok(Self { mask })
    }

    /// Build from numbers already known to be distinct.
    pub(crate) fn from_distinct(numbers: [LottoNumber; TICKET_SIZE]) -> Self {
        let mask = numbers.iter().fold(0u64, |m, n| m | n.bit());
        debug_assert_eq!(mask.count_ones() as usize, TICKET_SIZE);
        Self { mask }
    }

    /// Build a ticket from raw integers; every value is range-checked first.
    pub fn from_values<I>(values: I) -> Result<Self, LottoError>
    where
        I: IntoIterator<Item = i64>,
    {
        let numbers = values
            .into_iter()
            .map(LottoNumber::of)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(numbers)
    }

    /// Number of values shared with `other` (size of the intersection).
    #[inline]
    pub fn count_matches(&self, other: &LottoTicket) -> u32 {
        (self.mask & other.mask).count_ones()
    }

    #[inline]
    pub fn contains(&self, number: LottoNumber) -> bool {
        self.mask & number.bit() != 0
    }

    /// Numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LottoNumber> {
        let mut rest = self.mask;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let idx = rest.trailing_zeros();
            rest &= rest - 1;
            Some(LottoNumber::from_bit_index(idx))
        })
    }

    /// Numbers in ascending order.
    pub fn numbers(&self) -> [LottoNumber; TICKET_SIZE] {
        let mut out = [LottoNumber::from_bit_index(MIN_NUMBER as u32); TICKET_SIZE];
        for (slot, n) in out.iter_mut().zip(self.iter()) {
            *slot = n;
        }
        out
    }

    /// Raw values in ascending order.
    pub fn values(&self) -> [u8; TICKET_SIZE] {
        self.numbers().map(LottoNumber::value)
    }
}

impl fmt::Display for LottoTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str("]")
    }
}

/// Parses comma-separated values such as `"1,2,3,4,5,6"` or `"1, 2, 3, 4, 5, 6"`.
impl FromStr for LottoTicket {
    type Err = LottoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| LottoError::Parse {
                input: s.to_string(),
            })?;
        Self::from_values(values)
    }
}
