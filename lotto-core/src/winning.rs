//! Winning draw: six winning numbers plus a bonus number.

use std::collections::BTreeMap;
use std::fmt;

use rayon::prelude::*;

use crate::error::LottoError;
use crate::number::LottoNumber;
use crate::prize::{MatchOutcome, Prize};
use crate::tally::{PrizeTally, TallyMode};
use crate::ticket::LottoTicket;

/// The drawn ticket and its bonus number. The bonus is never one of the six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningTicket {
    numbers: LottoTicket,
    bonus: LottoNumber,
}

impl WinningTicket {
    pub fn new(numbers: LottoTicket, bonus: LottoNumber) -> Result<Self, LottoError> {
        if numbers.contains(bonus) {
            return Err(LottoError::BonusDuplicatesWinning {
                bonus,
                ticket: numbers,
            });
        }
        Ok(Self { numbers, bonus })
    }

    /// Skip the bonus check for a draw known to have seven distinct numbers.
    pub(crate) fn from_distinct(numbers: LottoTicket, bonus: LottoNumber) -> Self {
        debug_assert!(!numbers.contains(bonus));
        Self { numbers, bonus }
    }

    pub fn numbers(&self) -> &LottoTicket {
        &self.numbers
    }

    pub fn bonus(&self) -> LottoNumber {
        self.bonus
    }

    pub fn outcome(&self, ticket: &LottoTicket) -> MatchOutcome {
        MatchOutcome {
            match_count: self.numbers.count_matches(ticket),
            bonus_matched: ticket.contains(self.bonus),
        }
    }

    pub fn compare_with(&self, ticket: &LottoTicket) -> Prize {
        Prize::from_outcome(self.outcome(ticket))
    }

    /// Count tickets per attained tier. Tiers nobody hit are omitted.
    pub fn compare_with_many<'a, I>(&self, tickets: I) -> BTreeMap<Prize, u64>
    where
        I: IntoIterator<Item = &'a LottoTicket>,
    {
        self.tally(tickets).to_map(TallyMode::OmitZero)
    }

    pub fn tally<'a, I>(&self, tickets: I) -> PrizeTally
    where
        I: IntoIterator<Item = &'a LottoTicket>,
    {
        tickets.into_iter().map(|t| self.compare_with(t)).collect()
    }

    /// Same result as [`WinningTicket::tally`], split across the rayon pool.
    pub fn tally_par(&self, tickets: &[LottoTicket]) -> PrizeTally {
        tickets
            .par_iter()
            .fold(PrizeTally::new, |mut acc, t| {
                acc.record(self.compare_with(t));
                acc
            })
            .reduce(PrizeTally::new, PrizeTally::merge)
    }

    /// Tally an owned ticket stream of any length, buffering at most `chunk`
    /// tickets at a time and running each buffer through [`WinningTicket::tally_par`].
    /// A `chunk` of 0 is treated as 1.
    pub fn tally_chunked<I>(&self, tickets: I, chunk: usize) -> PrizeTally
    where
        I: IntoIterator<Item = LottoTicket>,
    {
        let chunk = chunk.max(1);
        let mut iter = tickets.into_iter();
        let mut buf = Vec::with_capacity(chunk.min(1 << 16));
        let mut total = PrizeTally::new();
        loop {
            buf.clear();
            buf.extend(iter.by_ref().take(chunk));
            if buf.is_empty() {
                return total;
            }
            total = total.merge(self.tally_par(&buf));
        }
    }
}

impl fmt::Display for WinningTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + bonus {}", self.numbers, self.bonus)
    }
}
