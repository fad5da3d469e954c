//! Per-tier counts for a batch of compared tickets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::prize::Prize;

/// Whether unattained tiers appear in a tally map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyMode {
    /// Only tiers hit by at least one ticket.
    #[default]
    OmitZero,
    /// Every tier, with 0 for unattained ones.
    IncludeZero,
}

/// Ticket counts indexed by prize rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrizeTally {
    counts: [u64; Prize::ALL.len()],
}

impl PrizeTally {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, prize: Prize) {
        self.record_many(prize, 1);
    }

    /// Record `n` tickets of the same tier at once (saturating).
    pub fn record_many(&mut self, prize: Prize, n: u64) {
        let slot = &mut self.counts[prize as usize];
        *slot = slot.saturating_add(n);
    }

    pub fn count(&self, prize: Prize) -> u64 {
        self.counts[prize as usize]
    }

    /// Number of tickets recorded (saturating).
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Tickets that won anything.
    pub fn winners(&self) -> u64 {
        self.total().saturating_sub(self.count(Prize::Lose))
    }

    /// Add `other`'s counts into `self`.
    pub fn merge(mut self, other: PrizeTally) -> PrizeTally {
        for (prize, b) in Prize::ALL.into_iter().zip(other.counts) {
            self.record_many(prize, b);
        }
        self
    }

    pub fn to_map(&self, mode: TallyMode) -> BTreeMap<Prize, u64> {
        Prize::ALL
            .into_iter()
            .map(|p| (p, self.count(p)))
            .filter(|&(_, c)| mode == TallyMode::IncludeZero || c > 0)
            .collect()
    }

    /// Sum of prize money over all recorded tickets (saturating).
    pub fn total_prize_money(&self) -> u64 {
        Prize::ALL.into_iter().fold(0u64, |acc, p| {
            acc.saturating_add(p.amount().saturating_mul(self.count(p)))
        })
    }

    /// `total_prize_money / spent`, or 0.0 when nothing was spent.
    pub fn return_rate(&self, spent: u64) -> f64 {
        if spent == 0 {
            return 0.0;
        }
        self.total_prize_money() as f64 / spent as f64
    }
}

impl FromIterator<Prize> for PrizeTally {
    fn from_iter<I: IntoIterator<Item = Prize>>(iter: I) -> Self {
        let mut t = PrizeTally::new();
        for p in iter {
            t.record(p);
        }
        t
    }
}
