//! Quick-pick ticket generation and random winning draws.
//!
//! Backed by ChaCha8 so a seed fully determines the stream of tickets.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::number::{LottoNumber, MAX_NUMBER, MIN_NUMBER};
use crate::ticket::{LottoTicket, TICKET_SIZE};
use crate::winning::WinningTicket;

const POOL_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

pub struct QuickPick {
    rng: ChaCha8Rng,
}

impl QuickPick {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Partial Fisher-Yates over the full pool: the first `K` slots are a
    /// uniform sample without replacement.
    fn sample_distinct<const K: usize>(&mut self) -> [LottoNumber; K] {
        debug_assert!(K <= POOL_SIZE);
        let mut pool: Vec<LottoNumber> = LottoNumber::all().collect();
        for i in 0..K {
            let j = self.rng.gen_range(i..POOL_SIZE);
            pool.swap(i, j);
        }
        let mut out = [pool[0]; K];
        out.copy_from_slice(&pool[..K]);
        out
    }

    pub fn next_ticket(&mut self) -> LottoTicket {
        LottoTicket::from_distinct(self.sample_distinct::<TICKET_SIZE>())
    }

    /// Collect `n` tickets. Large runs should stream via the iterator instead.
    pub fn tickets(&mut self, n: usize) -> Vec<LottoTicket> {
        self.by_ref().take(n).collect()
    }

    /// Draw six winning numbers and a bonus in one pass, so the bonus is
    /// always distinct from the six.
    pub fn draw_winning(&mut self) -> WinningTicket {
        let drawn = self.sample_distinct::<{ TICKET_SIZE + 1 }>();
        let mut six = [drawn[0]; TICKET_SIZE];
        six.copy_from_slice(&drawn[..TICKET_SIZE]);
        WinningTicket::from_distinct(LottoTicket::from_distinct(six), drawn[TICKET_SIZE])
    }
}

/// Endless stream of quick-pick tickets.
impl Iterator for QuickPick {
    type Item = LottoTicket;

    #[inline]
    fn next(&mut self) -> Option<LottoTicket> {
        Some(self.next_ticket())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
