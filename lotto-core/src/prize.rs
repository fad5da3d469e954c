//! Prize tiers and the (match count, bonus) ranking rule.
//!
//! | matches | bonus | prize  |
//! |---------|-------|--------|
//! | 6       | -     | First  |
//! | 5       | yes   | Second |
//! | 5       | no    | Third  |
//! | 4       | -     | Fourth |
//! | 3       | -     | Fifth  |
//! | <= 2    | -     | Lose   |

use std::fmt;

/// Result of comparing one ticket against the winning draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchOutcome {
    /// Winning numbers present on the ticket (bonus excluded).
    pub match_count: u32,
    /// Whether the ticket also holds the bonus number.
    pub bonus_matched: bool,
}

/// Prize tier, ordered best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prize {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Lose,
}

impl Prize {
    /// All tiers in rank order.
    pub const ALL: [Prize; 6] = [
        Prize::First,
        Prize::Second,
        Prize::Third,
        Prize::Fourth,
        Prize::Fifth,
        Prize::Lose,
    ];

    pub fn from_match(match_count: u32, bonus_matched: bool) -> Prize {
        match (match_count, bonus_matched) {
            (6, _) => Prize::First,
            (5, true) => Prize::Second,
            (5, false) => Prize::Third,
            (4, _) => Prize::Fourth,
            (3, _) => Prize::Fifth,
            _ => Prize::Lose,
        }
    }

    #[inline]
    pub fn from_outcome(outcome: MatchOutcome) -> Prize {
        Self::from_match(outcome.match_count, outcome.bonus_matched)
    }

    pub fn is_winning(self) -> bool {
        self != Prize::Lose
    }

    /// Winning numbers a ticket must match for this tier (0 for `Lose`).
    pub fn match_count(self) -> u32 {
        match self {
            Prize::First => 6,
            Prize::Second | Prize::Third => 5,
            Prize::Fourth => 4,
            Prize::Fifth => 3,
            Prize::Lose => 0,
        }
    }

    /// Only Second is decided by the bonus number.
    pub fn requires_bonus(self) -> bool {
        self == Prize::Second
    }

    /// Fixed prize money paid per winning ticket.
    pub fn amount(self) -> u64 {
        match self {
            Prize::First => 2_000_000_000,
            Prize::Second => 30_000_000,
            Prize::Third => 1_500_000,
            Prize::Fourth => 50_000,
            Prize::Fifth => 5_000,
            Prize::Lose => 0,
        }
    }

    /// Stable snake_case identifier used as the key in logged summaries.
    pub fn name(self) -> &'static str {
        match self {
            Prize::First => "first",
            Prize::Second => "second",
            Prize::Third => "third",
            Prize::Fourth => "fourth",
            Prize::Fifth => "fifth",
            Prize::Lose => "lose",
        }
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prize::Lose => f.write_str("no prize"),
            p if p.requires_bonus() => write!(f, "{} matches + bonus", p.match_count()),
            p => write!(f, "{} matches", p.match_count()),
        }
    }
}
