//! lotto-core: 6/45 lotto numbers, tickets, winning draws and prize ranking.

pub mod config;
pub mod draw;
pub mod error;
pub mod number;
pub mod prize;
pub mod purchase;
pub mod tally;
pub mod ticket;
pub mod winning;

pub use config::{ConfigError, LottoConfig};
pub use draw::QuickPick;
pub use error::LottoError;
pub use number::{LottoNumber, MAX_NUMBER, MIN_NUMBER};
pub use prize::{MatchOutcome, Prize};
pub use purchase::{cost, ticket_count, PurchaseError, TICKET_PRICE};
pub use tally::{PrizeTally, TallyMode};
pub use ticket::{LottoTicket, TICKET_SIZE};
pub use winning::WinningTicket;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifier of the number range / ticket size / prize table in use.
pub const RULESET_ID: &str = "lotto_6_45_v1";


#[cfg(test)]
mod ticket_tests;
