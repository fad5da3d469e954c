//! Validation errors raised while constructing numbers and tickets.

use thiserror::Error;

use crate::number::{LottoNumber, MAX_NUMBER, MIN_NUMBER};
use crate::ticket::{LottoTicket, TICKET_SIZE};

/// Construction-time validation failures.
///
/// Comparison never fails: once both operands exist they are valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LottoError {
    #[error("lotto number {value} is out of range {}..={}", MIN_NUMBER, MAX_NUMBER)]
    OutOfRange { value: i64 },
    #[error("a ticket needs exactly {} numbers, got {size}", TICKET_SIZE)]
    InvalidTicketSize { size: usize },
    #[error("duplicate number {number} in ticket")]
    DuplicateNumber { number: LottoNumber },
    #[error("bonus number ({bonus}) must not duplicate the winning numbers ({ticket})")]
    BonusDuplicatesWinning {
        bonus: LottoNumber,
        ticket: LottoTicket,
    },
    #[error("cannot parse lotto numbers from {input:?}")]
    Parse { input: String },
}
