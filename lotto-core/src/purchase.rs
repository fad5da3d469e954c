//! Budget to ticket-count arithmetic.

use thiserror::Error;

/// Default price of one ticket.
pub const TICKET_PRICE: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("ticket price must be > 0")]
    ZeroPrice,
    #[error("budget {budget} cannot buy a ticket priced {price}")]
    InsufficientBudget { budget: u64, price: u64 },
}

/// Tickets affordable with `budget`; leftover change is not spent.
pub fn ticket_count(budget: u64, price: u64) -> Result<u64, PurchaseError> {
    if price == 0 {
        return Err(PurchaseError::ZeroPrice);
    }
    if budget < price {
        return Err(PurchaseError::InsufficientBudget { budget, price });
    }
    Ok(budget / price)
}

/// Money spent on `count` tickets (saturating).
pub fn cost(count: u64, price: u64) -> u64 {
    count.saturating_mul(price)
}
