use thiserror::Error;

use super::status::OrderStatus;

/// Failures surfaced by the order ledger.
///
/// `IllegalTransition` is an expected outcome of user action, not a system
/// fault; callers report it for the single operation and carry on.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Order not found")]
    NotFound,

    #[error("Illegal status transition {from} -> {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order commit failed: {0}")]
    CommitFailed(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
