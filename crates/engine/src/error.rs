//! The module contains the errors the engine can throw.
use thiserror::Error;

/// Engine custom errors.
///
/// Deposit and withdraw failures are deliberately **not** here: the ledger
/// reports them as a plain `false` so the two causes (bad amount,
/// insufficient funds) stay indistinguishable to callers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
