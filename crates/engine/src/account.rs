//! The module contains the `Account` struct and its implementation.

use crate::Money;

/// A bank account ledger.
///
/// Holder and number are fixed at construction; the balance changes only
/// through [`deposit`] and [`withdraw`] and can never go negative. There is
/// no overdraft, interest, multi-currency or transaction-history support,
/// and nothing is persisted across runs.
///
/// Both mutators report success as a plain boolean. A `false` from
/// [`withdraw`] does not say whether the amount was non-positive or the
/// funds insufficient; callers that need the reason re-check the balance.
///
/// [`deposit`]: Account::deposit
/// [`withdraw`]: Account::withdraw
#[derive(Debug, Clone)]
pub struct Account {
    holder: String,
    number: String,
    balance: Money,
}

impl Account {
    pub fn new(holder: impl Into<String>, number: impl Into<String>, initial: Money) -> Self {
        Self {
            holder: holder.into(),
            number: number.into(),
            balance: initial,
        }
    }

    /// Adds `amount` to the balance.
    ///
    /// Returns `false` without mutating when `amount <= 0`. Invalid input
    /// is a normal outcome, not an error.
    pub fn deposit(&mut self, amount: Money) -> bool {
        if !amount.is_positive() {
            return false;
        }
        self.balance += amount;
        true
    }

    /// Subtracts `amount` from the balance.
    ///
    /// Returns `false` without mutating when `amount <= 0` or the balance
    /// does not cover it.
    pub fn withdraw(&mut self, amount: Money) -> bool {
        if !amount.is_positive() || self.balance < amount {
            return false;
        }
        self.balance -= amount;
        true
    }

    #[must_use]
    pub fn balance(&self) -> Money {
        self.balance
    }

    #[must_use]
    pub fn holder(&self) -> &str {
        &self.holder
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Masked account number: only the last 4 characters are ever shown.
    ///
    /// Counted in characters, not bytes; the number is caller-supplied and
    /// not guaranteed to be ASCII.
    #[must_use]
    pub fn masked_number(&self) -> String {
        let skip = self.number.chars().count().saturating_sub(4);
        let tail: String = self.number.chars().skip(skip).collect();
        format!("****{tail}")
    }
}
