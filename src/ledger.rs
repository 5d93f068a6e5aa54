use crate::money::{Balance, Price};
use rust_decimal::Decimal;

/// Payment handling seam for a vending machine.
///
/// The machine never touches funds directly; it goes through this trait so
/// alternative processors (card readers, test doubles) can be swapped in.
pub trait PaymentProcessor {
    /// Adds a strictly positive amount to the held balance. Non-positive
    /// amounts are ignored without error; see the crate docs for why.
    fn deposit(&mut self, amount: Decimal);
    /// Current held balance, no side effect.
    fn balance(&self) -> Balance;
    /// Consumes `price` from the balance if fully covered. Returns `false`
    /// and leaves the balance unchanged otherwise. This is the sole
    /// affordability gate in the purchase flow.
    fn try_consume(&mut self, price: Price) -> bool;
    /// Returns the full held balance and resets it to zero.
    fn refund_all(&mut self) -> Balance;
}

/// Accumulates inserted cash as a single running balance.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CashLedger {
    balance: Balance,
}

impl CashLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentProcessor for CashLedger {
    fn deposit(&mut self, amount: Decimal) {
        if amount > Decimal::ZERO {
            self.balance += Balance::new(amount);
        } else {
            tracing::debug!(%amount, "ignoring non-positive deposit");
        }
    }

    fn balance(&self) -> Balance {
        self.balance
    }

    fn try_consume(&mut self, price: Price) -> bool {
        if self.balance.covers(price) {
            self.balance -= price.into();
            true
        } else {
            false
        }
    }

    fn refund_all(&mut self) -> Balance {
        let refunded = self.balance;
        self.balance = Balance::ZERO;
        refunded
    }
}
