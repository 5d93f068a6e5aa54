use crate::ledger::{CashLedger, PaymentProcessor};
use crate::money::{Balance, Price};
use crate::product::{Category, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Why a purchase request was denied.
///
/// These are expected, frequent outcomes of normal operation, communicated as
/// values rather than propagated errors. Each variant carries the name the
/// customer asked for, so the `Display` text reads back their own input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseDenied {
    #[error("Product '{0}' not found.")]
    NotFound(String),
    #[error("Product '{0}' is out of stock.")]
    OutOfStock(String),
    #[error("Insufficient funds for '{0}'.")]
    InsufficientFunds(String),
}

/// One self-service dispensing unit.
///
/// Owns its catalog and its payment processor exclusively; construct as many
/// independent machines as needed. All operations are synchronous and the
/// purchase flow runs to completion before anything else can observe state,
/// so no step of it is visible half-done.
pub struct VendingMachine<P: PaymentProcessor = CashLedger> {
    inventory: Vec<Product>,
    payments: P,
    revenue: Balance,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    /// Creates a machine with the standard catalog and an empty cash ledger.
    pub fn new() -> Self {
        Self::with_processor(CashLedger::new())
    }
}

impl<P: PaymentProcessor> VendingMachine<P> {
    /// Creates a machine with the standard catalog and the given processor.
    pub fn with_processor(payments: P) -> Self {
        Self {
            inventory: seed_catalog(),
            payments,
            revenue: Balance::ZERO,
        }
    }

    /// Read-only view of the catalog, for display purposes.
    pub fn inventory(&self) -> &[Product] {
        &self.inventory
    }

    pub fn balance(&self) -> Balance {
        self.payments.balance()
    }

    /// Forwards to the payment processor. Positivity is enforced there;
    /// the machine adds no validation of its own.
    pub fn deposit(&mut self, amount: Decimal) {
        self.payments.deposit(amount);
    }

    /// Returns all unspent funds to the customer and zeroes the balance.
    pub fn refund_all(&mut self) -> Balance {
        let refunded = self.payments.refund_all();
        tracing::info!(%refunded, "refunded unspent balance");
        refunded
    }

    /// Total value of all items sold by this machine since construction.
    pub fn revenue(&self) -> Balance {
        self.revenue
    }

    /// Attempts to sell the named item.
    ///
    /// Checks run in a fixed order, each short-circuiting with no state
    /// change: name lookup (case-insensitive), then stock, then funds. Only
    /// when all three pass is the price consumed and the stock decremented.
    /// On success the dispensed entry is returned as an owned snapshot with
    /// the decremented stock count.
    pub fn purchase(&mut self, name: &str) -> Result<Product, PurchaseDenied> {
        let Some(slot) = self
            .inventory
            .iter()
            .position(|p| p.name().eq_ignore_ascii_case(name))
        else {
            tracing::debug!(%name, "purchase denied: not found");
            return Err(PurchaseDenied::NotFound(name.to_string()));
        };

        if self.inventory[slot].remaining_stock() == 0 {
            tracing::debug!(%name, "purchase denied: out of stock");
            return Err(PurchaseDenied::OutOfStock(name.to_string()));
        }

        let price = self.inventory[slot].price();
        if !self.payments.try_consume(price) {
            tracing::debug!(%name, %price, "purchase denied: insufficient funds");
            return Err(PurchaseDenied::InsufficientFunds(name.to_string()));
        }

        // Cannot fail: stock was checked above and nothing ran in between.
        self.inventory[slot].dispense_one();
        self.revenue += price.into();
        tracing::info!(item = self.inventory[slot].name(), %price, "dispensed");

        Ok(self.inventory[slot].clone())
    }
}

/// The fixed catalog every machine starts with. Entries are never added or
/// removed at runtime; only their stock counters change.
fn seed_catalog() -> Vec<Product> {
    let price = |d: Decimal| Price::new(d).expect("seed prices are non-negative");
    vec![
        Product::new("Soda", Category::Beverage, price(dec!(1.50)), 10),
        Product::new("Chips", Category::Snack, price(dec!(1.00)), 5),
        Product::new("Candy", Category::Snack, price(dec!(0.75)), 20),
        Product::new("Sandwich", Category::PerishableFood, price(dec!(3.50)), 7),
    ]
}
