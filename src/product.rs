use crate::money::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of product categories stocked by a machine.
///
/// Each category maps to a fixed usage-instruction line shown to the
/// customer after a successful purchase.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Snack,
    Beverage,
    PerishableFood,
}

impl Category {
    pub fn usage_instructions(&self) -> &'static str {
        match self {
            Category::Snack => "Just open the wrapper and enjoy!",
            Category::Beverage => "Open the cap and sip carefully.",
            Category::PerishableFood => "Please heat in a microwave for 2 minutes.",
        }
    }
}

/// A single catalog entry: immutable name and price, mutable stock counter.
///
/// Only `remaining_stock` changes after construction, and only through
/// [`Product::dispense_one`], so the counter can never go negative.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Product {
    name: String,
    category: Category,
    price: Price,
    remaining_stock: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, category: Category, price: Price, stock: u32) -> Self {
        Self {
            name: name.into(),
            category,
            price,
            remaining_stock: stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn remaining_stock(&self) -> u32 {
        self.remaining_stock
    }

    /// Removes one unit from stock. Returns `false` when the slot is empty,
    /// leaving the counter untouched.
    pub fn dispense_one(&mut self) -> bool {
        if self.remaining_stock > 0 {
            self.remaining_stock -= 1;
            true
        } else {
            false
        }
    }

    pub fn usage_instructions(&self) -> &'static str {
        self.category.usage_instructions()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {:<10} | Price: {} | In Stock: {}",
            self.name, self.price, self.remaining_stock
        )
    }
}
