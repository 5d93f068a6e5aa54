use rand::seq::SliceRandom;
use rand::thread_rng;
use rust_decimal_macros::dec;
use vendo::machine::{PurchaseDenied, VendingMachine};
use vendo::money::Balance;

#[test]
fn test_chips_scenario() {
    let mut machine = VendingMachine::new();
    machine.deposit(dec!(2.00));

    let chips = machine.purchase("Chips").unwrap();
    assert_eq!(chips.name(), "Chips");
    assert_eq!(chips.remaining_stock(), 4);
    assert_eq!(machine.balance(), Balance::new(dec!(1.00)));
}

#[test]
fn test_underfunded_sandwich_scenario() {
    let mut machine = VendingMachine::new();
    machine.deposit(dec!(0.50));

    let denied = machine.purchase("Sandwich").unwrap_err();
    assert_eq!(
        denied,
        PurchaseDenied::InsufficientFunds("Sandwich".to_string())
    );
    assert_eq!(machine.balance(), Balance::new(dec!(0.50)));
}

#[test]
fn test_absent_product_scenario() {
    let mut machine = VendingMachine::new();
    let denied = machine.purchase("Pretzels").unwrap_err();
    assert_eq!(denied, PurchaseDenied::NotFound("Pretzels".to_string()));
}

#[test]
fn test_sellout_then_machine_stays_usable() {
    let mut machine = VendingMachine::new();
    machine.deposit(dec!(20.00));

    // Chips: 5 in stock, each attempt succeeds exactly once per unit
    for expected_left in (0..5).rev() {
        let chips = machine.purchase("Chips").unwrap();
        assert_eq!(chips.remaining_stock(), expected_left);
    }
    assert_eq!(
        machine.purchase("Chips").unwrap_err(),
        PurchaseDenied::OutOfStock("Chips".to_string())
    );

    // A failed purchase is not fatal; other slots still work
    assert!(machine.purchase("Soda").is_ok());
    assert_eq!(machine.balance(), Balance::new(dec!(13.50)));
}

#[test]
fn test_deposit_order_is_irrelevant() {
    let amounts = [dec!(1.00), dec!(0.50), dec!(0.25), dec!(2.00)];

    let mut forward = VendingMachine::new();
    for amount in amounts {
        forward.deposit(amount);
    }

    let mut shuffled_amounts = amounts;
    shuffled_amounts.shuffle(&mut thread_rng());
    let mut shuffled = VendingMachine::new();
    for amount in shuffled_amounts {
        shuffled.deposit(amount);
    }

    assert_eq!(forward.balance(), shuffled.balance());
    assert_eq!(forward.balance(), Balance::new(dec!(3.75)));
}

#[test]
fn test_refund_returns_everything_exactly_once() {
    let mut machine = VendingMachine::new();
    machine.deposit(dec!(1.00));
    machine.deposit(dec!(0.50));

    assert_eq!(machine.refund_all(), Balance::new(dec!(1.50)));
    assert_eq!(machine.balance(), Balance::ZERO);
    assert_eq!(machine.refund_all(), Balance::ZERO);
}

#[test]
fn test_denials_leave_state_untouched() {
    let mut machine = VendingMachine::new();
    machine.deposit(dec!(0.10));

    let stock_before: Vec<u32> = machine
        .inventory()
        .iter()
        .map(|p| p.remaining_stock())
        .collect();

    machine.purchase("Pretzels").unwrap_err();
    machine.purchase("Soda").unwrap_err();

    let stock_after: Vec<u32> = machine
        .inventory()
        .iter()
        .map(|p| p.remaining_stock())
        .collect();
    assert_eq!(stock_before, stock_after);
    assert_eq!(machine.balance(), Balance::new(dec!(0.10)));
    assert_eq!(machine.revenue(), Balance::ZERO);
}
