pub mod error;
pub mod ledger;
pub mod machine;
pub mod money;
pub mod product;
pub mod shell;
