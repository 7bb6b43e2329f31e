#![no_std]

pub mod invariants;
pub mod ledger;
pub mod units;

pub use ledger::*;
pub use units::*;
