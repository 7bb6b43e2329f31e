#![no_std]

mod config;
mod error;
mod network;
mod operation;

pub use config::*;
pub use error::*;
pub use network::*;
pub use operation::*;

/// Largest supported `decimals` value.
/// 10^38 is the largest power of ten representable as i128.
pub const MAX_DECIMALS: u32 = 38;

/// Base units in one whole token for the given decimals, if representable.
pub fn unit_for_decimals(decimals: u32) -> Option<i128> {
    if decimals > MAX_DECIMALS {
        return None;
    }
    10i128.checked_pow(decimals)
}

/// Full supply in base units: `max_supply * 10^decimals`.
pub fn scaled_supply(max_supply: i128, decimals: u32) -> Option<i128> {
    if max_supply <= 0 {
        return None;
    }
    max_supply.checked_mul(unit_for_decimals(decimals)?)
}
