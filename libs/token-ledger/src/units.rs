use soroban_fixed_point_math::FixedPoint;
use token_types::unit_for_decimals;

/// Convert whole tokens to base units (`whole * 10^decimals`).
/// Returns None on overflow or unsupported decimals.
pub fn scale(whole: i128, decimals: u32) -> Option<i128> {
    let unit = unit_for_decimals(decimals)?;
    whole.fixed_mul_floor(unit, 1)
}
