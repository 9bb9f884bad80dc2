//! Fee Split
//!
//! Every feed payment is cut two ways: a whole-percentage admin fee
//! (truncating integer division) and the remainder, which funds the pool.
//! The two parts always reassemble to the exact price; nothing is ever
//! rounded away.

use anchor_lang::prelude::*;

use crate::engine::GameError;

/// Split a payment into `(admin_fee, pool_contribution)`.
///
/// `admin_fee = price * fee_percentage / 100` with truncation; the pool
/// gets whatever is left. Holds `admin_fee + pool_contribution == price`
/// for every input.
pub fn split(price: u64, fee_percentage: u8) -> Result<(u64, u64)> {
    require!(fee_percentage <= 100, GameError::InvalidFeePercentage);

    // Widen before multiplying: price * 100 can exceed u64.
    let admin_fee = (price as u128)
        .checked_mul(fee_percentage as u128)
        .ok_or(GameError::MathOverflow)?
        .checked_div(100)
        .ok_or(GameError::MathOverflow)? as u64;

    // fee_percentage <= 100 guarantees admin_fee <= price
    let pool_contribution = price
        .checked_sub(admin_fee)
        .ok_or(GameError::MathOverflow)?;

    Ok((admin_fee, pool_contribution))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemCatalog;

    #[test]
    fn split_parts_always_sum_to_price() {
        // Every default item price against every legal percentage.
        for price in ItemCatalog::default_prices() {
            for pct in 0..=100u8 {
                let (fee, pool) = split(price, pct).unwrap();
                assert_eq!(fee + pool, price, "price {} pct {}", price, pct);
            }
        }
    }

    #[test]
    fn split_truncates_toward_the_pool() {
        // 10% of 1_000_001 is 100_000.1; the fractional unit stays in the pool.
        let (fee, pool) = split(1_000_001, 10).unwrap();
        assert_eq!(fee, 100_000);
        assert_eq!(pool, 900_001);
    }

    #[test]
    fn split_zero_percent_sends_everything_to_the_pool() {
        let (fee, pool) = split(5_000_000, 0).unwrap();
        assert_eq!(fee, 0);
        assert_eq!(pool, 5_000_000);
    }

    #[test]
    fn split_hundred_percent_leaves_the_pool_empty() {
        let (fee, pool) = split(5_000_000, 100).unwrap();
        assert_eq!(fee, 5_000_000);
        assert_eq!(pool, 0);
    }

    #[test]
    fn split_rejects_percentages_above_hundred() {
        assert!(split(1_000_000, 101).is_err());
    }

    #[test]
    fn split_survives_extreme_prices() {
        let (fee, pool) = split(u64::MAX, 100).unwrap();
        assert_eq!(fee, u64::MAX);
        assert_eq!(pool, 0);

        let (fee, pool) = split(u64::MAX, 0).unwrap();
        assert_eq!(fee, 0);
        assert_eq!(pool, u64::MAX);
    }
}
