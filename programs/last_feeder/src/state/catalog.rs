//! Item Catalog
//!
//! Price and timer-reduction tables for the feedable items. Item ids are
//! 1-based (1..=13); both tables index by `id - 1`. Entries are
//! owner-mutable and changes apply prospectively only: a deadline computed
//! from an old reduction is never rewritten.

use anchor_lang::prelude::*;

use crate::engine::{timer, GameError};

/// Number of distinct feedable items.
pub const ITEM_COUNT: usize = 13;

/// One base unit of a 6-decimal token.
const TOKEN_UNIT: u64 = 1_000_000;

/// Item price/reduction tables (singleton PDA)
///
/// Seeds: ["catalog"]
#[account]
#[derive(InitSpace)]
pub struct ItemCatalog {
    /// Price of item id `i` in collateral base units, at index `i - 1`
    pub prices: [u64; ITEM_COUNT],

    /// Timer reduction of item id `i` in hours, at index `i - 1`
    pub reductions: [u64; ITEM_COUNT],

    /// PDA bump seed
    pub bump: u8,
}

impl ItemCatalog {
    pub const SEED: &'static [u8] = b"catalog";

    /// Launch tables: item `i` costs `i` tokens and shaves `i` hours.
    pub fn default_prices() -> [u64; ITEM_COUNT] {
        core::array::from_fn(|i| (i as u64 + 1) * TOKEN_UNIT)
    }

    pub fn default_reductions() -> [u64; ITEM_COUNT] {
        core::array::from_fn(|i| i as u64 + 1)
    }

    /// Map a 1-based item id to its table index, rejecting 0 and anything
    /// past the last item.
    pub fn index_of(item_id: u8) -> Result<usize> {
        require!(
            item_id >= 1 && (item_id as usize) <= ITEM_COUNT,
            GameError::InvalidItem
        );
        Ok(item_id as usize - 1)
    }

    pub fn price_of(&self, item_id: u8) -> Result<u64> {
        Ok(self.prices[Self::index_of(item_id)?])
    }

    /// Reduction in hours.
    pub fn reduction_of(&self, item_id: u8) -> Result<u64> {
        Ok(self.reductions[Self::index_of(item_id)?])
    }

    pub fn set_price(&mut self, item_id: u8, price: u64) -> Result<()> {
        self.prices[Self::index_of(item_id)?] = price;
        Ok(())
    }

    /// Capped so a re-feed can never be *configured* to land on or below
    /// the timer floor.
    pub fn set_reduction(&mut self, item_id: u8, hours: u64) -> Result<()> {
        let idx = Self::index_of(item_id)?;
        require!(
            hours <= timer::MAX_TIMER_REDUCTION_HOURS,
            GameError::ReductionTooHigh
        );
        self.reductions[idx] = hours;
        Ok(())
    }
}
