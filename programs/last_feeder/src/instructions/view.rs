//! Read-only Accessors
//!
//! Snapshot views over the persisted state, returned as instruction values
//! so off-chain callers can simulate them without decoding accounts.

use anchor_lang::prelude::*;

use crate::state::{GameConfig, Round, RoundInfo};

/// Accounts for round views
#[derive(Accounts)]
pub struct ViewRound<'info> {
    #[account(
        seeds = [Round::SEED],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,
}

impl<'info> ViewRound<'info> {
    /// Snapshot of the current round record
    pub fn get_current_round_info(&self) -> Result<RoundInfo> {
        Ok(RoundInfo::from(&*self.round))
    }

    /// Seconds until the deadline; 0 once expired or before the round's
    /// first feed
    pub fn get_time_remaining(&self) -> Result<u64> {
        let now = Clock::get()?.unix_timestamp;
        Ok(self.round.time_remaining(now))
    }
}

/// Accounts for configuration views
#[derive(Accounts)]
pub struct ViewConfig<'info> {
    #[account(
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,
}

impl<'info> ViewConfig<'info> {
    pub fn get_version(&self) -> Result<u8> {
        Ok(self.config.version)
    }

    pub fn is_operationally_paused(&self) -> Result<bool> {
        Ok(self.config.is_operationally_paused())
    }

    /// Metadata URI for an item: the configured prefix plus the decimal id.
    /// Purely cosmetic; answers for any id, catalogued or not.
    pub fn item_uri(&self, item_id: u8) -> Result<String> {
        Ok(format!("{}{}", self.config.base_token_uri, item_id))
    }
}
