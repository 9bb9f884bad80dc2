//! Round State
//!
//! The game keeps exactly one round record. It is reset in place when a
//! round closes; no history is retained beyond the counter.

use anchor_lang::prelude::*;

/// The single active round (singleton PDA)
///
/// Seeds: ["round"]
#[account]
#[derive(InitSpace)]
pub struct Round {
    /// 1-based round counter; bumped every time a round closes
    pub round_number: u64,

    /// Net-of-fee contributions accumulated this round
    pub pool_amount: u64,

    /// Most recent successful feeder, the identity positioned to win.
    /// `Pubkey::default()` before the first feed of a round.
    pub last_feeder: Pubkey,

    /// Deadline after which the round is closable; 0 until the first feed
    pub timer_end_time: i64,

    /// True from the first feed until the round closes
    pub is_active: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Round {
    pub const SEED: &'static [u8] = b"round";

    /// True once the deadline has passed for an active round.
    pub fn is_expired(&self, now: i64) -> bool {
        self.is_active && now >= self.timer_end_time
    }

    /// Seconds until the deadline; 0 before the round starts and once the
    /// deadline has passed.
    pub fn time_remaining(&self, now: i64) -> u64 {
        if !self.is_active {
            return 0;
        }
        self.timer_end_time.saturating_sub(now).max(0) as u64
    }

    /// Reset to a fresh, not-yet-started round and bump the counter.
    /// Callers settle the payout; this only rewrites state.
    pub fn reset_for_next(&mut self) {
        self.round_number += 1;
        self.pool_amount = 0;
        self.last_feeder = Pubkey::default();
        self.timer_end_time = 0;
        self.is_active = false;
    }
}

/// Read-only snapshot returned by `get_current_round_info`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundInfo {
    pub round_number: u64,
    pub pool_amount: u64,
    pub last_feeder: Pubkey,
    pub timer_end_time: i64,
    pub is_active: bool,
}

impl From<&Round> for RoundInfo {
    fn from(round: &Round) -> Self {
        RoundInfo {
            round_number: round.round_number,
            pool_amount: round.pool_amount,
            last_feeder: round.last_feeder,
            timer_end_time: round.timer_end_time,
            is_active: round.is_active,
        }
    }
}
