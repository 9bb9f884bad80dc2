//! Round Lifecycle
//!
//! The two state transitions of the game, expressed over plain state values
//! so they can be exercised without a validator. Each returns the transfer
//! obligations for the handler to execute *after* every state write. A
//! close zeroes the pool and bumps the counter before its payout is issued,
//! so a reentrant transfer cannot double-spend the pool or re-close the
//! round.

use anchor_lang::prelude::*;

use crate::engine::{fees, timer, GameError};
use crate::state::{ItemCatalog, Round};

/// Payout obligation produced when a round closes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosedRound {
    /// Number of the round that just closed
    pub round_number: u64,
    /// The last feeder at expiry, i.e. the winner
    pub winner: Pubkey,
    /// Full pool amount owed to the winner
    pub prize: u64,
}

/// Everything a feed changed, plus the transfers it requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedReceipt {
    /// Set when this feed found the previous round expired and closed it
    pub closed: Option<ClosedRound>,
    /// Catalog price of the fed item
    pub price: u64,
    /// Share owed to the admin wallet (may be 0)
    pub admin_fee: u64,
    /// Share owed to the pool vault
    pub pool_contribution: u64,
    /// Round this feed was recorded against (the fresh round after an
    /// auto-close)
    pub round_number: u64,
}

/// Close an expired round.
///
/// Fails with `TimerNotExpired` unless the round is active and its deadline
/// has passed. Resets the round record in place and returns the payout the
/// caller must deliver to the winner.
pub fn close_round(round: &mut Round, now: i64) -> Result<ClosedRound> {
    require!(round.is_expired(now), GameError::TimerNotExpired);

    let closed = ClosedRound {
        round_number: round.round_number,
        winner: round.last_feeder,
        prize: round.pool_amount,
    };
    round.reset_for_next();

    Ok(closed)
}

/// Apply one feed to the round state.
///
/// Validates the item, lazily closes an expired round first (the feed then
/// lands on the fresh round), splits the price, grows the pool, and applies
/// the timer rule for whichever of the three cases this feed is.
pub fn apply_feed(
    round: &mut Round,
    catalog: &ItemCatalog,
    fee_percentage: u8,
    feeder: Pubkey,
    item_id: u8,
    now: i64,
) -> Result<FeedReceipt> {
    let price = catalog.price_of(item_id)?;
    let reduction = catalog.reduction_of(item_id)?;

    let closed = if round.is_expired(now) {
        Some(close_round(round, now)?)
    } else {
        None
    };

    let (admin_fee, pool_contribution) = fees::split(price, fee_percentage)?;
    round.pool_amount = round
        .pool_amount
        .checked_add(pool_contribution)
        .ok_or(GameError::MathOverflow)?;

    if !round.is_active {
        // First feed of the round: full timer, reduction ignored.
        round.timer_end_time = timer::full_deadline(now);
        round.is_active = true;
    } else if round.last_feeder == feeder {
        // The leader defends: the item burns the clock down.
        round.timer_end_time = timer::reduced_deadline(now, reduction);
    } else {
        // A challenge: full reset, reduction ignored.
        round.timer_end_time = timer::full_deadline(now);
    }
    round.last_feeder = feeder;

    Ok(FeedReceipt {
        closed,
        price,
        admin_fee,
        pool_contribution,
        round_number: round.round_number,
    })
}
