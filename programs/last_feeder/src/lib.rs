//! # Last Feeder: a winner-take-pool feeding game
//!
//! Players pay to feed priced items. Every payment is split between an
//! admin fee and a shared pool, and every feed moves a 24-hour countdown:
//!
//! - the first feed of a round starts the clock at the full duration;
//! - the current leader can re-feed to *shorten* their own clock by the
//!   item's configured reduction (never below a one-hour floor);
//! - any other player's feed takes the lead and resets the clock in full.
//!
//! Whoever holds the lead when the countdown expires collects the entire
//! pool. Expiry is lazy, with no background clock: an expired round
//! settles on the next `feed` or an explicit `end_round`.
//!
//! Payments and payouts move through an external SPL stable token; the
//! pool sits in a vault owned by the config PDA.

use anchor_lang::prelude::*;

pub mod engine;
pub mod instructions;
pub mod state;

pub use engine::*;
pub use instructions::*;


// Replace with your deployed program ID
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Main feeding game program
#[program]
pub mod last_feeder {
    use super::*;

    /// Initialize the game: config, round 1, item catalog, pool vault
    pub fn initialize(
        ctx: Context<Initialize>,
        admin_wallet: Pubkey,
        admin_fee_percentage: u8,
        base_token_uri: String,
    ) -> Result<()> {
        ctx.accounts
            .initialize(admin_wallet, admin_fee_percentage, base_token_uri, ctx.bumps)
    }

    /// Feed one item: pay its price, grow the pool, move the timer.
    /// Settles the previous round first if its timer already expired.
    pub fn feed(ctx: Context<Feed>, item_id: u8) -> Result<()> {
        ctx.accounts.feed(item_id)
    }

    /// Close an expired round and pay the pool to the last feeder
    pub fn end_round(ctx: Context<EndRound>) -> Result<()> {
        ctx.accounts.end_round()
    }

    /// Reprice an item (owner only)
    pub fn set_item_price(ctx: Context<UpdateCatalog>, item_id: u8, price: u64) -> Result<()> {
        ctx.accounts.set_item_price(item_id, price)
    }

    /// Change an item's timer reduction, capped at 23 hours (owner only)
    pub fn set_timer_reduction(ctx: Context<UpdateCatalog>, item_id: u8, hours: u64) -> Result<()> {
        ctx.accounts.set_timer_reduction(item_id, hours)
    }

    /// Change the admin fee percentage (owner only)
    pub fn set_admin_fee_percentage(ctx: Context<UpdateConfig>, percentage: u8) -> Result<()> {
        ctx.accounts.set_admin_fee_percentage(percentage)
    }

    /// Change the admin fee wallet (owner only)
    pub fn set_admin_wallet(ctx: Context<UpdateConfig>, wallet: Pubkey) -> Result<()> {
        ctx.accounts.set_admin_wallet(wallet)
    }

    /// Change the cosmetic metadata URI prefix (owner only)
    pub fn set_base_uri(ctx: Context<UpdateConfig>, uri: String) -> Result<()> {
        ctx.accounts.set_base_uri(uri)
    }

    /// Halt feeding (owner only)
    pub fn pause(ctx: Context<UpdateConfig>) -> Result<()> {
        ctx.accounts.pause()
    }

    /// Resume feeding (owner only)
    pub fn unpause(ctx: Context<UpdateConfig>) -> Result<()> {
        ctx.accounts.unpause()
    }

    /// Flip the emergency halt, which also blocks settlement (owner only)
    pub fn toggle_emergency_pause(ctx: Context<UpdateConfig>) -> Result<()> {
        ctx.accounts.toggle_emergency_pause()
    }

    /// Migrate a release-1 config account to the release-2 layout
    /// (owner only, once)
    pub fn migrate_v2(ctx: Context<MigrateV2>) -> Result<()> {
        ctx.accounts.migrate_v2()
    }

    /// Snapshot of the current round record
    pub fn get_current_round_info(ctx: Context<ViewRound>) -> Result<state::RoundInfo> {
        ctx.accounts.get_current_round_info()
    }

    /// Seconds until the current deadline (0 if inactive or expired)
    pub fn get_time_remaining(ctx: Context<ViewRound>) -> Result<u64> {
        ctx.accounts.get_time_remaining()
    }

    /// Behavior version of the deployed game
    pub fn get_version(ctx: Context<ViewConfig>) -> Result<u8> {
        ctx.accounts.get_version()
    }

    /// Whether either pause flag currently halts the game
    pub fn is_operationally_paused(ctx: Context<ViewConfig>) -> Result<bool> {
        ctx.accounts.is_operationally_paused()
    }

    /// Metadata URI for an item id (cosmetic)
    pub fn item_uri(ctx: Context<ViewConfig>, item_id: u8) -> Result<String> {
        ctx.accounts.item_uri(item_id)
    }
}
