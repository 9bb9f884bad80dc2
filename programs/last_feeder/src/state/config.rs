//! Global Game Configuration
//!
//! This account stores game-wide settings: who owns the game, where the
//! admin fee goes, which token pays for feeds, and the two pause flags.
//!
//! ## Storage layout discipline
//!
//! The field order below is the Borsh serialization order and is
//! **append-only across releases**: new fields are added after all existing
//! ones, never inserted or reordered. Release 1 shipped everything up to
//! `base_token_uri`; release 2 appended `emergency_paused`. The frozen
//! release-1 layout is kept as [`GameConfigV1`] so `migrate_v2` can check
//! stored bytes against the old schema before rewriting them.

use anchor_lang::prelude::*;

use crate::engine::GameError;

/// Current behavior/layout version. Fresh deployments initialize at this
/// version; accounts created by release 1 reach it through `migrate_v2`.
pub const CONFIG_VERSION: u8 = 2;

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct GameConfig {
    /// Game owner with exclusive access to the admin instructions
    pub admin: Pubkey,

    /// Wallet that receives the admin fee cut of every feed
    pub admin_wallet: Pubkey,

    /// Payment token mint (a USDC-like stable token, 6 decimals)
    pub collateral_mint: Pubkey,

    /// Admin fee as a whole percentage, 0..=100
    pub admin_fee_percentage: u8,

    /// Ordinary pause flag; blocks `feed` only
    pub paused: bool,

    /// Behavior version reported by `get_version`
    pub version: u8,

    /// PDA bump seed
    pub bump: u8,

    /// Metadata URI prefix for item artwork (cosmetic)
    #[max_len(128)]
    pub base_token_uri: String,

    /// Independent halt flag appended in release 2; blocks `feed` AND
    /// `end_round`; toggled separately from `paused`
    pub emergency_paused: bool,
}

impl GameConfig {
    pub const SEED: &'static [u8] = b"config";

    /// Either flag halts the game's mutating entry points.
    pub fn is_operationally_paused(&self) -> bool {
        self.paused || self.emergency_paused
    }

    /// Gate for `feed`: both flags must be clear, each reporting its own
    /// failure reason.
    pub fn require_feedable(&self) -> Result<()> {
        require!(!self.paused, GameError::Paused);
        require!(!self.emergency_paused, GameError::EmergencyPaused);
        Ok(())
    }

    /// Gate for `end_round`: settlement stays open under an ordinary pause
    /// but not under an emergency pause.
    pub fn require_settleable(&self) -> Result<()> {
        require!(!self.emergency_paused, GameError::EmergencyPaused);
        Ok(())
    }
}

/// The persisted layout as shipped by release 1: everything except the
/// trailing `emergency_paused`. Frozen; only read by the migration.
#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct GameConfigV1 {
    pub admin: Pubkey,
    pub admin_wallet: Pubkey,
    pub collateral_mint: Pubkey,
    pub admin_fee_percentage: u8,
    pub paused: bool,
    pub version: u8,
    pub bump: u8,
    pub base_token_uri: String,
}

impl GameConfigV1 {
    /// Maximum serialized size of a release-1 config (one byte short of the
    /// current layout: the appended bool).
    pub const MAX_SIZE: usize = GameConfig::INIT_SPACE - 1;
}

/// Release-1 → release-2 conversion. Every stored field carries over
/// unchanged; the appended flag starts out false.
pub fn upgrade_v1(v1: GameConfigV1) -> GameConfig {
    GameConfig {
        admin: v1.admin,
        admin_wallet: v1.admin_wallet,
        collateral_mint: v1.collateral_mint,
        admin_fee_percentage: v1.admin_fee_percentage,
        paused: v1.paused,
        version: CONFIG_VERSION,
        bump: v1.bump,
        base_token_uri: v1.base_token_uri,
        emergency_paused: false,
    }
}
