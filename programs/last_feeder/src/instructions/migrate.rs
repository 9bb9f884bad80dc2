//! Storage Migration (release 1 → release 2)
//!
//! Release 2 appended `emergency_paused` to the config account. Accounts
//! created by release 1 are one field short and must be migrated exactly
//! once before the new behavior can read them.
//!
//! The stored bytes are checked against the frozen release-1 layout before
//! anything is written: wrong discriminator, wrong owner, or bytes that do
//! not parse as [`GameConfigV1`] reject the migration outright. Every
//! existing field is carried over unchanged; only the appended flag gets
//! its default.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};
use anchor_lang::Discriminator;

use crate::engine::GameError;
use crate::state::{config::upgrade_v1, GameConfig, GameConfigV1, CONFIG_VERSION};

/// Event emitted when the config account reaches a new layout version
#[event]
pub struct ConfigMigrated {
    pub version: u8,
}

/// Accounts for the storage migration
#[derive(Accounts)]
pub struct MigrateV2<'info> {
    /// Game owner; also covers the rent delta for the grown account
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The config PDA, still in its release-1 layout. Deserialized by hand
    /// because the current `GameConfig` type cannot read it yet.
    /// CHECK: discriminator, program ownership, layout, and stored owner
    /// key are all verified in the handler before any write
    #[account(mut, seeds = [GameConfig::SEED], bump)]
    pub config: UncheckedAccount<'info>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> MigrateV2<'info> {
    /// Upgrade the config account to the release-2 layout
    pub fn migrate_v2(&mut self) -> Result<()> {
        let config_ai = self.config.to_account_info();

        // Static compatibility check: the stored bytes must be a config
        // account in the release-1 layout, owned by this program.
        require!(
            config_ai.owner == &crate::ID,
            MigrateError::IncompatibleLayout
        );
        let v1 = {
            let data = config_ai.try_borrow_data()?;
            require!(data.len() > 8, MigrateError::IncompatibleLayout);
            require!(
                data[..8] == GameConfig::DISCRIMINATOR,
                MigrateError::IncompatibleLayout
            );
            GameConfigV1::deserialize(&mut &data[8..])
                .map_err(|_| MigrateError::IncompatibleLayout)?
        };

        require!(v1.version < CONFIG_VERSION, MigrateError::AlreadyCurrentVersion);
        require_keys_eq!(self.admin.key(), v1.admin, GameError::Unauthorized);

        // Grow the account for the appended field, topping up rent first.
        let new_size = 8 + GameConfig::INIT_SPACE;
        if config_ai.data_len() < new_size {
            let rent_due = Rent::get()?.minimum_balance(new_size);
            let shortfall = rent_due.saturating_sub(config_ai.lamports());
            if shortfall > 0 {
                invoke(
                    &system_instruction::transfer(&self.admin.key(), config_ai.key, shortfall),
                    &[self.admin.to_account_info(), config_ai.clone()],
                )?;
            }
            config_ai.realloc(new_size, true)?;
        }

        // Rewrite in the release-2 layout: all fields preserved,
        // emergency_paused defaulted to false.
        let v2 = upgrade_v1(v1);
        {
            let mut data = config_ai.try_borrow_mut_data()?;
            let mut cursor: &mut [u8] = &mut data[..];
            v2.try_serialize(&mut cursor)?;
        }

        emit!(ConfigMigrated {
            version: CONFIG_VERSION,
        });
        msg!("Config migrated to version {}", CONFIG_VERSION);

        Ok(())
    }
}

#[error_code]
pub enum MigrateError {
    #[msg("Stored config does not match the release-1 layout")]
    IncompatibleLayout,
    #[msg("Config is already at the current version")]
    AlreadyCurrentVersion,
}
