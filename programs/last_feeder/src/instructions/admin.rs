//! Owner Administration
//!
//! Catalog and configuration setters plus the two pause switches. Every
//! handler here is gated on the configured owner key.

use anchor_lang::prelude::*;

use crate::engine::GameError;
use crate::state::{GameConfig, ItemCatalog};

/// Event emitted when the admin fee percentage changes
#[event]
pub struct AdminFeeUpdated {
    pub admin_fee_percentage: u8,
}

/// Event emitted when the admin fee wallet changes
#[event]
pub struct AdminWalletUpdated {
    pub admin_wallet: Pubkey,
}

/// Event emitted when the ordinary pause flag flips
#[event]
pub struct PauseToggled {
    pub paused: bool,
}

/// Event emitted when the emergency pause flag flips
#[event]
pub struct EmergencyPauseToggled {
    pub emergency_paused: bool,
}

/// Accounts for catalog updates
#[derive(Accounts)]
pub struct UpdateCatalog<'info> {
    /// Game owner
    #[account(address = config.admin @ GameError::Unauthorized)]
    pub admin: Signer<'info>,

    /// Global configuration (read-only here, supplies the owner key)
    #[account(
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    /// Item tables being updated
    #[account(
        mut,
        seeds = [ItemCatalog::SEED],
        bump = catalog.bump,
    )]
    pub catalog: Account<'info, ItemCatalog>,
}

impl<'info> UpdateCatalog<'info> {
    /// Reprice an item. Applies to feeds from now on; the current pool and
    /// timer are untouched.
    pub fn set_item_price(&mut self, item_id: u8, price: u64) -> Result<()> {
        self.catalog.set_price(item_id, price)?;
        msg!("Item {} price set to {}", item_id, price);
        Ok(())
    }

    /// Change an item's timer reduction; the catalog caps it at 23 hours.
    pub fn set_timer_reduction(&mut self, item_id: u8, hours: u64) -> Result<()> {
        self.catalog.set_reduction(item_id, hours)?;
        msg!("Item {} reduction set to {}h", item_id, hours);
        Ok(())
    }
}

/// Accounts for configuration updates
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Game owner
    #[account(address = config.admin @ GameError::Unauthorized)]
    pub admin: Signer<'info>,

    /// Global configuration being updated
    #[account(
        mut,
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,
}

impl<'info> UpdateConfig<'info> {
    pub fn set_admin_fee_percentage(&mut self, percentage: u8) -> Result<()> {
        require!(percentage <= 100, GameError::InvalidFeePercentage);
        self.config.admin_fee_percentage = percentage;

        emit!(AdminFeeUpdated {
            admin_fee_percentage: percentage,
        });
        msg!("Admin fee set to {}%", percentage);
        Ok(())
    }

    pub fn set_admin_wallet(&mut self, wallet: Pubkey) -> Result<()> {
        self.config.admin_wallet = wallet;

        emit!(AdminWalletUpdated {
            admin_wallet: wallet,
        });
        msg!("Admin wallet set to {}", wallet);
        Ok(())
    }

    /// Cosmetic: metadata URI prefix for item artwork.
    pub fn set_base_uri(&mut self, uri: String) -> Result<()> {
        require!(uri.len() <= 128, AdminError::UriTooLong);
        self.config.base_token_uri = uri;
        Ok(())
    }

    /// Halt feeding. Settlement of an already-expired round stays possible.
    pub fn pause(&mut self) -> Result<()> {
        require!(!self.config.paused, AdminError::AlreadyPaused);
        self.config.paused = true;

        emit!(PauseToggled { paused: true });
        msg!("Game paused");
        Ok(())
    }

    pub fn unpause(&mut self) -> Result<()> {
        require!(self.config.paused, AdminError::NotPaused);
        self.config.paused = false;

        emit!(PauseToggled { paused: false });
        msg!("Game unpaused");
        Ok(())
    }

    /// Flip the emergency halt. Independent of `pause`/`unpause`: clearing
    /// one flag never clears the other.
    pub fn toggle_emergency_pause(&mut self) -> Result<()> {
        self.config.emergency_paused = !self.config.emergency_paused;

        emit!(EmergencyPauseToggled {
            emergency_paused: self.config.emergency_paused,
        });
        msg!(
            "Emergency pause {}",
            if self.config.emergency_paused { "engaged" } else { "cleared" }
        );
        Ok(())
    }
}

#[error_code]
pub enum AdminError {
    #[msg("Game is already paused")]
    AlreadyPaused,
    #[msg("Game is not paused")]
    NotPaused,
    #[msg("Base URI exceeds the reserved space")]
    UriTooLong,
}
