//! Game Initialization
//!
//! Sets up the configuration, the first round, the item catalog, and the
//! pool vault. This is typically called once during deployment.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::engine::GameError;
use crate::state::{GameConfig, ItemCatalog, Round, CONFIG_VERSION};

/// Accounts required for game initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer (becomes the game owner)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration account (created)
    #[account(
        init,
        payer = admin,
        space = 8 + GameConfig::INIT_SPACE,
        seeds = [GameConfig::SEED],
        bump,
    )]
    pub config: Account<'info, GameConfig>,

    /// The single round record (created)
    #[account(
        init,
        payer = admin,
        space = 8 + Round::INIT_SPACE,
        seeds = [Round::SEED],
        bump,
    )]
    pub round: Account<'info, Round>,

    /// Item price/reduction tables (created)
    #[account(
        init,
        payer = admin,
        space = 8 + ItemCatalog::INIT_SPACE,
        seeds = [ItemCatalog::SEED],
        bump,
    )]
    pub catalog: Account<'info, ItemCatalog>,

    /// Payment token mint (e.g. USDC)
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// Pool vault holding every round's accumulated contributions
    #[account(
        init,
        payer = admin,
        associated_token::mint = collateral_mint,
        associated_token::authority = config,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Initialize the game
    pub fn initialize(
        &mut self,
        admin_wallet: Pubkey,
        admin_fee_percentage: u8,
        base_token_uri: String,
        bumps: InitializeBumps,
    ) -> Result<()> {
        require!(admin_fee_percentage <= 100, GameError::InvalidFeePercentage);

        self.config.set_inner(GameConfig {
            admin: self.admin.key(),
            admin_wallet,
            collateral_mint: self.collateral_mint.key(),
            admin_fee_percentage,
            paused: false,
            version: CONFIG_VERSION,
            bump: bumps.config,
            base_token_uri,
            emergency_paused: false,
        });

        // Round 1 exists from the start but only comes alive on its first feed.
        self.round.set_inner(Round {
            round_number: 1,
            pool_amount: 0,
            last_feeder: Pubkey::default(),
            timer_end_time: 0,
            is_active: false,
            bump: bumps.round,
        });

        self.catalog.set_inner(ItemCatalog {
            prices: ItemCatalog::default_prices(),
            reductions: ItemCatalog::default_reductions(),
            bump: bumps.catalog,
        });

        msg!("Game initialized!");
        msg!("Owner: {}", self.config.admin);
        msg!("Admin wallet: {}", admin_wallet);
        msg!("Admin fee: {}%", admin_fee_percentage);

        Ok(())
    }
}
