//! Feeding
//!
//! The game's one paid action. A feed prices the chosen item, splits the
//! payment between the admin wallet and the pool, and moves the deadline
//! under the timer rule. If the feed finds the previous round already
//! expired it settles that round first, then lands on the fresh one.
//!
//! All round/config state is written before any token CPI runs, and an
//! auto-close pays its winner from the already-zeroed pool.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::engine::lifecycle;
use crate::instructions::end_round::{NewRoundStarted, RoundEnded};
use crate::state::{GameConfig, ItemCatalog, Round};

/// Event emitted for every successful feed
#[event]
pub struct ItemFed {
    pub feeder: Pubkey,
    pub item_id: u8,
    pub round_number: u64,
}

/// Accounts for the feed action
#[derive(Accounts)]
pub struct Feed<'info> {
    /// The player feeding
    #[account(mut)]
    pub feeder: Signer<'info>,

    /// Global configuration
    #[account(
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    /// The active round record
    #[account(
        mut,
        seeds = [Round::SEED],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    /// Item price/reduction tables
    #[account(
        seeds = [ItemCatalog::SEED],
        bump = catalog.bump,
    )]
    pub catalog: Account<'info, ItemCatalog>,

    /// Payment token mint
    #[account(
        constraint = collateral_mint.key() == config.collateral_mint,
    )]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// Feeder's collateral account, which pays the item price
    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = feeder,
    )]
    pub feeder_collateral: InterfaceAccount<'info, TokenAccount>,

    /// Configured admin fee wallet
    /// CHECK: only used as the authority of `admin_collateral`; pinned to
    /// the configured address
    #[account(address = config.admin_wallet)]
    pub admin_wallet: UncheckedAccount<'info>,

    /// Admin wallet's collateral account, which receives the fee cut
    #[account(
        init_if_needed,
        payer = feeder,
        associated_token::mint = collateral_mint,
        associated_token::authority = admin_wallet,
    )]
    pub admin_collateral: InterfaceAccount<'info, TokenAccount>,

    /// Pool vault
    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = config,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Previous winner's collateral account. Only required when this feed
    /// closes an expired round; checked against the recorded last feeder
    /// in the handler.
    #[account(mut)]
    pub previous_winner_collateral: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
    /// Associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Feed<'info> {
    /// Feed one item
    pub fn feed(&mut self, item_id: u8) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.config.require_feedable()?;

        let receipt = lifecycle::apply_feed(
            &mut self.round,
            &self.catalog,
            self.config.admin_fee_percentage,
            self.feeder.key(),
            item_id,
            now,
        )?;

        // State is final. Settle the previous round's payout first, then
        // collect this feed's payment.
        if let Some(closed) = &receipt.closed {
            if closed.prize > 0 && closed.winner != Pubkey::default() {
                let winner_collateral = self
                    .previous_winner_collateral
                    .as_ref()
                    .ok_or(FeedError::WinnerAccountMissing)?;
                require!(
                    winner_collateral.owner == closed.winner,
                    FeedError::WinnerAccountMismatch
                );

                let config_seeds = &[GameConfig::SEED, &[self.config.bump]];
                let signer_seeds = &[&config_seeds[..]];

                transfer_checked(
                    CpiContext::new_with_signer(
                        self.token_program.to_account_info(),
                        TransferChecked {
                            from: self.vault.to_account_info(),
                            mint: self.collateral_mint.to_account_info(),
                            to: winner_collateral.to_account_info(),
                            authority: self.config.to_account_info(),
                        },
                        signer_seeds,
                    ),
                    closed.prize,
                    self.collateral_mint.decimals,
                )?;
            }

            emit!(RoundEnded {
                round_number: closed.round_number,
                winner: closed.winner,
                prize_amount: closed.prize,
            });
            emit!(NewRoundStarted {
                round_number: receipt.round_number,
            });
        }

        // Pool contribution into the vault.
        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.feeder_collateral.to_account_info(),
                    mint: self.collateral_mint.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.feeder.to_account_info(),
                },
            ),
            receipt.pool_contribution,
            self.collateral_mint.decimals,
        )?;

        // Admin fee, when the percentage produces one.
        if receipt.admin_fee > 0 {
            transfer_checked(
                CpiContext::new(
                    self.token_program.to_account_info(),
                    TransferChecked {
                        from: self.feeder_collateral.to_account_info(),
                        mint: self.collateral_mint.to_account_info(),
                        to: self.admin_collateral.to_account_info(),
                        authority: self.feeder.to_account_info(),
                    },
                ),
                receipt.admin_fee,
                self.collateral_mint.decimals,
            )?;
        }

        emit!(ItemFed {
            feeder: self.feeder.key(),
            item_id,
            round_number: receipt.round_number,
        });

        msg!(
            "{} fed item {} for {} (round {}, pool {})",
            self.feeder.key(),
            item_id,
            receipt.price,
            receipt.round_number,
            self.round.pool_amount,
        );

        Ok(())
    }
}

#[error_code]
pub enum FeedError {
    #[msg("Closing an expired round requires the previous winner's token account")]
    WinnerAccountMissing,
    #[msg("Winner token account does not belong to the last feeder")]
    WinnerAccountMismatch,
}
