//! Round Settlement
//!
//! Anyone may close an expired round. The full pool goes to whoever fed
//! last; the round record is reset and the counter bumped.
//!
//! The round state is zeroed *before* the payout CPI is issued
//! (checks-effects-interactions), so nothing reached through the transfer
//! can observe a closable round with a funded pool.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::engine::lifecycle;
use crate::state::{GameConfig, Round};

/// Event emitted when a round closes
#[event]
pub struct RoundEnded {
    pub round_number: u64,
    pub winner: Pubkey,
    pub prize_amount: u64,
}

/// Event emitted when the next round opens
#[event]
pub struct NewRoundStarted {
    pub round_number: u64,
}

/// Accounts for closing an expired round
#[derive(Accounts)]
pub struct EndRound<'info> {
    /// Anyone; settlement is permissionless
    pub caller: Signer<'info>,

    /// Global configuration
    #[account(
        seeds = [GameConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    /// The round being closed
    #[account(
        mut,
        seeds = [Round::SEED],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    /// Payment token mint
    #[account(
        constraint = collateral_mint.key() == config.collateral_mint,
    )]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    /// Winner's collateral account. Must belong to the recorded last
    /// feeder; checked in the handler once the prize is known
    #[account(mut)]
    pub winner_collateral: InterfaceAccount<'info, TokenAccount>,

    /// Pool vault
    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = config,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Token program
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> EndRound<'info> {
    /// Close the round and pay the winner
    pub fn end_round(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        // Settlement stays open under an ordinary pause, but not under an
        // emergency pause.
        self.config.require_settleable()?;

        let closed = lifecycle::close_round(&mut self.round, now)?;

        // Round state is fully reset; only now does value leave the vault.
        if closed.prize > 0 && closed.winner != Pubkey::default() {
            require!(
                self.winner_collateral.owner == closed.winner,
                EndRoundError::WinnerAccountMismatch
            );

            let config_seeds = &[GameConfig::SEED, &[self.config.bump]];
            let signer_seeds = &[&config_seeds[..]];

            transfer_checked(
                CpiContext::new_with_signer(
                    self.token_program.to_account_info(),
                    TransferChecked {
                        from: self.vault.to_account_info(),
                        mint: self.collateral_mint.to_account_info(),
                        to: self.winner_collateral.to_account_info(),
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
            round_number: self.round.round_number,
        });

        msg!(
            "Round {} closed: {} takes {}",
            closed.round_number,
            closed.winner,
            closed.prize
        );

        Ok(())
    }
}

#[error_code]
pub enum EndRoundError {
    #[msg("Winner token account does not belong to the last feeder")]
    WinnerAccountMismatch,
}
