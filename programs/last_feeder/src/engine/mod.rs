//! # Game Engine
//!
//! The pure core of the feeding game: fee arithmetic, timer rules, and the
//! round lifecycle transitions. Nothing in this module touches accounts or
//! issues CPIs. Handlers in `instructions/` call in here to compute the new
//! state and the transfer amounts, then execute the token movements.
//!
//! ## The timer rule
//!
//! ```text
//!   first feed of a round   ─▶  now + 24h          (reduction ignored)
//!   leader feeds again      ─▶  now + 24h − item's reduction
//!                               (never below now + 1h)
//!   challenger feeds        ─▶  now + 24h          (reduction ignored)
//! ```
//!
//! A challenge always grants the full duration no matter which item was
//! used; only a leader defending their own position can burn the clock
//! down, and never past the one-hour floor.

pub mod fees;
pub mod lifecycle;
pub mod timer;

pub use fees::*;
pub use lifecycle::*;
pub use timer::*;

use anchor_lang::prelude::*;

/// Errors shared across the game's entry points
#[error_code]
pub enum GameError {
    #[msg("Invalid item ID")]
    InvalidItem,
    #[msg("Timer not expired")]
    TimerNotExpired,
    #[msg("Reduction too high")]
    ReductionTooHigh,
    #[msg("Caller is not the game owner")]
    Unauthorized,
    #[msg("Game is paused")]
    Paused,
    #[msg("Game is emergency paused")]
    EmergencyPaused,
    #[msg("Admin fee percentage cannot exceed 100")]
    InvalidFeePercentage,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
