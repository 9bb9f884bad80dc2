//! Instruction handlers for the feeding game
//!
//! Each instruction represents an action callers can take:
//! - `initialize` - Set up the game (owner only, once)
//! - `feed` - Pay for an item, grow the pool, move the timer (public)
//! - `end_round` - Close an expired round and pay the winner (public)
//! - `admin` - Catalog/config setters and the pause switches (owner only)
//! - `migrate` - Release-1 → release-2 storage migration (owner only)
//! - `view` - Read-only snapshots

pub mod admin;
pub mod end_round;
pub mod feed;
pub mod initialize;
pub mod migrate;
pub mod view;

pub use admin::*;
pub use end_round::*;
pub use feed::*;
pub use initialize::*;
pub use migrate::*;
pub use view::*;
