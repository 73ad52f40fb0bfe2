//! wsp-messages
//!
//! Centralized messaging for the wsp CLI: every user-facing template lives
//! here, and the `msg!` macro fills in `{variable}` placeholders.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::MESSAGES;
