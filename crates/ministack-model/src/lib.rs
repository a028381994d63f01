//! Data types for Telegram Mini Apps init-data verification.
//!
//! This crate defines the wire-level shapes shared across MiniStack: the
//! [`TelegramUser`] claims decoded from the `user` field of an init-data
//! payload, and the flat [`AuthOutput`] record emitted to downstream
//! consumers after verification.

mod output;
mod user;

pub use output::AuthOutput;
pub use user::TelegramUser;
