//! Offline verification of Telegram Mini Apps init-data payloads.
//!
//! A mini-app embedded in a Telegram client receives an opaque query string
//! (the "init-data") carrying identity claims and an HMAC over them. This
//! crate implements the server side: given the init-data, the application's
//! bot token, and a freshness bound, it decides whether the payload was
//! produced by Telegram for this application and extracts the verified
//! claims. It never performs I/O; verification is a pure function of its
//! inputs plus one clock sample.
//!
//! # Overview
//!
//! Telegram signs a canonical reconstruction of the payload (all fields
//! except `hash`, rendered `key=value`, sorted, newline-joined) with a
//! two-stage HMAC-SHA256: the bot token is first keyed under the fixed
//! string `WebAppData` to derive a signing key, which then keys the HMAC
//! over the data-check-string. [`verify_init_data`] reproduces the
//! construction and compares signatures in constant time.
//!
//! # Usage
//!
//! ```rust
//! use ministack_auth::{BotToken, VerifyConfig, verify_init_data};
//!
//! let token = BotToken::new("123456789:ABCdefGHIjklMNOpqrsTUVwxyz").unwrap();
//! let config = VerifyConfig::default(); // 24h freshness bound
//!
//! match verify_init_data("query_id=...&user=...&auth_date=...&hash=...", &token, &config) {
//!     Ok(verified) => println!("user {} verified", verified.user().id),
//!     Err(rejection) => println!("rejected: {} ({})", rejection, rejection.code()),
//! }
//! ```
//!
//! # Modules
//!
//! - [`batch`] - Independent per-item verification of payload lists
//! - [`canonical`] - Data-check-string construction
//! - [`config`] - Freshness bound and output-shaping switches
//! - [`error`] - Rejection kinds
//! - [`freshness`] - Payload age checking
//! - [`initdata`] - Payload decoding and claims extraction
//! - [`token`] - The bot token secret
//! - [`verify`] - The verification pipeline and its output record
//! - [`webapp`] - The WebAppData two-stage keyed hash

pub mod batch;
pub mod canonical;
pub mod config;
pub mod error;
pub mod freshness;
pub mod initdata;
pub mod token;
pub mod verify;
pub mod webapp;

pub use batch::{BatchItem, verify_batch, verify_batch_at};
pub use canonical::build_data_check_string;
pub use config::VerifyConfig;
pub use error::VerifyError;
pub use token::BotToken;
pub use verify::{VerifiedInitData, verify_init_data, verify_init_data_at};
pub use webapp::{compute_signature, derive_signing_key};
