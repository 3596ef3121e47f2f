//! Tokenwatch - Telegram bot that posts a token's on-chain price on a timer.
//!
//! Each chat tracks at most one token, identified by network and contract
//! address. A fixed-interval poll loop looks up every tracked token and posts
//! the result back to its chat.
//!
//! # Architecture
//!
//! - **`domain`** - Chat keys, tracked targets, token quotes
//! - **`port`** - Traits for the price source and chat transport
//! - **`application`** - Tracking registry and poll loop
//! - **`adapter`** - CoinGecko price client, Telegram transport and commands
//! - **`infrastructure`** - Configuration and runtime wiring
//!
//! # Features
//!
//! - `telegram` (default) - Bot API transport, command listener and binary
//!
//! # Example
//!
//! ```
//! use tokenwatch::application::TrackingRegistry;
//! use tokenwatch::domain::{ChatKey, TrackedTarget};
//!
//! let registry = TrackingRegistry::new();
//! registry.set(ChatKey::new(42), TrackedTarget::new("eth", "0xabc"));
//! assert_eq!(registry.snapshot().len(), 1);
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
