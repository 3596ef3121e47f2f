//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the polling core and the two external
//! services it binds together.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │      Application        │
//!                 │  registry + poll loop   │
//!                 └─────────────────────────┘
//!                    │                   │
//!                    ▼                   ▼
//!             ┌─────────────┐     ┌─────────────┐
//!             │ PriceSource │     │ChatTransport│
//!             │  (CoinGecko)│     │ (Telegram)  │
//!             └─────────────┘     └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`PriceSource`] - Current token price by (network, address)
//! - [`ChatTransport`] - Delivery of [`Notice`]s to a chat

pub mod outbound;

pub use outbound::price::PriceSource;
pub use outbound::transport::{ChatTransport, Notice};
