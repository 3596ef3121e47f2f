//! CoinGecko on-chain (GeckoTerminal) price adapter.
//!
//! Implements [`PriceSource`](crate::port::PriceSource) against the
//! `onchain/networks/{network}/tokens/{address}` endpoint.

mod client;
mod dto;

pub use client::{CoinGecko, API_KEY_HEADER, DEFAULT_BASE_URL};
