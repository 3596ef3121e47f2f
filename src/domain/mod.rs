//! Platform-agnostic types: chat ids, tracked targets, quotes.

pub mod id;
pub mod quote;
pub mod target;

pub use id::ChatKey;
pub use quote::TokenQuote;
pub use target::TrackedTarget;
