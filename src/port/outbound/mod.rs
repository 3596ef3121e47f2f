//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod price;
pub mod transport;
