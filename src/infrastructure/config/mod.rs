//! Infrastructure configuration modules.

pub mod credentials;
pub mod logging;
pub mod poll;
pub mod price_api;
pub mod settings;
pub mod telegram;

pub use credentials::Credentials;
pub use settings::Config;
