//! Application services: the tracking registry and the poll loop.

pub mod poller;
pub mod registry;

pub use poller::{PollSettings, Poller};
pub use registry::TrackingRegistry;
