//! The Discover feed as one owned state value driven by actions.

mod state;

pub use state::{Discovery, DiscoveryAction, DiscoveryOutcome};
