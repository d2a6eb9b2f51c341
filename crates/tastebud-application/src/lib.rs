//! Application layer for Tastebud.
//!
//! Use cases that coordinate the synchronous discovery core with the
//! file-backed stores and remote providers.

pub mod bootstrap;
pub mod discovery_usecase;
pub mod submission;

pub use bootstrap::AppContext;
pub use discovery_usecase::{DiscoveryUseCase, MapListing};
pub use submission::{ImageSource, RestaurantSubmissionService, SubmissionOutcome};
