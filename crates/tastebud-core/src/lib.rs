pub mod bookmark;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod location;
pub mod media;
pub mod restaurant;
pub mod review;
pub mod swipe;
pub mod user;

// Re-export common error type
pub use error::TastebudError;
