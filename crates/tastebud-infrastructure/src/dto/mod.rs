//! Data Transfer Objects for persistence.
//!
//! Storage shapes are kept separate from the core domain models so files and
//! backend rows can evolve without touching the engine.

pub mod restaurant;
pub mod user_profile;

pub use restaurant::{RejectedRow, RestaurantRow, parse_rows};
pub use user_profile::{
    UserProfileDTO, UserProfileV1_0, UserProfileV1_1, create_user_profile_migrator,
};
