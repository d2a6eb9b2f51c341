//! Swipe session state machine.
//!
//! A session walks a candidate queue. Pointer gestures are tracked as raw
//! offsets; a release beyond the threshold becomes a like (right) or a skip
//! (left) and advances the index.

mod model;
mod session;

pub use model::{
    BADGE_THRESHOLD, CardFeedback, GestureOffset, SWIPE_THRESHOLD, SwipeDirection, SwipeEvent,
    SwipeInput, SwipeState, classify_release,
};
pub use session::SwipeSession;
