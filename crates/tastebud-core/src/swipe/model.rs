//! Swipe session types and the pure transition function.

use serde::{Deserialize, Serialize};

use crate::restaurant::RestaurantRecord;

/// Horizontal distance a released gesture must exceed to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// Horizontal distance past which the LIKE/NOPE badge is shown.
pub const BADGE_THRESHOLD: f64 = 50.0;

/// Degrees of card rotation per unit of horizontal offset (1/20).
const ROTATION_DIVISOR: f64 = 20.0;

/// Horizontal offset at which the card becomes fully transparent.
const FADE_DISTANCE: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Position of a session in its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SwipeState {
    /// Showing the card at `index`.
    Active { index: usize },
    /// Every card has been swiped. Terminal for this queue.
    Exhausted,
}

impl SwipeState {
    /// `Active(0)` for a non-empty queue, `Exhausted` otherwise.
    pub fn initial(queue_len: usize) -> Self {
        if queue_len == 0 {
            Self::Exhausted
        } else {
            Self::Active { index: 0 }
        }
    }

    /// Moves past the current card.
    pub fn advance(self, queue_len: usize) -> Self {
        match self {
            Self::Active { index } if index + 1 < queue_len => Self::Active { index: index + 1 },
            _ => Self::Exhausted,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Active { index } => Some(*index),
            Self::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Pointer displacement since the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureOffset {
    pub x: f64,
    pub y: f64,
}

impl GestureOffset {
    pub const ZERO: GestureOffset = GestureOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Input events fed to a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SwipeInput {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    /// Like/skip button: swipes the current card without a gesture.
    Button { direction: SwipeDirection },
}

/// What a session did in response to one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SwipeEvent {
    /// Gesture in progress; index unchanged.
    Tracking { offset: GestureOffset },
    /// Released below the threshold; offset reset, index unchanged.
    Cancelled,
    /// Swiped right: the record must be bookmarked.
    Liked { record: RestaurantRecord },
    /// Swiped left: no bookmark change.
    Skipped { record: RestaurantRecord },
    /// Input had no effect (no active gesture, or session exhausted).
    Ignored,
}

/// Classifies a released horizontal offset.
///
/// The offset must strictly exceed [`SWIPE_THRESHOLD`]; exactly 100 is a
/// cancelled gesture.
pub fn classify_release(offset_x: f64) -> Option<SwipeDirection> {
    if offset_x > SWIPE_THRESHOLD {
        Some(SwipeDirection::Right)
    } else if offset_x < -SWIPE_THRESHOLD {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// Presentational feedback derived from the raw offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardFeedback {
    pub rotation_deg: f64,
    pub opacity: f64,
    /// `Right` shows LIKE, `Left` shows NOPE.
    pub badge: Option<SwipeDirection>,
}

impl CardFeedback {
    pub fn from_offset(offset: GestureOffset) -> Self {
        let badge = if offset.x > BADGE_THRESHOLD {
            Some(SwipeDirection::Right)
        } else if offset.x < -BADGE_THRESHOLD {
            Some(SwipeDirection::Left)
        } else {
            None
        };
        Self {
            rotation_deg: offset.x / ROTATION_DIVISOR,
            opacity: (1.0 - offset.x.abs() / FADE_DISTANCE).clamp(0.0, 1.0),
            badge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(SwipeState::initial(0), SwipeState::Exhausted);
        assert_eq!(SwipeState::initial(3), SwipeState::Active { index: 0 });
    }

    #[test]
    fn test_advance_until_exhausted() {
        let state = SwipeState::initial(2);
        let state = state.advance(2);
        assert_eq!(state, SwipeState::Active { index: 1 });
        let state = state.advance(2);
        assert!(state.is_exhausted());
        assert!(state.advance(2).is_exhausted());
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(classify_release(100.0), None);
        assert_eq!(classify_release(-100.0), None);
        assert_eq!(classify_release(101.0), Some(SwipeDirection::Right));
        assert_eq!(classify_release(-101.0), Some(SwipeDirection::Left));
        assert_eq!(classify_release(0.0), None);
    }

    #[test]
    fn test_feedback() {
        let still = CardFeedback::from_offset(GestureOffset::ZERO);
        assert_eq!(still.rotation_deg, 0.0);
        assert_eq!(still.opacity, 1.0);
        assert_eq!(still.badge, None);

        let right = CardFeedback::from_offset(GestureOffset::new(150.0, 5.0));
        assert_eq!(right.rotation_deg, 7.5);
        assert_eq!(right.opacity, 0.5);
        assert_eq!(right.badge, Some(SwipeDirection::Right));

        let far_left = CardFeedback::from_offset(GestureOffset::new(-450.0, 0.0));
        assert_eq!(far_left.opacity, 0.0);
        assert_eq!(far_left.badge, Some(SwipeDirection::Left));
    }
}
