//! Swipe session over one candidate queue.

use super::model::{
    CardFeedback, GestureOffset, SwipeDirection, SwipeEvent, SwipeInput, SwipeState,
    classify_release,
};
use crate::filter::CandidateQueue;
use crate::restaurant::RestaurantRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    start_x: f64,
    start_y: f64,
    offset: GestureOffset,
}

/// Consumes a [`CandidateQueue`] one card at a time.
///
/// The index only moves forward; once every card has been swiped the session
/// stays [`SwipeState::Exhausted`] and ignores further input. A new queue
/// needs a new session.
#[derive(Debug, Clone)]
pub struct SwipeSession {
    queue: CandidateQueue,
    state: SwipeState,
    gesture: Option<Gesture>,
}

impl SwipeSession {
    pub fn new(queue: CandidateQueue) -> Self {
        let state = SwipeState::initial(queue.len());
        Self {
            queue,
            state,
            gesture: None,
        }
    }

    pub fn queue(&self) -> &CandidateQueue {
        &self.queue
    }

    pub fn state(&self) -> SwipeState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    /// The card on top of the stack, if any.
    pub fn current(&self) -> Option<&RestaurantRecord> {
        self.state.index().and_then(|i| self.queue.get(i))
    }

    /// Cards not yet swiped, including the current one.
    pub fn remaining(&self) -> usize {
        match self.state {
            SwipeState::Active { index } => self.queue.len() - index,
            SwipeState::Exhausted => 0,
        }
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Raw offset of the gesture in progress (zero when idle).
    pub fn offset(&self) -> GestureOffset {
        self.gesture.map(|g| g.offset).unwrap_or(GestureOffset::ZERO)
    }

    pub fn feedback(&self) -> CardFeedback {
        CardFeedback::from_offset(self.offset())
    }

    /// Feeds one input event through the state machine.
    pub fn apply(&mut self, input: SwipeInput) -> SwipeEvent {
        if self.state.is_exhausted() {
            self.gesture = None;
            return SwipeEvent::Ignored;
        }

        match input {
            SwipeInput::PointerDown { x, y } => {
                self.gesture = Some(Gesture {
                    start_x: x,
                    start_y: y,
                    offset: GestureOffset::ZERO,
                });
                SwipeEvent::Tracking {
                    offset: GestureOffset::ZERO,
                }
            }
            SwipeInput::PointerMove { x, y } => match self.gesture.as_mut() {
                Some(gesture) => {
                    gesture.offset = GestureOffset::new(x - gesture.start_x, y - gesture.start_y);
                    SwipeEvent::Tracking {
                        offset: gesture.offset,
                    }
                }
                None => SwipeEvent::Ignored,
            },
            SwipeInput::PointerUp => match self.gesture.take() {
                Some(gesture) => match classify_release(gesture.offset.x) {
                    Some(direction) => self.commit(direction),
                    None => SwipeEvent::Cancelled,
                },
                None => SwipeEvent::Ignored,
            },
            SwipeInput::Button { direction } => {
                self.gesture = None;
                self.commit(direction)
            }
        }
    }

    /// Convenience for a full press-drag-release gesture along the x axis.
    pub fn drag(&mut self, dx: f64) -> SwipeEvent {
        self.apply(SwipeInput::PointerDown { x: 0.0, y: 0.0 });
        self.apply(SwipeInput::PointerMove { x: dx, y: 0.0 });
        self.apply(SwipeInput::PointerUp)
    }

    fn commit(&mut self, direction: SwipeDirection) -> SwipeEvent {
        let Some(record) = self.current().cloned() else {
            return SwipeEvent::Ignored;
        };
        self.state = self.state.advance(self.queue.len());

        match direction {
            SwipeDirection::Right => SwipeEvent::Liked { record },
            SwipeDirection::Left => SwipeEvent::Skipped { record },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterState;
    use crate::restaurant::fixtures::record;

    fn session(n: usize) -> SwipeSession {
        let catalog: Vec<_> = (0..n)
            .map(|i| record(&format!("r{i}"), &[], 100, 200))
            .collect();
        SwipeSession::new(CandidateQueue::build(&catalog, &FilterState::unrestricted()))
    }

    #[test]
    fn test_empty_queue_starts_exhausted() {
        let mut s = session(0);
        assert!(s.is_exhausted());
        assert!(s.current().is_none());
        assert_eq!(s.drag(200.0), SwipeEvent::Ignored);
    }

    #[test]
    fn test_tracking_does_not_move_index() {
        let mut s = session(2);
        s.apply(SwipeInput::PointerDown { x: 10.0, y: 10.0 });
        let event = s.apply(SwipeInput::PointerMove { x: 70.0, y: 30.0 });

        assert_eq!(
            event,
            SwipeEvent::Tracking {
                offset: GestureOffset::new(60.0, 20.0)
            }
        );
        assert!(s.is_gesture_active());
        assert_eq!(s.state(), SwipeState::Active { index: 0 });
        assert_eq!(s.feedback().badge, Some(SwipeDirection::Right));
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut s = session(1);
        assert_eq!(
            s.apply(SwipeInput::PointerMove { x: 300.0, y: 0.0 }),
            SwipeEvent::Ignored
        );
        assert_eq!(s.apply(SwipeInput::PointerUp), SwipeEvent::Ignored);
    }

    #[test]
    fn test_below_threshold_release_cancels() {
        let mut s = session(2);
        assert_eq!(s.drag(100.0), SwipeEvent::Cancelled);
        assert_eq!(s.offset(), GestureOffset::ZERO);
        assert!(!s.is_gesture_active());
        assert_eq!(s.state(), SwipeState::Active { index: 0 });
    }

    #[test]
    fn test_right_swipe_likes_and_advances() {
        let mut s = session(2);
        match s.drag(101.0) {
            SwipeEvent::Liked { record } => assert_eq!(record.id, "r0"),
            other => panic!("expected Liked, got {other:?}"),
        }
        assert_eq!(s.state(), SwipeState::Active { index: 1 });
        assert_eq!(s.offset(), GestureOffset::ZERO);
    }

    #[test]
    fn test_left_swipe_skips_and_advances() {
        let mut s = session(2);
        assert!(matches!(s.drag(-150.0), SwipeEvent::Skipped { .. }));
        assert_eq!(s.current().map(|r| r.id.as_str()), Some("r1"));
    }

    #[test]
    fn test_index_is_monotonic_until_exhausted() {
        let mut s = session(3);
        let mut last = s.state().index().unwrap();
        for _ in 0..2 {
            s.drag(-200.0);
            let next = s.state().index().unwrap();
            assert_eq!(next, last + 1);
            last = next;
        }
        s.drag(-200.0);
        assert!(s.is_exhausted());
        assert_eq!(s.remaining(), 0);
        assert_eq!(
            s.apply(SwipeInput::Button {
                direction: SwipeDirection::Right
            }),
            SwipeEvent::Ignored
        );
    }

    #[test]
    fn test_button_swipe_discards_gesture() {
        let mut s = session(2);
        s.apply(SwipeInput::PointerDown { x: 0.0, y: 0.0 });
        s.apply(SwipeInput::PointerMove { x: 40.0, y: 0.0 });

        let event = s.apply(SwipeInput::Button {
            direction: SwipeDirection::Right,
        });
        assert!(matches!(event, SwipeEvent::Liked { .. }));
        assert!(!s.is_gesture_active());
        assert_eq!(s.remaining(), 1);
    }
}
