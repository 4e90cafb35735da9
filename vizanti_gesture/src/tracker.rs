// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture routing: one state machine for mouse drags, single-touch pans and
//! two-finger pinches.
//!
//! ## Routing rules
//!
//! - Pointer (mouse) down/move/up drives a pan directly.
//! - One active touch pans; exactly two pinch; any other count parks the
//!   tracker in [`GestureState::Idle`] until the count drops back to 1 or 2.
//! - Every change in touch count starts a *fresh* session. Going from two
//!   touches to one begins a new pan at the remaining touch, so no pinch
//!   motion leaks into the pan.
//! - Events carrying non-finite positions are ignored without touching the
//!   current session.
//!
//! ```
//! use kurbo::Point;
//! use vizanti_gesture::{GestureTracker, GestureUpdate};
//!
//! let mut tracker = GestureTracker::new();
//! let center = Point::ORIGIN;
//!
//! tracker.touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)], center);
//! let update = tracker.touch_move(&[Point::new(0.0, 0.0), Point::new(150.0, 0.0)], center, 1.0);
//! assert_eq!(
//!     update,
//!     GestureUpdate::Zoom { anchor: Point::new(75.0, 0.0), ratio: 1.5 }
//! );
//!
//! // Lifting one finger starts a fresh pan under the remaining touch.
//! tracker.touch_end(&[Point::new(0.0, 0.0)], center);
//! assert!(tracker.is_panning());
//! ```

use kurbo::Point;

use crate::drag::DragSession;
use crate::pinch::PinchSession;

/// Current gesture, if any. Sessions never outlive their variant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A mouse drag or single-touch pan.
    Panning(DragSession),
    /// A two-finger pinch.
    Pinching(PinchSession),
}

impl GestureState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Panning(_) => "panning",
            Self::Pinching(_) => "pinching",
        }
    }
}

/// What the caller should apply to its view after a move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureUpdate {
    /// Nothing to apply.
    None,
    /// Move the map center to `center`.
    Pan {
        /// New map-space center.
        center: Point,
    },
    /// Zoom by `ratio` about the screen point `anchor`.
    Zoom {
        /// Screen-space fixed point.
        anchor: Point,
        /// Unclamped scale ratio.
        ratio: f64,
    },
}

/// Routes pointer and touch input into [`GestureState`] transitions.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current gesture state.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Returns `true` while a pan session is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.state, GestureState::Panning(_))
    }

    /// Returns `true` while a pinch session is active.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.state, GestureState::Pinching(_))
    }

    /// Drops any session in progress.
    pub fn reset(&mut self) {
        self.transition(GestureState::Idle);
    }

    /// Starts (or restarts) a pan at `pos` with the map currently centered at `center`.
    pub fn pointer_down(&mut self, pos: Point, center: Point) {
        if !pos.is_finite() {
            return;
        }
        self.transition(GestureState::Panning(DragSession::new(pos, center)));
    }

    /// Returns the new map center for a pan move, or `None` when not panning.
    pub fn pointer_move(&mut self, pos: Point, scale: f64) -> Option<Point> {
        match self.state {
            GestureState::Panning(drag) if pos.is_finite() => Some(drag.center_at(pos, scale)),
            _ => None,
        }
    }

    /// Ends a pan. Does nothing when idle or pinching.
    pub fn pointer_up(&mut self) {
        if self.is_panning() {
            self.transition(GestureState::Idle);
        }
    }

    /// Handles new touches with the full list of active `touches`.
    ///
    /// An in-progress pinch keeps its baseline when another two-touch start
    /// arrives.
    pub fn touch_start(&mut self, touches: &[Point], center: Point) {
        if !all_finite(touches) {
            return;
        }
        if touches.len() == 2 && self.is_pinching() {
            return;
        }
        self.rebaseline(touches, center);
    }

    /// Handles lifted touches with the list of touches still active.
    pub fn touch_end(&mut self, touches: &[Point], center: Point) {
        if !all_finite(touches) {
            self.transition(GestureState::Idle);
            return;
        }
        self.rebaseline(touches, center);
    }

    /// Handles movement of the active `touches`.
    ///
    /// `center` and `scale` are the view's current values; `center` is only
    /// used if a fresh pan has to be started.
    pub fn touch_move(&mut self, touches: &[Point], center: Point, scale: f64) -> GestureUpdate {
        if !all_finite(touches) {
            return GestureUpdate::None;
        }
        let update = match (touches, &mut self.state) {
            (&[pos], GestureState::Panning(drag)) => Some(GestureUpdate::Pan {
                center: drag.center_at(pos, scale),
            }),
            (&[a, b], GestureState::Pinching(pinch)) => {
                Some(pinch.update(a, b).map_or(GestureUpdate::None, |sample| {
                    GestureUpdate::Zoom {
                        anchor: sample.center,
                        ratio: sample.ratio,
                    }
                }))
            }
            _ => None,
        };
        update.unwrap_or_else(|| {
            // Count changed without a start/end event in between.
            self.rebaseline(touches, center);
            GestureUpdate::None
        })
    }

    fn rebaseline(&mut self, touches: &[Point], center: Point) {
        let next = match *touches {
            [pos] => GestureState::Panning(DragSession::new(pos, center)),
            [a, b] => GestureState::Pinching(PinchSession::begin(a, b)),
            _ => GestureState::Idle,
        };
        self.transition(next);
    }

    fn transition(&mut self, next: GestureState) {
        if self.state.name() != next.name() {
            log::debug!("gesture {} -> {}", self.state.name(), next.name());
        }
        self.state = next;
    }
}

fn all_finite(touches: &[Point]) -> bool {
    touches.iter().all(|p| p.is_finite())
}
