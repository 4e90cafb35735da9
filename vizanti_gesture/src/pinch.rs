// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch session: incremental zoom ratios from two touch points.
//!
//! Each move is compared against the *previous* sample, not the distance at
//! which the pinch began, so ratios compose: two moves from `d0` to `d1` to
//! `d2` yield `d1 / d0` followed by `d2 / d1`.
//!
//! ```
//! use kurbo::Point;
//! use vizanti_gesture::pinch::PinchSession;
//!
//! let mut pinch = PinchSession::begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
//!
//! let sample = pinch.update(Point::new(0.0, 0.0), Point::new(200.0, 0.0)).unwrap();
//! assert_eq!(sample.ratio, 2.0);
//! assert_eq!(sample.center, Point::new(100.0, 0.0));
//!
//! // Rebaselined: 200 -> 300 is 1.5, not 3.
//! let sample = pinch.update(Point::new(0.0, 0.0), Point::new(300.0, 0.0)).unwrap();
//! assert_eq!(sample.ratio, 1.5);
//! ```

use kurbo::Point;

/// Inter-touch distance tracking for a two-finger gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    distance: f64,
}

/// One usable pinch-move sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Midpoint of the two touches, in screen space.
    pub center: Point,
    /// Ratio of the new inter-touch distance to the previous one.
    pub ratio: f64,
}

impl PinchSession {
    /// Records the baseline distance between touches `a` and `b`.
    #[must_use]
    pub fn begin(a: Point, b: Point) -> Self {
        Self {
            distance: a.distance(b),
        }
    }

    /// The most recent inter-touch distance.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Feeds a new pair of touch positions.
    ///
    /// The new distance always becomes the baseline for the next call. Returns
    /// `None` when no ratio can be derived this frame: the previous distance
    /// was zero or not finite, or the new one collapses to zero.
    pub fn update(&mut self, a: Point, b: Point) -> Option<PinchSample> {
        let previous = self.distance;
        let current = a.distance(b);
        self.distance = current;

        if !(previous.is_finite() && previous > 0.0) {
            log::trace!("pinch baseline {previous} is degenerate, skipping frame");
            return None;
        }
        let ratio = current / previous;
        if !(ratio.is_finite() && ratio > 0.0) {
            log::trace!("pinch ratio {ratio} is degenerate, skipping frame");
            return None;
        }
        Some(PinchSample {
            center: a.midpoint(b),
            ratio,
        })
    }
}
