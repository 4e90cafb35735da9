// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: the reference data for one pan gesture.
//!
//! A drag always measures displacement against the point where it
//! *started*, never against the previous move. That keeps the pan linear:
//! the same pointer position always yields the same center, no matter how
//! many move events were delivered in between.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vizanti_gesture::drag::DragSession;
//!
//! // Pointer pressed at (100, 100) while the map center was at the origin.
//! let drag = DragSession::new(Point::new(100.0, 100.0), Point::ORIGIN);
//!
//! // Dragging 20px to the right at scale 2 moves the center 10 map units left.
//! let center = drag.center_at(Point::new(120.0, 100.0), 2.0);
//! assert_eq!(center, Point::new(-10.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

/// Reference data captured when a pan gesture begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Screen-space pointer position at drag start.
    pub start: Point,
    /// Map-space center at drag start.
    pub reference_center: Point,
}

impl DragSession {
    /// Starts a session at screen point `start` with the current map `center`.
    #[must_use]
    pub fn new(start: Point, reference_center: Point) -> Self {
        Self {
            start,
            reference_center,
        }
    }

    /// Screen-space displacement from `pos` back to the drag start.
    #[must_use]
    pub fn offset(&self, pos: Point) -> Vec2 {
        self.start - pos
    }

    /// Map-space center implied by the pointer being at `pos`.
    ///
    /// `scale` is screen pixels per map unit and must be positive.
    #[must_use]
    pub fn center_at(&self, pos: Point, scale: f64) -> Point {
        self.reference_center + self.offset(pos) / scale
    }
}
