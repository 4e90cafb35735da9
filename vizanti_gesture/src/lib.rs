// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vizanti Gesture: pan and pinch state machines for map viewports.
//!
//! This crate turns raw pointer and touch positions into view updates without
//! knowing anything about the view itself. Callers feed it the current map
//! center and scale where needed and apply the returned [`GestureUpdate`]s.
//!
//! - [`drag`]: the reference data of one pan gesture.
//! - [`pinch`]: incremental zoom ratios from two touch points.
//! - [`GestureTracker`]: routes mouse and touch input into a single
//!   [`GestureState`] (`Idle`, `Panning` or `Pinching`).
//!
//! The session data lives inside the state variant, so a pinch baseline can
//! never leak into a later pan (or the other way round).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use vizanti_gesture::GestureTracker;
//!
//! let mut tracker = GestureTracker::new();
//! let center = Point::new(0.0, 0.0);
//! let scale = 2.0;
//!
//! tracker.pointer_down(Point::new(100.0, 100.0), center);
//! let new_center = tracker.pointer_move(Point::new(80.0, 100.0), scale);
//! assert_eq!(new_center, Some(Point::new(10.0, 0.0)));
//! tracker.pointer_up();
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pinch;
mod tracker;

pub use tracker::{GestureState, GestureTracker, GestureUpdate};
