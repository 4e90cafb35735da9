// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vizanti View: the map viewport.
//!
//! This crate maps between an unbounded 2D map plane and a finite screen, and
//! lets users navigate the map with drag panning, wheel zoom and two-finger
//! pinch zoom. It focuses on:
//! - The map ↔ screen transform, parameterized by a center point and a
//!   uniform scale (screen pixels per map unit).
//! - Pan and zoom gestures, including zooming about the cursor or pinch
//!   center so the map point under it stays put.
//! - Clamping the scale into a configured range.
//! - Persisting the scale through an injected [`ScaleStore`].
//! - A "view changed" notification for renderers.
//!
//! It does **not** draw anything. Callers are expected to:
//! - Forward raw pointer, wheel and touch input (see [`InputEvent`]) or call
//!   the `on_*` methods directly.
//! - Subscribe to changes and redraw using [`Viewport::map_to_screen`] or
//!   [`Viewport::map_to_screen_affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vizanti_view::{MemoryScaleStore, Viewport};
//!
//! let mut view = Viewport::new(MemoryScaleStore::new(1.0), Size::new(1000.0, 1000.0));
//!
//! // Zoom in 2x about a point right of the screen center.
//! view.on_zoom(Point::new(600.0, 500.0), 2.0);
//! assert_eq!(view.center(), Point::new(50.0, 0.0));
//! assert_eq!(view.scale(), 2.0);
//!
//! // The map point that was under the anchor is still there.
//! assert_eq!(view.map_to_screen(Point::new(100.0, 0.0)), Point::new(600.0, 500.0));
//! ```
//!
//! ## Live screen size
//!
//! The screen size is read from a [`ViewSize`] on every conversion, so a
//! resize is picked up immediately:
//!
//! ```rust
//! use std::{cell::Cell, rc::Rc};
//!
//! use kurbo::{Point, Size};
//! use vizanti_view::{MemoryScaleStore, Viewport};
//!
//! let window = Rc::new(Cell::new(Size::new(800.0, 600.0)));
//! let view = Viewport::new(MemoryScaleStore::new(1.0), Rc::clone(&window));
//! assert_eq!(view.map_to_screen(Point::ORIGIN), Point::new(400.0, 300.0));
//!
//! window.set(Size::new(1024.0, 768.0));
//! assert_eq!(view.map_to_screen(Point::ORIGIN), Point::new(512.0, 384.0));
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis‑aligned with a **uniform** scale; rotation is out
//!   of scope.
//! - Zoom corrections always use the ratio actually applied after clamping.
//! - All state changes happen synchronously inside the `on_*` call; the
//!   viewport is meant to be owned by the thread that receives input.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod input;
mod listeners;
mod size;
mod store;
mod transform;
mod viewport;

pub use config::{MAX_SCALE, MIN_SCALE, ViewportConfig, ZOOM_FACTOR};
pub use input::{InputEvent, Response};
pub use listeners::ListenerId;
pub use size::{SizeFn, ViewSize};
pub use store::{MemoryScaleStore, ScaleStore};
pub use transform::MapTransform;
pub use viewport::{Viewport, ViewportDebugInfo};

pub use vizanti_gesture::{GestureState, GestureUpdate};
