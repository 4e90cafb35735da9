// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use kurbo::{Affine, Point, Rect, Size};
use vizanti_gesture::{GestureState, GestureTracker, GestureUpdate};

use crate::config::ViewportConfig;
use crate::input::{InputEvent, Response};
use crate::listeners::{ListenerId, Listeners};
use crate::size::ViewSize;
use crate::store::ScaleStore;
use crate::transform::MapTransform;

/// Pan/zoom view over an unbounded map plane.
///
/// `Viewport` owns the map center and scale, and mutates them only in response
/// to input: drag panning (mouse or one touch), wheel zoom and two-finger
/// pinch zoom. Every accepted mutation bumps [`Viewport::revision`] and calls
/// each subscribed listener exactly once.
///
/// - `S` is the persisted settings store the initial scale comes from and
///   every new scale goes back to.
/// - `Z` reports the current screen size; it is read on every conversion.
#[derive(Debug)]
pub struct Viewport<S, Z = Size> {
    transform: MapTransform,
    config: ViewportConfig,
    gestures: GestureTracker,
    store: S,
    size: Z,
    listeners: Listeners,
    revision: u64,
}

impl<S: ScaleStore, Z: ViewSize> Viewport<S, Z> {
    /// Creates a viewport centered on the map origin with the default config.
    #[must_use]
    pub fn new(store: S, size: Z) -> Self {
        Self::with_config(store, size, ViewportConfig::default())
    }

    /// Creates a viewport centered on the map origin.
    ///
    /// The initial scale is read from `store` once and clamped into the
    /// configured range; a non-finite stored value falls back to the minimum.
    #[must_use]
    pub fn with_config(store: S, size: Z, config: ViewportConfig) -> Self {
        let stored = store.scale();
        let scale = if stored.is_finite() {
            config.clamp_scale(stored)
        } else {
            log::warn!("stored view scale {stored} is not finite, using {}", config.min_scale());
            config.min_scale()
        };
        Self {
            transform: MapTransform::new(Point::ORIGIN, scale),
            config,
            gestures: GestureTracker::new(),
            store,
            size,
            listeners: Listeners::default(),
            revision: 0,
        }
    }

    /// Map-space point at the middle of the screen.
    #[must_use]
    pub fn center(&self) -> Point {
        self.transform.center
    }

    /// Screen pixels per map unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    /// Current transform parameters.
    #[must_use]
    pub fn transform(&self) -> MapTransform {
        self.transform
    }

    /// Scale limits and wheel sensitivity.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Screen size as currently reported by the size provider.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.size.size()
    }

    /// Converts a map-space point into screen coordinates.
    #[must_use]
    pub fn map_to_screen(&self, pt: Point) -> Point {
        self.transform.map_to_screen(pt, self.viewport_size())
    }

    /// Converts a screen-space point into map coordinates.
    #[must_use]
    pub fn screen_to_map(&self, pt: Point) -> Point {
        self.transform.screen_to_map(pt, self.viewport_size())
    }

    /// Map → screen affine, for drawing map content directly.
    #[must_use]
    pub fn map_to_screen_affine(&self) -> Affine {
        self.transform.map_to_screen_affine(self.viewport_size())
    }

    /// Map-space rectangle currently on screen.
    #[must_use]
    pub fn visible_map_rect(&self) -> Rect {
        self.transform.visible_map_rect(self.viewport_size())
    }

    /// Number of accepted mutations so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current gesture, if any.
    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        self.gestures.state()
    }

    /// The injected settings store.
    #[must_use]
    pub fn settings(&self) -> &S {
        &self.store
    }

    /// The injected size provider.
    #[must_use]
    pub fn size_provider(&self) -> &Z {
        &self.size
    }

    /// Consumes the viewport and returns its injected dependencies.
    pub fn into_parts(self) -> (S, Z) {
        (self.store, self.size)
    }

    /// Registers a "view changed" listener.
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Begins (or restarts) a drag at screen point `pt`.
    pub fn on_pan_start(&mut self, pt: Point) {
        self.gestures.pointer_down(pt, self.transform.center);
    }

    /// Continues a drag. Returns `true` if the view changed.
    pub fn on_pan_move(&mut self, pt: Point) -> bool {
        match self.gestures.pointer_move(pt, self.transform.scale) {
            Some(center) => self.apply_pan(center),
            None => false,
        }
    }

    /// Ends a drag. Safe to call when no drag is active.
    pub fn on_pan_end(&mut self) {
        self.gestures.pointer_up();
    }

    /// Multiplies the scale by `ratio` (clamped), keeping the map point under
    /// screen point `anchor` in place. Returns `true` if the view changed.
    ///
    /// The center correction uses the ratio that was actually applied after
    /// clamping, so zooming against a scale limit does not move the view.
    pub fn on_zoom(&mut self, anchor: Point, ratio: f64) -> bool {
        if !anchor.is_finite() || !(ratio.is_finite() && ratio > 0.0) {
            return false;
        }
        let old_scale = self.transform.scale;
        let new_scale = self.config.clamp_scale(old_scale * ratio);
        // Clamping returns the bound itself, so equality catches "already there".
        if new_scale == old_scale {
            return false;
        }
        let applied = new_scale / old_scale;

        // Center first, against the pre-zoom scale.
        let size = self.viewport_size();
        self.transform.center = self.transform.zoom_about(anchor, applied, size);
        self.transform.scale = new_scale;

        self.persist_scale();
        self.changed();
        true
    }

    /// Zooms one wheel notch about the cursor. Returns `true` if the view changed.
    pub fn on_wheel(&mut self, position: Point, delta_y: f64) -> bool {
        match self.config.wheel_factor(delta_y) {
            Some(factor) => self.on_zoom(position, factor),
            None => false,
        }
    }

    /// Touches began; `touches` lists every active touch.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Response {
        self.gestures.touch_start(touches, self.transform.center);
        Response::touches(false, touches)
    }

    /// Active touches moved.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> Response {
        let update =
            self.gestures
                .touch_move(touches, self.transform.center, self.transform.scale);
        let changed = match update {
            GestureUpdate::None => false,
            GestureUpdate::Pan { center } => self.apply_pan(center),
            GestureUpdate::Zoom { anchor, ratio } => self.on_zoom(anchor, ratio),
        };
        Response::touches(changed, touches)
    }

    /// Touches ended; `touches` lists the touches still active.
    pub fn on_touch_end(&mut self, touches: &[Point]) -> Response {
        self.gestures.touch_end(touches, self.transform.center);
        Response::default()
    }

    /// Dispatches one raw input event.
    pub fn handle(&mut self, event: InputEvent<'_>) -> Response {
        match event {
            InputEvent::PointerDown(pt) => {
                self.on_pan_start(pt);
                Response::default()
            }
            InputEvent::PointerMove(pt) => Response::changed(self.on_pan_move(pt)),
            InputEvent::PointerUp => {
                self.on_pan_end();
                Response::default()
            }
            InputEvent::Wheel { position, delta_y } => {
                Response::changed(self.on_wheel(position, delta_y))
            }
            InputEvent::TouchStart(touches) => self.on_touch_start(touches),
            InputEvent::TouchMove(touches) => self.on_touch_move(touches),
            InputEvent::TouchEnd(touches) => self.on_touch_end(touches),
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            center: self.transform.center,
            scale: self.transform.scale,
            viewport_size: self.viewport_size(),
            visible_map_rect: self.visible_map_rect(),
            config: self.config,
            gesture: *self.gestures.state(),
            listeners: self.listeners.len(),
            revision: self.revision,
        }
    }

    fn apply_pan(&mut self, center: Point) -> bool {
        self.transform.center = center;
        self.changed();
        true
    }

    fn persist_scale(&mut self) {
        self.store.set_scale(self.transform.scale);
        if let Err(err) = self.store.save() {
            log::warn!("failed to save view scale {}: {err}", self.transform.scale);
        }
    }

    fn changed(&mut self) {
        self.revision += 1;
        log::trace!(
            "view changed: center={:?} scale={}",
            self.transform.center,
            self.transform.scale
        );
        self.listeners.notify();
    }
}

/// Debug snapshot of a [`Viewport`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Map-space point at the screen center.
    pub center: Point,
    /// Screen pixels per map unit.
    pub scale: f64,
    /// Screen size at the time of the snapshot.
    pub viewport_size: Size,
    /// Map-space rectangle on screen.
    pub visible_map_rect: Rect,
    /// Scale limits and wheel sensitivity.
    pub config: ViewportConfig,
    /// Gesture in progress.
    pub gesture: GestureState,
    /// Number of subscribed listeners.
    pub listeners: usize,
    /// Number of accepted mutations so far.
    pub revision: u64,
}
