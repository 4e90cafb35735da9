// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Raw input forwarded by the host UI, in screen coordinates.
///
/// Touch variants carry every touch that is active *after* the event: for
/// [`InputEvent::TouchEnd`] that is the touches still on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<'a> {
    /// Mouse button pressed.
    PointerDown(Point),
    /// Mouse moved.
    PointerMove(Point),
    /// Mouse button released.
    PointerUp,
    /// Scroll wheel.
    Wheel {
        /// Cursor position.
        position: Point,
        /// Vertical delta; positive scrolls toward the user.
        delta_y: f64,
    },
    /// One or more touches began.
    TouchStart(&'a [Point]),
    /// Active touches moved.
    TouchMove(&'a [Point]),
    /// One or more touches ended or were cancelled.
    TouchEnd(&'a [Point]),
}

/// Outcome of handling one [`InputEvent`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// The view changed and listeners were notified.
    pub changed: bool,
    /// A two-touch start or move; hosts should suppress the platform's
    /// default handling (browser zoom and the like). Never set on touch end.
    pub capture: bool,
}

impl Response {
    pub(crate) fn changed(changed: bool) -> Self {
        Self {
            changed,
            capture: false,
        }
    }

    pub(crate) fn touches(changed: bool, touches: &[Point]) -> Self {
        Self {
            changed,
            capture: touches.len() == 2,
        }
    }
}
