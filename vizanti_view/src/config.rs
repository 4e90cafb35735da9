// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Smallest scale (screen pixels per map unit) a default viewport allows.
pub const MIN_SCALE: f64 = 1.0;

/// Largest scale a default viewport allows.
pub const MAX_SCALE: f64 = 10_000.0;

/// Scale multiplier applied per wheel notch.
pub const ZOOM_FACTOR: f64 = 1.05;

/// Scale limits and wheel sensitivity for a [`crate::Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    min_scale: f64,
    max_scale: f64,
    zoom_factor: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_factor: ZOOM_FACTOR,
        }
    }
}

impl ViewportConfig {
    /// Creates a configuration with the given scale range and wheel factor.
    ///
    /// The range is normalized so that `min_scale <= max_scale`, and the lower
    /// bound is kept strictly positive. A `zoom_factor` below `1.0` is
    /// inverted, so it always means "zoom in by this much per notch".
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64, zoom_factor: f64) -> Self {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        let zoom_factor = if zoom_factor < 1.0 {
            1.0 / zoom_factor
        } else {
            zoom_factor
        };
        Self {
            min_scale: min_scale.max(f64::MIN_POSITIVE),
            max_scale: max_scale.max(f64::MIN_POSITIVE),
            zoom_factor,
        }
    }

    /// Lower scale bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Upper scale bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Per-notch wheel multiplier.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Scale multiplier for one wheel event with vertical delta `delta_y`.
    ///
    /// Scrolling toward the user (positive delta) zooms out, away from the
    /// user zooms in. Returns `None` for a zero or non-finite delta.
    #[must_use]
    pub fn wheel_factor(&self, delta_y: f64) -> Option<f64> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }
        Some(if delta_y > 0.0 {
            1.0 / self.zoom_factor
        } else {
            self.zoom_factor
        })
    }
}
