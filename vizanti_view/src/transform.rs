// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform map ↔ screen mapping.
///
/// The map point `center` is drawn at the middle of the screen, and one map
/// unit spans `scale` screen pixels. The screen size is passed to every
/// conversion rather than stored, so a resize applies immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapTransform {
    /// Map-space point shown at the screen center.
    pub center: Point,
    /// Screen pixels per map unit. Must be positive.
    pub scale: f64,
}

impl MapTransform {
    /// Creates a transform centered on `center` at `scale`.
    #[must_use]
    pub fn new(center: Point, scale: f64) -> Self {
        Self { center, scale }
    }

    /// Converts a map-space point into screen coordinates.
    #[must_use]
    pub fn map_to_screen(&self, pt: Point, size: Size) -> Point {
        ((pt - self.center) * self.scale + half(size)).to_point()
    }

    /// Converts a screen-space point into map coordinates.
    #[must_use]
    pub fn screen_to_map(&self, pt: Point, size: Size) -> Point {
        self.center + (pt.to_vec2() - half(size)) / self.scale
    }

    /// The map → screen mapping as an affine transform, for renderers.
    #[must_use]
    pub fn map_to_screen_affine(&self, size: Size) -> Affine {
        Affine::translate(half(size))
            * Affine::scale(self.scale)
            * Affine::translate(-self.center.to_vec2())
    }

    /// Map-space rectangle covered by a screen of the given size.
    #[must_use]
    pub fn visible_map_rect(&self, size: Size) -> Rect {
        Rect::from_points(
            self.screen_to_map(Point::ORIGIN, size),
            self.screen_to_map(size.to_vec2().to_point(), size),
        )
    }

    /// Map units covered by one screen pixel.
    #[must_use]
    pub fn map_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }

    /// Center that keeps the map point under screen point `anchor` fixed when
    /// the scale is multiplied by `ratio`.
    ///
    /// The map point is resolved with the current (pre-zoom) scale; callers
    /// store the returned center and only then the new scale.
    #[must_use]
    pub fn zoom_about(&self, anchor: Point, ratio: f64, size: Size) -> Point {
        let map_point = self.screen_to_map(anchor, size);
        self.center + (map_point - self.center) * (1.0 - 1.0 / ratio)
    }
}

fn half(size: Size) -> Vec2 {
    size.to_vec2() / 2.0
}
