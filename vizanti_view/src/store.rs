// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::convert::Infallible;
use core::fmt::Display;

/// Persisted view scale, injected into a [`crate::Viewport`].
///
/// The viewport reads [`ScaleStore::scale`] once when it is built, then
/// writes the new scale and calls [`ScaleStore::save`] after every zoom.
pub trait ScaleStore {
    /// Error reported by [`ScaleStore::save`].
    type Error: Display;

    /// Stored scale.
    fn scale(&self) -> f64;

    /// Replaces the stored scale without persisting it.
    fn set_scale(&mut self, scale: f64);

    /// Persists the current value.
    fn save(&mut self) -> Result<(), Self::Error>;
}

impl<T: ScaleStore + ?Sized> ScaleStore for &mut T {
    type Error = T::Error;

    fn scale(&self) -> f64 {
        (**self).scale()
    }

    fn set_scale(&mut self, scale: f64) {
        (**self).set_scale(scale);
    }

    fn save(&mut self) -> Result<(), Self::Error> {
        (**self).save()
    }
}

/// In-memory [`ScaleStore`] that counts saves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemoryScaleStore {
    scale: f64,
    saves: usize,
}

impl MemoryScaleStore {
    /// Creates a store holding `scale`.
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { scale, saves: 0 }
    }

    /// Number of times [`ScaleStore::save`] was called.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScaleStore for MemoryScaleStore {
    type Error = Infallible;

    fn scale(&self) -> f64 {
        self.scale
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn save(&mut self) -> Result<(), Self::Error> {
        self.saves += 1;
        Ok(())
    }
}
