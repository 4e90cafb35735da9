// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::Size;

/// Live source of the screen size a [`crate::Viewport`] maps into.
///
/// The viewport calls [`ViewSize::size`] on every conversion and never caches
/// the result.
pub trait ViewSize {
    /// Current width and height of the rendering surface, in pixels.
    fn size(&self) -> Size;
}

impl ViewSize for Size {
    fn size(&self) -> Size {
        *self
    }
}

/// A size the host updates in place, typically from a resize handler.
impl ViewSize for Cell<Size> {
    fn size(&self) -> Size {
        self.get()
    }
}

impl<T: ViewSize + ?Sized> ViewSize for &T {
    fn size(&self) -> Size {
        (**self).size()
    }
}

impl<T: ViewSize + ?Sized> ViewSize for Rc<T> {
    fn size(&self) -> Size {
        (**self).size()
    }
}

/// Adapts a closure into a [`ViewSize`].
///
/// ```
/// use kurbo::Size;
/// use vizanti_view::{SizeFn, ViewSize};
///
/// let window = SizeFn(|| Size::new(1024.0, 768.0));
/// assert_eq!(window.size().width, 1024.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SizeFn<F>(pub F);

impl<F: Fn() -> Size> ViewSize for SizeFn<F> {
    fn size(&self) -> Size {
        (self.0)()
    }
}
