// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vizanti Settings: the persisted settings document.
//!
//! Settings live in a single JSON file shaped like
//! `{ "view": { "scale": 50.0 }, ... }`. [`SettingsFile`] loads it, exposes
//! it as [`Settings`], and implements [`vizanti_view::ScaleStore`] so a
//! [`vizanti_view::Viewport`] can read its initial scale from it and write
//! every zoom back.
//!
//! ```no_run
//! use kurbo::{Point, Size};
//! use vizanti_settings::SettingsFile;
//! use vizanti_view::Viewport;
//!
//! # fn main() -> Result<(), vizanti_settings::SettingsError> {
//! let settings = SettingsFile::open("vizanti_settings.json")?;
//! let mut view = Viewport::new(settings, Size::new(1280.0, 720.0));
//!
//! // Persisted on every zoom.
//! view.on_wheel(Point::new(640.0, 360.0), -1.0);
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod file;

pub use document::{DEFAULT_VIEW_SCALE, Settings, ViewSettings};
pub use error::{Result, SettingsError};
pub use file::SettingsFile;
