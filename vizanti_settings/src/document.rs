// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Scale a fresh install starts with, in screen pixels per map unit.
pub const DEFAULT_VIEW_SCALE: f64 = 50.0;

/// The persisted settings document.
///
/// Sections this crate does not know about are kept verbatim and written
/// back on save.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Map view settings.
    pub view: ViewSettings,
    /// Everything else in the document.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// The `view` section of [`Settings`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Screen pixels per map unit.
    pub scale: f64,
    /// Unrecognized keys in the section.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_VIEW_SCALE,
            other: Map::new(),
        }
    }
}
