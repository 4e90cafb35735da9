// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vizanti_view::ScaleStore;

use crate::document::Settings;
use crate::error::{Result, SettingsError};

/// A [`Settings`] document bound to a JSON file.
#[derive(Clone, Debug)]
pub struct SettingsFile {
    path: PathBuf,
    settings: Settings,
}

impl SettingsFile {
    /// Loads settings from `path`.
    ///
    /// A missing file is not an error: defaults are used and the file is
    /// created on the first [`SettingsFile::save`].
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let settings = match fs::read_to_string(&path) {
            Ok(text) => {
                log::info!("loading settings from {}", path.display());
                serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("no settings at {}, using defaults", path.display());
                Settings::default()
            }
            Err(source) => return Err(SettingsError::Io { path, source }),
        };
        Ok(Self { path, settings })
    }

    /// Binds `settings` to `path` without touching the file system.
    #[must_use]
    pub fn with_settings(path: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            path: path.into(),
            settings,
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory document.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the in-memory document. Call [`SettingsFile::save`]
    /// to persist changes.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Writes the document to disk.
    ///
    /// The JSON is written to a sibling temporary file which then replaces the
    /// target, so readers never observe a half-written document.
    pub fn save(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.settings)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let staging = self.staging_path();
        fs::write(&staging, text).map_err(|source| self.io_error(source))?;
        fs::rename(&staging, &self.path).map_err(|source| self.io_error(source))?;

        log::debug!("saved settings to {}", self.path.display());
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScaleStore for SettingsFile {
    type Error = SettingsError;

    fn scale(&self) -> f64 {
        self.settings.view.scale
    }

    fn set_scale(&mut self, scale: f64) {
        self.settings.view.scale = scale;
    }

    fn save(&mut self) -> Result<()> {
        Self::save(self)
    }
}
