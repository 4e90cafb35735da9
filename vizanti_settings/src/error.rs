// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::PathBuf;

/// Failure to load or save a [`crate::SettingsFile`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Reading, writing or renaming the file failed.
    #[error("settings file {}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The file exists but is not a valid settings document.
    #[error("settings file {} is malformed: {source}", .path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// The in-memory settings could not be encoded.
    #[error("failed to encode settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for settings operations.
pub type Result<T, E = SettingsError> = std::result::Result<T, E>;
