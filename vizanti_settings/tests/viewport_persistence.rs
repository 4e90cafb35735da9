// Copyright 2025 the Vizanti Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A viewport backed by a real settings file: the scale survives a restart.

use kurbo::{Point, Size};
use vizanti_settings::{SettingsFile, ViewSettings};
use vizanti_view::Viewport;

#[test]
fn zoom_is_restored_on_next_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let screen = Size::new(800.0, 600.0);

    let scale = {
        let mut view = Viewport::new(SettingsFile::open(&path).unwrap(), screen);
        view.on_wheel(Point::new(100.0, 100.0), -1.0);
        view.on_wheel(Point::new(100.0, 100.0), -1.0);
        view.scale()
    };

    let view = Viewport::new(SettingsFile::open(&path).unwrap(), screen);
    assert!((view.scale() - scale).abs() < 1e-9);
    // Center is not persisted.
    assert_eq!(view.center(), Point::ORIGIN);
}

#[test]
fn out_of_range_stored_scale_is_clamped_but_not_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "view": { "scale": 0.001 } }"#).unwrap();

    let view = Viewport::new(SettingsFile::open(&path).unwrap(), Size::new(10.0, 10.0));
    assert_eq!(view.scale(), vizanti_view::MIN_SCALE);

    let (file, _) = view.into_parts();
    assert_eq!(file.settings().view, ViewSettings {
        scale: 0.001,
        ..ViewSettings::default()
    });
}
