/*! Persisted window geometry and display flags. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Window geometry and display flags, persisted across runs.
///
/// `width` and `height` are always positive. `maximized` and `fullscreen`
/// mirror independent window-manager flags - both may be set at once.
///
/// The serialized form is a flat JSON object with these six keys; fields
/// absent from a persisted record fall back to their defaults on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct WindowState {
  pub width: u32,
  pub height: u32,
  pub left: i32,
  pub top: i32,
  pub maximized: bool,
  pub fullscreen: bool,
}

impl Default for WindowState {
  fn default() -> Self {
    Self {
      width: 800,
      height: 600,
      left: 0,
      top: 0,
      maximized: false,
      fullscreen: false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_a_sane_window() {
    let state = WindowState::default();
    assert!(state.width > 0 && state.height > 0, "defaults must be positive");
    assert!(!state.maximized && !state.fullscreen);
  }

  #[test]
  fn missing_keys_fall_back_per_field() {
    let state: WindowState =
      serde_json::from_str(r#"{"width":1024,"left":40}"#).unwrap();
    assert_eq!(state.width, 1024, "present key is kept");
    assert_eq!(state.left, 40, "present key is kept");
    assert_eq!(state.height, 600, "absent key defaults");
    assert!(!state.maximized, "absent flag defaults to false");
  }

  #[test]
  fn maximized_and_fullscreen_are_independent() {
    let state: WindowState =
      serde_json::from_str(r#"{"maximized":true,"fullscreen":true}"#).unwrap();
    assert!(state.maximized && state.fullscreen, "both flags may be set");
  }
}
