/*!
Window-state persistence.

Loads the persisted geometry record at startup (merging defaults under
whatever fields the file supplies) and writes the shutdown snapshot back.
A missing file is normal first-run behavior; a file that exists but does
not parse is a fatal configuration error surfaced to the caller.
*/

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::types::{ShellError, ShellResult, WindowState};

/// Owner of the persisted window-state record.
///
/// The store holds the merged state for the life of the process; the
/// backing file is only read once at construction and written once per
/// [`save`](Self::save).
#[derive(Debug, Clone)]
pub struct WindowStateStore {
  path: PathBuf,
  state: WindowState,
}

impl WindowStateStore {
  /// Load the record at `path`.
  ///
  /// Absent file: pure defaults. Present but unparseable: an error - the
  /// caller decides whether to abort, no partial recovery is attempted
  /// here.
  pub fn load(path: impl Into<PathBuf>) -> ShellResult<Self> {
    let path = path.into();
    let state = match fs::read_to_string(&path) {
      Ok(raw) => serde_json::from_str(&raw).map_err(|source| ShellError::MalformedState {
        path: path.clone(),
        source,
      })?,
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        log::info!("no window state at {}, using defaults", path.display());
        WindowState::default()
      }
      Err(source) => return Err(ShellError::ReadState { path, source }),
    };
    Ok(Self { path, state })
  }

  /// The merged window state to open with.
  pub const fn state(&self) -> &WindowState {
    &self.state
  }

  /// Persist a shutdown snapshot, replacing the stored record.
  pub fn save(&mut self, snapshot: WindowState) -> ShellResult<()> {
    self.state = snapshot;
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent).map_err(|source| ShellError::WriteState {
        path: self.path.clone(),
        source,
      })?;
    }
    let raw = serde_json::to_string(&self.state).map_err(ShellError::EncodeState)?;
    fs::write(&self.path, raw).map_err(|source| ShellError::WriteState {
      path: self.path.clone(),
      source,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn state_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("state.json")
  }

  mod load {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
      let dir = tempfile::tempdir().unwrap();
      let store = WindowStateStore::load(state_path(&dir)).unwrap();
      assert_eq!(*store.state(), WindowState::default());
    }

    #[test]
    fn partial_record_defaults_missing_fields() {
      let dir = tempfile::tempdir().unwrap();
      let path = state_path(&dir);
      fs::write(&path, r#"{"width":1280,"height":720,"left":10,"top":20}"#).unwrap();
      let store = WindowStateStore::load(&path).unwrap();
      assert_eq!(store.state().width, 1280);
      assert_eq!(store.state().top, 20);
      assert!(!store.state().maximized, "absent `maximized` defaults to false");
      assert!(!store.state().fullscreen, "absent `fullscreen` defaults to false");
    }

    #[test]
    fn malformed_record_is_fatal() {
      let dir = tempfile::tempdir().unwrap();
      let path = state_path(&dir);
      fs::write(&path, "{not json").unwrap();
      let err = WindowStateStore::load(&path).unwrap_err();
      assert!(
        matches!(err, ShellError::MalformedState { .. }),
        "parse failures must not fall back to defaults: {err}"
      );
    }
  }

  mod save {
    use super::*;

    #[test]
    fn round_trips_every_field() {
      let dir = tempfile::tempdir().unwrap();
      let path = state_path(&dir);
      let snapshot = WindowState {
        width: 1440,
        height: 900,
        left: -8,
        top: 31,
        maximized: true,
        fullscreen: true,
      };

      let mut store = WindowStateStore::load(&path).unwrap();
      store.save(snapshot).unwrap();

      let reloaded = WindowStateStore::load(&path).unwrap();
      assert_eq!(*reloaded.state(), snapshot, "all six fields survive a round trip");
    }

    #[test]
    fn creates_the_config_directory() {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("nested").join("state.json");
      let mut store = WindowStateStore::load(&path).unwrap();
      store.save(WindowState::default()).unwrap();
      assert!(path.exists());
    }

    #[test]
    fn save_replaces_the_previous_record() {
      let dir = tempfile::tempdir().unwrap();
      let path = state_path(&dir);
      fs::write(&path, r#"{"width":640,"height":480,"maximized":true}"#).unwrap();

      let mut store = WindowStateStore::load(&path).unwrap();
      let mut snapshot = *store.state();
      snapshot.width = 800;
      snapshot.maximized = false;
      store.save(snapshot).unwrap();

      let reloaded = WindowStateStore::load(&path).unwrap();
      assert_eq!(reloaded.state().width, 800);
      assert!(!reloaded.state().maximized);
      assert_eq!(reloaded.state().height, 480, "untouched fields keep their stored values");
    }
  }
}

#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  proptest! {
    /// Persisting any snapshot and reloading yields identical fields.
    #[test]
    fn save_load_round_trip(
      width in 1u32..10_000, height in 1u32..10_000,
      left in -5_000i32..5_000, top in -5_000i32..5_000,
      maximized: bool, fullscreen: bool
    ) {
      let dir = tempfile::tempdir().unwrap();
      let path = dir.path().join("state.json");
      let snapshot = WindowState { width, height, left, top, maximized, fullscreen };

      let mut store = WindowStateStore::load(&path).unwrap();
      store.save(snapshot).unwrap();
      let reloaded = WindowStateStore::load(&path).unwrap();
      prop_assert_eq!(*reloaded.state(), snapshot);
    }
  }
}
