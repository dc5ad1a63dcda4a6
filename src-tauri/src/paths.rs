/*! Per-user storage locations. */

use std::fs;
use std::path::PathBuf;

use tauri::{AppHandle, Manager};

/// Resolved per-user storage locations, created on startup if absent.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// The persisted window-state record.
    pub state_file: PathBuf,
    /// Directory handed to the embedded engine for its file-backed
    /// cookie jar and local storage. The shell never reads its contents.
    pub cookie_dir: PathBuf,
}

impl AppPaths {
    /// Resolve everything under the per-user config directory.
    pub fn resolve(app: &AppHandle) -> tauri::Result<Self> {
        let base = app.path().app_config_dir()?;
        let cookie_dir = base.join("storage");
        fs::create_dir_all(&cookie_dir)?;
        Ok(Self {
            state_file: base.join("state.json"),
            cookie_dir,
        })
    }
}
