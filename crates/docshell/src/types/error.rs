/*! Error types for shell operations. */

use std::path::PathBuf;

/// Errors that can occur during shell operations.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
  /// The persisted window-state file exists but is not parseable.
  ///
  /// Distinguished from a missing file, which is not an error: startup
  /// falls back to defaults for absent files but refuses to guess at a
  /// corrupt one.
  #[error("Malformed window state at {path}: {source}")]
  MalformedState {
    path: PathBuf,
    source: serde_json::Error,
  },

  /// The persisted window-state file exists but could not be read.
  #[error("Failed to read window state at {path}: {source}")]
  ReadState {
    path: PathBuf,
    source: std::io::Error,
  },

  /// The window-state snapshot could not be written at shutdown.
  #[error("Failed to write window state at {path}: {source}")]
  WriteState {
    path: PathBuf,
    source: std::io::Error,
  },

  /// The window-state snapshot could not be encoded.
  #[error("Failed to encode window state: {0}")]
  EncodeState(serde_json::Error),
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
