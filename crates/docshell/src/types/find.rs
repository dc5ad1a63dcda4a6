/*! Find-in-page session state. */

use serde::Serialize;
use ts_rs::TS;

/// Result of the most recent find operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FindOutcome {
  /// No result has been reported yet.
  #[default]
  Unknown,
  /// The engine found at least one match.
  Found,
  /// The engine reported no match.
  NotFound,
}

/// Visible state of the find bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FindBarState {
  /// The bar is not shown; no find session is active.
  #[default]
  Hidden,
  /// The bar is shown with neutral styling.
  VisibleNeutral,
  /// The bar is shown with failure styling after a missed query.
  VisibleFailed,
}

/// Options handed to the engine's text finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOptions {
  pub case_sensitive: bool,
  pub wrap_around: bool,
  /// Upper bound on highlighted matches. Effectively unbounded.
  pub max_matches: u32,
}

impl Default for FindOptions {
  fn default() -> Self {
    Self {
      case_sensitive: false,
      wrap_around: true,
      max_matches: u32::MAX,
    }
  }
}

/// Live state of the find bar's query.
///
/// Mutated on every keystroke in the find field; reset when the bar is
/// hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindSession {
  /// The active query. Empty when no search has been issued.
  pub query: String,
  pub case_sensitive: bool,
  pub wrap_around: bool,
  /// Outcome of the most recent find request.
  pub last_outcome: FindOutcome,
}

impl Default for FindSession {
  fn default() -> Self {
    Self {
      query: String::new(),
      case_sensitive: false,
      wrap_around: true,
      last_outcome: FindOutcome::Unknown,
    }
  }
}

impl FindSession {
  /// Finder options for the current session.
  pub const fn options(&self) -> FindOptions {
    FindOptions {
      case_sensitive: self.case_sensitive,
      wrap_around: self.wrap_around,
      max_matches: u32::MAX,
    }
  }
}

/// Keystrokes the find entry intercepts. Everything else falls through to
/// normal text editing and arrives as a text change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindKey {
  /// Escape with no modifier: close the bar.
  Escape,
  /// Enter with no modifier: advance to the next match.
  Enter,
  /// Enter with Shift held: go to the previous match.
  ShiftEnter,
}
