/*!
Find-bar controller.

Owns the show/hide state machine over the engine's text finder and the
find bar widget. States: hidden, visible-neutral, visible-failed. The
controller never talks to the engine directly - it drives a
[`TextFinder`] and a [`FindBar`] supplied by the application.
*/

use crate::surface::{FindBar, TextFinder};
use crate::types::{FindBarState, FindKey, FindOutcome, FindSession};

/// Drives the find bar over the embedded surface's text finder.
///
/// The entry's text is mirrored here so that reopening the bar resumes
/// the previous query even though hiding resets the session itself.
pub struct SearchController<F: TextFinder, B: FindBar> {
  finder: F,
  bar: B,
  session: FindSession,
  state: FindBarState,
  /// Last text seen in the entry widget. Survives hiding the bar.
  entry: String,
}

impl<F: TextFinder, B: FindBar> std::fmt::Debug for SearchController<F, B> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SearchController")
      .field("state", &self.state)
      .field("session", &self.session)
      .finish_non_exhaustive()
  }
}

impl<F: TextFinder, B: FindBar> SearchController<F, B> {
  /// Create a controller with the bar hidden and no active session.
  pub fn new(finder: F, bar: B) -> Self {
    Self {
      finder,
      bar,
      session: FindSession::default(),
      state: FindBarState::Hidden,
      entry: String::new(),
    }
  }

  /// Current state of the bar.
  pub const fn state(&self) -> FindBarState {
    self.state
  }

  /// The live find session.
  pub const fn session(&self) -> &FindSession {
    &self.session
  }

  /// Show or hide the bar.
  ///
  /// Opening selects the entry text for overwrite, focuses it, and
  /// re-issues a search with whatever text is already present, so
  /// reopening resumes the last query. Closing ends the finder session
  /// (clearing highlights) and resets the session state.
  pub fn toggle(&mut self) {
    match self.state {
      FindBarState::Hidden => {
        self.state = FindBarState::VisibleNeutral;
        self.bar.show();
        self.bar.focus_entry();
        self.bar.set_failed(false);
        if !self.entry.is_empty() {
          let text = self.entry.clone();
          self.issue(&text);
        }
      }
      FindBarState::VisibleNeutral | FindBarState::VisibleFailed => {
        self.finder.finish();
        self.bar.hide();
        self.session = FindSession::default();
        self.state = FindBarState::Hidden;
      }
    }
  }

  /// The entry's text changed. Non-empty text issues a search; empty
  /// text issues nothing and leaves highlight clearing to the engine.
  pub fn text_changed(&mut self, text: &str) {
    self.entry = text.to_string();
    if !text.is_empty() {
      self.issue(text);
    }
  }

  /// Advance to the next match. No-op without an active query.
  pub fn next(&self) {
    if !self.session.query.is_empty() {
      self.finder.find_next();
    }
  }

  /// Move to the previous match. No-op without an active query.
  pub fn previous(&self) {
    if !self.session.query.is_empty() {
      self.finder.find_previous();
    }
  }

  /// Keyboard contract on the entry field.
  pub fn handle_key(&mut self, key: FindKey) {
    match key {
      FindKey::Escape => self.toggle(),
      FindKey::Enter => self.next(),
      FindKey::ShiftEnter => self.previous(),
    }
  }

  /// The finder reported a match for the current query.
  ///
  /// Idempotent: repeated reports leave the state unchanged.
  pub fn found(&mut self) {
    self.session.last_outcome = FindOutcome::Found;
    if self.state == FindBarState::VisibleFailed {
      self.state = FindBarState::VisibleNeutral;
      self.bar.set_failed(false);
    }
  }

  /// The finder failed to match the current query.
  pub fn not_found(&mut self) {
    self.session.last_outcome = FindOutcome::NotFound;
    if self.state == FindBarState::VisibleNeutral {
      self.state = FindBarState::VisibleFailed;
      self.bar.set_failed(true);
    }
  }

  fn issue(&mut self, query: &str) {
    self.session.query = query.to_string();
    self.finder.find(query, self.session.options());
    log::trace!("find issued for {query:?}");
  }
}
