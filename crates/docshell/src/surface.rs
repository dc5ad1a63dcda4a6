/*!
Collaborator traits between the core and the embedding toolkit.

These traits define the contract between core logic and the application
shell. The application implements them over real webview and widget
handles; core code only uses the traits - never a concrete engine type.
All methods are fire-and-forget presentation or engine calls: failures in
the toolkit layer are its own concern, not the core's.
*/

use crate::types::FindOptions;

/// The embedded web-rendering surface.
pub trait WebSurface {
  /// Begin loading a URL in place.
  fn load_url(&self, url: &str);

  /// Traverse one step back in the surface's history.
  fn go_back(&self);

  /// Traverse one step forward in the surface's history.
  fn go_forward(&self);

  /// Reload the current page.
  fn reload(&self);
}

/// The engine's text finder for one surface.
pub trait TextFinder {
  /// Highlight matches for `query` and move to the first one.
  ///
  /// The engine answers asynchronously through the found / not-found
  /// feedback path; repeated answers for one request are tolerated.
  fn find(&self, query: &str, options: FindOptions);

  /// Advance to the next match of the current query.
  fn find_next(&self);

  /// Move to the previous match of the current query.
  fn find_previous(&self);

  /// End the find session and clear highlights.
  fn finish(&self);
}

/// The find bar widget.
pub trait FindBar {
  /// Show the bar.
  fn show(&self);

  /// Hide the bar.
  fn hide(&self);

  /// Select the entry's text and give it input focus, so typing
  /// overwrites the previous query.
  fn focus_entry(&self);

  /// Toggle the entry's failure styling.
  fn set_failed(&self, failed: bool);
}

/// The toolbar chrome around the surface.
pub trait Chrome {
  /// Set the window title.
  fn set_title(&self, title: &str);

  /// Set the address bar text.
  fn set_address(&self, url: &str);

  /// Enable or disable the back button.
  fn set_back_enabled(&self, enabled: bool);

  /// Enable or disable the forward button.
  fn set_forward_enabled(&self, enabled: bool);

  /// Show the floating link overlay with `Some(url)`, hide it with `None`.
  fn set_hovered_link(&self, url: Option<&str>);
}

/// Hands a URL to the OS-registered default browser.
///
/// Handoff failures (no registered handler) are the OS integration
/// layer's responsibility.
pub trait ExternalOpener {
  /// Open `url` externally.
  fn open(&self, url: &str);
}

/// Toolkit bindings the shell is composed over.
///
/// One implementation per embedding; the associated types let the shell
/// own its collaborators without naming any toolkit type directly.
pub trait Toolkit {
  /// The embedded web-rendering surface.
  type Surface: WebSurface;
  /// The surface's text finder.
  type Finder: TextFinder;
  /// The find bar widget.
  type FindBar: FindBar;
  /// The toolbar chrome.
  type Chrome: Chrome;
  /// The external-browser handoff.
  type Opener: ExternalOpener;
}
