/*!
Shell window composition.

`ShellWindow` ties the navigation policy, the find-bar controller and the
window-state store together around one embedded surface, and translates
the surface's observable property changes into chrome updates. It owns no
widgets itself - the toolkit hands it collaborator implementations at
construction and forwards events into it for the life of the window.
*/

use crate::policy::NavigationPolicy;
use crate::search::SearchController;
use crate::store::WindowStateStore;
use crate::surface::{Chrome, ExternalOpener, Toolkit, WebSurface};
use crate::types::{
  Decision, NavigationRequest, ShellResult, SurfaceEvent, SurfaceKind, WindowState,
};

/// One shell window around one embedded surface.
///
/// All methods run as short, non-reentrant callbacks on the UI thread;
/// none of them suspends, so the contained state needs no locking.
pub struct ShellWindow<T: Toolkit> {
  surface: T::Surface,
  chrome: T::Chrome,
  opener: T::Opener,
  search: SearchController<T::Finder, T::FindBar>,
  policy: NavigationPolicy,
  store: WindowStateStore,
  default_title: String,
}

impl<T: Toolkit> std::fmt::Debug for ShellWindow<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ShellWindow")
      .field("policy", &self.policy)
      .field("search", &self.search)
      .finish_non_exhaustive()
  }
}

impl<T: Toolkit> ShellWindow<T> {
  /// Compose a window from its collaborators.
  ///
  /// `store` carries the merged initial geometry; `default_title` is used
  /// whenever the page supplies no title of its own.
  pub fn new(
    surface: T::Surface,
    chrome: T::Chrome,
    opener: T::Opener,
    search: SearchController<T::Finder, T::FindBar>,
    policy: NavigationPolicy,
    store: WindowStateStore,
    default_title: impl Into<String>,
  ) -> Self {
    Self {
      surface,
      chrome,
      opener,
      search,
      policy,
      store,
      default_title: default_title.into(),
    }
  }

  /// The merged geometry to open the window with.
  pub const fn initial_state(&self) -> &WindowState {
    self.store.state()
  }

  /// The find-bar controller.
  pub fn search(&mut self) -> &mut SearchController<T::Finder, T::FindBar> {
    &mut self.search
  }

  /// Load the permitted origin, optionally carrying a search term as a
  /// `#q=` fragment.
  pub fn navigate(&self, term: Option<&str>) {
    let url = match term {
      Some(term) => format!("{}#q={}", self.policy.base_url(), urlencoding::encode(term)),
      None => self.policy.base_url().to_string(),
    };
    self.surface.load_url(&url);
  }

  /// Gatekeeper for every navigation attempt the engine reports.
  ///
  /// On `Deny` the target URL has already been handed to the external
  /// browser when this returns; the caller only has to cancel the
  /// in-place navigation.
  pub fn on_navigation(&self, request: &NavigationRequest, surface: SurfaceKind) -> Decision {
    let decision = self.policy.decide(request, surface);
    if decision == Decision::Deny {
      self.opener.open(&request.url);
    }
    decision
  }

  /// The engine asked for a new top-level surface (`window.open`,
  /// `target="_blank"`).
  ///
  /// Returns the decision context the subordinate surface must use for
  /// every navigation of its lifetime: popups never render in place,
  /// they only funnel URLs to the external browser via
  /// [`on_navigation`](Self::on_navigation).
  pub const fn popup_created(&self) -> SurfaceKind {
    SurfaceKind::Popup
  }

  /// Dispatch one observable property change from the surface.
  pub fn on_surface_event(&self, event: &SurfaceEvent) {
    match event {
      SurfaceEvent::TitleChanged(title) => self.on_title_changed(title.as_deref()),
      SurfaceEvent::UrlChanged {
        url,
        can_go_back,
        can_go_forward,
      } => self.on_url_changed(url, *can_go_back, *can_go_forward),
      SurfaceEvent::LinkHovered(url) => self.chrome.set_hovered_link(url.as_deref()),
    }
  }

  /// Load the bare origin (toolbar home button).
  pub fn home(&self) {
    self.surface.load_url(self.policy.base_url());
  }

  /// History back (toolbar button).
  pub fn back(&self) {
    self.surface.go_back();
  }

  /// History forward (toolbar button).
  pub fn forward(&self) {
    self.surface.go_forward();
  }

  /// Reload the current page (toolbar button).
  pub fn refresh(&self) {
    self.surface.reload();
  }

  /// Close requested: persist the live geometry snapshot.
  ///
  /// The close itself always proceeds - a failed write is reported but
  /// never cancels shutdown.
  pub fn on_close(&mut self, snapshot: WindowState) -> ShellResult<()> {
    self.store.save(snapshot)
  }

  fn on_title_changed(&self, title: Option<&str>) {
    let title = match title {
      Some(title) if !title.is_empty() => title,
      _ => &self.default_title,
    };
    self.chrome.set_title(title);
  }

  fn on_url_changed(&self, url: &str, can_go_back: bool, can_go_forward: bool) {
    self.chrome.set_address(url);
    self.chrome.set_back_enabled(can_go_back);
    self.chrome.set_forward_enabled(can_go_forward);
  }
}
