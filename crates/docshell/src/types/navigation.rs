/*! Navigation decision types. */

/// What triggered a navigation attempt.
///
/// Mirrors the embedded engine's navigation-type classification.
/// `BackForward` is the engine's own intrinsic traversal of history it
/// already holds; every other kind is user- or script-initiated and
/// subject to origin confinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
  /// A link was activated.
  LinkClicked,
  /// A form was submitted.
  FormSubmitted,
  /// History traversal (back or forward).
  BackForward,
  /// Page reload.
  Reload,
  /// Anything else, including scripted location changes.
  Other,
}

/// One navigation attempt reported by the embedded engine.
///
/// Transient: constructed per attempt and consumed synchronously by the
/// policy, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
  /// Target URL of the attempt.
  pub url: String,
  /// What triggered the attempt.
  pub kind: NavigationKind,
  /// The engine asked for a new top-level window for this navigation.
  pub new_window: bool,
  /// Headers already received; content is about to render. Policy only
  /// governs the initiation of a navigation, so these always pass.
  pub response_phase: bool,
}

impl NavigationRequest {
  /// A plain in-place navigation attempt.
  pub const fn new(url: String, kind: NavigationKind) -> Self {
    Self {
      url,
      kind,
      new_window: false,
      response_phase: false,
    }
  }
}

/// Which surface a navigation decision belongs to.
///
/// Subordinate surfaces spawned by a new-window request carry `Popup` for
/// every decision of their lifetime; they only ever funnel URLs to the
/// external browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
  /// The single primary surface.
  Primary,
  /// A subordinate surface created by a new-window request.
  Popup,
}

/// Outcome of a navigation-policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
  /// Let the embedded engine render the navigation in place.
  Allow,
  /// Cancel the navigation; the URL goes to the external browser.
  Deny,
}
