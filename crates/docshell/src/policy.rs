/*!
Navigation confinement policy.

Every navigation attempt on the primary surface - and every attempt on a
popup surface - runs through [`NavigationPolicy::decide`]: render it in
place, or cancel it so the URL can go to the OS default browser instead.
*/

use crate::types::{Decision, NavigationKind, NavigationRequest, SurfaceKind};

/// Decides whether a navigation stays in the embedded surface.
///
/// Origin confinement is a literal string-prefix match against the base
/// URL: any target the base URL textually prefixes (deeper paths,
/// fragments) renders in place. Known limitation: look-alike hosts such
/// as `http://devdocs.io.evil.com` pass the check. This matches the
/// shell's long-standing observable behavior and is kept deliberately.
#[derive(Debug, Clone)]
pub struct NavigationPolicy {
  base_url: String,
}

impl NavigationPolicy {
  /// Create a policy confining navigation to `base_url`.
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
    }
  }

  /// The single permitted origin.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Decide one navigation attempt.
  ///
  /// Response-phase requests always pass: the policy governs only the
  /// initiation of a navigation, never an already-approved in-flight
  /// response. Otherwise a request routes externally when it belongs to
  /// a popup surface, explicitly asks for a new window, or is a
  /// user-/script-initiated attempt to leave the permitted origin.
  /// History traversal is the engine's own intrinsic navigation and is
  /// exempt from the origin check.
  pub fn decide(&self, request: &NavigationRequest, surface: SurfaceKind) -> Decision {
    if request.response_phase {
      return Decision::Allow;
    }

    let external = match surface {
      SurfaceKind::Popup => true,
      SurfaceKind::Primary => {
        request.new_window
          || (request.kind != NavigationKind::BackForward
            && !request.url.starts_with(&self.base_url))
      }
    };

    if external {
      log::debug!("routing {} to the external browser", request.url);
      Decision::Deny
    } else {
      Decision::Allow
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BASE: &str = "http://devdocs.io";

  fn request(url: &str, kind: NavigationKind) -> NavigationRequest {
    NavigationRequest::new(url.to_string(), kind)
  }

  mod response_phase {
    use super::*;

    #[test]
    fn always_allowed() {
      let policy = NavigationPolicy::new(BASE);
      let mut req = request("http://example.com", NavigationKind::LinkClicked);
      req.new_window = true;
      req.response_phase = true;
      assert_eq!(
        policy.decide(&req, SurfaceKind::Popup),
        Decision::Allow,
        "response phase passes regardless of every other field"
      );
    }
  }

  mod popup_surface {
    use super::*;

    #[test]
    fn always_denied() {
      let policy = NavigationPolicy::new(BASE);
      let req = request("http://devdocs.io/ruby/", NavigationKind::Other);
      assert_eq!(
        policy.decide(&req, SurfaceKind::Popup),
        Decision::Deny,
        "popup surfaces only funnel to the external browser"
      );
    }
  }

  mod new_window {
    use super::*;

    #[test]
    fn always_denied() {
      let policy = NavigationPolicy::new(BASE);
      let mut req = request("http://devdocs.io/ruby/", NavigationKind::LinkClicked);
      req.new_window = true;
      assert_eq!(policy.decide(&req, SurfaceKind::Primary), Decision::Deny);
    }
  }

  mod origin_confinement {
    use super::*;

    #[test]
    fn in_origin_link_renders_in_place() {
      let policy = NavigationPolicy::new(BASE);
      let req = request("http://devdocs.io/ruby/", NavigationKind::Other);
      assert_eq!(policy.decide(&req, SurfaceKind::Primary), Decision::Allow);
    }

    #[test]
    fn off_origin_link_goes_external() {
      let policy = NavigationPolicy::new(BASE);
      let req = request("http://example.com", NavigationKind::LinkClicked);
      assert_eq!(policy.decide(&req, SurfaceKind::Primary), Decision::Deny);
    }

    #[test]
    fn scripted_navigation_off_origin_goes_external() {
      let policy = NavigationPolicy::new(BASE);
      let req = request("http://example.com/redirect", NavigationKind::Other);
      assert_eq!(
        policy.decide(&req, SurfaceKind::Primary),
        Decision::Deny,
        "scripted navigations are confined like link clicks"
      );
    }

    #[test]
    fn fragment_and_deep_path_stay_in_place() {
      let policy = NavigationPolicy::new(BASE);
      for url in ["http://devdocs.io#q=array", "http://devdocs.io/javascript/array/map"] {
        let req = request(url, NavigationKind::LinkClicked);
        assert_eq!(policy.decide(&req, SurfaceKind::Primary), Decision::Allow, "{url}");
      }
    }

    #[test]
    fn prefix_match_is_textual_not_host_aware() {
      // Documented limitation: a look-alike host shares the prefix.
      let policy = NavigationPolicy::new(BASE);
      let req = request("http://devdocs.io.evil.com/x", NavigationKind::LinkClicked);
      assert_eq!(policy.decide(&req, SurfaceKind::Primary), Decision::Allow);
    }

    #[test]
    fn history_traversal_bypasses_the_origin_check() {
      let policy = NavigationPolicy::new(BASE);
      let req = request("http://example.com", NavigationKind::BackForward);
      assert_eq!(
        policy.decide(&req, SurfaceKind::Primary),
        Decision::Allow,
        "the engine's intrinsic history traversal is never confined"
      );
    }
  }
}

#[cfg(test)]
mod proptests {
  use super::*;
  use proptest::prelude::*;

  fn any_kind() -> impl Strategy<Value = NavigationKind> {
    prop_oneof![
      Just(NavigationKind::LinkClicked),
      Just(NavigationKind::FormSubmitted),
      Just(NavigationKind::BackForward),
      Just(NavigationKind::Reload),
      Just(NavigationKind::Other),
    ]
  }

  fn any_surface() -> impl Strategy<Value = SurfaceKind> {
    prop_oneof![Just(SurfaceKind::Primary), Just(SurfaceKind::Popup)]
  }

  proptest! {
    /// Response-phase requests are allowed for every field combination.
    #[test]
    fn response_phase_always_allows(
      url in "[a-z]{1,20}", kind in any_kind(), new_window: bool, surface in any_surface()
    ) {
      let policy = NavigationPolicy::new("http://devdocs.io");
      let req = NavigationRequest { url, kind, new_window, response_phase: true };
      prop_assert_eq!(policy.decide(&req, surface), Decision::Allow);
    }

    /// Popup surfaces never render an initiation-phase request.
    #[test]
    fn popup_always_denies(url in "[a-z]{1,20}", kind in any_kind(), new_window: bool) {
      let policy = NavigationPolicy::new("http://devdocs.io");
      let req = NavigationRequest { url, kind, new_window, response_phase: false };
      prop_assert_eq!(policy.decide(&req, SurfaceKind::Popup), Decision::Deny);
    }

    /// Any URL textually prefixed by the base stays in place for plain
    /// primary-surface requests, and every decision is deterministic.
    #[test]
    fn prefixed_urls_stay_in_place(suffix in "[a-z/#?=.]{0,30}", kind in any_kind()) {
      let policy = NavigationPolicy::new("http://devdocs.io");
      let req = NavigationRequest::new(format!("http://devdocs.io{suffix}"), kind);
      prop_assert_eq!(policy.decide(&req, SurfaceKind::Primary), Decision::Allow);
      prop_assert_eq!(
        policy.decide(&req, SurfaceKind::Primary),
        policy.decide(&req, SurfaceKind::Primary)
      );
    }
  }
}
