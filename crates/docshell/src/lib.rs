/*!
Docshell - single-site documentation shell core.

One window, one embedded web surface pinned to a documentation site.
The core decides which navigations render in place and which go to the
OS browser, drives the find bar over the engine's text finder, and
persists window geometry across runs. Widgets and the web engine itself
are collaborators behind traits - the application implements them.

```ignore
use docshell::{
    Decision, NavigationKind, NavigationPolicy, NavigationRequest, SurfaceKind,
};

let policy = NavigationPolicy::new(docshell::BASE_URL);

// A documentation page renders in place...
let request = NavigationRequest::new(
    "http://devdocs.io/rust/".into(),
    NavigationKind::LinkClicked,
);
assert_eq!(policy.decide(&request, SurfaceKind::Primary), Decision::Allow);

// ...an off-site link goes to the external browser.
let request = NavigationRequest::new(
    "http://example.com".into(),
    NavigationKind::LinkClicked,
);
assert_eq!(policy.decide(&request, SurfaceKind::Primary), Decision::Deny);
```
*/

mod policy;
mod search;
mod shell;
mod store;
mod surface;

mod types;
pub use types::*;

pub use crate::policy::NavigationPolicy;
pub use crate::search::SearchController;
pub use crate::shell::ShellWindow;
pub use crate::store::WindowStateStore;
pub use crate::surface::{Chrome, ExternalOpener, FindBar, TextFinder, Toolkit, WebSurface};

/// The single permitted origin. Navigation outside this prefix leaves
/// the shell.
pub const BASE_URL: &str = "http://devdocs.io";

/// Window title when the page supplies none.
pub const DEFAULT_TITLE: &str = "DevDocs";
