/*!
Implementations of the core collaborator traits over Tauri handles.

The content webview is driven by script evaluation (navigation and the
text finder), and the chrome webview is driven by broadcast events its
toolbar script listens for. All of these are fire-and-forget: a failed
eval or emit is logged and otherwise ignored, matching the core's
contract that presentation side effects never fail upward.
*/

use docshell::{
    Chrome, ExternalOpener, FindBar, FindOptions, ShellWindow, TextFinder, Toolkit, WebSurface,
};
use parking_lot::Mutex;
use tauri::{AppHandle, Emitter, Manager, Webview};
use tauri_plugin_opener::OpenerExt;

/// The one shell window, shared across Tauri callbacks.
///
/// Callbacks are short and never suspend while holding the lock, so a
/// plain mutex is enough.
#[derive(Debug)]
pub struct ShellState(pub Mutex<ShellWindow<TauriToolkit>>);

/// Toolkit bindings over Tauri webviews and events.
#[derive(Debug, Clone, Copy)]
pub struct TauriToolkit;

impl Toolkit for TauriToolkit {
    type Surface = ContentSurface;
    type Finder = ContentFinder;
    type FindBar = ChromeFindBar;
    type Chrome = ChromeToolbar;
    type Opener = SystemOpener;
}

/// Encode a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}

fn eval(webview: &Webview, script: &str) {
    if let Err(err) = webview.eval(script) {
        log::warn!("script evaluation failed: {err}");
    }
}

/// The content webview as the embedded surface.
///
/// Navigation goes through script evaluation so the engine keeps its own
/// history intact (`load_url` is not exposed on child webviews).
pub struct ContentSurface {
    webview: Webview,
}

impl ContentSurface {
    pub fn new(webview: Webview) -> Self {
        Self { webview }
    }
}

impl WebSurface for ContentSurface {
    fn load_url(&self, url: &str) {
        eval(
            &self.webview,
            &format!("window.location.assign({})", js_string(url)),
        );
    }

    fn go_back(&self) {
        eval(&self.webview, "window.history.back()");
    }

    fn go_forward(&self) {
        eval(&self.webview, "window.history.forward()");
    }

    fn reload(&self) {
        eval(&self.webview, "window.location.reload()");
    }
}

/// The injected find helper as the engine's text finder.
///
/// Results come back asynchronously through the `find_result` command.
pub struct ContentFinder {
    webview: Webview,
}

impl ContentFinder {
    pub fn new(webview: Webview) -> Self {
        Self { webview }
    }
}

impl TextFinder for ContentFinder {
    fn find(&self, query: &str, options: FindOptions) {
        // The helper has no match cap; `max_matches` is effectively
        // unbounded by construction.
        eval(
            &self.webview,
            &format!(
                "window.__docshellFind && window.__docshellFind.run({}, {}, {})",
                js_string(query),
                options.case_sensitive,
                options.wrap_around
            ),
        );
    }

    fn find_next(&self) {
        eval(
            &self.webview,
            "window.__docshellFind && window.__docshellFind.next()",
        );
    }

    fn find_previous(&self) {
        eval(
            &self.webview,
            "window.__docshellFind && window.__docshellFind.prev()",
        );
    }

    fn finish(&self) {
        eval(
            &self.webview,
            "window.__docshellFind && window.__docshellFind.finish()",
        );
    }
}

/// The chrome webview's toolbar, driven by broadcast events.
pub struct ChromeToolbar {
    app: AppHandle,
}

impl ChromeToolbar {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn emit<S: serde::Serialize + Clone>(&self, event: &str, payload: S) {
        if let Err(err) = self.app.emit(event, payload) {
            log::warn!("failed to emit {event}: {err}");
        }
    }
}

impl Chrome for ChromeToolbar {
    fn set_title(&self, title: &str) {
        if let Some(window) = self.app.get_window("main") {
            if let Err(err) = window.set_title(title) {
                log::warn!("failed to set window title: {err}");
            }
        }
    }

    fn set_address(&self, url: &str) {
        self.emit("chrome:address", url.to_string());
    }

    fn set_back_enabled(&self, enabled: bool) {
        self.emit("chrome:back-enabled", enabled);
    }

    fn set_forward_enabled(&self, enabled: bool) {
        self.emit("chrome:forward-enabled", enabled);
    }

    fn set_hovered_link(&self, url: Option<&str>) {
        self.emit("chrome:hovered-link", url.map(str::to_string));
    }
}

/// The chrome webview's find bar, driven by broadcast events.
pub struct ChromeFindBar {
    app: AppHandle,
}

impl ChromeFindBar {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn emit<S: serde::Serialize + Clone>(&self, event: &str, payload: S) {
        if let Err(err) = self.app.emit(event, payload) {
            log::warn!("failed to emit {event}: {err}");
        }
    }
}

impl FindBar for ChromeFindBar {
    fn show(&self) {
        self.emit("find:show", ());
    }

    fn hide(&self) {
        self.emit("find:hide", ());
    }

    fn focus_entry(&self) {
        self.emit("find:focus", ());
    }

    fn set_failed(&self, failed: bool) {
        self.emit("find:failed", failed);
    }
}

/// Hands denied URLs to the OS default browser via the opener plugin.
pub struct SystemOpener {
    app: AppHandle,
}

impl SystemOpener {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ExternalOpener for SystemOpener {
    fn open(&self, url: &str) {
        // Handoff failures (no registered browser) belong to the OS
        // integration layer; they are logged and dropped here.
        if let Err(err) = self.app.opener().open_url(url, None::<&str>) {
            log::warn!("external browser handoff failed for {url}: {err}");
        }
    }
}
