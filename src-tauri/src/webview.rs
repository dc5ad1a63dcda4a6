/*!
Window and webview construction.

One OS window hosts two child webviews: the chrome strip (toolbar and
find bar, app-local HTML) across the top, and the content surface
(the documentation site) underneath. The content webview gets the
navigation gatekeeper and an injected helper script that reports
hovered links, title/URL changes, find results and popup requests back
over IPC.
*/

use docshell::{
    Decision, NavigationKind, NavigationPolicy, NavigationRequest, SearchController, ShellWindow,
    SurfaceKind, WindowState, WindowStateStore,
};
use tauri::webview::WebviewBuilder;
use tauri::{
    AppHandle, LogicalPosition, LogicalSize, Manager, WebviewUrl, Window, WindowEvent,
};

use crate::bridge::{
    ChromeFindBar, ChromeToolbar, ContentFinder, ContentSurface, ShellState, SystemOpener,
    TauriToolkit,
};
use crate::paths::AppPaths;

/// Height of the chrome strip (toolbar + find bar), in logical pixels.
pub const TOOLBAR_HEIGHT: f64 = 44.0;

/// Helper script injected into the content webview before page scripts.
const CONTENT_HELPER: &str = include_str!("inject/content.js");

/// Build the main window, its two webviews, and the composed shell.
pub fn create_shell_window(
    app: &AppHandle,
    store: WindowStateStore,
    paths: &AppPaths,
) -> Result<ShellWindow<TauriToolkit>, Box<dyn std::error::Error>> {
    let state = *store.state();

    let window = tauri::window::WindowBuilder::new(app, "main")
        .title(docshell::DEFAULT_TITLE)
        .inner_size(f64::from(state.width), f64::from(state.height))
        .position(f64::from(state.left), f64::from(state.top))
        .maximized(state.maximized)
        .fullscreen(state.fullscreen)
        .build()?;

    let scale = window.scale_factor()?;
    let size = window.inner_size()?.to_logical::<f64>(scale);

    let chrome_builder = WebviewBuilder::new("chrome", WebviewUrl::App("chrome.html".into()));
    window.add_child(
        chrome_builder,
        LogicalPosition::new(0.0, 0.0),
        LogicalSize::new(size.width, TOOLBAR_HEIGHT),
    )?;

    let base: tauri::Url = docshell::BASE_URL.parse()?;
    let nav_app = app.clone();
    let content_builder = WebviewBuilder::new("content", WebviewUrl::External(base))
        .data_directory(paths.cookie_dir.clone())
        .initialization_script(CONTENT_HELPER)
        .on_navigation(move |url: &tauri::Url| {
            // The adapter cannot see what triggered the attempt, so every
            // in-place navigation is classified as scripted and confined.
            let request = NavigationRequest::new(url.to_string(), NavigationKind::Other);
            match nav_app.try_state::<ShellState>() {
                Some(state) => {
                    state.0.lock().on_navigation(&request, SurfaceKind::Primary)
                        == Decision::Allow
                }
                // The initial load fires before setup manages the state.
                None => true,
            }
        });

    let content = window.add_child(
        content_builder,
        LogicalPosition::new(0.0, TOOLBAR_HEIGHT),
        LogicalSize::new(size.width, (size.height - TOOLBAR_HEIGHT).max(0.0)),
    )?;

    let search = SearchController::new(
        ContentFinder::new(content.clone()),
        ChromeFindBar::new(app.clone()),
    );

    Ok(ShellWindow::new(
        ContentSurface::new(content),
        ChromeToolbar::new(app.clone()),
        SystemOpener::new(app.clone()),
        search,
        NavigationPolicy::new(docshell::BASE_URL),
        store,
        docshell::DEFAULT_TITLE,
    ))
}

/// Window-event hook: relayout children on resize, persist geometry on
/// close. The close itself always proceeds.
pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    match event {
        WindowEvent::Resized(size) => relayout(window, *size),
        WindowEvent::CloseRequested { .. } => persist_window_state(window),
        _ => {}
    }
}

fn relayout(window: &Window, size: tauri::PhysicalSize<u32>) {
    let scale = window.scale_factor().unwrap_or(1.0);
    let logical = size.to_logical::<f64>(scale);

    if let Some(chrome) = window.app_handle().get_webview("chrome") {
        let _ = chrome.set_size(LogicalSize::new(logical.width, TOOLBAR_HEIGHT));
    }
    if let Some(content) = window.app_handle().get_webview("content") {
        let _ = content.set_position(LogicalPosition::new(0.0, TOOLBAR_HEIGHT));
        let _ = content.set_size(LogicalSize::new(
            logical.width,
            (logical.height - TOOLBAR_HEIGHT).max(0.0),
        ));
    }
}

fn persist_window_state(window: &Window) {
    let snapshot = match snapshot(window) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log::warn!("could not capture window geometry: {err}");
            return;
        }
    };
    if let Some(state) = window.app_handle().try_state::<ShellState>() {
        if let Err(err) = state.0.lock().on_close(snapshot) {
            log::warn!("failed to persist window state: {err}");
        }
    }
}

fn snapshot(window: &Window) -> tauri::Result<WindowState> {
    let scale = window.scale_factor()?;
    let size = window.inner_size()?.to_logical::<f64>(scale);
    let position = window.outer_position()?.to_logical::<f64>(scale);
    Ok(WindowState {
        width: size.width.round() as u32,
        height: size.height.round() as u32,
        left: position.x.round() as i32,
        top: position.y.round() as i32,
        maximized: window.is_maximized()?,
        fullscreen: window.is_fullscreen()?,
    })
}
