/*!
Tauri command surface.

The chrome webview drives the toolbar and find bar through these
commands; the content helper script reports hovered links, title/URL
changes, find results and popup requests through them.
*/

use docshell::{FindKey, NavigationKind, NavigationRequest, SurfaceEvent};
use tauri::{AppHandle, Manager, State};

use crate::bridge::ShellState;

// ===== Toolbar commands (chrome webview) =====

#[tauri::command]
pub fn home(state: State<'_, ShellState>) {
    state.0.lock().home();
}

#[tauri::command]
pub fn go_back(state: State<'_, ShellState>) {
    state.0.lock().back();
}

#[tauri::command]
pub fn go_forward(state: State<'_, ShellState>) {
    state.0.lock().forward();
}

#[tauri::command]
pub fn refresh(state: State<'_, ShellState>) {
    state.0.lock().refresh();
}

// ===== Find bar commands (chrome webview) =====

#[tauri::command]
pub fn toggle_find(state: State<'_, ShellState>) {
    state.0.lock().search().toggle();
}

#[tauri::command]
pub fn find_text_changed(text: String, state: State<'_, ShellState>) {
    state.0.lock().search().text_changed(&text);
}

#[tauri::command]
pub fn find_next(state: State<'_, ShellState>) {
    state.0.lock().search().next();
}

#[tauri::command]
pub fn find_previous(state: State<'_, ShellState>) {
    state.0.lock().search().previous();
}

/// Keystroke on the find entry. Unmapped keys stay in the entry.
#[tauri::command]
pub fn find_key(key: String, state: State<'_, ShellState>) {
    let key = match key.as_str() {
        "escape" => FindKey::Escape,
        "enter" => FindKey::Enter,
        "shift-enter" => FindKey::ShiftEnter,
        other => {
            log::debug!("ignoring unmapped find key {other:?}");
            return;
        }
    };
    state.0.lock().search().handle_key(key);
}

// ===== Content helper reports =====

/// Find result from the injected helper. May arrive repeatedly for one
/// request; the controller transitions are idempotent.
#[tauri::command]
pub fn find_result(found: bool, state: State<'_, ShellState>) {
    let mut shell = state.0.lock();
    if found {
        shell.search().found();
    } else {
        shell.search().not_found();
    }
}

#[tauri::command]
pub fn link_hovered(url: Option<String>, state: State<'_, ShellState>) {
    state.0.lock().on_surface_event(&SurfaceEvent::LinkHovered(url));
}

/// Title or URL changed on the content surface.
#[tauri::command]
pub fn surface_changed(
    title: Option<String>,
    url: String,
    can_go_back: bool,
    can_go_forward: bool,
    state: State<'_, ShellState>,
) {
    let shell = state.0.lock();
    shell.on_surface_event(&SurfaceEvent::TitleChanged(title));
    shell.on_surface_event(&SurfaceEvent::UrlChanged {
        url,
        can_go_back,
        can_go_forward,
    });
}

/// The page asked for a new top-level surface (`window.open` or a
/// `target="_blank"` link). Popups never render: the request is decided
/// in the popup context, which funnels the URL to the external browser.
#[tauri::command]
pub fn popup_requested(url: String, state: State<'_, ShellState>) {
    let shell = state.0.lock();
    let context = shell.popup_created();
    let request = NavigationRequest::new(url, NavigationKind::Other);
    shell.on_navigation(&request, context);
}

// ===== Single-instance activation =====

/// Second-invocation entry: present the existing window and forward the
/// optional search term into it.
pub fn activate(app: &AppHandle, argv: &[String]) {
    if let Some(window) = app.get_window("main") {
        let _ = window.show();
        let _ = window.set_focus();
    }
    let term = argv.get(1).map(String::as_str);
    if let Some(state) = app.try_state::<ShellState>() {
        state.0.lock().navigate(term);
    }
}
