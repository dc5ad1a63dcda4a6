// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod bridge;
mod commands;
mod paths;
mod webview;

use docshell::WindowStateStore;
use parking_lot::Mutex;
use tauri::Manager;

use bridge::ShellState;
use paths::AppPaths;

fn main() {
    env_logger::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_single_instance::init(|app, argv, _cwd| {
            commands::activate(app, &argv);
        }))
        .setup(|app| {
            let paths = AppPaths::resolve(app.handle())?;
            // A malformed state file is a fatal configuration error; a
            // missing one just means defaults.
            let store = WindowStateStore::load(&paths.state_file)?;
            let shell = webview::create_shell_window(app.handle(), store, &paths)?;
            app.manage(ShellState(Mutex::new(shell)));

            // First-instance command line: an optional search term.
            if let Some(term) = std::env::args().nth(1) {
                app.state::<ShellState>().0.lock().navigate(Some(&term));
            }
            Ok(())
        })
        .on_window_event(webview::handle_window_event)
        .invoke_handler(tauri::generate_handler![
            // Toolbar
            commands::home,
            commands::go_back,
            commands::go_forward,
            commands::refresh,
            // Find bar
            commands::toggle_find,
            commands::find_text_changed,
            commands::find_next,
            commands::find_previous,
            commands::find_key,
            // Content helper reports
            commands::find_result,
            commands::link_hovered,
            commands::surface_changed,
            commands::popup_requested,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
