mod backend;
mod commands;
mod conversation;
mod history;
mod input;
mod models;
mod request;

use backend::BackendClient;
use commands::SessionState;
use tauri::Manager;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("studyflow=info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let base_url = std::env::var("STUDYFLOW_API_URL")
                .unwrap_or_else(|_| backend::DEFAULT_BASE_URL.to_string());
            app.manage(BackendClient::new(base_url));
            app.manage(SessionState::default());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::conversation::generate,
            commands::conversation::get_thread,
            commands::conversation::start_new_conversation,
            commands::input::get_draft,
            commands::input::set_notes,
            commands::input::stage_document,
            commands::input::clear_document,
            commands::history::refresh_history,
            commands::history::open_history_entry,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
