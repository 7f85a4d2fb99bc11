use std::time::Duration;

use tauri::State;

use crate::backend::BackendClient;
use crate::commands::SessionState;
use crate::models::{ArtifactKind, Message};
use crate::request;

/// Minimum visible processing time, so a fast backend does not flash the
/// loading indicator.
const PROCESSING_DELAY: Duration = Duration::from_millis(800);

#[tauri::command]
pub fn get_thread(state: State<'_, SessionState>) -> Result<Vec<Message>, String> {
    Ok(state.0.lock().unwrap().thread().to_vec())
}

#[tauri::command]
pub fn start_new_conversation(state: State<'_, SessionState>) -> Result<(), String> {
    state.0.lock().unwrap().start_new_conversation();
    Ok(())
}

/// Run one full submission cycle: append the user turn, send the request,
/// and reconcile the response into the thread. Returns the assistant turn;
/// only a rejected submission (empty draft, generation already running) is
/// a command error.
#[tauri::command]
pub async fn generate(
    state: State<'_, SessionState>,
    backend: State<'_, BackendClient>,
    kind: ArtifactKind,
) -> Result<Message, String> {
    // 1. Append the user turn and snapshot the draft (lock scope ends
    //    before any await).
    let snapshot = {
        let mut session = state.0.lock().unwrap();
        session.begin_submission().map_err(|e| e.to_string())?
    };
    let request = request::build(kind, snapshot);

    tokio::time::sleep(PROCESSING_DELAY).await;

    // 2. Resolve the response into the thread.
    let outcome = backend.generate(request).await;
    let message = {
        let mut session = state.0.lock().unwrap();
        match outcome {
            Ok(payload) => session.complete_success(payload),
            Err(e) => {
                tracing::warn!(error = %e, "generation request failed");
                return Ok(session.complete_failure());
            }
        }
    };

    // 3. The backend persisted a new record; pick it up for the sidebar.
    match backend.fetch_history().await {
        Ok(records) => state.0.lock().unwrap().replace_history(records),
        Err(e) => tracing::warn!(error = %e, "history refresh failed, keeping previous list"),
    }

    Ok(message)
}
