use tauri::State;

use crate::backend::BackendClient;
use crate::commands::SessionState;
use crate::models::{HistoryRecord, Message};

/// Re-fetch the generation log. A failed fetch is not an error to the
/// caller: the previously fetched list is returned unchanged.
#[tauri::command]
pub async fn refresh_history(
    state: State<'_, SessionState>,
    backend: State<'_, BackendClient>,
) -> Result<Vec<HistoryRecord>, String> {
    match backend.fetch_history().await {
        Ok(records) => {
            let mut session = state.0.lock().unwrap();
            session.replace_history(records);
            Ok(session.history().to_vec())
        }
        Err(e) => {
            tracing::warn!(error = %e, "history refresh failed, keeping previous list");
            Ok(state.0.lock().unwrap().history().to_vec())
        }
    }
}

/// Show a past generation: replace the thread with its rehydrated pair and
/// return the new thread.
#[tauri::command]
pub fn open_history_entry(
    state: State<'_, SessionState>,
    id: i64,
) -> Result<Vec<Message>, String> {
    let mut session = state.0.lock().unwrap();
    let record = session
        .find_record(id)
        .cloned()
        .ok_or_else(|| format!("Unknown history entry: {}", id))?;
    session.open_history(&record);
    Ok(session.thread().to_vec())
}
