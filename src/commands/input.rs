use std::path::Path;

use serde::Serialize;
use tauri::State;

use crate::commands::SessionState;
use crate::conversation::Session;
use crate::input::StagedDocument;

#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    pub file_name: String,
    pub size_bytes: u64,
}

/// Frontend view of the draft: the notes text, the staged-document chip,
/// and whether the generation buttons should be enabled.
#[derive(Debug, Serialize)]
pub struct DraftView {
    pub notes: String,
    pub document: Option<DocumentInfo>,
    pub can_submit: bool,
}

fn view(session: &Session) -> DraftView {
    let draft = session.draft();
    DraftView {
        notes: draft.notes().to_string(),
        document: draft.document().map(|d| DocumentInfo {
            file_name: d.file_name.clone(),
            size_bytes: d.size_bytes(),
        }),
        can_submit: draft.can_submit(),
    }
}

#[tauri::command]
pub fn get_draft(state: State<'_, SessionState>) -> Result<DraftView, String> {
    Ok(view(&state.0.lock().unwrap()))
}

#[tauri::command]
pub fn set_notes(state: State<'_, SessionState>, text: String) -> Result<DraftView, String> {
    let mut session = state.0.lock().unwrap();
    session.draft_mut().set_notes(text);
    Ok(view(&session))
}

/// Stage a document picked by the frontend's file dialog. Anything but a
/// PDF is rejected and the draft is left unchanged.
#[tauri::command]
pub fn stage_document(
    state: State<'_, SessionState>,
    file_path: String,
) -> Result<DraftView, String> {
    let path = Path::new(&file_path);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;

    let mut session = state.0.lock().unwrap();
    session
        .draft_mut()
        .stage_document(StagedDocument { file_name, bytes })
        .map_err(|e| e.to_string())?;
    Ok(view(&session))
}

#[tauri::command]
pub fn clear_document(state: State<'_, SessionState>) -> Result<DraftView, String> {
    let mut session = state.0.lock().unwrap();
    session.draft_mut().clear_document();
    Ok(view(&session))
}
