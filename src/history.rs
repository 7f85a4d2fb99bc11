use crate::models::{
    ArtifactKind, ArtifactPayload, Flashcard, HistoryRecord, Message, TimetableSlot,
};

#[derive(Debug, thiserror::Error)]
#[error("malformed history content: {0}")]
pub struct HistoryDecodeError(#[from] serde_json::Error);

/// Rebuild the user/assistant turn pair a past generation displayed as.
///
/// Summaries are stored verbatim; flashcard and timetable records store the
/// JSON-serialized array and must decode cleanly. The original upload
/// identity is not recoverable, so the user turn never carries a file name.
pub fn rehydrate(record: &HistoryRecord) -> Result<(Message, Message), HistoryDecodeError> {
    let user = Message::user(record.input_text.clone());
    let payload = match record.kind {
        ArtifactKind::Summary => ArtifactPayload::Summary {
            summary: record.output_content.clone(),
        },
        ArtifactKind::Flashcards => ArtifactPayload::Flashcards {
            flashcards: serde_json::from_str::<Vec<Flashcard>>(&record.output_content)?,
        },
        ArtifactKind::Timetable => ArtifactPayload::Timetable {
            timetable: serde_json::from_str::<Vec<TimetableSlot>>(&record.output_content)?,
        },
    };
    Ok((user, Message::assistant(Some(payload))))
}
