use crate::history;
use crate::input::{Draft, DraftSnapshot};
use crate::models::{ArtifactPayload, HistoryRecord, Message};

/// Fallback assistant text when a generation fails for any reason.
pub const GENERATION_FAILED_TEXT: &str =
    "Error generating content. Please check your backend connection.";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Please enter some notes or upload a PDF first!")]
    EmptySubmission,
    #[error("A generation is already running.")]
    Busy,
}

/// The session's entire mutable state: the message thread, the draft, the
/// last-fetched history list, and the single pending-generation slot.
///
/// Commands own a `Mutex<Session>`; every mutation goes through this API so
/// the submission cycle is testable without a window.
#[derive(Debug, Default)]
pub struct Session {
    thread: Vec<Message>,
    draft: Draft,
    history: Vec<HistoryRecord>,
    active_history_id: Option<i64>,
    in_flight: bool,
}

impl Session {
    pub fn thread(&self) -> &[Message] {
        &self.thread
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    pub fn active_history_id(&self) -> Option<i64> {
        self.active_history_id
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight
    }

    /// Start a submission cycle: append the user turn, snapshot and clear
    /// the draft, and mark a generation in flight. Only reachable while
    /// idle and with an eligible draft.
    pub fn begin_submission(&mut self) -> Result<DraftSnapshot, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::Busy);
        }
        let snapshot = self.draft.take().ok_or(SubmitError::EmptySubmission)?;
        let user = match &snapshot {
            DraftSnapshot::Notes(text) => Message::user(text.clone()),
            DraftSnapshot::Document(doc) => Message::user_upload(
                format!("Uploaded PDF: {}", doc.file_name),
                doc.file_name.clone(),
            ),
        };
        self.thread.push(user);
        self.in_flight = true;
        Ok(snapshot)
    }

    /// Resolve the pending generation with a decoded payload.
    pub fn complete_success(&mut self, payload: ArtifactPayload) -> Message {
        let message = Message::assistant(Some(payload));
        self.thread.push(message.clone());
        self.in_flight = false;
        message
    }

    /// Resolve the pending generation as failed. The thread stays usable;
    /// the user retries by composing a new submission.
    pub fn complete_failure(&mut self) -> Message {
        let message = Message::assistant_text(GENERATION_FAILED_TEXT);
        self.thread.push(message.clone());
        self.in_flight = false;
        message
    }

    /// Hard reset: empty thread, no active history entry, cleared draft.
    /// The in-flight flag is left as-is; a generation still running
    /// resolves into the fresh thread.
    pub fn start_new_conversation(&mut self) {
        self.thread.clear();
        self.active_history_id = None;
        self.draft.reset();
    }

    pub fn replace_history(&mut self, records: Vec<HistoryRecord>) {
        self.history = records;
    }

    pub fn find_record(&self, id: i64) -> Option<&HistoryRecord> {
        self.history.iter().find(|r| r.id == id)
    }

    /// Replace the whole thread with the rehydrated pair for `record` and
    /// mark it active. A record that fails to decode still shows the user
    /// turn, with an assistant turn carrying no payload.
    pub fn open_history(&mut self, record: &HistoryRecord) {
        let (user, assistant) = match history::rehydrate(record) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(id = record.id, error = %e, "failed to decode history record");
                (Message::user(record.input_text.clone()), Message::assistant(None))
            }
        };
        self.thread = vec![user, assistant];
        self.active_history_id = Some(record.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::StagedDocument;
    use crate::models::{ArtifactKind, Flashcard, Role};

    fn pdf(name: &str) -> StagedDocument {
        StagedDocument {
            file_name: name.into(),
            bytes: vec![0x25, 0x50, 0x44, 0x46],
        }
    }

    fn record(id: i64, kind: ArtifactKind, output: &str) -> HistoryRecord {
        HistoryRecord {
            id,
            timestamp: "2025-11-02T10:15:00".into(),
            kind,
            input_text: "osmosis notes".into(),
            output_content: output.into(),
        }
    }

    #[test]
    fn test_submit_notes_appends_one_user_turn() {
        let mut session = Session::default();
        session.draft_mut().set_notes("  mitosis vs meiosis  ");

        let snapshot = session.begin_submission().unwrap();
        assert_eq!(
            snapshot,
            DraftSnapshot::Notes("  mitosis vs meiosis  ".into())
        );
        assert_eq!(session.thread().len(), 1);
        let user = &session.thread()[0];
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "  mitosis vs meiosis  ");
        assert!(user.source_file_name.is_none());
        assert!(session.is_generating());
        // Draft is cleared the moment the submission starts.
        assert!(!session.draft().can_submit());
    }

    #[test]
    fn test_submit_document_records_file_name() {
        let mut session = Session::default();
        session.draft_mut().stage_document(pdf("week4.pdf")).unwrap();

        session.begin_submission().unwrap();
        let user = &session.thread()[0];
        assert_eq!(user.content, "Uploaded PDF: week4.pdf");
        assert_eq!(user.source_file_name.as_deref(), Some("week4.pdf"));
    }

    #[test]
    fn test_empty_submission_is_a_no_op() {
        let mut session = Session::default();
        session.draft_mut().set_notes("   ");
        let err = session.begin_submission().unwrap_err();
        assert!(matches!(err, SubmitError::EmptySubmission));
        assert!(session.thread().is_empty());
        assert!(!session.is_generating());
    }

    #[test]
    fn test_second_submission_rejected_while_in_flight() {
        let mut session = Session::default();
        session.draft_mut().set_notes("first");
        session.begin_submission().unwrap();

        session.draft_mut().set_notes("second");
        let err = session.begin_submission().unwrap_err();
        assert!(matches!(err, SubmitError::Busy));
        assert_eq!(session.thread().len(), 1);
    }

    #[test]
    fn test_success_appends_assistant_turn_with_payload() {
        let mut session = Session::default();
        session.draft_mut().set_notes("glycolysis");
        session.begin_submission().unwrap();

        session.complete_success(ArtifactPayload::Flashcards {
            flashcards: vec![Flashcard {
                front: "Q1".into(),
                back: "A1".into(),
            }],
        });
        assert_eq!(session.thread().len(), 2);
        let assistant = &session.thread()[1];
        assert_eq!(assistant.role, Role::Assistant);
        assert_eq!(assistant.artifact_kind(), Some(ArtifactKind::Flashcards));
        assert!(!session.is_generating());
    }

    #[test]
    fn test_failure_appends_fallback_without_payload() {
        let mut session = Session::default();
        session.draft_mut().set_notes("glycolysis");
        session.begin_submission().unwrap();

        session.complete_failure();
        let assistant = &session.thread()[1];
        assert_eq!(assistant.content, GENERATION_FAILED_TEXT);
        assert!(assistant.payload.is_none());
        assert!(!session.is_generating());

        // The cycle is over; a new submission is accepted.
        session.draft_mut().set_notes("try again");
        assert!(session.begin_submission().is_ok());
    }

    #[test]
    fn test_new_conversation_resets_everything() {
        let mut session = Session::default();
        session.replace_history(vec![record(3, ArtifactKind::Summary, "S")]);
        session.open_history(&record(3, ArtifactKind::Summary, "S"));
        session.draft_mut().set_notes("leftover draft");

        session.start_new_conversation();
        assert!(session.thread().is_empty());
        assert!(session.active_history_id().is_none());
        assert!(!session.draft().can_submit());
        // The fetched history list itself is untouched.
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_open_history_replaces_thread() {
        let mut session = Session::default();
        session.draft_mut().set_notes("old turn");
        session.begin_submission().unwrap();
        session.complete_failure();
        assert_eq!(session.thread().len(), 2);

        let rec = record(9, ArtifactKind::Flashcards, r#"[{"front":"Q1","back":"A1"}]"#);
        session.open_history(&rec);
        assert_eq!(session.thread().len(), 2);
        assert_eq!(session.thread()[0].content, "osmosis notes");
        assert_eq!(
            session.thread()[1].artifact_kind(),
            Some(ArtifactKind::Flashcards)
        );
        assert_eq!(session.active_history_id(), Some(9));
    }

    #[test]
    fn test_open_history_degrades_on_malformed_content() {
        let mut session = Session::default();
        let rec = record(4, ArtifactKind::Timetable, "{broken");
        session.open_history(&rec);

        assert_eq!(session.thread().len(), 2);
        assert_eq!(session.thread()[0].content, "osmosis notes");
        assert!(session.thread()[1].payload.is_none());
        assert_eq!(session.active_history_id(), Some(4));
    }

    #[test]
    fn test_find_record() {
        let mut session = Session::default();
        session.replace_history(vec![
            record(1, ArtifactKind::Summary, "a"),
            record(2, ArtifactKind::Timetable, "[]"),
        ]);
        assert_eq!(session.find_record(2).map(|r| r.id), Some(2));
        assert!(session.find_record(99).is_none());
    }
}
