use serde::{Deserialize, Serialize};

/// The three artifact kinds the backend can generate from a set of notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Summary,
    Flashcards,
    Timetable,
}

impl ArtifactKind {
    /// Path segment under `/generate/` on the backend.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ArtifactKind::Summary => "summary",
            ArtifactKind::Flashcards => "flashcards",
            ArtifactKind::Timetable => "timetable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableSlot {
    pub time: String,
    pub activity: String,
}

/// Generated output attached to an assistant turn, one variant per artifact
/// kind. The tag doubles as the discriminator the frontend switches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArtifactPayload {
    Summary { summary: String },
    Flashcards { flashcards: Vec<Flashcard> },
    Timetable { timetable: Vec<TimetableSlot> },
}

impl ArtifactPayload {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            ArtifactPayload::Summary { .. } => ArtifactKind::Summary,
            ArtifactPayload::Flashcards { .. } => ArtifactKind::Flashcards,
            ArtifactPayload::Timetable { .. } => ArtifactKind::Timetable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn in the conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<ArtifactPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file_name: Option<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
            payload: None,
            source_file_name: None,
        }
    }

    pub fn user_upload(content: impl Into<String>, file_name: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
            payload: None,
            source_file_name: Some(file_name.into()),
        }
    }

    pub fn assistant(payload: Option<ArtifactPayload>) -> Self {
        Message {
            role: Role::Assistant,
            content: String::new(),
            payload,
            source_file_name: None,
        }
    }

    pub fn assistant_text(content: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
            payload: None,
            source_file_name: None,
        }
    }

    pub fn artifact_kind(&self) -> Option<ArtifactKind> {
        self.payload.as_ref().map(|p| p.kind())
    }
}

/// A persisted prior generation, owned by the backend. `output_content` is a
/// plain text blob for summaries and a JSON-serialized array for the other
/// two kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub input_text: String,
    pub output_content: String,
}
