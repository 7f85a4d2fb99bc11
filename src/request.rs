use serde::Serialize;

use crate::input::DraftSnapshot;
use crate::models::ArtifactKind;

/// Multipart field name the backend expects the uploaded document under.
pub const DOCUMENT_FIELD: &str = "file";
pub const DOCUMENT_MIME: &str = "application/pdf";

/// JSON body for a typed-notes generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteBody {
    pub text: String,
}

/// Exactly one body form per request: structured text or raw document bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Text(NoteBody),
    Document { file_name: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub kind: ArtifactKind,
    pub path: String,
    pub body: RequestBody,
}

/// Build the outbound request for one generation. Pure: no I/O happens here,
/// sending is the backend client's job.
pub fn build(kind: ArtifactKind, input: DraftSnapshot) -> OutboundRequest {
    let body = match input {
        DraftSnapshot::Notes(text) => RequestBody::Text(NoteBody { text }),
        DraftSnapshot::Document(doc) => RequestBody::Document {
            file_name: doc.file_name,
            bytes: doc.bytes,
        },
    };
    OutboundRequest {
        kind,
        path: format!("/generate/{}", kind.path_segment()),
        body,
    }
}
