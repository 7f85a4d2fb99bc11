use std::path::Path;

/// A document staged for the next submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl StagedDocument {
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Please upload a PDF file only.")]
    RejectedFileKind,
}

/// What a submission actually carries: the typed notes or the staged
/// document, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftSnapshot {
    Notes(String),
    Document(StagedDocument),
}

/// The not-yet-submitted input. A staged document takes over as the active
/// source: while one is staged, note edits are ignored and submission sends
/// the document.
#[derive(Debug, Default)]
pub struct Draft {
    notes: String,
    document: Option<StagedDocument>,
}

impl Draft {
    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn document(&self) -> Option<&StagedDocument> {
        self.document.as_ref()
    }

    /// Update the typed notes. No-op while a document is staged.
    pub fn set_notes(&mut self, text: impl Into<String>) {
        if self.document.is_none() {
            self.notes = text.into();
        }
    }

    /// Stage a document, making it the active input source. Only PDFs are
    /// accepted; anything else leaves the draft unchanged.
    pub fn stage_document(&mut self, doc: StagedDocument) -> Result<(), InputError> {
        if !is_pdf(&doc.file_name) {
            return Err(InputError::RejectedFileKind);
        }
        self.document = Some(doc);
        Ok(())
    }

    /// Unstage the document, returning to typed-notes mode.
    pub fn clear_document(&mut self) {
        self.document = None;
    }

    pub fn reset(&mut self) {
        self.notes.clear();
        self.document = None;
    }

    pub fn can_submit(&self) -> bool {
        self.document.is_some() || !self.notes.trim().is_empty()
    }

    /// Snapshot the draft for submission and clear it. Returns `None` when
    /// there is nothing eligible to submit.
    pub fn take(&mut self) -> Option<DraftSnapshot> {
        let snapshot = if let Some(doc) = self.document.take() {
            DraftSnapshot::Document(doc)
        } else if self.notes.trim().is_empty() {
            return None;
        } else {
            DraftSnapshot::Notes(std::mem::take(&mut self.notes))
        };
        self.reset();
        Some(snapshot)
    }
}

fn is_pdf(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}
