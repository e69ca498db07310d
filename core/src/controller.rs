//! Client-side state for the notes list and its edit form.
//!
//! # Design
//! `NotesController` owns the note list, the draft, the edit target and the
//! `loading`/`error` flags. Every operation is split into synchronous
//! transitions around the remote call (`start_load` / `finish_load`,
//! `prepare_submit` / `finish_submit`, `finish_delete`), so a host event loop
//! can dispatch the call however it likes and fold the result back in. The
//! `load`, `submit` and `delete` helpers run a whole operation against any
//! `NotesApi`.
//!
//! The list is only ever mutated after the service confirms a change; a
//! failed call leaves it untouched and records one message in `error`.

use tracing::debug;

use crate::api::NotesApi;
use crate::error::ApiError;
use crate::types::{Ack, Draft, Note, NoteId};

/// A submit in flight, with the edit target captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(Draft),
    Update { id: NoteId, draft: Draft },
}

impl Submission {
    pub fn draft(&self) -> &Draft {
        match self {
            Submission::Create(draft) => draft,
            Submission::Update { draft, .. } => draft,
        }
    }
}

/// What the list area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Notes(&'a [Note]),
}

#[derive(Debug, Clone)]
pub struct NotesController {
    notes: Vec<Note>,
    draft: Draft,
    editing: Option<NoteId>,
    loading: bool,
    error: Option<String>,
}

impl Default for NotesController {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesController {
    /// Starts in the loading state; the host is expected to call `load` next.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            draft: Draft::default(),
            editing: None,
            loading: true,
            error: None,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing_target(&self) -> Option<&NoteId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> ListView<'_> {
        if self.loading {
            ListView::Loading
        } else if self.notes.is_empty() {
            ListView::Empty
        } else {
            ListView::Notes(&self.notes)
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Note"
        } else {
            "Add Note"
        }
    }

    pub fn can_cancel(&self) -> bool {
        self.is_editing()
    }

    // --- local transitions ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn begin_edit(&mut self, note: &Note) {
        self.editing = Some(note.id.clone());
        self.draft = Draft::from_note(note);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft = Draft::default();
    }

    fn record_error(&mut self, err: &ApiError) {
        debug!(error = %err, "recording error");
        self.error = Some(err.to_string());
    }

    // --- load ---

    pub fn start_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list result. Overlapping loads apply in arrival order.
    pub fn finish_load(&mut self, result: Result<Vec<Note>, ApiError>) {
        match result {
            Ok(notes) => {
                debug!(count = notes.len(), "replacing note list");
                self.notes = notes;
            }
            Err(e) => self.record_error(&e),
        }
        self.loading = false;
    }

    pub fn load<A: NotesApi + ?Sized>(&mut self, api: &A) {
        self.start_load();
        let result = api.list_notes();
        self.finish_load(result);
    }

    // --- submit ---

    /// Decide between create and update for `draft`. An invalid draft is
    /// recorded as the error and yields `None`; nothing should be sent.
    pub fn prepare_submit(&mut self, draft: Draft) -> Option<Submission> {
        if let Err(e) = draft.validate() {
            self.record_error(&e);
            return None;
        }
        Some(match &self.editing {
            Some(id) => Submission::Update {
                id: id.clone(),
                draft,
            },
            None => Submission::Create(draft),
        })
    }

    pub fn finish_submit(&mut self, submission: Submission, result: Result<Note, ApiError>) {
        let note = match result {
            Ok(note) => note,
            Err(e) => {
                self.record_error(&e);
                return;
            }
        };
        match submission {
            Submission::Update { id, .. } => {
                debug!(id = %id, "applying updated note");
                if let Some(slot) = self.notes.iter_mut().find(|n| n.id == id) {
                    *slot = note;
                }
                self.editing = None;
            }
            Submission::Create(_) => {
                debug!(id = %note.id, "prepending created note");
                self.notes.insert(0, note);
            }
        }
        self.draft = Draft::default();
        self.error = None;
    }

    pub fn submit<A: NotesApi + ?Sized>(&mut self, api: &A, draft: Draft) {
        let Some(submission) = self.prepare_submit(draft) else {
            return;
        };
        let result = match &submission {
            Submission::Create(draft) => api.create_note(draft),
            Submission::Update { id, draft } => api.update_note(id, draft),
        };
        self.finish_submit(submission, result);
    }

    /// Submit whatever is currently in the draft.
    pub fn submit_draft<A: NotesApi + ?Sized>(&mut self, api: &A) {
        let draft = self.draft.clone();
        self.submit(api, draft);
    }

    // --- delete ---

    /// Apply a delete result. The edit target is left alone even when it
    /// names the deleted note.
    pub fn finish_delete(&mut self, id: &NoteId, result: Result<Ack, ApiError>) {
        match result {
            Ok(_) => {
                debug!(id = %id, "removing deleted note");
                self.notes.retain(|n| &n.id != id);
            }
            Err(e) => self.record_error(&e),
        }
    }

    pub fn delete<A: NotesApi + ?Sized>(&mut self, api: &A, id: &NoteId) {
        let result = api.delete_note(id);
        self.finish_delete(id, result);
    }
}
