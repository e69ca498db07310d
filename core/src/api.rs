//! The access-layer contract consumed by the controller.
//!
//! `NotesApi` is the four-operation view of the remote collection.
//! `RemoteNotes` fulfils it by pairing a `NotesClient` with a `Transport`:
//! build, execute once, parse.

use tracing::warn;

use crate::client::NotesClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, Operation};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Ack, Draft, Note, NoteId};

pub trait NotesApi {
    fn list_notes(&self) -> Result<Vec<Note>, ApiError>;
    fn create_note(&self, draft: &Draft) -> Result<Note, ApiError>;
    fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<Note, ApiError>;
    fn delete_note(&self, id: &NoteId) -> Result<Ack, ApiError>;
}

impl<A: NotesApi + ?Sized> NotesApi for &A {
    fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        (**self).list_notes()
    }

    fn create_note(&self, draft: &Draft) -> Result<Note, ApiError> {
        (**self).create_note(draft)
    }

    fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<Note, ApiError> {
        (**self).update_note(id, draft)
    }

    fn delete_note(&self, id: &NoteId) -> Result<Ack, ApiError> {
        (**self).delete_note(id)
    }
}

/// Access layer over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteNotes<T> {
    client: NotesClient,
    transport: T,
}

impl RemoteNotes<UreqTransport> {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(NotesClient::from_config(config), UreqTransport::new())
    }
}

impl<T: Transport> RemoteNotes<T> {
    pub fn new(client: NotesClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &NotesClient {
        &self.client
    }

    fn logged<R>(&self, op: Operation, result: Result<R, ApiError>) -> Result<R, ApiError> {
        if let Err(e) = &result {
            warn!(operation = %op, status = ?e.status(), error = %e, "notes request failed");
        }
        result
    }
}

impl<T: Transport> NotesApi for RemoteNotes<T> {
    fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let result = self
            .transport
            .execute(self.client.build_list_notes())
            .and_then(|resp| self.client.parse_list_notes(resp));
        self.logged(Operation::List, result)
    }

    fn create_note(&self, draft: &Draft) -> Result<Note, ApiError> {
        let result = self
            .client
            .build_create_note(draft)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.client.parse_create_note(resp));
        self.logged(Operation::Create, result)
    }

    fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<Note, ApiError> {
        let result = self
            .client
            .build_update_note(id, draft)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.client.parse_update_note(resp));
        self.logged(Operation::Update, result)
    }

    fn delete_note(&self, id: &NoteId) -> Result<Ack, ApiError> {
        let result = self
            .transport
            .execute(self.client.build_delete_note(id))
            .and_then(|resp| self.client.parse_delete_note(resp));
        self.logged(Operation::Delete, result)
    }
}
