//! Stateless HTTP request builder and response parser for the notes API.
//!
//! # Design
//! `NotesClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Any 2xx status counts as success; anything else becomes the operation's
//! own `ApiError` variant without looking at the body.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Ack, Draft, Note, NoteId};

#[derive(Debug, Clone)]
pub struct NotesClient {
    base_url: String,
}

impl NotesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/api/notes", self.base_url)
    }

    fn note_url(&self, id: &NoteId) -> String {
        format!("{}/api/notes/{id}", self.base_url)
    }

    pub fn build_list_notes(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_note(&self, draft: &Draft) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(encode(draft)?),
        })
    }

    pub fn build_update_note(&self, id: &NoteId, draft: &Draft) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.note_url(id),
            headers: json_headers(),
            body: Some(encode(draft)?),
        })
    }

    pub fn build_delete_note(&self, id: &NoteId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.note_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_notes(&self, response: HttpResponse) -> Result<Vec<Note>, ApiError> {
        decode(Operation::List, &response)
    }

    pub fn parse_create_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        decode(Operation::Create, &response)
    }

    pub fn parse_update_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        decode(Operation::Update, &response)
    }

    pub fn parse_delete_note(&self, response: HttpResponse) -> Result<Ack, ApiError> {
        decode(Operation::Delete, &response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode(draft: &Draft) -> Result<String, ApiError> {
    serde_json::to_string(draft).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(op: Operation, response: &HttpResponse) -> Result<T, ApiError> {
    check_status(op, response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
}

fn check_status(op: Operation, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(op.failure(response.status))
}
