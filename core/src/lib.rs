//! Client core for a remote notes collection.
//!
//! # Overview
//! Two layers. The access layer (`NotesClient` + `Transport`, combined in
//! `RemoteNotes`) issues the four HTTP operations against a configured base
//! address and turns non-2xx responses into typed `ApiError`s. The
//! `NotesController` owns the displayed list, the edit draft and the
//! loading/error flags, and reconciles them with what the service returns.
//!
//! # Design
//! - `NotesClient` is stateless: `build_*` produces a plain-data request,
//!   `parse_*` consumes a plain-data response. Only `Transport` does I/O.
//! - The base address is an explicit `ClientConfig`; `from_env` reads it once.
//! - Controller operations are synchronous transitions around the remote
//!   call, so any event loop can drive them.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::{NotesApi, RemoteNotes};
pub use client::NotesClient;
pub use config::ClientConfig;
pub use controller::{ListView, NotesController, Submission};
pub use error::{ApiError, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Ack, Draft, Note, NoteId};
