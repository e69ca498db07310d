//! Domain DTOs for the notes API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! `NoteId` is opaque: the service may hand out strings or integers, and the
//! client only ever compares ids and renders them into request paths.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Server-assigned note identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for NoteId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNoteId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawNoteId::deserialize(deserializer)? {
            RawNoteId::Text(id) => NoteId(id),
            RawNoteId::Signed(id) => NoteId(id.to_string()),
            RawNoteId::Unsigned(id) => NoteId(id.to_string()),
        })
    }
}

/// A single note returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Offset-less forms, read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse RFC 3339, RFC 2822 (HTTP-date) or naive ISO 8601 timestamps.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("unrecognized timestamp: {raw}")))
}

/// The form-in-progress. Also the request payload for create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Copy the editable fields of `note`; absent content becomes "".
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone().unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// Reject drafts with an empty title. Whitespace is left for the service to judge.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.is_empty() {
            return Err(ApiError::Validation("title is required".to_string()));
        }
        Ok(())
    }
}

/// Acknowledgment body returned by a successful delete. Its shape is not
/// part of the contract, so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ack(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn note_id_accepts_strings_and_integers() {
        let text: NoteId = serde_json::from_str(r#""abc-123""#).unwrap();
        assert_eq!(text.as_str(), "abc-123");

        let number: NoteId = serde_json::from_str("42").unwrap();
        assert_eq!(number, NoteId::from(42u64));
        assert_eq!(number.to_string(), "42");
    }

    #[test]
    fn note_id_rejects_other_json() {
        assert!(serde_json::from_str::<NoteId>("true").is_err());
        assert!(serde_json::from_str::<NoteId>("[1]").is_err());
    }

    #[test]
    fn note_content_may_be_missing_or_null() {
        let missing: Note = serde_json::from_str(
            r#"{"id":1,"title":"A","created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(missing.content.is_none());

        let null: Note = serde_json::from_str(
            r#"{"id":1,"title":"A","content":null,"created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(null.content.is_none());
    }

    #[test]
    fn note_requires_created_at() {
        let result: Result<Note, _> = serde_json::from_str(r#"{"id":1,"title":"A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn timestamps_accept_common_server_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-05-01T10:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T12:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("Wed, 01 May 2024 10:00:00 GMT"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T10:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01 10:00:00"), Some(expected));

        let micros = parse_timestamp("2024-05-01T10:00:00.123456").unwrap();
        assert_eq!(micros, expected + chrono::Duration::microseconds(123_456));
    }

    #[test]
    fn note_with_naive_timestamp_parses() {
        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"A","content":"x","created_at":"2024-05-01T10:00:00.123456"}"#,
        )
        .unwrap();
        assert_eq!(note.created_at.to_rfc3339(), "2024-05-01T10:00:00.123456+00:00");
    }

    #[test]
    fn garbage_timestamp_is_rejected() {
        assert_eq!(parse_timestamp("yesterday"), None);
        let result: Result<Note, _> =
            serde_json::from_str(r#"{"id":1,"title":"A","created_at":"yesterday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn draft_from_note_defaults_content_to_empty() {
        let note: Note = serde_json::from_str(
            r#"{"id":"n1","title":"Groceries","created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(Draft::from_note(&note), Draft::new("Groceries", ""));
    }

    #[test]
    fn draft_serializes_both_fields() {
        let json = serde_json::to_value(Draft::new("T", "")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "T", "content": ""}));
    }

    #[test]
    fn draft_validation_requires_a_title() {
        assert!(Draft::new("Title", "").validate().is_ok());
        let err = Draft::new("", "body").validate().unwrap_err();
        assert_eq!(err.to_string(), "title is required");
        assert!(Draft::new("   ", "").validate().is_ok());
    }
}
