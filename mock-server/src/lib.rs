use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct NoteInput {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteAck {
    pub id: Uuid,
    pub deleted: bool,
}

/// Newest first.
pub type Db = Arc<RwLock<Vec<Note>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", put(update_note).delete(delete_note))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn validate(input: &NoteInput) -> Result<(), StatusCode> {
    if input.title.trim().is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    Ok(())
}

async fn list_notes(State(db): State<Db>) -> Json<Vec<Note>> {
    Json(db.read().await.clone())
}

async fn create_note(
    State(db): State<Db>,
    Json(input): Json<NoteInput>,
) -> Result<(StatusCode, Json<Note>), StatusCode> {
    validate(&input)?;
    let note = Note {
        id: Uuid::new_v4(),
        title: input.title,
        content: input.content,
        created_at: Utc::now(),
    };
    db.write().await.insert(0, note.clone());
    info!(id = %note.id, "created note");
    Ok((StatusCode::CREATED, Json(note)))
}

async fn update_note(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<NoteInput>,
) -> Result<Json<Note>, StatusCode> {
    validate(&input)?;
    let mut notes = db.write().await;
    let note = notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    note.title = input.title;
    note.content = input.content;
    info!(%id, "updated note");
    Ok(Json(note.clone()))
}

async fn delete_note(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteAck>, StatusCode> {
    let mut notes = db.write().await;
    let pos = notes
        .iter()
        .position(|n| n.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    notes.remove(pos);
    info!(%id, "deleted note");
    Ok(Json(DeleteAck { id, deleted: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_serializes_to_json() {
        let note = Note {
            id: Uuid::nil(),
            title: "Test".to_string(),
            content: None,
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Test");
        assert!(json["content"].is_null());
        assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn note_input_content_is_optional() {
        let input: NoteInput = serde_json::from_str(r#"{"title":"Only title"}"#).unwrap();
        assert_eq!(input.title, "Only title");
        assert!(input.content.is_none());
    }

    #[test]
    fn note_input_rejects_missing_title() {
        let result: Result<NoteInput, _> = serde_json::from_str(r#"{"content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn blank_title_fails_validation() {
        let input = NoteInput {
            title: "  ".to_string(),
            content: None,
        };
        assert_eq!(validate(&input), Err(StatusCode::UNPROCESSABLE_ENTITY));
    }
}
