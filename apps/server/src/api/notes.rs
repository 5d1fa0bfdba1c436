use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finotes_core::notes::{NewNote, Note, NoteUpdate};

use crate::{auth, error::ApiResult, main_lib::AppState};

async fn list_notes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Note>>> {
    let ctx = auth::current_user();
    let notes = state.note_service.list_notes(&ctx)?;
    Ok(Json(notes))
}

async fn get_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Note>> {
    let ctx = auth::current_user();
    let note = state.note_service.get_note(&ctx, &id)?;
    Ok(Json(note))
}

async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(new_note): Json<NewNote>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let ctx = auth::current_user();
    let note = state.note_service.create_note(&ctx, new_note)?;
    Ok((StatusCode::CREATED, Json(note)))
}

async fn update_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<NoteUpdate>,
) -> ApiResult<Json<Note>> {
    let ctx = auth::current_user();
    let note = state.note_service.update_note(&ctx, &id, patch)?;
    Ok(Json(note))
}

async fn delete_note(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let ctx = auth::current_user();
    state.note_service.delete_note(&ctx, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}
