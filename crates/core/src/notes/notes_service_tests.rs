//! Unit tests for note validation and lifecycle rules.

use super::notes_model::*;
use super::notes_service::NoteService;
use super::notes_traits::{NoteRepositoryTrait, NoteServiceTrait};
use crate::context::UserContext;
use crate::errors::{Error, Result};
use std::sync::Arc;

#[derive(Default)]
struct MockNoteRepository {
    notes: Vec<Note>,
}

impl NoteRepositoryTrait for MockNoteRepository {
    fn insert(&self, note: Note) -> Result<Note> {
        Ok(note)
    }

    fn get(&self, note_id: &str, user_id: &str) -> Result<Note> {
        self.notes
            .iter()
            .find(|n| n.id == note_id && n.user_id == user_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("note {}", note_id)))
    }

    fn list(&self, user_id: &str) -> Result<Vec<Note>> {
        Ok(self
            .notes
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    fn update(&self, note_id: &str, user_id: &str, _changeset: NoteChangeset) -> Result<Note> {
        self.get(note_id, user_id)
    }

    fn delete(&self, note_id: &str, user_id: &str) -> Result<usize> {
        Ok(self
            .notes
            .iter()
            .filter(|n| n.id == note_id && n.user_id == user_id)
            .count())
    }
}

fn ctx() -> UserContext {
    UserContext::new("user-1")
}

fn service() -> NoteService {
    NoteService::new(Arc::new(MockNoteRepository::default()))
}

fn new_note() -> NewNote {
    NewNote {
        title: "groceries plan".to_string(),
        content: "weekly shopping list".to_string(),
        category: "household".to_string(),
        tags: vec!["food".to_string(), "weekly".to_string()],
        is_favorite: false,
    }
}

#[test]
fn create_note_stamps_id_and_starts_unarchived() {
    let note = service().create_note(&ctx(), new_note()).unwrap();
    assert!(!note.id.is_empty());
    assert!(!note.is_archived);
    assert_eq!(note.user_id, "user-1");
    assert_eq!(note.tags, vec!["food", "weekly"]);
}

#[test]
fn create_note_requires_title() {
    let mut request = new_note();
    request.title = String::new();
    let err = service().create_note(&ctx(), request).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn create_note_rejects_more_than_twenty_tags() {
    let mut request = new_note();
    request.tags = (0..21).map(|i| format!("tag-{}", i)).collect();
    let err = service().create_note(&ctx(), request).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn create_note_rejects_overlong_tag() {
    let mut request = new_note();
    request.tags = vec!["x".repeat(51)];
    let err = service().create_note(&ctx(), request).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn create_note_rejects_empty_tag() {
    let mut request = new_note();
    request.tags = vec![String::new()];
    let err = service().create_note(&ctx(), request).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn empty_note_update_is_rejected() {
    let err = service()
        .update_note(&ctx(), "n1", NoteUpdate::default())
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn note_tags_round_trip_through_row_json() {
    let note = service().create_note(&ctx(), new_note()).unwrap();
    let row = NoteRow::from(&note);
    assert_eq!(row.tags, r#"["food","weekly"]"#);
    let back: Note = row.into();
    assert_eq!(back.tags, note.tags);
}

#[test]
fn malformed_tags_column_reads_as_empty() {
    let note = service().create_note(&ctx(), new_note()).unwrap();
    let mut row = NoteRow::from(&note);
    row.tags = "not-json".to_string();
    let back: Note = row.into();
    assert!(back.tags.is_empty());
}
