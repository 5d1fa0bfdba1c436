use crate::context::UserContext;
use crate::errors::Result;
use crate::notes::notes_model::{NewNote, Note, NoteChangeset, NoteUpdate};

pub trait NoteRepositoryTrait: Send + Sync {
    fn insert(&self, note: Note) -> Result<Note>;
    fn get(&self, note_id: &str, user_id: &str) -> Result<Note>;
    fn list(&self, user_id: &str) -> Result<Vec<Note>>;
    fn update(&self, note_id: &str, user_id: &str, changeset: NoteChangeset) -> Result<Note>;
    fn delete(&self, note_id: &str, user_id: &str) -> Result<usize>;
}

pub trait NoteServiceTrait: Send + Sync {
    fn create_note(&self, ctx: &UserContext, new_note: NewNote) -> Result<Note>;
    fn get_note(&self, ctx: &UserContext, note_id: &str) -> Result<Note>;
    fn list_notes(&self, ctx: &UserContext) -> Result<Vec<Note>>;
    fn update_note(&self, ctx: &UserContext, note_id: &str, patch: NoteUpdate) -> Result<Note>;
    fn delete_note(&self, ctx: &UserContext, note_id: &str) -> Result<()>;
}
