use std::sync::Arc;

use diesel::prelude::*;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::notes::notes_model::{Note, NoteChangeset, NoteRow};
use crate::notes::notes_traits::NoteRepositoryTrait;
use crate::schema::notes;
use crate::schema::notes::dsl::*;

pub struct NoteRepository {
    pool: Arc<DbPool>,
}

impl NoteRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        NoteRepository { pool }
    }
}

impl NoteRepositoryTrait for NoteRepository {
    fn insert(&self, note: Note) -> Result<Note> {
        let mut conn = get_connection(&self.pool)?;
        let row: NoteRow = diesel::insert_into(notes::table)
            .values(&NoteRow::from(&note))
            .returning(notes::all_columns)
            .get_result(&mut conn)?;
        Ok(row.into())
    }

    fn get(&self, note_id: &str, note_user_id: &str) -> Result<Note> {
        let mut conn = get_connection(&self.pool)?;
        let row: Option<NoteRow> = notes
            .filter(id.eq(note_id).and(user_id.eq(note_user_id)))
            .first(&mut conn)
            .optional()?;
        row.map(Note::from)
            .ok_or_else(|| Error::NotFound(format!("note {}", note_id)))
    }

    fn list(&self, note_user_id: &str) -> Result<Vec<Note>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = notes
            .filter(user_id.eq(note_user_id))
            .order(created_at.desc())
            .load::<NoteRow>(&mut conn)?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    fn update(&self, note_id: &str, note_user_id: &str, changeset: NoteChangeset) -> Result<Note> {
        let mut conn = get_connection(&self.pool)?;
        let affected =
            diesel::update(notes.filter(id.eq(note_id).and(user_id.eq(note_user_id))))
                .set(&changeset)
                .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("note {}", note_id)));
        }

        let row: NoteRow = notes.filter(id.eq(note_id)).first(&mut conn)?;
        Ok(row.into())
    }

    fn delete(&self, note_id: &str, note_user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        Ok(
            diesel::delete(notes.filter(id.eq(note_id).and(user_id.eq(note_user_id))))
                .execute(&mut conn)?,
        )
    }
}
