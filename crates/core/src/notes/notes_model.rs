use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A note. Tags are an ordered list on the wire, persisted as a JSON
/// string in the `tags` TEXT column.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database row shape for `notes`.
#[derive(Queryable, Insertable, Identifiable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::notes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NoteRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
    pub is_favorite: bool,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            content: row.content,
            category: row.category,
            tags: serde_json::from_str(&row.tags).unwrap_or_default(),
            is_favorite: row.is_favorite,
            is_archived: row.is_archived,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<&Note> for NoteRow {
    fn from(note: &Note) -> Self {
        NoteRow {
            id: note.id.clone(),
            user_id: note.user_id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone(),
            tags: serde_json::to_string(&note.tags).unwrap_or_else(|_| "[]".to_string()),
            is_favorite: note.is_favorite,
            is_archived: note.is_archived,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Partial update as it arrives on the wire.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
    pub is_archived: Option<bool>,
}

impl NoteUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.is_favorite.is_none()
            && self.is_archived.is_none()
    }
}

/// Column-level changeset derived from a [`NoteUpdate`] by the service.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::notes)]
pub struct NoteChangeset {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub is_favorite: Option<bool>,
    pub is_archived: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
}
