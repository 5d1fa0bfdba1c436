use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::context::UserContext;
use crate::errors::{Error, Result, ValidationError};
use crate::notes::notes_model::{NewNote, Note, NoteChangeset, NoteUpdate};
use crate::notes::notes_traits::{NoteRepositoryTrait, NoteServiceTrait};

const MAX_TITLE_LEN: usize = 255;
const MAX_CONTENT_LEN: usize = 10_000;
const MAX_CATEGORY_LEN: usize = 100;
const MAX_TAGS: usize = 20;
const MAX_TAG_LEN: usize = 50;

pub struct NoteService {
    note_repo: Arc<dyn NoteRepositoryTrait>,
}

impl NoteService {
    pub fn new(note_repo: Arc<dyn NoteRepositoryTrait>) -> Self {
        NoteService { note_repo }
    }

    fn validate_title(title: &str) -> Result<()> {
        if title.is_empty() {
            return Err(ValidationError::MissingField("title".into()).into());
        }
        if title.len() > MAX_TITLE_LEN {
            return Err(ValidationError::InvalidInput(format!(
                "note title must be {} characters or less",
                MAX_TITLE_LEN
            ))
            .into());
        }
        Ok(())
    }

    fn validate_content(content: &str) -> Result<()> {
        if content.len() > MAX_CONTENT_LEN {
            return Err(ValidationError::InvalidInput(format!(
                "note content must be {} characters or less",
                MAX_CONTENT_LEN
            ))
            .into());
        }
        Ok(())
    }

    fn validate_category(category: &str) -> Result<()> {
        if category.len() > MAX_CATEGORY_LEN {
            return Err(ValidationError::InvalidInput(format!(
                "note category must be {} characters or less",
                MAX_CATEGORY_LEN
            ))
            .into());
        }
        Ok(())
    }

    fn validate_tags(tags: &[String]) -> Result<()> {
        if tags.len() > MAX_TAGS {
            return Err(
                ValidationError::InvalidInput(format!("maximum {} tags allowed", MAX_TAGS)).into(),
            );
        }
        for tag in tags {
            if tag.is_empty() {
                return Err(ValidationError::InvalidInput("empty tag not allowed".into()).into());
            }
            if tag.len() > MAX_TAG_LEN {
                return Err(ValidationError::InvalidInput(format!(
                    "tag must be {} characters or less",
                    MAX_TAG_LEN
                ))
                .into());
            }
        }
        Ok(())
    }
}

impl NoteServiceTrait for NoteService {
    fn create_note(&self, ctx: &UserContext, new_note: NewNote) -> Result<Note> {
        Self::validate_title(&new_note.title)?;
        Self::validate_content(&new_note.content)?;
        Self::validate_category(&new_note.category)?;
        Self::validate_tags(&new_note.tags)?;

        let now = Utc::now().naive_utc();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id.clone(),
            title: new_note.title,
            content: new_note.content,
            category: new_note.category,
            tags: new_note.tags,
            is_favorite: new_note.is_favorite,
            // new notes are never born archived
            is_archived: false,
            created_at: now,
            updated_at: now,
        };

        debug!("Creating note '{}'", note.title);
        self.note_repo.insert(note)
    }

    fn get_note(&self, ctx: &UserContext, note_id: &str) -> Result<Note> {
        self.note_repo.get(note_id, &ctx.user_id)
    }

    fn list_notes(&self, ctx: &UserContext) -> Result<Vec<Note>> {
        self.note_repo.list(&ctx.user_id)
    }

    fn update_note(&self, ctx: &UserContext, note_id: &str, patch: NoteUpdate) -> Result<Note> {
        if patch.is_empty() {
            return Err(ValidationError::InvalidInput("no fields to update".into()).into());
        }
        if let Some(ref title) = patch.title {
            Self::validate_title(title)?;
        }
        if let Some(ref content) = patch.content {
            Self::validate_content(content)?;
        }
        if let Some(ref category) = patch.category {
            Self::validate_category(category)?;
        }
        if let Some(ref tags) = patch.tags {
            Self::validate_tags(tags)?;
        }

        let tags_json = match patch.tags {
            Some(ref tags) => Some(serde_json::to_string(tags)?),
            None => None,
        };
        let changeset = NoteChangeset {
            title: patch.title,
            content: patch.content,
            category: patch.category,
            tags: tags_json,
            is_favorite: patch.is_favorite,
            is_archived: patch.is_archived,
            updated_at: Some(Utc::now().naive_utc()),
        };

        self.note_repo.update(note_id, &ctx.user_id, changeset)
    }

    fn delete_note(&self, ctx: &UserContext, note_id: &str) -> Result<()> {
        let deleted = self.note_repo.delete(note_id, &ctx.user_id)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("note {}", note_id)));
        }
        Ok(())
    }
}
