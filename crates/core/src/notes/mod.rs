//! Notes module - independent notes sub-domain.

mod notes_model;
mod notes_repository;
mod notes_service;
mod notes_traits;

#[cfg(test)]
mod notes_service_tests;

pub use notes_model::{NewNote, Note, NoteChangeset, NoteUpdate};
pub use notes_repository::NoteRepository;
pub use notes_service::NoteService;
pub use notes_traits::{NoteRepositoryTrait, NoteServiceTrait};
