//! Data model for note documents

mod document;

pub use document::{Fragment, FragmentId, NotesDocument};
