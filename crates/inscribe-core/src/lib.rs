//! inscribe-core - Core library for InScribe
//!
//! This crate contains the note store: the document model, the per-document
//! repository with atomic persistence, the export renderer seam, and the
//! single operation gate that serializes all store access. The viewer and
//! presentation layers live outside this crate and talk to it through
//! [`NoteStore`].

pub mod error;
pub mod events;
pub mod export;
pub mod models;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use events::{LogEvent, LogLevel};
pub use export::{ExportArtifact, MarkdownRenderer, NoteRenderer};
pub use models::{Fragment, FragmentId, NotesDocument};
pub use store::NoteStore;
