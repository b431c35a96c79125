// ABOUTME: Tag vocabulary for organizing tasks
// ABOUTME: Provides tag normalisation and the grow-only set of selectable tags

pub mod types;

// Re-export main types
pub use types::{normalize_tag, TagVocabulary};
