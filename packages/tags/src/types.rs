// ABOUTME: Tag type definitions
// ABOUTME: Ordered, duplicate-free vocabulary of tag names that only ever grows

use serde::{Deserialize, Serialize};

/// Trim user input into a tag name. Returns `None` when nothing is left.
pub fn normalize_tag(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Tags available for selection within a workspace.
///
/// Keeps insertion order. Tags are never removed: dropping a tag from a task
/// leaves it here so it can be picked again later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagVocabulary {
    tags: Vec<String>,
}

impl TagVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add a tag if it is not known yet. Returns true when the vocabulary grew.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        tracing::debug!("Tag vocabulary grows with '{}'", tag);
        self.tags.push(tag);
        true
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

impl<S: Into<String>> FromIterator<S> for TagVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = TagVocabulary::new();
        for tag in iter {
            vocabulary.insert(tag);
        }
        vocabulary
    }
}

impl From<TagVocabulary> for Vec<String> {
    fn from(vocabulary: TagVocabulary) -> Self {
        vocabulary.tags
    }
}
