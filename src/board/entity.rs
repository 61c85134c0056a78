//! Entity tags and board cells

use serde::{Deserialize, Serialize};

/// One entity occupying a cell
///
/// Word tiles are the movable text blocks that form rules. Everything else
/// is an ordinary game object. The marker prefix used by the snapshot format
/// is stripped from `name` during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityTag {
    pub name: String,
    pub word_tile: bool,
}

impl EntityTag {
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            word_tile: false,
        }
    }

    pub fn word(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            word_tile: true,
        }
    }

    /// Build a tag from a raw snapshot identifier
    pub fn from_raw(raw: &str, word_marker: &str) -> Self {
        match raw.strip_prefix(word_marker) {
            Some(name) if !word_marker.is_empty() => Self::word(name),
            _ => Self::object(raw),
        }
    }

    /// Raw snapshot identifier, marker included for word tiles
    pub fn to_raw(&self, word_marker: &str) -> String {
        if self.word_tile {
            format!("{}{}", word_marker, self.name)
        } else {
            self.name.clone()
        }
    }

    /// True for an ordinary object of the given kind
    pub fn is_object(&self, kind: &str) -> bool {
        !self.word_tile && self.name == kind
    }
}

/// Ordered stack of entities in one cell (bottom first, as listed in the snapshot)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    tags: Vec<EntityTag>,
}

impl Cell {
    pub fn new(tags: Vec<EntityTag>) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> &[EntityTag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn word_tiles(&self) -> impl Iterator<Item = &EntityTag> {
        self.tags.iter().filter(|t| t.word_tile)
    }

    pub fn objects(&self) -> impl Iterator<Item = &EntityTag> {
        self.tags.iter().filter(|t| !t.word_tile)
    }

    pub fn has_object(&self, kind: &str) -> bool {
        self.tags.iter().any(|t| t.is_object(kind))
    }

    /// Raw snapshot text of the whole stack
    pub fn to_raw(&self, stack_separator: char, word_marker: &str) -> String {
        let separator = stack_separator.to_string();
        self.tags
            .iter()
            .map(|t| t.to_raw(word_marker))
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

impl FromIterator<EntityTag> for Cell {
    fn from_iter<I: IntoIterator<Item = EntityTag>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
