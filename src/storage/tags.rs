//! Tag repository for JSON storage
//!
//! tags.json holds a forest: each node nests its sub-tags under `children`.
//! Loading flattens it depth-first and records each node's parent id.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TallyError;
use crate::models::{Tag, TagId};

use super::file_io::{read_json, write_json_atomic};
use super::outcome::LoadOutcome;

/// One node of the stored tag forest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagNode {
    pub id: TagId,
    pub name: String,
    #[serde(default)]
    pub children: Vec<TagNode>,
}

impl TagNode {
    pub fn leaf(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: TagId::new(id),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(id: i64, name: impl Into<String>, children: Vec<TagNode>) -> Self {
        Self {
            children,
            ..Self::leaf(id, name)
        }
    }

    fn flatten_into(&self, parent: Option<TagId>, out: &mut Vec<Tag>) {
        out.push(match parent {
            Some(parent) => Tag::with_parent(self.id, self.name.clone(), parent),
            None => Tag::new(self.id, self.name.clone()),
        });
        for child in &self.children {
            child.flatten_into(Some(self.id), out);
        }
    }
}

/// Serializable tag data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagData {
    pub tags: Vec<TagNode>,
}

impl TagData {
    /// Depth-first list of every tag with its parent id filled in
    pub fn flatten(&self) -> Vec<Tag> {
        let mut out = Vec::new();
        for root in &self.tags {
            root.flatten_into(None, &mut out);
        }
        out
    }
}

/// Repository for the tag hierarchy
pub struct TagRepository {
    path: PathBuf,
}

impl TagRepository {
    /// Create a new tag repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load every tag with its parent link
    pub fn load_tags(&self) -> LoadOutcome<Tag> {
        let outcome: LoadOutcome<Tag> = read_json::<TagData, _>(&self.path)
            .map(|data| data.map(|d| d.flatten()))
            .into();

        if let LoadOutcome::Loaded(tags) = &outcome {
            debug!("Loaded {} tag(s) from {}", tags.len(), self.path.display());
        }
        outcome
    }

    /// Replace the stored forest
    pub fn save_forest(&self, roots: Vec<TagNode>) -> Result<(), TallyError> {
        write_json_atomic(&self.path, &TagData { tags: roots })
    }
}
