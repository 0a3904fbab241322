//! Tag model and hierarchy
//!
//! Tags form a forest of categories. A tag points at its parent by id; the
//! parent is resolved through a [`TagHierarchy`] built from the loaded tag set,
//! so a tag copied onto a transaction carries no parent at all.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ids::TagId;
use crate::error::{TallyError, TallyResult};

/// A named category, optionally nested under a parent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    pub id: TagId,

    /// Display name
    pub name: String,

    /// Parent tag, if this is a sub-category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<TagId>,
}

impl Tag {
    /// Create a root tag
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
        }
    }

    /// Create a tag nested under `parent`
    pub fn with_parent(id: TagId, name: impl Into<String>, parent: TagId) -> Self {
        Self {
            parent: Some(parent),
            ..Self::new(id, name)
        }
    }

    /// Copy of this tag without its parent link
    pub fn detached(&self) -> Self {
        Self::new(self.id, self.name.clone())
    }
}

// Identity is (id, name); the parent link takes no part in equality.
impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id).then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One row of a flattened hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagListing {
    pub tag: Tag,
    pub depth: usize,
}

impl TagListing {
    /// Name indented two spaces per level
    pub fn indented_name(&self) -> String {
        format!("{}{}", "  ".repeat(self.depth), self.tag.name)
    }
}

/// Parent/child lookup over a flat tag set
#[derive(Debug, Clone, Default)]
pub struct TagHierarchy {
    tags: Vec<Tag>,
    index: HashMap<TagId, usize>,
    children: HashMap<TagId, Vec<usize>>,
}

impl TagHierarchy {
    /// Build the lookup tables. Input order is kept for roots and children.
    pub fn new(tags: Vec<Tag>) -> Self {
        let mut index = HashMap::with_capacity(tags.len());
        for (i, tag) in tags.iter().enumerate() {
            index.entry(tag.id).or_insert(i);
        }

        let mut children: HashMap<TagId, Vec<usize>> = HashMap::new();
        for (i, tag) in tags.iter().enumerate() {
            if let Some(parent) = tag.parent {
                if index.contains_key(&parent) {
                    children.entry(parent).or_default().push(i);
                }
            }
        }

        Self {
            tags,
            index,
            children,
        }
    }

    /// All tags in input order
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Look up a tag by id
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.index.get(&id).map(|&i| &self.tags[i])
    }

    /// Find a tag by name (case-insensitive, first match)
    pub fn find_by_name(&self, name: &str) -> Option<&Tag> {
        let name = name.trim().to_lowercase();
        self.tags.iter().find(|t| t.name.to_lowercase() == name)
    }

    /// Tags with no parent, or whose parent id is unknown
    pub fn roots(&self) -> impl Iterator<Item = &Tag> {
        self.tags
            .iter()
            .filter(move |t| t.parent.map_or(true, |p| !self.index.contains_key(&p)))
    }

    /// Direct children of a tag, in input order
    pub fn children(&self, id: TagId) -> Vec<&Tag> {
        self.children
            .get(&id)
            .map(|idx| idx.iter().map(|&i| &self.tags[i]).collect())
            .unwrap_or_default()
    }

    /// Depth-first listing starting from the roots
    pub fn flatten(&self) -> TallyResult<Vec<TagListing>> {
        let mut listing = Vec::with_capacity(self.tags.len());
        let mut visited = HashSet::with_capacity(self.tags.len());

        for root in self.roots() {
            self.visit(root, 0, &mut visited, &mut listing)?;
        }

        // Anything left over hangs off a cycle and was never reached
        if let Some(orphan) = self.tags.iter().find(|t| !visited.contains(&t.id)) {
            return Err(TallyError::MalformedHierarchy(format!(
                "tag '{}' ({}) is part of a parent cycle",
                orphan.name, orphan.id
            )));
        }

        Ok(listing)
    }

    fn visit(
        &self,
        tag: &Tag,
        depth: usize,
        visited: &mut HashSet<TagId>,
        listing: &mut Vec<TagListing>,
    ) -> TallyResult<()> {
        if !visited.insert(tag.id) {
            return Err(TallyError::MalformedHierarchy(format!(
                "tag '{}' ({}) is reachable more than once",
                tag.name, tag.id
            )));
        }

        listing.push(TagListing {
            tag: tag.clone(),
            depth,
        });

        for child in self.children(tag.id) {
            self.visit(child, depth + 1, visited, listing)?;
        }

        Ok(())
    }

    /// Ancestor chain from the root down to `id`
    ///
    /// An unknown parent ends the chain; a cycle is an error.
    pub fn path(&self, id: TagId) -> TallyResult<Vec<&Tag>> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.get(id);

        while let Some(tag) = current {
            if !seen.insert(tag.id) {
                return Err(TallyError::MalformedHierarchy(format!(
                    "tag '{}' ({}) is its own ancestor",
                    tag.name, tag.id
                )));
            }
            chain.push(tag);
            current = tag.parent.and_then(|p| self.get(p));
        }

        chain.reverse();
        Ok(chain)
    }

    /// "Parent > Child" label for a tag
    pub fn path_label(&self, id: TagId) -> TallyResult<String> {
        Ok(self
            .path(id)?
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(" > "))
    }

    /// Check for duplicate ids and parent cycles
    pub fn validate(&self) -> TallyResult<()> {
        if self.index.len() != self.tags.len() {
            let mut seen = HashSet::new();
            if let Some(dup) = self.tags.iter().find(|t| !seen.insert(t.id)) {
                return Err(TallyError::MalformedHierarchy(format!(
                    "duplicate tag id {}",
                    dup.id
                )));
            }
        }

        for tag in &self.tags {
            self.path(tag.id)?;
        }

        Ok(())
    }
}
