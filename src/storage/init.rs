//! Storage initialization
//!
//! Handles first-run setup and the default tag hierarchy

use crate::config::paths::TallyPaths;
use crate::error::TallyError;

use super::tags::{TagNode, TagRepository};

/// Initialize storage for a fresh installation
///
/// Writes a starter tag hierarchy unless tags.json already exists
pub fn initialize_storage(paths: &TallyPaths) -> Result<(), TallyError> {
    paths.ensure_directories()?;

    if !paths.tags_file().exists() {
        TagRepository::new(paths.tags_file()).save_forest(default_tag_forest())?;
    }

    Ok(())
}

/// Starter tags: a few top-level groups with common sub-tags
pub fn default_tag_forest() -> Vec<TagNode> {
    let groups: [(&str, &[&str]); 6] = [
        ("Income", &["Salary", "Gifts", "Interest"]),
        ("Housing", &["Rent", "Utilities", "Internet"]),
        ("Food", &["Groceries", "Restaurants"]),
        ("Transport", &["Fuel", "Public Transport"]),
        ("Health", &["Medical", "Insurance"]),
        ("Leisure", &["Entertainment", "Subscriptions", "Travel"]),
    ];

    let mut next_id = 1;
    let mut allocate = || {
        let id = next_id;
        next_id += 1;
        id
    };

    groups
        .iter()
        .map(|(group, children)| {
            let group_id = allocate();
            let children = children
                .iter()
                .map(|name| TagNode::leaf(allocate(), *name))
                .collect();
            TagNode::with_children(group_id, *group, children)
        })
        .collect()
}
