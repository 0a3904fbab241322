//! Tag display formatting
//!
//! Renders the tag hierarchy as an indented tree.

use crate::error::TallyResult;
use crate::models::TagHierarchy;

/// Format the hierarchy as an indented tree, children under their parent
pub fn format_tag_tree(hierarchy: &TagHierarchy) -> TallyResult<String> {
    if hierarchy.is_empty() {
        return Ok("No tags found.\n\nRun 'tally init' to create default tags.\n".to_string());
    }

    let mut output = String::new();
    for listing in hierarchy.flatten()? {
        output.push_str(&listing.indented_name());
        output.push('\n');
    }

    Ok(output)
}
