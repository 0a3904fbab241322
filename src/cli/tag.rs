//! Tag CLI commands

use clap::Subcommand;

use crate::display::format_tag_tree;
use crate::error::{TallyError, TallyResult};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Tag subcommands
#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// Show the tag hierarchy as an indented tree
    List,
    /// Show where a tag sits in the hierarchy
    Show {
        /// Tag name
        name: String,
    },
}

/// Handle a tag command
pub fn handle_tag_command(storage: &Storage, cmd: TagCommands) -> TallyResult<()> {
    let hierarchy = LedgerService::new(storage).tag_hierarchy();

    match cmd {
        TagCommands::List => {
            print!("{}", format_tag_tree(&hierarchy)?);
        }

        TagCommands::Show { name } => {
            let tag = hierarchy
                .find_by_name(&name)
                .ok_or_else(|| TallyError::tag_not_found(&name))?;

            println!("Tag:  {}", tag.name);
            println!("ID:   {}", tag.id);
            println!("Path: {}", hierarchy.path_label(tag.id)?);

            let children = hierarchy.children(tag.id);
            if !children.is_empty() {
                let names: Vec<_> = children.iter().map(|c| c.name.as_str()).collect();
                println!("Sub-tags: {}", names.join(", "));
            }
        }
    }

    Ok(())
}
