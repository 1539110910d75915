pub mod add;
pub mod find;
pub mod link;
pub mod list;
pub mod relation;
pub mod remove;
pub mod rename;
pub mod shell;
pub mod show;
pub mod unlink;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use kindred_core::FamilyTree;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a member to the tree
    Add(add::AddArgs),
    /// List all members, ascending by ID
    List,
    /// Show one member's details, parents and children
    Show(show::ShowArgs),
    /// Look up a member's ID by exact name
    Find(find::FindArgs),
    /// Rename a member
    Rename(rename::RenameArgs),
    /// Connect a member as someone's father or mother
    Link(link::LinkArgs),
    /// Disconnect parent or child links of a member
    Unlink(unlink::UnlinkArgs),
    /// Remove a member, detaching all links first
    Remove(remove::RemoveArgs),
    /// Name the kinship between two members
    Relation(relation::RelationArgs),
    /// Interactive session over a tree file
    Shell,
}

/// Resolve the global `--file` flag for commands that cannot run without it.
pub(crate) fn require_file(file: Option<&Path>) -> Result<&Path> {
    file.ok_or_else(|| anyhow::anyhow!("No tree file given. Pass --file or set KINDRED_FILE."))
}

/// Load the tree from `path`, or start empty when the file does not exist
/// yet (so the first `kindred add` can create it).
pub(crate) fn load_tree(path: &Path) -> Result<FamilyTree> {
    let mut tree = FamilyTree::new();
    if path.exists() {
        tree.read_from_file(path)
            .with_context(|| format!("Failed to read tree from {}", path.display()))?;
        tracing::debug!(members = tree.len(), path = %path.display(), "loaded tree file");
    }
    Ok(tree)
}

pub(crate) fn save_tree(tree: &FamilyTree, path: &Path) -> Result<()> {
    tree.store_to_file(path)
        .with_context(|| format!("Failed to write tree to {}", path.display()))?;
    tracing::debug!(members = tree.len(), path = %path.display(), "saved tree file");
    Ok(())
}
