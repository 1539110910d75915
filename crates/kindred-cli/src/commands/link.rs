use std::path::Path;

use anyhow::Result;
use clap::Args;
use kindred_core::{Gender, MemberId};

use super::{load_tree, require_file, save_tree};

#[derive(Args)]
pub struct LinkArgs {
    /// ID of the child
    pub child: u32,
    /// ID of the parent; their gender decides which slot is filled
    pub parent: u32,
}

pub fn run(args: &LinkArgs, file: Option<&Path>) -> Result<()> {
    let path = require_file(file)?;
    let mut tree = load_tree(path)?;
    let child = MemberId(args.child);
    let parent = MemberId(args.parent);
    tree.connect_parent(child, parent)?;
    save_tree(&tree, path)?;

    let parent_member = tree.get_member(parent)?;
    let slot = match parent_member.gender {
        Gender::Male => "father",
        Gender::Female => "mother",
    };
    println!(
        "The {slot} of {} is now {}.",
        tree.get_member(child)?.name,
        parent_member.name
    );
    Ok(())
}
