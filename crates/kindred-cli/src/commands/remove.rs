use std::path::Path;

use anyhow::Result;
use clap::Args;
use kindred_core::MemberId;

use super::{load_tree, require_file, save_tree};

#[derive(Args)]
pub struct RemoveArgs {
    /// Member ID
    pub id: u32,
}

pub fn run(args: &RemoveArgs, file: Option<&Path>) -> Result<()> {
    let path = require_file(file)?;
    let mut tree = load_tree(path)?;
    let id = MemberId(args.id);
    let name = tree.get_member(id)?.name.clone();
    tree.remove_member(id)?;
    save_tree(&tree, path)?;
    println!("{name} has been removed.");
    Ok(())
}
