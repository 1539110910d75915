use std::path::Path;

use anyhow::Result;
use clap::Args;
use kindred_core::MemberId;

use super::{load_tree, require_file, save_tree};

#[derive(Args)]
pub struct RenameArgs {
    /// Member ID
    pub id: u32,
    /// New name
    pub name: String,
}

pub fn run(args: &RenameArgs, file: Option<&Path>) -> Result<()> {
    let path = require_file(file)?;
    let mut tree = load_tree(path)?;
    tree.set_name(MemberId(args.id), args.name.clone())?;
    save_tree(&tree, path)?;
    println!(
        "The name of member {} was changed to \"{}\".",
        args.id, args.name
    );
    Ok(())
}
