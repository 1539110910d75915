use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::{load_tree, require_file};

#[derive(Args)]
pub struct FindArgs {
    /// Exact name to look up (first match wins with duplicates)
    pub name: String,
}

pub fn run(args: &FindArgs, file: Option<&Path>) -> Result<()> {
    let path = require_file(file)?;
    let tree = load_tree(path)?;
    match tree.find_member(&args.name) {
        Some(id) => println!("The ID of {} is {id}.", args.name),
        None => println!("No member of the name \"{}\" was found.", args.name),
    }
    Ok(())
}
