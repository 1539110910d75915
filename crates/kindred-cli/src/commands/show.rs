use std::path::Path;

use anyhow::Result;
use clap::Args;
use kindred_core::MemberId;

use crate::output::{
    format::{member_card, member_json},
    OutputFormat,
};

use super::{load_tree, require_file};

#[derive(Args)]
pub struct ShowArgs {
    /// Member ID
    pub id: u32,
}

pub fn run(args: &ShowArgs, file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = require_file(file)?;
    let tree = load_tree(path)?;
    let id = MemberId(args.id);
    let member = tree.get_member(id)?;

    match format {
        OutputFormat::Text => print!("{}", member_card(&tree, id, member)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&member_json(&tree, id, member))?
        ),
    }
    Ok(())
}
