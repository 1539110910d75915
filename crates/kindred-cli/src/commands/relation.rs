use std::path::Path;

use anyhow::Result;
use clap::Args;
use kindred_core::MemberId;

use crate::output::OutputFormat;

use super::{load_tree, require_file};

#[derive(Args)]
pub struct RelationArgs {
    /// ID of the reference member ("of whom")
    pub subject: u32,
    /// ID of the member being described
    pub object: u32,
}

pub fn run(args: &RelationArgs, file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = require_file(file)?;
    let tree = load_tree(path)?;
    let subject = MemberId(args.subject);
    let object = MemberId(args.object);
    let relationship = tree.get_relationship(subject, object)?;

    match format {
        OutputFormat::Text => println!(
            "{} is the {relationship} of {}.",
            tree.get_member(object)?.name,
            tree.get_member(subject)?.name
        ),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "subject": args.subject,
                "object": args.object,
                "relationship": relationship,
            })
        ),
    }
    Ok(())
}
