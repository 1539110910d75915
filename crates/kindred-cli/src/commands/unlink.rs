use std::path::Path;

use anyhow::Result;
use clap::Args;
use kindred_core::MemberId;

use super::{load_tree, require_file, save_tree};

#[derive(Args)]
pub struct UnlinkArgs {
    /// Member ID
    pub id: u32,

    /// Clear this member's father link
    #[arg(long)]
    pub father: bool,

    /// Clear this member's mother link
    #[arg(long)]
    pub mother: bool,

    /// Detach all of this member's children (on the side matching their gender)
    #[arg(long)]
    pub children: bool,
}

pub fn run(args: &UnlinkArgs, file: Option<&Path>) -> Result<()> {
    if !(args.father || args.mother || args.children) {
        anyhow::bail!("Pass at least one of --father, --mother, --children.");
    }
    let path = require_file(file)?;
    let mut tree = load_tree(path)?;
    let id = MemberId(args.id);

    // Success lines wait until the save has landed, so a failed write can
    // never leave "no longer listed" output for a link still on disk.
    let mut confirmations = Vec::new();
    if args.father {
        tree.disconnect_father(id)?;
        confirmations.push(format!(
            "The father of {} is no longer listed.",
            tree.get_member(id)?.name
        ));
    }
    if args.mother {
        tree.disconnect_mother(id)?;
        confirmations.push(format!(
            "The mother of {} is no longer listed.",
            tree.get_member(id)?.name
        ));
    }
    if args.children {
        tree.disconnect_children(id)?;
        confirmations.push(format!(
            "{} has no listed children anymore.",
            tree.get_member(id)?.name
        ));
    }
    save_tree(&tree, path)?;
    for line in confirmations {
        println!("{line}");
    }
    Ok(())
}
