use std::path::Path;

use anyhow::Result;
use clap::Args;
use kindred_core::{Gender, MemberId};

use super::{load_tree, require_file, save_tree};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GenderArg {
    #[value(alias = "m")]
    Male,
    #[value(alias = "f")]
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Args)]
pub struct AddArgs {
    /// Full name of the new member
    pub name: String,

    /// Gender (male/female)
    #[arg(short, long)]
    pub gender: GenderArg,

    /// ID of the father (must be a male member)
    #[arg(long)]
    pub father: Option<u32>,

    /// ID of the mother (must be a female member)
    #[arg(long)]
    pub mother: Option<u32>,
}

pub fn run(args: &AddArgs, file: Option<&Path>) -> Result<()> {
    let path = require_file(file)?;
    let mut tree = load_tree(path)?;
    let id = tree.add_member(
        args.name.clone(),
        args.gender.into(),
        args.father.map(MemberId),
        args.mother.map(MemberId),
    )?;
    save_tree(&tree, path)?;
    println!("\"{}\" added, with ID {id}.", args.name);
    Ok(())
}
