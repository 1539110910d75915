use std::path::Path;

use anyhow::Result;

use crate::output::{format::member_json, OutputFormat};

use super::{load_tree, require_file};

pub fn run(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = require_file(file)?;
    let tree = load_tree(path)?;

    match format {
        OutputFormat::Text => {
            for (id, member) in tree.list_members() {
                println!("{:>10} ... {}", id.as_u32(), member.name);
            }
        }
        OutputFormat::Json => {
            let members: Vec<serde_json::Value> = tree
                .list_members()
                .into_iter()
                .map(|(id, member)| member_json(&tree, id, member))
                .collect();
            println!("{}", serde_json::to_string_pretty(&members)?);
        }
    }
    Ok(())
}
