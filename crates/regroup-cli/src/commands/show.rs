//! Show command
//!
//! Usage: regroup show <FILE> [--json]

use clap::Args;
use std::path::PathBuf;

use regroup_core::Result;

use super::store;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Structure file (JSON array of arrays of strings)
    pub file: PathBuf,

    /// Print the structure as JSON instead of one line per group
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let structure = store::load(&args.file)?;

    if args.json {
        println!("{}", serde_json::to_string(&structure)?);
        return Ok(());
    }

    for (index, group) in structure.groups().iter().enumerate() {
        if group.is_empty() {
            println!("group {}: (empty)", index);
        } else {
            println!("group {}: {}", index, group.join(", "));
        }
    }
    println!("items: {}", structure.item_count());

    Ok(())
}
