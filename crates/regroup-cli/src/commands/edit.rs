//! Mutating commands
//!
//! Usage:
//!   regroup delete <FILE> <GROUP:ITEM>
//!   regroup add-group <FILE>
//!   regroup add-item <FILE> <VALUE>
//!   regroup move <FILE> <FROM> <TO>
//!
//! Each loads the file, runs one edit through `GroupEditor`, and writes the
//! delivered structure back (or to `--output`).

use clap::Args;
use std::path::PathBuf;

use regroup_core::{GroupEditor, History, Location, RegroupError, Result, Structure};

use super::store;

#[derive(Debug, Args)]
pub struct EditTarget {
    /// Structure file (JSON array of arrays of strings)
    pub file: PathBuf,

    /// Write the result here instead of back to FILE
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the written JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: EditTarget,

    /// Location of the item to delete, as GROUP:ITEM
    pub location: Location,
}

#[derive(Debug, Args)]
pub struct AddGroupArgs {
    #[command(flatten)]
    pub target: EditTarget,
}

#[derive(Debug, Args)]
pub struct AddItemArgs {
    #[command(flatten)]
    pub target: EditTarget,

    /// Item value
    pub value: String,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    #[command(flatten)]
    pub target: EditTarget,

    /// Location of the item to move, as GROUP:ITEM
    pub from: Location,

    /// Destination group and insertion position, as GROUP:ITEM
    pub to: Location,
}

pub fn execute_delete(args: DeleteArgs) -> Result<()> {
    run(&args.target, |editor| editor.delete_item(args.location))
}

pub fn execute_add_group(args: AddGroupArgs) -> Result<()> {
    run(&args.target, |editor| editor.add_group())
}

pub fn execute_add_item(args: AddItemArgs) -> Result<()> {
    run(&args.target, |editor| editor.add_item(args.value))
}

pub fn execute_move(args: MoveArgs) -> Result<()> {
    run(&args.target, |editor| editor.move_item(args.from, args.to))
}

fn run<F>(target: &EditTarget, edit: F) -> Result<()>
where
    F: FnOnce(&mut GroupEditor<'_, String, History<String>>) -> Result<()>,
{
    let current: Structure<String> = store::load(&target.file)?;

    let mut editor = GroupEditor::new(&current, History::new());
    edit(&mut editor)?;

    let next = editor
        .into_sink()
        .latest()
        .cloned()
        .ok_or_else(|| RegroupError::Internal {
            message: "edit completed without delivering a structure".to_string(),
        })?;

    let output = target.output.as_ref().unwrap_or(&target.file);
    store::save(output, &next, target.pretty)?;

    println!(
        "✓ {} groups, {} items written to {}",
        next.group_count(),
        next.item_count(),
        output.display()
    );
    Ok(())
}
