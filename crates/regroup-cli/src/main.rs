//! Regroup CLI
//!
//! Command-line interface for editing a grouped structure stored as JSON

use clap::{Parser, Subcommand};
use regroup_core::logging_facility::{self, Profile};
use regroup_core::ExError;
use regroup_core_types::RequestId;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "regroup")]
#[command(about = "Regroup - edit ordered groups of items", long_about = None)]
struct Cli {
    /// Logging profile: development (human) or production (JSON). Logs go to stderr.
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every group and the total item count
    Show(commands::show::ShowArgs),
    /// Delete the item at GROUP:ITEM (its group is kept)
    Delete(commands::edit::DeleteArgs),
    /// Append an empty group
    AddGroup(commands::edit::AddGroupArgs),
    /// Append a new group holding a single item
    AddItem(commands::edit::AddItemArgs),
    /// Move the item at FROM to TO (both GROUP:ITEM)
    Move(commands::edit::MoveArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log_profile {
        Some(profile) => logging_facility::init(profile),
        None if std::env::var_os("RUST_LOG").is_some() => {
            logging_facility::init(Profile::Development)
        }
        None => {}
    }

    let request_id = RequestId::new();
    let span = tracing::info_span!("regroup_cli", request_id = %request_id);
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args),
        Commands::Delete(args) => commands::edit::execute_delete(args),
        Commands::AddGroup(args) => commands::edit::execute_add_group(args),
        Commands::AddItem(args) => commands::edit::execute_add_item(args),
        Commands::Move(args) => commands::edit::execute_move(args),
    };

    if let Err(e) = result {
        let err = ExError::from(e).with_request_id(request_id);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
