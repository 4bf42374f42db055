//! Functional-boundary apply function
//!
//! `apply()` is the canonical entry point for structure mutations.
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: either a complete new Structure is returned, or an
//!   error is returned and nothing was produced
//! - **Input untouched**: the caller's Structure is only borrowed
//! - **No panics**: out-of-range locations come back as typed errors
//!
//! ## Example
//!
//! ```
//! use regroup_core::{apply, Command, Location, Structure};
//!
//! let state = Structure::from(vec![vec!['A', 'B'], vec![]]);
//! let cmd = Command::MoveItem {
//!     origin: Location::new(0, 1),
//!     destination: Location::new(1, 0),
//! };
//!
//! let next = apply(&state, cmd).unwrap();
//! assert_eq!(next.groups(), &[vec!['A'], vec!['B']]);
//! ```

use std::time::Instant;

use crate::commands::Command;
use crate::errors::Result;
use crate::model::Structure;
use crate::ops::group_ops;
use crate::{log_op_end, log_op_error, log_op_start};

/// Apply a command to a structure, returning the next structure
///
/// # Errors
///
/// Returns `InvalidLocation` or `ItemOutOfRange` when the command addresses
/// a group or item that does not exist in `state`.
pub fn apply<T: Clone>(state: &Structure<T>, cmd: Command<T>) -> Result<Structure<T>> {
    let op = cmd.op_name();
    let started = Instant::now();
    log_op_start!(op, group_count = state.group_count());

    let result = match cmd {
        Command::DeleteItem { location } => group_ops::delete_item(state, location),
        Command::AddGroup => Ok(group_ops::add_group(state)),
        Command::AddItem { item } => Ok(group_ops::add_item(state, item)),
        Command::MoveItem {
            origin,
            destination,
        } => group_ops::move_item(state, origin, destination),
    };

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(next) => {
            log_op_end!(
                op,
                duration_ms = duration_ms,
                group_count = next.group_count(),
                item_count = next.item_count()
            );
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms);
        }
    }

    result
}
