//! Command types for every structure mutation
//!
//! Commands are processed by `apply()`, the single functional-boundary entry
//! point used by the editor and the CLI.

use serde::{Deserialize, Serialize};

use crate::model::Location;

/// A single mutation of a `Structure<T>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command<T> {
    /// Remove one item; its group is kept even if emptied
    DeleteItem { location: Location },

    /// Append an empty group
    AddGroup,

    /// Append a singleton group holding `item`
    AddItem { item: T },

    /// Relocate one item within or across groups
    MoveItem {
        origin: Location,
        destination: Location,
    },
}

impl<T> Command<T> {
    /// Stable operation name used in log events and error context
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::DeleteItem { .. } => "delete_item",
            Command::AddGroup => "add_group",
            Command::AddItem { .. } => "add_item",
            Command::MoveItem { .. } => "move_item",
        }
    }
}
