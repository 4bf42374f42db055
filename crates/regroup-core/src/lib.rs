//! Regroup Core - immutable edits over an ordered two-level grouping
//!
//! This crate provides:
//! - `Structure<T>`: an ordered sequence of groups, each an ordered sequence of items
//! - Array-edit primitives (`insert`, `split_at`, `replace`, `delete`)
//! - Group edits (`delete_item`, `add_group`, `add_item`, `move_item`)
//! - `apply()` as the single command boundary, and `GroupEditor` for
//!   delivering each new Structure to a caller-supplied sink
//! - Structured error and logging facilities

pub mod apply;
pub mod commands;
pub mod editor;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Used by the exported logging macros
#[doc(hidden)]
pub use regroup_core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use editor::{GroupEditor, History, StructureSink};
pub use errors::{ExError, ExErrorKind, RegroupError, Result};
pub use model::{Location, Structure};
