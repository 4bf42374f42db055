pub mod array_ops;
pub mod group_ops;

pub use group_ops::{add_group, add_item, delete_item, move_item};
